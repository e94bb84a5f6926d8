//! The proportion tree input model and the angular partitioner.
//!
//! Callers supply an ordered forest of [`ProportionNode`]s; each render pass
//! converts it into a transient [`ArcNode`] forest carrying absolute angular
//! spans and fixed ring radii. The ArcNode tree lives only for the duration
//! of one pass and is rebuilt from scratch on the next.

use crate::render::geometry::RingMetrics;
use crate::types::{Px, Radians};

/// Rings beyond this depth are ignored.
pub const MAX_DEPTH: u8 = 3;

/// Tolerance before over-summing siblings are reported.
const SHARE_SUM_EPSILON: f64 = 1e-6;

/// One level of a caller-supplied proportional breakdown.
///
/// `share` is a percentage (0..100) of the *parent's* angular budget, not of
/// the whole circle. Siblings are laid out in input order; nothing is sorted
/// or normalized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProportionNode {
    pub id: String,
    pub name: String,
    pub share: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<ProportionNode>,
}

impl ProportionNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, share: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            share,
            children: Vec::new(),
        }
    }

    pub fn with_children(
        id: impl Into<String>,
        name: impl Into<String>,
        share: f64,
        children: Vec<ProportionNode>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            share,
            children,
        }
    }
}

/// A positioned wedge, derived fresh from a [`ProportionNode`] each pass.
///
/// Owned exclusively by the rendering pass; never persisted.
#[derive(Clone, Debug)]
pub struct ArcNode {
    pub id: String,
    pub name: String,
    pub share: f64,
    /// Ring index, 1 (center) through 3 (outer).
    pub depth: u8,
    pub start_angle: Radians,
    pub end_angle: Radians,
    pub inner_radius: Px,
    pub outer_radius: Px,
    /// The depth-1 ancestor's id, threaded down for color and nothing else.
    pub ancestor_sector_id: String,
    pub children: Vec<ArcNode>,
}

impl ArcNode {
    /// Signed angular extent.
    #[inline]
    pub fn span(&self) -> Radians {
        self.end_angle - self.start_angle
    }

    #[inline]
    pub fn mid_angle(&self) -> Radians {
        (self.start_angle + self.end_angle) / 2.0
    }
}

/// Partition a proportion forest over the full circle.
///
/// Sibling spans are assigned by sequential accumulation: each node starts
/// where its predecessor ended and claims `share/100` of the parent's budget.
/// Totals are *not* validated: siblings summing under 100 leave a gap,
/// siblings summing over 100 overflow the budget used by later computations.
/// The overflow case is reported through the logging facade, never repaired.
pub fn partition(nodes: &[ProportionNode], rings: &RingMetrics) -> Vec<ArcNode> {
    partition_level(nodes, Radians::ZERO, Radians::TAU, 1, None, rings)
}

fn partition_level(
    nodes: &[ProportionNode],
    start: Radians,
    budget: Radians,
    depth: u8,
    ancestor: Option<&str>,
    rings: &RingMetrics,
) -> Vec<ArcNode> {
    if depth > MAX_DEPTH {
        return Vec::new();
    }

    let mut cursor = start;
    let mut total_share = 0.0;
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        let span = budget * (node.share / 100.0);
        let end = cursor + span;
        let sector_id = ancestor.unwrap_or(&node.id);
        let children = partition_level(&node.children, cursor, span, depth + 1, Some(sector_id), rings);

        out.push(ArcNode {
            id: node.id.clone(),
            name: node.name.clone(),
            share: node.share,
            depth,
            start_angle: cursor,
            end_angle: end,
            inner_radius: rings.inner_radius(depth),
            outer_radius: rings.outer_radius(depth),
            ancestor_sector_id: sector_id.to_string(),
            children,
        });

        cursor = end;
        total_share += node.share;
    }

    if total_share > 100.0 + SHARE_SUM_EPSILON {
        crate::log::warn!(
            depth = u64::from(depth),
            total_share,
            "sibling shares exceed 100; later wedges overflow the angular budget"
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    const EPSILON: f64 = 1e-9;

    fn leaf(id: &str, share: f64) -> ProportionNode {
        ProportionNode::new(id, id.to_uppercase(), share)
    }

    fn rings() -> RingMetrics {
        RingMetrics::new(800.0)
    }

    fn total_span(arcs: &[ArcNode]) -> f64 {
        arcs.iter().map(|a| a.span().raw()).sum()
    }

    #[test]
    fn sibling_spans_sum_to_share_fraction_of_budget() {
        for (shares, expected_fraction) in [
            (vec![30.0, 20.0], 0.5),
            (vec![60.0, 30.0, 10.0], 1.0),
            (vec![80.0, 50.0], 1.3),
        ] {
            let nodes: Vec<_> = shares
                .iter()
                .enumerate()
                .map(|(i, &s)| leaf(&format!("s{i}"), s))
                .collect();
            let arcs = partition(&nodes, &rings());
            assert!(
                (total_span(&arcs) - TAU * expected_fraction).abs() < EPSILON,
                "shares {shares:?}: got {}",
                total_span(&arcs)
            );
        }
    }

    #[test]
    fn siblings_accumulate_in_input_order() {
        let arcs = partition(&[leaf("a", 25.0), leaf("b", 25.0)], &rings());
        assert_eq!(arcs[0].start_angle, Radians::ZERO);
        assert!((arcs[0].end_angle.raw() - TAU / 4.0).abs() < EPSILON);
        assert!((arcs[1].start_angle.raw() - TAU / 4.0).abs() < EPSILON);
        assert!((arcs[1].end_angle.raw() - TAU / 2.0).abs() < EPSILON);
    }

    #[test]
    fn child_budget_is_the_parent_span() {
        let tree = ProportionNode::with_children(
            "p",
            "Parent",
            50.0,
            vec![leaf("c1", 40.0), leaf("c2", 60.0)],
        );
        let arcs = partition(&[tree], &rings());
        let parent = &arcs[0];
        let child_total = total_span(&parent.children);
        assert!((child_total - parent.span().raw()).abs() < EPSILON);
        // Children start at the parent's start angle.
        assert_eq!(parent.children[0].start_angle, parent.start_angle);
    }

    #[test]
    fn zero_share_yields_zero_span() {
        let arcs = partition(&[leaf("z", 0.0)], &rings());
        assert_eq!(arcs[0].span().raw(), 0.0);
    }

    #[test]
    fn levels_beyond_the_third_ring_are_dropped() {
        let depth4 = ProportionNode::with_children(
            "d1",
            "D1",
            100.0,
            vec![ProportionNode::with_children(
                "d2",
                "D2",
                100.0,
                vec![ProportionNode::with_children(
                    "d3",
                    "D3",
                    100.0,
                    vec![leaf("d4", 100.0)],
                )],
            )],
        );
        let arcs = partition(&[depth4], &rings());
        let d3 = &arcs[0].children[0].children[0];
        assert_eq!(d3.depth, 3);
        assert!(d3.children.is_empty());
    }

    #[test]
    fn ancestor_sector_id_is_threaded_from_depth_one() {
        let tree = ProportionNode::with_children(
            "energy",
            "Energy",
            100.0,
            vec![ProportionNode::with_children(
                "transport",
                "Transport",
                50.0,
                vec![leaf("road", 80.0)],
            )],
        );
        let arcs = partition(&[tree], &rings());
        assert_eq!(arcs[0].ancestor_sector_id, "energy");
        assert_eq!(arcs[0].children[0].ancestor_sector_id, "energy");
        assert_eq!(arcs[0].children[0].children[0].ancestor_sector_id, "energy");
    }

    #[test]
    fn ring_radii_are_fixed_per_depth() {
        let tree = ProportionNode::with_children(
            "a",
            "A",
            100.0,
            vec![ProportionNode::with_children("b", "B", 100.0, vec![leaf("c", 100.0)])],
        );
        let arcs = partition(&[tree], &rings());
        let r = rings();
        assert_eq!(arcs[0].inner_radius, r.inner_radius(1));
        assert_eq!(arcs[0].outer_radius, r.outer_radius(1));
        assert_eq!(arcs[0].children[0].outer_radius, r.outer_radius(2));
        assert_eq!(arcs[0].children[0].children[0].outer_radius, r.outer_radius(3));
    }
}
