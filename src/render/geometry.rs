//! Ring metrics, polar conversion, and wedge/guide arc path construction.

use glam::{DVec2, dvec2};
use std::f64::consts::PI;

use crate::types::{Px, Radians};

use super::defaults;
use super::svg::fmt_num;

/// The fixed radial frame of one chart: center point, ring radius, and the
/// outer boundary that radial ring labels may extend to.
#[derive(Clone, Copy, Debug)]
pub struct RingMetrics {
    center: DVec2,
    ring_radius: f64,
    boundary: f64,
}

impl RingMetrics {
    pub fn new(size: f64) -> Self {
        let half = size / 2.0;
        Self {
            center: dvec2(half, half),
            ring_radius: half * defaults::RING_AREA_FRACTION,
            boundary: half,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Half the chart size; the outer limit for ring labels.
    #[inline]
    pub fn boundary(&self) -> Px {
        Px(self.boundary)
    }

    pub fn inner_radius(&self, depth: u8) -> Px {
        Px(self.bounds(depth).0 * self.ring_radius)
    }

    pub fn outer_radius(&self, depth: u8) -> Px {
        Px(self.bounds(depth).1 * self.ring_radius)
    }

    fn bounds(&self, depth: u8) -> (f64, f64) {
        let idx = usize::from(depth.saturating_sub(1)).min(defaults::RING_BOUNDS.len() - 1);
        defaults::RING_BOUNDS[idx]
    }
}

/// Convert a polar coordinate to Cartesian.
///
/// Angle 0 points at 12 o'clock and grows clockwise on screen, so the
/// x offset is `sin` and the y offset is `-cos`.
pub fn polar(center: DVec2, radius: f64, angle: Radians) -> DVec2 {
    dvec2(
        center.x + radius * angle.raw().sin(),
        center.y - radius * angle.raw().cos(),
    )
}

/// Linear distance spanned by an angular extent at a radius.
pub fn arc_length(start: Radians, end: Radians, radius: Px) -> Px {
    Px((end - start).abs().raw() * radius.raw())
}

/// Closed annular wedge path for one arc node.
///
/// Traced clockwise along the outer edge and back counterclockwise along the
/// inner edge. A small angular padding separates adjacent wedges; it is
/// clamped so narrow wedges degrade to a sliver rather than inverting.
/// A zero inner radius produces a pie slice closed through the center.
pub fn wedge_path(center: DVec2, inner: Px, outer: Px, start: Radians, end: Radians) -> String {
    let span = (end - start).raw();
    let half_pad = if span > 0.0 {
        (defaults::PAD_ANGLE / 2.0).min(span / 2.0)
    } else {
        0.0
    };
    let a0 = Radians(start.raw() + half_pad);
    let a1 = Radians(end.raw() - half_pad);
    let large_arc = i32::from((a1 - a0).raw().abs() > PI);

    let outer_start = polar(center, outer.raw(), a0);
    let outer_end = polar(center, outer.raw(), a1);

    if inner.raw() <= f64::EPSILON {
        return format!(
            "M{} {} A{} {} 0 {} 1 {} {} L{} {} Z",
            fmt_num(outer_start.x),
            fmt_num(outer_start.y),
            fmt_num(outer.raw()),
            fmt_num(outer.raw()),
            large_arc,
            fmt_num(outer_end.x),
            fmt_num(outer_end.y),
            fmt_num(center.x),
            fmt_num(center.y),
        );
    }

    let inner_start = polar(center, inner.raw(), a0);
    let inner_end = polar(center, inner.raw(), a1);
    format!(
        "M{} {} A{} {} 0 {} 1 {} {} L{} {} A{} {} 0 {} 0 {} {} Z",
        fmt_num(outer_start.x),
        fmt_num(outer_start.y),
        fmt_num(outer.raw()),
        fmt_num(outer.raw()),
        large_arc,
        fmt_num(outer_end.x),
        fmt_num(outer_end.y),
        fmt_num(inner_end.x),
        fmt_num(inner_end.y),
        fmt_num(inner.raw()),
        fmt_num(inner.raw()),
        large_arc,
        fmt_num(inner_start.x),
        fmt_num(inner_start.y),
    )
}

/// Open guide arc for curved text, spanning the wedge's angular extent.
///
/// `reversed` flips the traversal direction (end angle to start angle,
/// counterclockwise sweep) for wedges in the bottom hemisphere, so glyphs
/// bound to the path run left-to-right with their baseline toward the
/// center.
pub fn guide_arc_path(
    center: DVec2,
    radius: f64,
    start: Radians,
    end: Radians,
    reversed: bool,
) -> String {
    let large_arc = i32::from((end - start).raw().abs() > PI);
    let (from, to, sweep) = if reversed {
        (polar(center, radius, end), polar(center, radius, start), 0)
    } else {
        (polar(center, radius, start), polar(center, radius, end), 1)
    };
    format!(
        "M{} {} A{} {} 0 {} {} {} {}",
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(radius),
        fmt_num(radius),
        large_arc,
        sweep,
        fmt_num(to.x),
        fmt_num(to.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn assert_vec_eq(actual: DVec2, expected: DVec2) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn polar_zero_points_up() {
        let c = dvec2(100.0, 100.0);
        assert_vec_eq(polar(c, 50.0, Radians::ZERO), dvec2(100.0, 50.0));
    }

    #[test]
    fn polar_quarter_turn_points_right() {
        let c = dvec2(100.0, 100.0);
        assert_vec_eq(polar(c, 50.0, Radians(FRAC_PI_2)), dvec2(150.0, 100.0));
    }

    #[test]
    fn arc_length_scales_with_radius() {
        let len = arc_length(Radians::ZERO, Radians(FRAC_PI_2), Px(100.0));
        assert!((len.raw() - 100.0 * FRAC_PI_2).abs() < EPSILON);
        // Direction does not matter.
        let rev = arc_length(Radians(FRAC_PI_2), Radians::ZERO, Px(100.0));
        assert_eq!(len, rev);
    }

    #[test]
    fn ring_metrics_orders_rings_outward_without_overlap() {
        let rings = RingMetrics::new(800.0);
        for depth in 1..=2u8 {
            assert!(rings.outer_radius(depth) < rings.inner_radius(depth + 1));
        }
        assert!(rings.outer_radius(3) < rings.boundary());
        assert_eq!(rings.inner_radius(1), Px::ZERO);
        assert_eq!(rings.center(), dvec2(400.0, 400.0));
    }

    #[test]
    fn annular_wedge_has_two_arc_segments() {
        let d = wedge_path(
            dvec2(400.0, 400.0),
            Px(200.0),
            Px(250.0),
            Radians::ZERO,
            Radians(1.0),
        );
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
        assert_eq!(d.matches('A').count(), 2);
    }

    #[test]
    fn pie_wedge_closes_through_the_center() {
        let d = wedge_path(
            dvec2(400.0, 400.0),
            Px::ZERO,
            Px(200.0),
            Radians::ZERO,
            Radians(1.0),
        );
        assert_eq!(d.matches('A').count(), 1);
        assert!(d.contains("L400 400"));
    }

    #[test]
    fn wide_wedge_sets_the_large_arc_flag() {
        let narrow = wedge_path(dvec2(0.0, 0.0), Px(10.0), Px(20.0), Radians::ZERO, Radians(1.0));
        let wide = wedge_path(dvec2(0.0, 0.0), Px(10.0), Px(20.0), Radians::ZERO, Radians(4.0));
        assert!(narrow.contains(" 0 1 "));
        assert!(wide.contains(" 1 1 "));
    }

    #[test]
    fn reversed_guide_arc_starts_at_the_end_angle() {
        let c = dvec2(400.0, 400.0);
        let (start, end) = (Radians(3.0), Radians(4.0));
        let forward = guide_arc_path(c, 260.0, start, end, false);
        let reversed = guide_arc_path(c, 260.0, start, end, true);

        let p_start = polar(c, 260.0, start);
        let p_end = polar(c, 260.0, end);
        assert!(forward.starts_with(&format!("M{} {}", fmt_num(p_start.x), fmt_num(p_start.y))));
        assert!(reversed.starts_with(&format!("M{} {}", fmt_num(p_end.x), fmt_num(p_end.y))));
        // Sweep flag flips with the traversal direction.
        assert!(forward.contains(" 0 1 "));
        assert!(reversed.contains(" 0 0 "));
    }

    #[test]
    fn padding_never_inverts_a_sliver() {
        // A wedge narrower than the pad angle collapses to zero width
        // instead of swapping its edges.
        let d = wedge_path(
            dvec2(0.0, 0.0),
            Px(10.0),
            Px(20.0),
            Radians::ZERO,
            Radians(0.001),
        );
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
    }
}
