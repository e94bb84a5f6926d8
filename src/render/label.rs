//! Label strategy selection.
//!
//! Given a wedge's on-screen arc length and its formatted label text, pick
//! one of three placements or none at all. The shape of the decision is the
//! contract: bigger wedges with shorter text earn curved labels, smaller or
//! wordier ones fall back to radial, and slivers stay silent.

use crate::types::Px;

use super::defaults;

/// The placement chosen for one wedge's label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelStyle {
    /// Unrotated multi-line text at the sector's visual center (depth 1).
    Horizontal,
    /// Text stacked along the spoke; inward at depth 1, outward at 2/3.
    Radial,
    /// Text following an invisible guide arc (depth 2/3).
    Curved,
}

/// A per-node override that bypasses the automatic ring-label decision.
///
/// Keyed by node id on the chart config. Consulted for depth 2/3 wedges
/// only; the center ring's horizontal/radial split is always automatic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelOverride {
    Curved,
    Radial,
    Hidden,
}

/// Decide the label placement for a wedge.
///
/// `arc_len` is the wedge's extent at the ring's outer radius; `text` is the
/// fully formatted label (`"<name> (<share>%)"`).
pub fn select_label(
    depth: u8,
    arc_len: Px,
    text: &str,
    override_: Option<LabelOverride>,
) -> Option<LabelStyle> {
    if depth <= 1 {
        return if arc_len.raw() >= defaults::CENTER_HORIZONTAL_MIN_ARC {
            Some(LabelStyle::Horizontal)
        } else if arc_len.raw() >= defaults::MIN_LABEL_ARC {
            Some(LabelStyle::Radial)
        } else {
            None
        };
    }

    if let Some(forced) = override_ {
        return match forced {
            LabelOverride::Curved => Some(LabelStyle::Curved),
            LabelOverride::Radial => Some(LabelStyle::Radial),
            LabelOverride::Hidden => None,
        };
    }

    if uses_curved(depth, arc_len.raw(), text.chars().count()) {
        Some(LabelStyle::Curved)
    } else if arc_len.raw() > defaults::MIN_LABEL_ARC {
        Some(LabelStyle::Radial)
    } else {
        None
    }
}

/// The "use curved" predicate: an arc-length floor AND a text-length
/// ceiling, two-tiered for the middle ring. Monotonic in arc length for a
/// fixed text length.
fn uses_curved(depth: u8, arc_len: f64, text_chars: usize) -> bool {
    match depth {
        2 => defaults::CURVED_GATES_DEPTH2
            .iter()
            .any(|&(min_arc, max_chars)| arc_len >= min_arc && text_chars <= max_chars),
        3 => {
            let (min_arc, max_chars) = defaults::CURVED_GATE_DEPTH3;
            arc_len >= min_arc && text_chars <= max_chars
        }
        _ => false,
    }
}
