//! A fixed three-ring sunburst chart renderer with adaptive wedge labeling.
//!
//! Callers supply an ordered forest of [`ProportionNode`]s (a breakdown by
//! sector, subsector, and sub-subsector, each node claiming a percentage of
//! its parent's angular budget) and get back a tree of vector wedge paths
//! and positioned text nodes ([`Svg`]), or its string serialization.
//!
//! Each wedge's label placement is chosen from its on-screen arc length and
//! formatted text: wide center sectors get horizontal multi-line labels,
//! long outer wedges get text curved along an invisible guide arc, the rest
//! get radial labels stacked along the spoke, and slivers get nothing. Text
//! in the bottom hemisphere is flipped 180° so it never renders upside-down.
//!
//! ```
//! use sunburst::{ChartConfig, ProportionNode, render_svg};
//!
//! let sectors = vec![
//!     ProportionNode::new("energy", "Energy", 73.2),
//!     ProportionNode::new("agriculture", "Agriculture, Forestry & Land Use", 18.4),
//!     ProportionNode::new("industry", "Industry", 5.2),
//!     ProportionNode::new("waste", "Waste", 3.2),
//! ];
//! let svg = render_svg(&sectors, &ChartConfig::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! Rendering is synchronous, allocation-light, and O(nodes); every call is a
//! full repaint with no retained scene. Malformed proportions degrade
//! visually instead of erroring; see [`ChartError`] for the few things that
//! are rejected at the boundary.

pub mod errors;
pub mod hierarchy;
pub mod log;
pub mod render;
pub mod types;

pub use errors::ChartError;
pub use hierarchy::{ArcNode, ProportionNode, partition};
pub use render::color::{Palette, Rgb};
pub use render::geometry::RingMetrics;
pub use render::label::{LabelOverride, LabelStyle};
pub use render::svg::{Svg, SvgNode};
pub use render::{ChartConfig, Theme, render, render_svg};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_forest_renders_an_empty_chart() {
        let svg = render(&[], &ChartConfig::default()).unwrap();
        assert!(svg.children.is_empty());
        assert!(svg.to_string().starts_with("<svg"));
    }

    #[test]
    fn single_full_circle_sector() {
        let nodes = vec![ProportionNode::new("energy", "Energy", 100.0)];
        let svg = render(&nodes, &ChartConfig::default()).unwrap();
        // One wedge and a horizontal label (name line + percentage line).
        assert_eq!(svg.children.len(), 3);
    }
}
