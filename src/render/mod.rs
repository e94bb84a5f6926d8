//! Sunburst rendering: configuration, theme, and the recursive paint pass.
//!
//! This module is organized into submodules:
//! - `defaults`: fixed layout constants
//! - `geometry`: ring metrics, polar conversion, wedge/guide paths
//! - `color`: the sector palette and its ring tints
//! - `label`: label strategy selection
//! - `text`: word wrap and the three label layouts
//! - `svg`: the typed output tree and its serializer

pub mod color;
pub mod defaults;
pub mod geometry;
pub mod label;
pub mod svg;
pub mod text;

use std::collections::HashMap;

use crate::errors::ChartError;
use crate::hierarchy::{ArcNode, ProportionNode, partition};

use color::Palette;
use geometry::{RingMetrics, arc_length, wedge_path};
use label::{LabelOverride, LabelStyle, select_label};
use svg::{Path, Rect, Svg, SvgNode};
use text::{CurvedLabel, HorizontalLabel, LabelEnum, LabelLayout, RadialLabel, format_label};

/// Visual styling for a chart. Changing any of it triggers a full repaint;
/// nothing is retained between passes.
#[derive(Clone, Debug)]
pub struct Theme {
    pub font_family: String,
    /// Font size per ring depth, px.
    pub font_sizes: [f64; 3],
    /// Outline between adjacent wedges.
    pub wedge_stroke: String,
    pub wedge_stroke_width: f64,
    /// Optional page background behind the rings.
    pub background: Option<String>,
    /// Text painted on top of wedges (horizontal and inward labels).
    pub text_on_wedge: String,
    /// Text outside the rings (ring labels and curved labels).
    pub text_outside: String,
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            font_sizes: defaults::FONT_SIZES,
            wedge_stroke: "#ffffff".to_string(),
            wedge_stroke_width: defaults::WEDGE_STROKE_WIDTH,
            background: None,
            text_on_wedge: "#ffffff".to_string(),
            text_outside: "#3d3d3d".to_string(),
            palette: Palette::default(),
        }
    }
}

impl Theme {
    pub(crate) fn font_for(&self, depth: u8) -> f64 {
        let idx = usize::from(depth.saturating_sub(1)).min(self.font_sizes.len() - 1);
        self.font_sizes[idx]
    }
}

/// The fixed parameters of one render request.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Edge length of the square chart, logical units.
    pub size: f64,
    pub theme: Theme,
    /// Pre-resolved per-node label decisions, keyed by node id. Consulted
    /// for ring wedges (depth 2/3) only.
    pub label_overrides: HashMap<String, LabelOverride>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: defaults::CHART_SIZE,
            theme: Theme::default(),
            label_overrides: HashMap::new(),
        }
    }
}

impl ChartConfig {
    fn validate(&self) -> Result<(), ChartError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidSize { value: self.size });
        }
        Ok(())
    }
}

fn validate_shares(nodes: &[ProportionNode]) -> Result<(), ChartError> {
    for node in nodes {
        if !node.share.is_finite() {
            return Err(ChartError::NonFiniteShare {
                id: node.id.clone(),
                share: node.share,
            });
        }
        validate_shares(&node.children)?;
    }
    Ok(())
}

/// Render a proportion forest to the typed SVG tree.
///
/// Every call is a complete, independent pass: partition, geometry, color,
/// label decisions, text layout. The result is idempotent for a given input
/// and is meant to replace whatever the host painted last.
pub fn render(forest: &[ProportionNode], config: &ChartConfig) -> Result<Svg, ChartError> {
    config.validate()?;
    validate_shares(forest)?;

    let rings = RingMetrics::new(config.size);
    let arcs = partition(forest, &rings);

    let mut children = Vec::new();
    if let Some(background) = &config.theme.background {
        children.push(SvgNode::Rect(Rect {
            x: 0.0,
            y: 0.0,
            width: config.size,
            height: config.size,
            fill: background.clone(),
        }));
    }
    for arc in &arcs {
        render_node(arc, &rings, config, &mut children);
    }

    crate::log::debug!(
        elements = children.len() as u64,
        "sunburst render pass complete"
    );
    Ok(Svg {
        size: config.size,
        children,
    })
}

/// Render straight to an SVG string.
pub fn render_svg(forest: &[ProportionNode], config: &ChartConfig) -> Result<String, ChartError> {
    Ok(render(forest, config)?.to_string())
}

/// Paint one wedge, lay out its label, then recurse into its children.
fn render_node(node: &ArcNode, rings: &RingMetrics, config: &ChartConfig, out: &mut Vec<SvgNode>) {
    let theme = &config.theme;
    let fill = theme.palette.color_for(node.depth, &node.ancestor_sector_id);
    out.push(SvgNode::Path(Path {
        id: None,
        d: wedge_path(
            rings.center(),
            node.inner_radius,
            node.outer_radius,
            node.start_angle,
            node.end_angle,
        ),
        fill: Some(fill.to_rgb_string()),
        stroke: Some(theme.wedge_stroke.clone()),
        stroke_width: Some(theme.wedge_stroke_width),
    }));

    let formatted = format_label(&node.name, node.share);
    let arc_len = arc_length(node.start_angle, node.end_angle, node.outer_radius);
    let forced = config.label_overrides.get(&node.id).copied();
    if let Some(style) = select_label(node.depth, arc_len, &formatted, forced) {
        let layout: LabelEnum = match style {
            LabelStyle::Horizontal => HorizontalLabel::plan(node, rings, theme).into(),
            LabelStyle::Radial if node.depth == 1 => RadialLabel::inward(node, rings, theme).into(),
            LabelStyle::Radial => RadialLabel::ring(node, rings, theme).into(),
            LabelStyle::Curved => CurvedLabel::plan(node, rings, theme).into(),
        };
        layout.emit(theme, out);
    }

    for child in &node.children {
        render_node(child, rings, config, out);
    }
}
