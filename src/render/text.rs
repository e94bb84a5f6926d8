//! The text layout engine: word wrap, percentage suffixes, hemisphere
//! flips, and the three label placements.
//!
//! Text width is estimated as `chars * font_size * 0.6`, a heuristic cheap
//! enough to run for every wedge on every pass. Wrap decisions are
//! deterministic for a given input; real glyph metrics could be substituted
//! without changing any of the placement logic.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::hierarchy::ArcNode;
use crate::types::Radians;

use super::Theme;
use super::defaults;
use super::geometry::{RingMetrics, guide_arc_path, polar};
use super::svg::{Path, SvgNode, Text, TextContent, fmt_num};

// ---------------------------------------------------------------------------
// Measurement and wrapping
// ---------------------------------------------------------------------------

/// A wrap token: a word, or a fragment ending in `&`/`,`.
///
/// `space_before` records whether whitespace separated this token from the
/// previous one, so fragments split at a hard delimiter rejoin without an
/// inserted space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub text: String,
    pub space_before: bool,
}

/// Split label text at whitespace and after `&`/`,`.
pub(crate) fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut space_before = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(Token {
                    text: std::mem::take(&mut current),
                    space_before,
                });
            }
            space_before = true;
        } else if ch == '&' || ch == ',' {
            current.push(ch);
            tokens.push(Token {
                text: std::mem::take(&mut current),
                space_before,
            });
            space_before = false;
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(Token {
            text: current,
            space_before,
        });
    }
    tokens
}

/// How many characters fit in `available_width` at the given font size,
/// under the glyph-width heuristic. Never less than 1.
pub(crate) fn max_chars_per_line(available_width: f64, font_size: f64) -> usize {
    ((available_width / (font_size * defaults::CHAR_WIDTH_RATIO)).floor() as usize).max(1)
}

/// Greedily pack tokens into lines of at most `max_chars` characters.
///
/// A token that alone exceeds the bound becomes an over-length line rather
/// than an error.
pub(crate) fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for token in tokenize(text) {
        if current.is_empty() {
            current = token.text;
            continue;
        }
        let sep = usize::from(token.space_before);
        if current.chars().count() + sep + token.text.chars().count() <= max_chars {
            if token.space_before {
                current.push(' ');
            }
            current.push_str(&token.text);
        } else {
            lines.push(std::mem::take(&mut current));
            current = token.text;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap a name and attach its `(NN%)` suffix: on the last line when it still
/// fits, otherwise as its own final line. A percentage never orphans a word
/// it could have joined.
pub(crate) fn wrap_with_share(name: &str, share: f64, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let suffix = format_share(share);
    let mut lines = wrap(name, max_chars);
    match lines.last_mut() {
        Some(last) if last.chars().count() + 1 + suffix.chars().count() <= max_chars => {
            last.push(' ');
            last.push_str(&suffix);
        }
        _ => lines.push(suffix),
    }
    lines
}

pub(crate) fn format_share(share: f64) -> String {
    format!("({}%)", fmt_num(share))
}

/// The full formatted label, as fed to the strategy selector and to curved
/// labels.
pub(crate) fn format_label(name: &str, share: f64) -> String {
    format!("{} {}", name, format_share(share))
}

// ---------------------------------------------------------------------------
// Hemisphere
// ---------------------------------------------------------------------------

/// True when the mid-angle lies strictly inside (90°, 270°), the bottom
/// half of the circle, where unflipped text would render upside-down.
pub(crate) fn is_flipped(mid: Radians) -> bool {
    let deg = mid.normalized_degrees();
    deg > 90.0 && deg < 270.0
}

/// Rotation applied to a radial label group: the mid-angle converted to a
/// screen rotation, plus 180° in the bottom hemisphere.
pub(crate) fn radial_rotation(mid: Radians) -> f64 {
    let base = mid.normalized_degrees() - 90.0;
    if is_flipped(mid) { base + 180.0 } else { base }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

// ---------------------------------------------------------------------------
// Label layouts
// ---------------------------------------------------------------------------

/// A fully planned label, ready to emit as SVG nodes.
#[enum_dispatch]
pub trait LabelLayout {
    fn emit(&self, theme: &Theme, out: &mut Vec<SvgNode>);
}

#[enum_dispatch(LabelLayout)]
#[derive(Clone, Debug)]
pub enum LabelEnum {
    Horizontal(HorizontalLabel),
    Radial(RadialLabel),
    Curved(CurvedLabel),
}

/// Unrotated multi-line label at a center-ring sector's visual center.
#[derive(Clone, Debug)]
pub struct HorizontalLabel {
    pub anchor: DVec2,
    pub lines: Vec<String>,
    pub font_size: f64,
    pub color: String,
}

impl HorizontalLabel {
    /// The anchor sits at half the center ring's outer radius along the
    /// mid-angle: the middle of the visually "big" sector area, not the
    /// radial midpoint of the annulus.
    pub fn plan(node: &ArcNode, rings: &RingMetrics, theme: &Theme) -> Self {
        let label_radius = node.outer_radius.raw() * 0.5;
        let anchor = polar(rings.center(), label_radius, node.mid_angle());
        let font_size = theme.font_for(node.depth);
        let available = node.span().abs().raw() * label_radius;
        let mut lines = wrap(&node.name, max_chars_per_line(available, font_size));
        lines.push(format_share(node.share));
        Self {
            anchor,
            lines,
            font_size,
            color: theme.text_on_wedge.clone(),
        }
    }
}

impl LabelLayout for HorizontalLabel {
    fn emit(&self, theme: &Theme, out: &mut Vec<SvgNode>) {
        let line_height = self.font_size * defaults::LINE_HEIGHT_RATIO;
        let first_y = self.anchor.y - (self.lines.len() as f64 - 1.0) * line_height / 2.0;
        for (i, line) in self.lines.iter().enumerate() {
            out.push(SvgNode::Text(Text {
                x: Some(self.anchor.x),
                y: Some(first_y + i as f64 * line_height),
                fill: Some(self.color.clone()),
                font_family: Some(theme.font_family.clone()),
                font_size: Some(self.font_size),
                text_anchor: Some(TextAnchor::Middle.as_str().to_string()),
                dominant_baseline: Some("central".to_string()),
                content: TextContent::Plain(line.clone()),
            }));
        }
    }
}

/// Lines stacked along the spoke, rotated as a group about their anchor.
#[derive(Clone, Debug)]
pub struct RadialLabel {
    pub anchor: DVec2,
    pub rotation_deg: f64,
    pub anchor_side: TextAnchor,
    pub lines: Vec<String>,
    pub font_size: f64,
    pub color: String,
}

impl RadialLabel {
    /// Ring label for depth 2/3: anchored just outside the ring's outer
    /// edge, extending toward the chart boundary.
    pub fn ring(node: &ArcNode, rings: &RingMetrics, theme: &Theme) -> Self {
        let mid = node.mid_angle();
        let flipped = is_flipped(mid);
        let base_radius = node.outer_radius.raw() + defaults::RADIAL_EXTENSION;
        let available = rings.boundary().raw() - base_radius;
        let font_size = theme.font_for(node.depth);
        let mut lines = wrap_with_share(
            &node.name,
            node.share,
            max_chars_per_line(available, font_size),
        );
        if flipped {
            lines.reverse();
        }
        Self {
            anchor: polar(rings.center(), base_radius, mid),
            rotation_deg: radial_rotation(mid),
            anchor_side: if flipped {
                TextAnchor::End
            } else {
                TextAnchor::Start
            },
            lines,
            font_size,
            color: theme.text_outside.clone(),
        }
    }

    /// Center-ring label for sectors too narrow for horizontal text:
    /// anchored near the wedge's outer edge, extending inward.
    pub fn inward(node: &ArcNode, rings: &RingMetrics, theme: &Theme) -> Self {
        let mid = node.mid_angle();
        let flipped = is_flipped(mid);
        let base_radius = node.outer_radius.raw() - defaults::INWARD_INSET;
        let font_size = theme.font_for(node.depth);
        let mut lines = wrap_with_share(
            &node.name,
            node.share,
            max_chars_per_line(base_radius, font_size),
        );
        if flipped {
            lines.reverse();
        }
        Self {
            anchor: polar(rings.center(), base_radius, mid),
            rotation_deg: radial_rotation(mid),
            anchor_side: if flipped {
                TextAnchor::Start
            } else {
                TextAnchor::End
            },
            lines,
            font_size,
            color: theme.text_on_wedge.clone(),
        }
    }
}

impl LabelLayout for RadialLabel {
    fn emit(&self, theme: &Theme, out: &mut Vec<SvgNode>) {
        let line_height = self.font_size * defaults::LINE_HEIGHT_RATIO;
        let children = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                SvgNode::Text(Text {
                    x: Some(self.anchor.x),
                    y: Some(self.anchor.y + i as f64 * line_height),
                    fill: Some(self.color.clone()),
                    font_family: Some(theme.font_family.clone()),
                    font_size: Some(self.font_size),
                    text_anchor: Some(self.anchor_side.as_str().to_string()),
                    dominant_baseline: Some("central".to_string()),
                    content: TextContent::Plain(line.clone()),
                })
            })
            .collect();
        out.push(SvgNode::Group(super::svg::Group {
            transform: Some(format!(
                "rotate({} {} {})",
                fmt_num(self.rotation_deg),
                fmt_num(self.anchor.x),
                fmt_num(self.anchor.y),
            )),
            children,
        }));
    }
}

/// Single-line text following an invisible guide arc just outside the ring.
#[derive(Clone, Debug)]
pub struct CurvedLabel {
    pub path_id: String,
    pub path_d: String,
    pub start_offset: &'static str,
    pub anchor_side: TextAnchor,
    pub text: String,
    pub font_size: f64,
    pub color: String,
}

impl CurvedLabel {
    pub fn plan(node: &ArcNode, rings: &RingMetrics, theme: &Theme) -> Self {
        let flipped = is_flipped(node.mid_angle());
        let radius = node.outer_radius.raw() + defaults::CURVE_OFFSET;
        let (start_offset, anchor_side) = if flipped {
            ("100%", TextAnchor::End)
        } else {
            ("0%", TextAnchor::Start)
        };
        Self {
            path_id: guide_path_id(node.depth, &node.id),
            path_d: guide_arc_path(
                rings.center(),
                radius,
                node.start_angle,
                node.end_angle,
                flipped,
            ),
            start_offset,
            anchor_side,
            text: format_label(&node.name, node.share),
            font_size: theme.font_for(node.depth),
            color: theme.text_outside.clone(),
        }
    }
}

impl LabelLayout for CurvedLabel {
    fn emit(&self, theme: &Theme, out: &mut Vec<SvgNode>) {
        out.push(SvgNode::Path(Path {
            id: Some(self.path_id.clone()),
            d: self.path_d.clone(),
            fill: Some("none".to_string()),
            stroke: None,
            stroke_width: None,
        }));
        out.push(SvgNode::Text(Text {
            x: None,
            y: None,
            fill: Some(self.color.clone()),
            font_family: Some(theme.font_family.clone()),
            font_size: Some(self.font_size),
            text_anchor: Some(self.anchor_side.as_str().to_string()),
            dominant_baseline: None,
            content: TextContent::OnPath {
                href: format!("#{}", self.path_id),
                start_offset: self.start_offset.to_string(),
                text: self.text.clone(),
            },
        }));
    }
}

/// XML-safe element id for a wedge's guide arc. Depth is included so a node
/// id reused across rings cannot collide.
fn guide_path_id(depth: u8, node_id: &str) -> String {
    let sanitized: String = node_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("label-arc-{depth}-{sanitized}")
}
