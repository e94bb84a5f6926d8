//! Typed SVG output tree and its string serializer.
//!
//! The renderer produces a [`Svg`] value (wedge paths and positioned text
//! nodes) which hosts can either walk directly or serialize with
//! [`std::fmt::Display`]. Serialization is deterministic: floats go through
//! a `%g`-style formatter (6 significant figures, trailing zeros trimmed)
//! so the same input always yields byte-identical output.

use std::fmt;

/// Root of the rendered chart: a square viewport plus its child nodes.
#[derive(Clone, Debug, Default)]
pub struct Svg {
    /// Edge length of the square viewport, logical units.
    pub size: f64,
    pub children: Vec<SvgNode>,
}

/// Any output node the renderer emits.
#[derive(Clone, Debug)]
pub enum SvgNode {
    Rect(Rect),
    Path(Path),
    Text(Text),
    Group(Group),
}

/// `<rect>`: used only for the optional chart background.
#[derive(Clone, Debug, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

/// `<path>`: a painted wedge, or an invisible guide arc when `id` is set
/// and `fill` is `"none"`.
#[derive(Clone, Debug, Default)]
pub struct Path {
    pub id: Option<String>,
    pub d: String,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

/// `<g>`: groups the lines of a rotated radial label under one transform.
#[derive(Clone, Debug, Default)]
pub struct Group {
    pub transform: Option<String>,
    pub children: Vec<SvgNode>,
}

/// `<text>`: one positioned label line, or curved text bound to a guide
/// path.
#[derive(Clone, Debug)]
pub struct Text {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub fill: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub text_anchor: Option<String>,
    pub dominant_baseline: Option<String>,
    pub content: TextContent,
}

/// Plain glyphs at (x, y), or glyphs following a guide path.
#[derive(Clone, Debug)]
pub enum TextContent {
    Plain(String),
    OnPath {
        /// Fragment reference to the guide path, e.g. `#label-arc-energy`.
        href: String,
        /// `0%` or `100%` depending on hemisphere.
        start_offset: String,
        text: String,
    },
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{s}" height="{s}" viewBox="0 0 {s} {s}">"#,
            s = fmt_num(self.size)
        )?;
        for child in &self.children {
            write_node(f, child, 1)?;
        }
        writeln!(f, "</svg>")
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &SvgNode, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    match node {
        SvgNode::Rect(r) => {
            writeln!(
                f,
                r#"{indent}<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                fmt_num(r.x),
                fmt_num(r.y),
                fmt_num(r.width),
                fmt_num(r.height),
                xml_escape(&r.fill),
            )
        }
        SvgNode::Path(p) => {
            write!(f, "{indent}<path")?;
            if let Some(id) = &p.id {
                write!(f, r#" id="{}""#, xml_escape(id))?;
            }
            write!(f, r#" d="{}""#, p.d)?;
            if let Some(fill) = &p.fill {
                write!(f, r#" fill="{}""#, xml_escape(fill))?;
            }
            if let Some(stroke) = &p.stroke {
                write!(f, r#" stroke="{}""#, xml_escape(stroke))?;
            }
            if let Some(sw) = p.stroke_width {
                write!(f, r#" stroke-width="{}""#, fmt_num(sw))?;
            }
            writeln!(f, "/>")
        }
        SvgNode::Group(g) => {
            write!(f, "{indent}<g")?;
            if let Some(t) = &g.transform {
                write!(f, r#" transform="{}""#, xml_escape(t))?;
            }
            writeln!(f, ">")?;
            for child in &g.children {
                write_node(f, child, depth + 1)?;
            }
            writeln!(f, "{indent}</g>")
        }
        SvgNode::Text(t) => {
            write!(f, "{indent}<text")?;
            if let Some(x) = t.x {
                write!(f, r#" x="{}""#, fmt_num(x))?;
            }
            if let Some(y) = t.y {
                write!(f, r#" y="{}""#, fmt_num(y))?;
            }
            if let Some(fill) = &t.fill {
                write!(f, r#" fill="{}""#, xml_escape(fill))?;
            }
            if let Some(family) = &t.font_family {
                write!(f, r#" font-family="{}""#, xml_escape(family))?;
            }
            if let Some(size) = t.font_size {
                write!(f, r#" font-size="{}""#, fmt_num(size))?;
            }
            if let Some(anchor) = &t.text_anchor {
                write!(f, r#" text-anchor="{}""#, xml_escape(anchor))?;
            }
            if let Some(baseline) = &t.dominant_baseline {
                write!(f, r#" dominant-baseline="{}""#, xml_escape(baseline))?;
            }
            match &t.content {
                TextContent::Plain(text) => writeln!(f, ">{}</text>", xml_escape(text)),
                TextContent::OnPath {
                    href,
                    start_offset,
                    text,
                } => writeln!(
                    f,
                    r#"><textPath href="{}" startOffset="{}">{}</textPath></text>"#,
                    xml_escape(href),
                    xml_escape(start_offset),
                    xml_escape(text),
                ),
            }
        }
    }
}

/// Escape the five XML special characters for element text and attribute
/// values.
pub(crate) fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Format a number matching C's `%g` (6 significant figures, trailing zeros
/// trimmed), so path data and transforms stay compact and deterministic.
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let sig_figs = 6;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(400.0), "400");
        assert_eq!(fmt_num(73.2), "73.2");
        assert_eq!(fmt_num(-0.5), "-0.5");
        assert_eq!(fmt_num(249.600), "249.6");
    }

    #[test]
    fn fmt_num_rounds_to_six_significant_figures() {
        assert_eq!(fmt_num(123.456789), "123.457");
        assert_eq!(fmt_num(0.0012345678), "0.00123457");
    }

    #[test]
    fn xml_escape_handles_specials() {
        assert_eq!(xml_escape("Forestry & Land Use"), "Forestry &amp; Land Use");
        assert_eq!(xml_escape("<g>"), "&lt;g&gt;");
        assert_eq!(xml_escape("plain"), "plain");
    }

    #[test]
    fn serializes_a_minimal_document() {
        let svg = Svg {
            size: 100.0,
            children: vec![
                SvgNode::Path(Path {
                    id: None,
                    d: "M0 0 L10 10 Z".to_string(),
                    fill: Some("rgb(245,158,11)".to_string()),
                    stroke: Some("#fff".to_string()),
                    stroke_width: Some(1.0),
                }),
                SvgNode::Text(Text {
                    x: Some(5.0),
                    y: Some(5.0),
                    fill: Some("#333".to_string()),
                    font_family: None,
                    font_size: Some(14.0),
                    text_anchor: Some("middle".to_string()),
                    dominant_baseline: Some("central".to_string()),
                    content: TextContent::Plain("Energy & Heat".to_string()),
                }),
            ],
        };
        let out = svg.to_string();
        assert!(out.starts_with("<svg xmlns"));
        assert!(out.contains(r#"viewBox="0 0 100 100""#));
        assert!(out.contains(r##"<path d="M0 0 L10 10 Z" fill="rgb(245,158,11)" stroke="#fff" stroke-width="1"/>"##));
        assert!(out.contains(">Energy &amp; Heat</text>"));
        assert!(out.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn serializes_text_on_a_path() {
        let svg = Svg {
            size: 10.0,
            children: vec![SvgNode::Text(Text {
                x: None,
                y: None,
                fill: None,
                font_family: None,
                font_size: None,
                text_anchor: Some("start".to_string()),
                dominant_baseline: None,
                content: TextContent::OnPath {
                    href: "#label-arc-2-energy".to_string(),
                    start_offset: "0%".to_string(),
                    text: "Transport (22%)".to_string(),
                },
            })],
        };
        let out = svg.to_string();
        assert!(out.contains(r##"<textPath href="#label-arc-2-energy" startOffset="0%">Transport (22%)</textPath>"##));
    }
}
