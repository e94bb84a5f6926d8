//! The sector palette: saturated hues for the center ring, lighter tints
//! for the outer rings, neutral gray for anything unrecognized.

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `rgb(r,g,b)` as written into SVG fill attributes.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Mix toward white by `amount` in `[0, 1]`.
    pub fn lighten(self, amount: f64) -> Rgb {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| c + ((255.0 - f64::from(c)) * amount).round() as u8;
        Rgb::new(mix(self.r), mix(self.g), mix(self.b))
    }
}

/// Fallback for unknown sector ids.
const NEUTRAL: Rgb = Rgb::new(158, 158, 158);

/// Tint strength for the middle and outer rings.
const TINTS: [f64; 2] = [0.35, 0.6];

/// Maps depth-1 sector ids to hue families and derives ring tints.
///
/// The default table covers the emissions taxonomy the chart was built for;
/// hosts drawing companion legends query the same colors through
/// [`Palette::color_for`].
#[derive(Clone, Debug)]
pub struct Palette {
    families: Vec<(String, Rgb)>,
    neutral: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            families: vec![
                ("energy".to_string(), Rgb::new(245, 158, 11)),
                ("agriculture".to_string(), Rgb::new(46, 125, 50)),
                ("industry".to_string(), Rgb::new(69, 90, 100)),
                ("waste".to_string(), Rgb::new(106, 27, 154)),
            ],
            neutral: NEUTRAL,
        }
    }
}

impl Palette {
    /// The saturated base hue for a sector id, if it is a known family.
    pub fn family(&self, sector_id: &str) -> Option<Rgb> {
        self.families
            .iter()
            .find(|(id, _)| id == sector_id)
            .map(|&(_, rgb)| rgb)
    }

    /// Resolve the paint color for a wedge.
    ///
    /// Depth 1 gets the family hue, depth 2 a lighter tint, depth 3 an even
    /// lighter one. Unknown sector ids resolve to the neutral family at
    /// every depth.
    pub fn color_for(&self, depth: u8, sector_id: &str) -> Rgb {
        let base = self.family(sector_id).unwrap_or(self.neutral);
        match depth {
            0 | 1 => base,
            2 => base.lighten(TINTS[0]),
            _ => base.lighten(TINTS[1]),
        }
    }

    /// The known sector ids, in palette order, for legend rendering.
    pub fn sector_ids(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|(id, _)| id.as_str())
    }
}
