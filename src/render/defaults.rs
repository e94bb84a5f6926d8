//! Fixed layout constants for the three-ring chart (pixels and radians).

/// Default chart edge length in logical units.
pub const CHART_SIZE: f64 = 800.0;

/// Fraction of half the chart size available to the rings; the rest is the
/// outer margin that radial ring labels extend into.
pub const RING_AREA_FRACTION: f64 = 0.8;

/// `[inner, outer]` radius of each ring as fractions of the ring radius.
/// The gaps between rings are reserved for ring labels.
pub const RING_BOUNDS: [(f64, f64); 3] = [(0.0, 0.58), (0.68, 0.78), (0.88, 0.98)];

/// Angular padding between adjacent wedges, radians.
pub const PAD_ANGLE: f64 = 0.006;

/// Arc length above which a center-ring wedge gets a horizontal label.
pub const CENTER_HORIZONTAL_MIN_ARC: f64 = 80.0;

/// Arc length below which no wedge gets any label.
pub const MIN_LABEL_ARC: f64 = 20.0;

/// Curved-label gates for the middle ring: (min arc px, max text chars).
/// Two tiers: a long wedge tolerates longer text.
pub const CURVED_GATES_DEPTH2: [(f64, usize); 2] = [(250.0, 35), (150.0, 25)];

/// Curved-label gate for the outer ring.
pub const CURVED_GATE_DEPTH3: (f64, usize) = (200.0, 20);

/// Heuristic glyph width as a fraction of the font size.
pub const CHAR_WIDTH_RATIO: f64 = 0.6;

/// Font size per ring depth, px.
pub const FONT_SIZES: [f64; 3] = [20.0, 14.0, 12.0];

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Radial ring labels start this far outside the ring's outer edge.
pub const RADIAL_EXTENSION: f64 = 6.0;

/// Curved guide arcs sit this far outside the ring's outer edge.
pub const CURVE_OFFSET: f64 = 4.0;

/// Center-ring radial labels anchor this far inside the wedge's outer edge.
pub const INWARD_INSET: f64 = 10.0;

/// Wedge outline width, px.
pub const WEDGE_STROKE_WIDTH: f64 = 1.0;
