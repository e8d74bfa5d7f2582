//! Hex parsing and HSL conversion for garment colors.

use rgb::RGB8;

const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };

/// A color in hue/saturation/lightness form.
///
/// Derived, ephemeral value: recomputed for every evaluation and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in whole degrees, 0. ≤ h < 360.  Achromatic colors have
    /// hue 0.
    pub h: f64,
    /// Saturation ∈ \[0., 1.\]; 0. for achromatic colors.
    pub s: f64,
    /// Lightness ∈ \[0., 1.\].
    pub l: f64,
}

/// Parse a hex color string.
///
/// Accepts `#RGB` (each nibble doubled) and `#RRGGBB`, case
/// insensitive, with or without the leading `#`; surrounding
/// whitespace is ignored.  Any other input yields pure white,
/// including the empty string.  The white fallback is a defined
/// default for colors still being edited, not a validation mechanism;
/// callers that need validation must do it themselves.
pub fn parse_hex(hex: &str) -> RGB8 {
    let cleaned = hex.trim().trim_start_matches('#');
    channels(cleaned.as_bytes()).unwrap_or(WHITE)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn channels(bytes: &[u8]) -> Option<RGB8> {
    let pair = |hi, lo| Some(nibble(hi)? << 4 | nibble(lo)?);
    match bytes.len() {
        3 => Some(RGB8 { r: nibble(bytes[0])? * 17,
                         g: nibble(bytes[1])? * 17,
                         b: nibble(bytes[2])? * 17 }),
        6 => Some(RGB8 { r: pair(bytes[0], bytes[1])?,
                         g: pair(bytes[2], bytes[3])?,
                         b: pair(bytes[4], bytes[5])? }),
        _ => None,
    }
}

/// Format a color as a lowercase CSS hex string, `#rrggbb`.
pub fn css_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Convert to HSL by the standard max/min channel algorithm.
///
/// The hue comes from the channel-wise piecewise formula and is
/// rounded to whole degrees; `max == min` is defined as hue 0 and
/// saturation 0.  Lightness is `(max + min) / 2` and saturation
/// `delta / (1 - |2l - 1|)` when delta is nonzero.
pub fn to_hsl(c: RGB8) -> Hsl {
    let r = c.r as f64 / 255.;
    let g = c.g as f64 / 255.;
    let b = c.b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let mut h = 0.;
    if delta != 0. {
        h = if max == r { (g - b) / delta }
            else if max == g { (b - r) / delta + 2. }
            else { (r - g) / delta + 4. };
        h = (h * 60.).round();
        if h < 0. { h += 360.; }
    }
    let l = (max + min) / 2.;
    let s = if delta == 0. { 0. } else { delta / (1. - (2. * l - 1.).abs()) };
    Hsl { h, s, l }
}
