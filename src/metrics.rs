//! Spread measurements over an outfit's three colors.

use crate::color::Hsl;

/// Circular distance between two hues in degrees, ∈ \[0., 180.\].
#[inline]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360. - d)
}

/// Population standard deviation of three samples (variance divided
/// by 3, not 2).
fn spread(xs: [f64; 3]) -> f64 {
    let mean = (xs[0] + xs[1] + xs[2]) / 3.;
    let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / 3.;
    var.sqrt()
}

/// Aggregate measurements over the top/bottom/shoes colors.
///
/// Transient: recomputed for every evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteMetrics {
    /// Hue distance between top and bottom.
    pub top_bottom: f64,
    /// Hue distance between top and shoes.
    pub top_shoes: f64,
    /// Hue distance between bottom and shoes.
    pub bottom_shoes: f64,
    /// Largest of the three pairwise hue distances.
    pub max_diff: f64,
    /// Spread of the three lightness values.
    pub value_std: f64,
    /// Spread of the three saturation values.
    pub chroma_std: f64,
}

impl PaletteMetrics {
    /// Measure a well-formed HSL triple.  Pure and deterministic; no
    /// fallback is needed here because hex fallback already happened
    /// during conversion.
    pub fn measure(top: Hsl, bottom: Hsl, shoes: Hsl) -> Self {
        let top_bottom = hue_diff(top.h, bottom.h);
        let top_shoes = hue_diff(top.h, shoes.h);
        let bottom_shoes = hue_diff(bottom.h, shoes.h);
        PaletteMetrics {
            top_bottom,
            top_shoes,
            bottom_shoes,
            max_diff: top_bottom.max(top_shoes).max(bottom_shoes),
            value_std: spread([top.l, bottom.l, shoes.l]),
            chroma_std: spread([top.s, bottom.s, shoes.s]),
        }
    }

    /// The three pairwise hue distances, top–bottom first.
    #[inline]
    pub fn pairwise(&self) -> [f64; 3] {
        [self.top_bottom, self.top_shoes, self.bottom_shoes]
    }
}
