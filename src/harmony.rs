//! Harmony classification and score normalization.

use std::fmt;
use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

use crate::metrics::PaletteMetrics;

/// Categorical label for the geometric relationship between the hues
/// of an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyType {
    /// Colors sit near opposite ends of the hue circle.
    Complementary,
    /// Colors cluster tightly on the hue circle.
    Analogous,
    /// Two legs of an approximate 120°-spaced triangle.
    Triadic,
    /// No strong hue relationship detected.
    Balanced,
}

impl HarmonyType {
    /// All harmony categories.
    pub const ALL: [HarmonyType; 4] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Balanced,
    ];

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Complementary => "Complementary contrast",
            Self::Analogous => "Analogous calm",
            Self::Triadic => "Triadic accent",
            Self::Balanced => "Balanced mix",
        }
    }

    /// Fixed description shown alongside the scores.  Selected by
    /// harmony type alone; the numeric scores never change it.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Complementary => {
                "Top and bottom sit close to complementary hues, so the \
                 contrast is strong and draws the eye. Keeping the shoes \
                 neutral adds stability."
            }
            Self::Analogous => {
                "The colors sit close together on the color wheel, giving \
                 the whole outfit a soft, settled tone."
            }
            Self::Triadic => {
                "Each color stands clearly apart, so accents come through \
                 well. Anchoring one as the main color looks more polished."
            }
            Self::Balanced => {
                "Rated as a stable combination based on the balance of \
                 lightness and saturation."
            }
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hue spread at or above which an outfit reads as complementary.
const COMPLEMENTARY_MIN_SPREAD: f64 = 150.;
/// Largest pairwise distance still counting as analogous.
const ANALOGOUS_MAX_SPREAD: f64 = 35.;
/// Band a pairwise distance must land in to count as a triadic leg.
const TRIADIC_BAND: RangeInclusive<f64> = 100. ..= 140.;

/// Map measurements to a harmony category.
///
/// First match wins, and the order is part of the contract: a triple
/// whose largest distance passes 150° while two other legs land in the
/// triadic band is complementary, never triadic.
pub fn classify(m: &PaletteMetrics) -> HarmonyType {
    if m.max_diff >= COMPLEMENTARY_MIN_SPREAD {
        HarmonyType::Complementary
    } else if m.pairwise().into_iter().all(|d| d <= ANALOGOUS_MAX_SPREAD) {
        HarmonyType::Analogous
    } else if m.pairwise().into_iter()
        .filter(|d| TRIADIC_BAND.contains(d)).count() >= 2
    {
        HarmonyType::Triadic
    } else {
        HarmonyType::Balanced
    }
}

/// Ideal hue spread for complementary contrast, in degrees.
const CONTRAST_TARGET: f64 = 180.;
/// Degrees of deviation from the contrast target per lost point.
const CONTRAST_UNIT: f64 = 18.;
/// Ideal lightness spread.
const VALUE_TARGET: f64 = 0.18;
/// Ideal saturation spread.
const CHROMA_TARGET: f64 = 0.2;

/// The three normalized quality scores, each ∈ \[0., 10.\] rounded to
/// one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonyScores {
    /// How close the hue spread comes to true complementary contrast.
    pub complementary: f64,
    /// How close the lightness spread comes to its target.
    pub value: f64,
    /// How close the saturation spread comes to its target.
    pub chroma: f64,
}

impl HarmonyScores {
    /// Rate the measurements against the hand-tuned spread targets.
    ///
    /// Each score is a symmetric penalty around its target: too flat
    /// and too extreme cost the same.
    pub fn rate(m: &PaletteMetrics) -> Self {
        HarmonyScores {
            complementary: round1(clamp(
                10. - (CONTRAST_TARGET - m.max_diff).abs() / CONTRAST_UNIT)),
            value: round1(clamp(
                10. - (m.value_std - VALUE_TARGET).abs() / VALUE_TARGET * 10.)),
            chroma: round1(clamp(
                10. - (m.chroma_std - CHROMA_TARGET).abs() / CHROMA_TARGET * 10.)),
        }
    }
}

fn clamp(x: f64) -> f64 {
    x.max(0.).min(10.)
}

fn round1(x: f64) -> f64 {
    (x * 10.).round() / 10.
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(pairs: [f64; 3], value_std: f64, chroma_std: f64) -> PaletteMetrics {
        PaletteMetrics {
            top_bottom: pairs[0],
            top_shoes: pairs[1],
            bottom_shoes: pairs[2],
            max_diff: pairs[0].max(pairs[1]).max(pairs[2]),
            value_std,
            chroma_std,
        }
    }

    #[test]
    fn wide_spread_is_complementary() {
        assert_eq!(classify(&metrics([160., 40., 120.], 0.2, 0.2)),
                   HarmonyType::Complementary);
    }

    #[test]
    fn tight_cluster_is_analogous() {
        assert_eq!(classify(&metrics([18., 5., 23.], 0.2, 0.2)),
                   HarmonyType::Analogous);
    }

    #[test]
    fn two_triadic_legs_are_triadic() {
        assert_eq!(classify(&metrics([120., 115., 10.], 0.2, 0.2)),
                   HarmonyType::Triadic);
        // One leg in the band is not enough.
        assert_eq!(classify(&metrics([120., 60., 60.], 0.2, 0.2)),
                   HarmonyType::Balanced);
    }

    #[test]
    fn rule_order_prefers_complementary_over_triadic() {
        // Hues 0/155/255: max spread 155 and two legs (105, 100) in
        // the triadic band; the earlier rule must win.
        let m = metrics([155., 105., 100.], 0.2, 0.2);
        assert_eq!(classify(&m), HarmonyType::Complementary);
    }

    #[test]
    fn band_edges_count_as_triadic_legs() {
        assert_eq!(classify(&metrics([100., 140., 40.], 0.2, 0.2)),
                   HarmonyType::Triadic);
        assert_eq!(classify(&metrics([99.9, 140.1, 40.], 0.2, 0.2)),
                   HarmonyType::Balanced);
    }

    #[test]
    fn perfect_targets_score_ten() {
        let s = HarmonyScores::rate(&metrics([180., 0., 0.], 0.18, 0.2));
        assert_eq!((s.complementary, s.value, s.chroma), (10., 10., 10.));
    }

    #[test]
    fn zero_spread_scores_zero() {
        let s = HarmonyScores::rate(&metrics([0., 0., 0.], 0., 0.));
        assert_eq!((s.complementary, s.value, s.chroma), (0., 0., 0.));
    }

    #[test]
    fn scores_are_clamped() {
        // 0.6 lightness spread overshoots the target by far more than
        // ten points' worth.
        let s = HarmonyScores::rate(&metrics([0., 0., 0.], 0.6, 0.55));
        assert_eq!(s.value, 0.);
        assert_eq!(s.chroma, 0.);
    }

    #[test]
    fn scores_round_to_one_decimal() {
        // max_diff 159 → 10 - 21/18 = 8.8333… → 8.8.
        let s = HarmonyScores::rate(&metrics([159., 10., 10.], 0.18, 0.2));
        assert_eq!(s.complementary, 8.8);
    }

    #[test]
    fn penalty_is_symmetric_around_target() {
        let flat = HarmonyScores::rate(&metrics([0., 0., 0.], 0.13, 0.2));
        let wide = HarmonyScores::rate(&metrics([0., 0., 0.], 0.23, 0.2));
        assert_eq!(flat.value, wide.value);
    }
}
