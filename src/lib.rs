//! Color harmony scoring for outfit coordination.
//!
//! Given the hex colors of a top, a bottom and a pair of shoes,
//! [`evaluate`] produces a [`HarmonyReport`]: a harmony category, three
//! normalized quality scores and the garments that read as neutral.
//! The report is a pure function of the three inputs.  It keeps no
//! state and does no I/O, so it is safe to recompute on every color
//! pick.
//!
//! ```
//! use outfit_harmony::{evaluate, HarmonyType};
//!
//! let report = evaluate("#0000ff", "#ffa500", "#ffffff");
//! assert_eq!(report.harmony, HarmonyType::Complementary);
//! assert!(report.complementary_score > 8.);
//! ```
//!
//! Suggested swatches per styling mood live in [`Mood`]; saved outfits
//! go through the [`WardrobeStore`] capability.

use serde::{Deserialize, Serialize};
use std::fmt;

mod color;
mod harmony;
mod metrics;
mod palettes;
mod wardrobe;

pub use color::{css_hex, parse_hex, to_hsl, Hsl};
pub use harmony::{classify, HarmonyScores, HarmonyType};
pub use metrics::{hue_diff, PaletteMetrics};
pub use palettes::Mood;
pub use wardrobe::{MemoryWardrobe, NewOutfit, Outfit, WardrobeError,
                   WardrobeStore};

/// Saturation below which a garment reads as neutral.
pub const NEUTRAL_SATURATION: f64 = 0.12;

/// Garment slot in the outfit triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentSlot {
    Top,
    Bottom,
    Shoes,
}

impl GarmentSlot {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }
}

impl fmt::Display for GarmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The engine's output.
///
/// A pure function of the three input colors; evaluating the same
/// colors again always yields an equal report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonyReport {
    /// Detected hue relationship.
    pub harmony: HarmonyType,
    /// Closeness of the hue spread to complementary contrast, 0–10.
    pub complementary_score: f64,
    /// Closeness of the lightness spread to its target, 0–10.
    pub value_score: f64,
    /// Closeness of the saturation spread to its target, 0–10.
    pub chroma_score: f64,
    /// Garments whose saturation is below [`NEUTRAL_SATURATION`].
    pub neutral_parts: Vec<GarmentSlot>,
    /// Fixed description for the harmony type.
    pub description: &'static str,
}

/// Evaluate an outfit's three colors.
///
/// Total over any string input: malformed hex silently degrades to
/// white in the converter, so a half-typed color never fails the
/// evaluation (see [`parse_hex`]).
pub fn evaluate(top_hex: &str, bottom_hex: &str, shoes_hex: &str)
                -> HarmonyReport {
    let top = to_hsl(parse_hex(top_hex));
    let bottom = to_hsl(parse_hex(bottom_hex));
    let shoes = to_hsl(parse_hex(shoes_hex));

    let metrics = PaletteMetrics::measure(top, bottom, shoes);
    let scores = HarmonyScores::rate(&metrics);

    let neutral_parts: Vec<GarmentSlot> =
        [(GarmentSlot::Top, top.s),
         (GarmentSlot::Bottom, bottom.s),
         (GarmentSlot::Shoes, shoes.s)]
        .into_iter()
        .filter(|&(_, s)| s < NEUTRAL_SATURATION)
        .map(|(slot, _)| slot)
        .collect();

    // A fully neutral outfit has no meaningful hue relationship: the
    // rule table would read its identical fallback hues as analogous.
    let harmony = if neutral_parts.len() == 3 {
        HarmonyType::Balanced
    } else {
        classify(&metrics)
    };

    HarmonyReport {
        harmony,
        complementary_score: scores.complementary,
        value_score: scores.value,
        chroma_score: scores.chroma,
        neutral_parts,
        description: harmony.description(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_orange_white_is_complementary() {
        // Blue top against an orange bottom: hue distance ≈ 180°.
        let report = evaluate("#0000ff", "#ffa500", "#ffffff");
        assert_eq!(report.harmony, HarmonyType::Complementary);
        assert!(report.complementary_score >= 8.5,
                "score {}", report.complementary_score);
        assert_eq!(report.neutral_parts, [GarmentSlot::Shoes]);
    }

    #[test]
    fn warm_hues_are_analogous() {
        let report = evaluate("#fbbf24", "#f97316", "#fef3c7");
        assert_eq!(report.harmony, HarmonyType::Analogous);
        assert!(report.neutral_parts.is_empty());
    }

    #[test]
    fn all_white_is_balanced_and_fully_neutral() {
        let report = evaluate("#ffffff", "#ffffff", "#ffffff");
        assert_eq!(report.harmony, HarmonyType::Balanced);
        assert_eq!(report.neutral_parts,
                   [GarmentSlot::Top, GarmentSlot::Bottom, GarmentSlot::Shoes]);
        // Zero saturation variance scores through the formula, it does
        // not divide by zero: 10 - |0 - 0.2| / 0.2 * 10 = 0.
        assert_eq!(report.chroma_score, 0.);
        assert_eq!(report.value_score, 0.);
    }

    #[test]
    fn malformed_input_degrades_to_white() {
        let report = evaluate("", "#000", "#fff");
        // The empty top falls back to white: everything is neutral.
        assert_eq!(report.neutral_parts.len(), 3);
        assert_eq!(report.harmony, HarmonyType::Balanced);
        assert_eq!(report, evaluate("#ffffff", "#000000", "#ffffff"));
    }

    #[test]
    fn triadic_spacing_is_detected() {
        // Red / green / blue: pairwise distances 120° each.
        let report = evaluate("#ff0000", "#00ff00", "#0000ff");
        assert_eq!(report.harmony, HarmonyType::Triadic);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let a = evaluate("#1d4ed8", "#f97316", "#e5e7eb");
        let b = evaluate("#1d4ed8", "#f97316", "#e5e7eb");
        assert_eq!(a, b);
    }

    #[test]
    fn description_follows_harmony_type() {
        let report = evaluate("#0000ff", "#ffa500", "#ffffff");
        assert_eq!(report.description,
                   HarmonyType::Complementary.description());
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = evaluate("#0000ff", "#ffa500", "#ffffff");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["harmony"], "complementary");
        assert_eq!(json["neutralParts"][0], "shoes");
        assert!(json["complementaryScore"].is_number());
        assert!(json["valueScore"].is_number());
        assert!(json["chromaScore"].is_number());
    }

    #[test]
    fn scores_stay_in_range_across_palettes() {
        for mood in Mood::ALL {
            let swatches = mood.palette();
            for top in swatches {
                for bottom in swatches {
                    let report = evaluate(&css_hex(*top), &css_hex(*bottom),
                                          &css_hex(swatches[0]));
                    for score in [report.complementary_score,
                                  report.value_score,
                                  report.chroma_score] {
                        assert!((0. ..= 10.).contains(&score),
                                "{mood}: {score}");
                        // One decimal place.
                        assert_eq!(score, (score * 10.).round() / 10.);
                    }
                }
            }
        }
    }
}
