//! Suggested garment palettes per styling mood.

use std::fmt;
use lazy_static::lazy_static;
use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::color::parse_hex;

/// Styling mood attached to an outfit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Achromatic staples for understated looks.
    #[default]
    Minimal,
    /// Dark base with loud accent colors.
    Street,
    /// Warm, friendly everyday colors.
    Casual,
}

fn swatches(hex: &[&str]) -> Vec<RGB8> {
    hex.iter().map(|h| parse_hex(h)).collect()
}

lazy_static! {
    static ref MINIMAL: Vec<RGB8> = swatches(&[
        "#ffffff", "#000000", "#f5f5f5", "#e5e7eb",
        "#d4d4d8", "#a3a3a3", "#52525b", "#0f172a",
    ]);
    static ref STREET: Vec<RGB8> = swatches(&[
        "#000000", "#f97316", "#facc15", "#22c55e",
        "#3b82f6", "#ef4444", "#a855f7", "#eab308",
    ]);
    static ref CASUAL: Vec<RGB8> = swatches(&[
        "#f97316", "#fbbf24", "#34d399", "#38bdf8",
        "#a855f7", "#f472b6", "#64748b", "#0f172a",
    ]);
}

impl Mood {
    /// All moods, in display order.
    pub const ALL: [Mood; 3] = [Self::Minimal, Self::Street, Self::Casual];

    /// Parse a mood label.
    ///
    /// Unknown or empty labels fall back to [`Mood::Minimal`], the
    /// same fail-soft policy the hex parser follows.
    pub fn parse(label: &str) -> Mood {
        match label.trim() {
            "street" => Self::Street,
            "casual" => Self::Casual,
            _ => Self::Minimal,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Street => "Street",
            Self::Casual => "Casual",
        }
    }

    /// Suggested garment swatches for this mood.
    pub fn palette(&self) -> &'static [RGB8] {
        match self {
            Self::Minimal => &MINIMAL,
            Self::Street => &STREET,
            Self::Casual => &CASUAL,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
