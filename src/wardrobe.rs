//! Saved-outfit storage.
//!
//! The harmony engine never reads or writes this store.  It exists so
//! callers that keep outfits around depend on a capability
//! ([`WardrobeStore`]) instead of process-wide state, and stay
//! testable in isolation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palettes::Mood;
use crate::{evaluate, HarmonyReport};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WardrobeError {
    #[error("outfit name must not be empty")]
    EmptyName,
    #[error("no outfit with id {0}")]
    NotFound(u64),
}

/// A saved outfit.
///
/// Colors are kept as the hex strings the user picked; HSL is derived
/// per evaluation and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: u64,
    pub name: String,
    pub mood: Mood,
    pub top_color: String,
    pub bottom_color: String,
    pub shoes_color: String,
    pub is_favorite: bool,
}

impl Outfit {
    /// Evaluate this outfit's colors.
    pub fn report(&self) -> HarmonyReport {
        evaluate(&self.top_color, &self.bottom_color, &self.shoes_color)
    }
}

/// Boundary shape for a save request.
///
/// Optional fields carry documented defaults here instead of being
/// destructured ad hoc at each call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOutfit {
    pub name: String,
    /// Defaults to [`Mood::Minimal`] when absent.
    #[serde(default)]
    pub mood: Mood,
    pub top_color: String,
    pub bottom_color: String,
    pub shoes_color: String,
}

/// A keyed outfit collection with monotonic identifiers.
pub trait WardrobeStore {
    /// Persist a new outfit and return it with its assigned id.
    ///
    /// The name must contain something other than whitespace.  Color
    /// strings are deliberately not validated: malformed hex degrades
    /// to white at evaluation time.
    fn save(&mut self, outfit: NewOutfit) -> Result<Outfit, WardrobeError>;

    /// All saved outfits, newest first.
    fn list(&self) -> Vec<&Outfit>;

    /// Remove an outfit.
    fn delete_by_id(&mut self, id: u64) -> Result<(), WardrobeError>;

    /// Flip the favorite flag; returns the new state.
    fn toggle_favorite(&mut self, id: u64) -> Result<bool, WardrobeError>;
}

/// In-process [`WardrobeStore`] backed by a plain vector.
#[derive(Debug, Default)]
pub struct MemoryWardrobe {
    outfits: Vec<Outfit>,
    next_id: u64,
}

impl MemoryWardrobe {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WardrobeStore for MemoryWardrobe {
    fn save(&mut self, outfit: NewOutfit) -> Result<Outfit, WardrobeError> {
        let name = outfit.name.trim();
        if name.is_empty() {
            return Err(WardrobeError::EmptyName);
        }
        self.next_id += 1;
        let saved = Outfit {
            id: self.next_id,
            name: name.to_string(),
            mood: outfit.mood,
            top_color: outfit.top_color,
            bottom_color: outfit.bottom_color,
            shoes_color: outfit.shoes_color,
            is_favorite: false,
        };
        self.outfits.push(saved.clone());
        Ok(saved)
    }

    fn list(&self) -> Vec<&Outfit> {
        // Ids are monotonic, so reverse insertion order is newest first.
        self.outfits.iter().rev().collect()
    }

    fn delete_by_id(&mut self, id: u64) -> Result<(), WardrobeError> {
        let pos = self.outfits.iter().position(|o| o.id == id)
            .ok_or(WardrobeError::NotFound(id))?;
        self.outfits.remove(pos);
        Ok(())
    }

    fn toggle_favorite(&mut self, id: u64) -> Result<bool, WardrobeError> {
        let outfit = self.outfits.iter_mut().find(|o| o.id == id)
            .ok_or(WardrobeError::NotFound(id))?;
        outfit.is_favorite = !outfit.is_favorite;
        Ok(outfit.is_favorite)
    }
}
