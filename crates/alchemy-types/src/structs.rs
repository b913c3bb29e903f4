//! Core records: catalog elements, recipes, inventory entries, and
//! companion requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Category, Language, RequestReward};
use crate::ids::ElementId;

// ---------------------------------------------------------------------------
// Localized text
// ---------------------------------------------------------------------------

/// A short piece of text in every supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LocalizedText {
    /// Russian text.
    pub ru: String,
    /// English text.
    pub en: String,
}

impl LocalizedText {
    /// Build from a Russian and an English string.
    pub fn new(ru: &str, en: &str) -> Self {
        Self {
            ru: ru.to_owned(),
            en: en.to_owned(),
        }
    }

    /// Text in the requested language, falling back to English when the
    /// translation is blank.
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ru if !self.ru.is_empty() => &self.ru,
            _ => &self.en,
        }
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// Catalog metadata for a single element. Immutable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Element {
    /// Unique catalog key.
    pub id: ElementId,
    /// Emoji icon.
    pub icon: String,
    /// Localized display name.
    pub name: LocalizedText,
    /// Category tag.
    pub category: Category,
    /// Optional localized flavor text.
    pub description: Option<LocalizedText>,
    /// Base shop price, if the element is sold directly.
    pub price: Option<u32>,
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// A fixed mapping from an ingredient multiset to a result element.
///
/// `ingredients` is stored in authoring order, but only its multiset
/// matters for matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Recipe {
    /// The element produced.
    pub result: ElementId,
    /// The ingredients consumed, duplicates included.
    pub ingredients: Vec<ElementId>,
}

impl Recipe {
    /// Build a recipe from string keys.
    pub fn new(result: &str, ingredients: &[&str]) -> Self {
        Self {
            result: ElementId::from(result),
            ingredients: ingredients.iter().map(|k| ElementId::from(*k)).collect(),
        }
    }

    /// Number of ingredients, duplicates included.
    pub fn arity(&self) -> usize {
        self.ingredients.len()
    }

    /// Order-independent signature of the ingredient multiset.
    ///
    /// Two ingredient lists are equal as multisets exactly when their
    /// signatures are equal.
    pub fn signature(&self) -> Vec<ElementId> {
        signature_of(&self.ingredients)
    }
}

/// Sorted copy of an ingredient list; the canonical multiset form.
pub fn signature_of(ingredients: &[ElementId]) -> Vec<ElementId> {
    let mut sorted = ingredients.to_vec();
    sorted.sort_unstable();
    sorted
}

// ---------------------------------------------------------------------------
// Inventory
// ---------------------------------------------------------------------------

/// One inventory slot. Entries are never deleted, only zeroed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct InventoryEntry {
    /// Units currently held.
    pub count: u32,
    /// Whether the player has ever obtained this element. Monotonic.
    pub discovered: bool,
}

impl InventoryEntry {
    /// A discovered entry holding `count` units.
    pub const fn discovered(count: u32) -> Self {
        Self {
            count,
            discovered: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Companion request
// ---------------------------------------------------------------------------

/// Something the companion asks for in exchange for a recipe hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CompanionRequest {
    /// What the companion says when asking.
    pub text: LocalizedText,
    /// Elements required, all at once.
    pub need: BTreeMap<ElementId, u32>,
    /// Tag recorded in the completion history.
    pub reward: RequestReward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_ignores_order_but_keeps_duplicates() {
        let a = Recipe::new("x", &["water", "fire", "fire"]);
        let b = Recipe::new("y", &["fire", "water", "fire"]);
        let c = Recipe::new("z", &["fire", "water", "water"]);
        assert_eq!(a.signature(), b.signature());
        assert_ne!(a.signature(), c.signature());
        assert_eq!(a.arity(), 3);
    }

    #[test]
    fn localized_text_falls_back_to_english() {
        let text = LocalizedText::new("", "Steam");
        assert_eq!(text.get(Language::Ru), "Steam");
        let text = LocalizedText::new("Пар", "Steam");
        assert_eq!(text.get(Language::Ru), "Пар");
        assert_eq!(text.get(Language::En), "Steam");
    }

    #[test]
    fn inventory_entry_default_is_undiscovered_and_empty() {
        let entry = InventoryEntry::default();
        assert_eq!(entry.count, 0);
        assert!(!entry.discovered);
        assert!(InventoryEntry::discovered(2).discovered);
    }
}
