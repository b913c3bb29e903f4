//! Shared type definitions for the Alchemy idle game.
//!
//! This crate is the single source of truth for the records exchanged
//! between the game engine, the persistence adapter, the companion client,
//! and the browser presentation layer. Types flow to `TypeScript` via
//! `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- [`PlayerId`] and [`ElementId`] wrappers
//! - [`enums`] -- Closed enumerations (category, treat, mood, achievement, ...)
//! - [`structs`] -- Elements, recipes, inventory entries, companion requests
//! - [`outcomes`] -- Records returned by game operations

pub mod enums;
pub mod ids;
pub mod outcomes;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Achievement, AchievementKind, Category, Language, Mood, Relationship, RequestReward,
    TreatKind, TrustTier,
};
pub use ids::{ElementId, PlayerId};
pub use outcomes::{
    AchievementUnlocked, ConversationApplied, Crafted, DailyBonus, Hint, LevelUp, Progress,
    Purchased, RequestCompleted, ShopItem, TreatGiven,
};
pub use structs::{
    CompanionRequest, Element, InventoryEntry, LocalizedText, Recipe, signature_of,
};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::PlayerId::export_all();
        let _ = crate::ids::ElementId::export_all();

        // Enums
        let _ = crate::enums::Category::export_all();
        let _ = crate::enums::TreatKind::export_all();
        let _ = crate::enums::Mood::export_all();
        let _ = crate::enums::Relationship::export_all();
        let _ = crate::enums::TrustTier::export_all();
        let _ = crate::enums::Language::export_all();
        let _ = crate::enums::RequestReward::export_all();
        let _ = crate::enums::AchievementKind::export_all();
        let _ = crate::enums::Achievement::export_all();

        // Structs
        let _ = crate::structs::LocalizedText::export_all();
        let _ = crate::structs::Element::export_all();
        let _ = crate::structs::Recipe::export_all();
        let _ = crate::structs::InventoryEntry::export_all();
        let _ = crate::structs::CompanionRequest::export_all();

        // Outcomes
        let _ = crate::outcomes::LevelUp::export_all();
        let _ = crate::outcomes::AchievementUnlocked::export_all();
        let _ = crate::outcomes::Progress::export_all();
        let _ = crate::outcomes::Crafted::export_all();
        let _ = crate::outcomes::ShopItem::export_all();
        let _ = crate::outcomes::Purchased::export_all();
        let _ = crate::outcomes::TreatGiven::export_all();
        let _ = crate::outcomes::Hint::export_all();
        let _ = crate::outcomes::RequestCompleted::export_all();
        let _ = crate::outcomes::DailyBonus::export_all();
        let _ = crate::outcomes::ConversationApplied::export_all();
    }
}
