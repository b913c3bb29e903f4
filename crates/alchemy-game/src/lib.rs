//! Game state and the reward & progression engine for the Alchemy idle game.
//!
//! This crate contains every rule that mutates a player's game: crafting,
//! experience and levels, milestone achievements, companion affinity,
//! requests and hints, the shop, and the daily bonus. It performs no I/O.
//! Every operation is a method on [`GameState`] that either applies its
//! whole effect and returns an outcome record, or returns a [`GameError`]
//! and leaves the state as it was.
//!
//! # Modules
//!
//! - [`state`] -- [`GameState`], companion block, lifetime stats, repair
//! - [`config`] -- [`BalanceConfig`]: every tunable constant
//! - [`inventory`] -- Checked add/remove/reserve/refund on the element map
//! - [`crafting`] -- The craft action with refund-on-failure
//! - [`progression`] -- Experience and multi-step leveling
//! - [`achievements`] -- Idempotent milestone unlocking
//! - [`companion`] -- Treats, mood, requests, conversations, hints
//! - [`shop`] -- Purchases and the daily bonus
//! - [`error`] -- [`GameError`]

pub mod achievements;
pub mod companion;
pub mod config;
pub mod crafting;
pub mod error;
pub mod inventory;
pub mod progression;
pub mod shop;
pub mod state;

pub use companion::{hint_at_tier, hint_for, mood_for, relationship_for, trust_tier};
pub use config::{
    AchievementConfig, BalanceConfig, CompanionBalance, CraftConfig, DailyBonusConfig,
    LevelingConfig, MilestoneReward, ShopConfig, StartConfig, TreatEffect,
};
pub use error::GameError;
pub use inventory::Inventory;
pub use state::{AFFINITY_MAX, CompanionState, DEFAULT_PLAYER_NAME, GameState, PlayerStats};
