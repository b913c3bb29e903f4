//! The single mutable game state owned by a session.
//!
//! [`GameState`] is plain data: every rule that changes it lives in the
//! sibling modules as `impl GameState` blocks, so the whole engine can be
//! exercised in tests without any I/O. It serializes wholesale into the
//! save snapshot.

use std::collections::{BTreeMap, BTreeSet};

use alchemy_types::{
    Achievement, CompanionRequest, ElementId, InventoryEntry, Mood, PlayerId, RequestReward,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::companion::mood_for;
use crate::config::BalanceConfig;

/// Upper bound for loyalty and trust.
pub const AFFINITY_MAX: u32 = 100;

/// Default player name.
pub const DEFAULT_PLAYER_NAME: &str = "Alchemist";

/// Companion affinity block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionState {
    /// Loyalty, 0..=100.
    pub loyalty: u32,
    /// Trust, 0..=100.
    pub trust: u32,
    /// Cached mood derived from loyalty and trust.
    pub mood: Mood,
    /// Successful conversations so far.
    pub conversation_count: u32,
    /// The request currently on offer, if any.
    pub current_request: Option<CompanionRequest>,
    /// Reward tags of completed requests, oldest first.
    pub completed_requests: Vec<RequestReward>,
}

/// Lifetime counters shown on the status screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerStats {
    /// Craft attempts that reached the resolver.
    pub total_crafts: u64,
    /// Crafts that produced an element.
    pub successful_crafts: u64,
    /// Crafts that matched no recipe.
    pub failed_crafts: u64,
    /// Elements discovered.
    pub elements_discovered: u64,
    /// Coins earned from every source.
    pub coins_earned: u64,
    /// Coins spent in the shop.
    pub coins_spent: u64,
    /// Successful companion conversations.
    pub conversations: u64,
    /// Treats fed to the companion.
    pub treats_given: u64,
}

/// Everything that is saved for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    /// Stable player identifier.
    pub player_id: PlayerId,
    /// Display name.
    pub player_name: String,
    /// Current level, at least 1.
    pub level: u32,
    /// Experience towards the next level.
    pub exp: u64,
    /// Experience needed to leave the current level.
    pub exp_to_next: u64,
    /// Coins held.
    pub coins: u64,
    /// Meat treats held.
    pub meat: u32,
    /// Bone treats held.
    pub bones: u32,
    /// Companion affinity.
    pub companion: CompanionState,
    /// Inventory keyed by element id.
    pub elements: BTreeMap<ElementId, InventoryEntry>,
    /// Unlocked milestones.
    pub achievements: BTreeSet<Achievement>,
    /// Lifetime counters.
    pub stats: PlayerStats,
    /// Date the daily bonus was last claimed.
    pub last_daily_bonus: Option<NaiveDate>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME, &BalanceConfig::default())
    }
}

impl GameState {
    /// Create a fresh game with the configured starting allocation.
    pub fn new(player_name: &str, balance: &BalanceConfig) -> Self {
        let start = &balance.start;
        let level = start.level.max(1);
        let loyalty = start.loyalty.min(AFFINITY_MAX);
        let trust = start.trust.min(AFFINITY_MAX);
        let elements: BTreeMap<ElementId, InventoryEntry> = start
            .elements
            .iter()
            .map(|(id, count)| (id.clone(), InventoryEntry::discovered(*count)))
            .collect();
        let discovered = u64::try_from(elements.len()).unwrap_or(u64::MAX);

        Self {
            player_id: PlayerId::new(),
            player_name: player_name.to_owned(),
            level,
            exp: 0,
            exp_to_next: balance.leveling.exp_to_next(level),
            coins: start.coins,
            meat: start.meat,
            bones: start.bones,
            companion: CompanionState {
                loyalty,
                trust,
                mood: mood_for(loyalty, trust, &balance.companion),
                ..CompanionState::default()
            },
            elements,
            achievements: BTreeSet::new(),
            stats: PlayerStats {
                elements_discovered: discovered,
                ..PlayerStats::default()
            },
            last_daily_bonus: None,
        }
    }

    /// Replace the whole state with a fresh game for the same player.
    pub fn reset(&mut self, balance: &BalanceConfig) {
        let player_id = self.player_id;
        let name = core::mem::take(&mut self.player_name);
        *self = Self::new(&name, balance);
        self.player_id = player_id;
        info!(player = %player_id, "game reset");
    }

    /// Number of elements ever discovered.
    pub fn discovered_count(&self) -> usize {
        self.elements.values().filter(|e| e.discovered).count()
    }

    /// Units of an element currently held.
    pub fn count_of(&self, id: &str) -> u32 {
        self.elements.get(id).map_or(0, |e| e.count)
    }

    /// Whether an element has ever been discovered.
    pub fn is_discovered(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.discovered)
    }

    /// Bring a loaded state back within its invariants.
    ///
    /// Clamps affinity to `0..=100`, enforces `level >= 1`, recomputes the
    /// experience threshold for the level, keeps `exp` below it without
    /// granting level-ups, refreshes the cached mood, and restores the
    /// starting allocation when no starting element has a positive count.
    /// Returns `true` when anything changed.
    pub fn repair(&mut self, balance: &BalanceConfig) -> bool {
        let before = self.clone();

        self.companion.loyalty = self.companion.loyalty.min(AFFINITY_MAX);
        self.companion.trust = self.companion.trust.min(AFFINITY_MAX);
        self.level = self.level.max(1);
        self.exp_to_next = balance.leveling.exp_to_next(self.level);
        self.exp = self.exp.min(self.exp_to_next.saturating_sub(1));
        self.companion.mood = mood_for(
            self.companion.loyalty,
            self.companion.trust,
            &balance.companion,
        );

        let has_starter = balance
            .start
            .elements
            .keys()
            .any(|id| self.count_of(id.as_str()) > 0);
        if !has_starter {
            warn!(player = %self.player_id, "no starting elements left, restoring allocation");
            for (id, count) in &balance.start.elements {
                let entry = self.elements.entry(id.clone()).or_default();
                entry.count = entry.count.max(*count);
                entry.discovered = true;
            }
        }

        let discovered = u64::try_from(self.discovered_count()).unwrap_or(u64::MAX);
        self.stats.elements_discovered = self.stats.elements_discovered.max(discovered);

        *self != before
    }

    /// Recompute the cached mood after an affinity change.
    pub(crate) fn refresh_mood(&mut self, balance: &BalanceConfig) -> Mood {
        self.companion.mood = mood_for(
            self.companion.loyalty,
            self.companion.trust,
            &balance.companion,
        );
        self.companion.mood
    }

    /// Add coins, tracking lifetime earnings.
    pub(crate) fn earn_coins(&mut self, amount: u64) {
        self.coins = self.coins.saturating_add(amount);
        self.stats.coins_earned = self.stats.coins_earned.saturating_add(amount);
    }
}
