//! Outcome records returned by game operations.
//!
//! Operations never render anything themselves. They return one of these
//! records (inside `Ok`) and the presentation layer decides how to show
//! the deltas. Level-ups and achievements are collected in order in a
//! [`Progress`] so several notifications from one action can be replayed
//! one after another.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Achievement, Mood, RequestReward, TreatKind, TrustTier};
use crate::ids::ElementId;

// ---------------------------------------------------------------------------
// Progression events
// ---------------------------------------------------------------------------

/// One level gained, with the rewards granted for reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LevelUp {
    /// The level just reached.
    pub level: u32,
    /// Coins granted.
    pub coins: u64,
    /// Meat granted.
    pub meat: u32,
    /// Bones granted.
    pub bones: u32,
}

/// A milestone unlocked for the first time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AchievementUnlocked {
    /// The milestone.
    pub achievement: Achievement,
    /// One-time coin bonus.
    pub coins: u64,
    /// One-time experience bonus.
    pub exp: u64,
}

/// Ordered progression events produced by a single action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Progress {
    /// Level-ups in the order they happened.
    pub level_ups: Vec<LevelUp>,
    /// Achievements in the order they unlocked.
    pub achievements: Vec<AchievementUnlocked>,
}

impl Progress {
    /// Append everything from `other`, preserving order.
    pub fn absorb(&mut self, other: Self) {
        self.level_ups.extend(other.level_ups);
        self.achievements.extend(other.achievements);
    }

    /// Whether nothing happened.
    pub fn is_empty(&self) -> bool {
        self.level_ups.is_empty() && self.achievements.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Action outcomes
// ---------------------------------------------------------------------------

/// A successful craft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Crafted {
    /// The element produced.
    pub result: ElementId,
    /// Whether this craft discovered the element.
    pub first_discovery: bool,
    /// Experience granted by the craft itself.
    pub exp_gained: u64,
    /// Coins granted by the craft itself.
    pub coins_gained: u64,
    /// Level-ups and achievements triggered along the way.
    pub progress: Progress,
}

/// Something the shop sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ShopItem {
    /// An element, added to the inventory.
    Element(ElementId),
    /// A companion treat.
    Treat(TreatKind),
}

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Purchased {
    /// What was bought.
    pub item: ShopItem,
    /// Coins spent.
    pub price: u64,
    /// Whether buying it discovered a new element.
    pub first_discovery: bool,
    /// Achievements and level-ups triggered by the discovery.
    pub progress: Progress,
}

/// A treat given to the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TreatGiven {
    /// Which treat.
    pub kind: TreatKind,
    /// Loyalty actually gained after clamping.
    pub loyalty_gained: u32,
    /// Trust actually gained after clamping.
    pub trust_gained: u32,
    /// Mood after the treat.
    pub mood: Mood,
}

/// A recipe hint from the companion.
///
/// A hint never names every ingredient of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Hint {
    /// The companion does not trust the player enough to share.
    Refused {
        /// The element asked about.
        element: ElementId,
    },
    /// The element cannot be crafted.
    NoRecipe {
        /// The element asked about.
        element: ElementId,
    },
    /// Some ingredients revealed.
    Partial {
        /// The element asked about.
        element: ElementId,
        /// Trust tier the hint was generated at.
        tier: TrustTier,
        /// The ingredients revealed, fewer than `arity`.
        revealed: Vec<ElementId>,
        /// Total number of ingredients in the recipe.
        arity: u32,
    },
}

/// A fulfilled companion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RequestCompleted {
    /// The reward tag now recorded in the history.
    pub reward: RequestReward,
    /// Trust gained after clamping.
    pub trust_gained: u32,
    /// Loyalty gained after clamping.
    pub loyalty_gained: u32,
    /// The hint unlocked by the reward.
    pub hint: Hint,
    /// Mood after completion.
    pub mood: Mood,
}

/// The once-per-day login bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DailyBonus {
    /// Coins granted.
    pub coins: u64,
    /// Meat granted.
    pub meat: u32,
    /// Bones granted.
    pub bones: u32,
}

/// A companion reply applied to the game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConversationApplied {
    /// The reply text.
    pub reply: String,
    /// Trust gained after clamping.
    pub trust_gained: u32,
    /// Conversation counter after the reply.
    pub conversation_count: u32,
    /// Mood after the reply.
    pub mood: Mood,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_absorb_preserves_order() {
        let mut first = Progress {
            level_ups: vec![LevelUp { level: 2, coins: 30, meat: 1, bones: 3 }],
            achievements: Vec::new(),
        };
        let second = Progress {
            level_ups: vec![LevelUp { level: 3, coins: 45, meat: 2, bones: 3 }],
            achievements: vec![AchievementUnlocked {
                achievement: Achievement::Discovered10,
                coins: 100,
                exp: 50,
            }],
        };
        first.absorb(second);
        let levels: Vec<u32> = first.level_ups.iter().map(|l| l.level).collect();
        assert_eq!(levels, vec![2, 3]);
        assert_eq!(first.achievements.len(), 1);
        assert!(!first.is_empty());
        assert!(Progress::default().is_empty());
    }
}
