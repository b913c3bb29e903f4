//! Balance constants and defaults for the game rules.
//!
//! [`BalanceConfig`] bundles every tunable number the engine reads so that
//! callers (the session, tests) can override defaults. The engine loads it
//! from the `balance` section of its YAML config; every field falls back
//! to the default below when absent.

use std::collections::BTreeMap;

use alchemy_types::{
    AchievementKind, CompanionRequest, ElementId, LevelUp, LocalizedText, RequestReward, TreatKind,
};
use serde::{Deserialize, Serialize};

/// Every tunable game constant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Fresh-game allocation.
    pub start: StartConfig,
    /// Craft rewards and ingredient bounds.
    pub craft: CraftConfig,
    /// Experience curve and level-up rewards.
    pub leveling: LevelingConfig,
    /// Milestone reward multipliers.
    pub achievements: AchievementConfig,
    /// Treats, mood thresholds, hints, requests.
    pub companion: CompanionBalance,
    /// Treat prices.
    pub shop: ShopConfig,
    /// Once-per-day bonus.
    pub daily_bonus: DailyBonusConfig,
}

// ---------------------------------------------------------------------------
// Start
// ---------------------------------------------------------------------------

/// Starting values for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// Starting level (default: 1).
    pub level: u32,
    /// Starting coins (default: 50).
    pub coins: u64,
    /// Starting meat (default: 3).
    pub meat: u32,
    /// Starting bones (default: 5).
    pub bones: u32,
    /// Starting loyalty (default: 50).
    pub loyalty: u32,
    /// Starting trust (default: 0).
    pub trust: u32,
    /// Pre-discovered elements and their counts.
    ///
    /// Default: fire, water, earth, air x2; light, darkness x1.
    pub elements: BTreeMap<ElementId, u32>,
}

impl Default for StartConfig {
    fn default() -> Self {
        let elements = [
            ("fire", 2),
            ("water", 2),
            ("earth", 2),
            ("air", 2),
            ("light", 1),
            ("darkness", 1),
        ]
        .into_iter()
        .map(|(id, count)| (ElementId::from(id), count))
        .collect();
        Self {
            level: 1,
            coins: 50,
            meat: 3,
            bones: 5,
            loyalty: 50,
            trust: 0,
            elements,
        }
    }
}

// ---------------------------------------------------------------------------
// Craft
// ---------------------------------------------------------------------------

/// Craft reward tiers and ingredient bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraftConfig {
    /// Minimum ingredients per craft (default: 2).
    pub min_ingredients: usize,
    /// Maximum ingredients per craft (default: 4).
    pub max_ingredients: usize,
    /// Experience for a repeat craft (default: 10).
    pub standard_exp: u64,
    /// Coins for a repeat craft (default: 5).
    pub standard_coins: u64,
    /// Experience for a first discovery (default: 50).
    pub discovery_exp: u64,
    /// Coins for a first discovery (default: 20).
    pub discovery_coins: u64,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            min_ingredients: alchemy_catalog::MIN_INGREDIENTS,
            max_ingredients: alchemy_catalog::MAX_INGREDIENTS,
            standard_exp: 10,
            standard_coins: 5,
            discovery_exp: 50,
            discovery_coins: 20,
        }
    }
}

impl CraftConfig {
    /// `(exp, coins)` for a successful craft.
    pub const fn reward(&self, first_discovery: bool) -> (u64, u64) {
        if first_discovery {
            (self.discovery_exp, self.discovery_coins)
        } else {
            (self.standard_exp, self.standard_coins)
        }
    }
}

// ---------------------------------------------------------------------------
// Leveling
// ---------------------------------------------------------------------------

/// Experience curve and level-up rewards.
///
/// ```text
/// exp_to_next(level) = exp_per_level * level
/// meat(level)        = level / meat_divisor + meat_base
/// bones(level)       = level / bones_divisor + bones_base
/// coins(level)       = coins_per_level * level
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    /// Experience per level in the curve (default: 100).
    pub exp_per_level: u64,
    /// Coins granted per level reached (default: 15).
    pub coins_per_level: u64,
    /// Divisor for the meat reward (default: 3).
    pub meat_divisor: u32,
    /// Flat meat reward (default: 1).
    pub meat_base: u32,
    /// Divisor for the bone reward (default: 2).
    pub bones_divisor: u32,
    /// Flat bone reward (default: 2).
    pub bones_base: u32,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            exp_per_level: 100,
            coins_per_level: 15,
            meat_divisor: 3,
            meat_base: 1,
            bones_divisor: 2,
            bones_base: 2,
        }
    }
}

impl LevelingConfig {
    /// Experience needed to leave `level`. Never zero, never decreasing.
    pub fn exp_to_next(&self, level: u32) -> u64 {
        self.exp_per_level.max(1).saturating_mul(u64::from(level.max(1)))
    }

    /// Rewards for reaching `level`.
    pub fn reward(&self, level: u32) -> LevelUp {
        let meat = level
            .checked_div(self.meat_divisor)
            .unwrap_or(0)
            .saturating_add(self.meat_base);
        let bones = level
            .checked_div(self.bones_divisor)
            .unwrap_or(0)
            .saturating_add(self.bones_base);
        LevelUp {
            level,
            coins: self.coins_per_level.saturating_mul(u64::from(level)),
            meat,
            bones,
        }
    }
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// Per-kind reward multipliers, applied to the milestone threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementConfig {
    /// Discovery milestones (default: 10x coins, 5x exp).
    pub discovery: MilestoneReward,
    /// Level milestones (default: 20x coins).
    pub level: MilestoneReward,
    /// Craft-count milestones (default: 1x coins).
    pub crafts: MilestoneReward,
}

/// Coins and experience per unit of milestone threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneReward {
    /// Coins per threshold unit.
    pub coins_per: u64,
    /// Experience per threshold unit.
    pub exp_per: u64,
}

impl Default for AchievementConfig {
    fn default() -> Self {
        Self {
            discovery: MilestoneReward { coins_per: 10, exp_per: 5 },
            level: MilestoneReward { coins_per: 20, exp_per: 0 },
            crafts: MilestoneReward { coins_per: 1, exp_per: 0 },
        }
    }
}

impl AchievementConfig {
    /// Multipliers for a milestone kind.
    pub const fn for_kind(&self, kind: AchievementKind) -> MilestoneReward {
        match kind {
            AchievementKind::Discovery => self.discovery,
            AchievementKind::Level => self.level,
            AchievementKind::Crafts => self.crafts,
        }
    }
}

// ---------------------------------------------------------------------------
// Companion
// ---------------------------------------------------------------------------

/// Loyalty and trust gained from one treat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatEffect {
    /// Loyalty gained.
    pub loyalty: u32,
    /// Trust gained.
    pub trust: u32,
}

/// Companion affinity rules.
///
/// Mood and relationship thresholds are compared against the average of
/// loyalty and trust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionBalance {
    /// Effect of a meat treat (default: +15 loyalty, +5 trust).
    pub meat: TreatEffect,
    /// Effect of a bone treat (default: +10 loyalty, +3 trust).
    pub bone: TreatEffect,
    /// Trust gained per successful conversation (default: 2).
    pub conversation_trust: u32,
    /// Trust gained per completed request (default: 15).
    pub request_trust: u32,
    /// Loyalty gained per completed request (default: 10).
    pub request_loyalty: u32,
    /// Average at or above which the companion is loving (default: 80).
    pub loving_at: u32,
    /// Average at or above which the companion is happy (default: 60).
    pub happy_at: u32,
    /// Average at or below which the companion is angry (default: 20).
    pub angry_at: u32,
    /// Trust at which the companion names one ingredient (default: 30).
    pub hint_low_at: u32,
    /// Trust at which the companion names two ingredients (default: 60).
    pub hint_medium_at: u32,
    /// Trust at which the companion is fully open (default: 80).
    pub hint_high_at: u32,
    /// Requests the companion picks from.
    pub requests: Vec<CompanionRequest>,
}

impl Default for CompanionBalance {
    fn default() -> Self {
        Self {
            meat: TreatEffect { loyalty: 15, trust: 5 },
            bone: TreatEffect { loyalty: 10, trust: 3 },
            conversation_trust: 2,
            request_trust: 15,
            request_loyalty: 10,
            loving_at: 80,
            happy_at: 60,
            angry_at: 20,
            hint_low_at: 30,
            hint_medium_at: 60,
            hint_high_at: 80,
            requests: default_requests(),
        }
    }
}

impl CompanionBalance {
    /// Effect of one treat.
    pub const fn treat(&self, kind: TreatKind) -> TreatEffect {
        match kind {
            TreatKind::Meat => self.meat,
            TreatKind::Bone => self.bone,
        }
    }
}

fn request(ru: &str, en: &str, need: &[(&str, u32)], reward: RequestReward) -> CompanionRequest {
    CompanionRequest {
        text: LocalizedText::new(ru, en),
        need: need.iter().map(|&(id, n)| (ElementId::from(id), n)).collect(),
        reward,
    }
}

fn default_requests() -> Vec<CompanionRequest> {
    vec![
        request(
            "Принеси мне 2 Огня, и я расскажу секрет Пара!",
            "Bring me 2 Fire, and I'll tell you the secret of Steam!",
            &[("fire", 2)],
            RequestReward::SteamHint,
        ),
        request(
            "Мне нужны 3 Воды для купания! Дашь - расскажу про Лёд!",
            "I need 3 Water for bathing! Give them and I'll tell you about Ice!",
            &[("water", 3)],
            RequestReward::IceHint,
        ),
        request(
            "Хочу Смех! Принеси, и узнаешь про Золото!",
            "I want Laughter! Bring it, and you'll learn about Gold!",
            &[("laugh", 1)],
            RequestReward::GoldHint,
        ),
        request(
            "Дай мне Яйцо, расскажу про драконов!",
            "Give me an Egg, I'll tell you about dragons!",
            &[("egg", 1)],
            RequestReward::DragonHint,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Shop and daily bonus
// ---------------------------------------------------------------------------

/// Treat prices in coins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Price of one meat (default: 10).
    pub meat_price: u64,
    /// Price of one bone (default: 7).
    pub bone_price: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            meat_price: 10,
            bone_price: 7,
        }
    }
}

impl ShopConfig {
    /// Price of one treat.
    pub const fn treat_price(&self, kind: TreatKind) -> u64 {
        match kind {
            TreatKind::Meat => self.meat_price,
            TreatKind::Bone => self.bone_price,
        }
    }
}

/// The once-per-day login bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyBonusConfig {
    /// Coins granted (default: 50).
    pub coins: u64,
    /// Meat granted (default: 2).
    pub meat: u32,
    /// Bones granted (default: 3).
    pub bones: u32,
}

impl Default for DailyBonusConfig {
    fn default() -> Self {
        Self {
            coins: 50,
            meat: 2,
            bones: 3,
        }
    }
}
