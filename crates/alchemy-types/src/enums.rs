//! Enumeration types for the Alchemy game.
//!
//! Every dimension the browser build keyed by free-form strings (element
//! category, treat kind, mood, achievement id, request reward) is a closed
//! enum here. Serialized names match the strings the save format and the
//! presentation layer already use.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ElementId;

// ---------------------------------------------------------------------------
// Element categories
// ---------------------------------------------------------------------------

/// Catalog category of an element, used for grouping and shop pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Category {
    /// The primal elements handed out at the start.
    Basic,
    /// Whimsical purchasable ingredients.
    Absurd,
    /// Simple crafted combinations.
    Craftable,
    /// Metals, stone, and other processed materials.
    Materials,
    /// Living beings.
    Creatures,
    /// Mythical creatures and artifacts.
    Legendary,
    /// Spells and sorcery.
    Magic,
    /// Machines and inventions.
    Technology,
    /// Abstract cosmic entities.
    Cosmic,
}

impl Category {
    /// Shop price multiplier in tenths (`10` means x1.0).
    pub const fn price_multiplier_tenths(self) -> u32 {
        match self {
            Self::Basic | Self::Craftable => 10,
            Self::Materials => 15,
            Self::Absurd => 20,
            Self::Creatures => 30,
            Self::Technology => 35,
            Self::Magic => 40,
            Self::Legendary => 50,
            Self::Cosmic => 100,
        }
    }
}

// ---------------------------------------------------------------------------
// Companion
// ---------------------------------------------------------------------------

/// A consumable treat that can be fed to the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TreatKind {
    /// Meat: the big loyalty boost.
    Meat,
    /// Bone: the cheaper, smaller boost.
    Bone,
}

impl TreatKind {
    /// All treat kinds.
    pub const ALL: [Self; 2] = [Self::Meat, Self::Bone];

    /// Stable lowercase name (`"meat"`, `"bone"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meat => "meat",
            Self::Bone => "bone",
        }
    }
}

impl core::str::FromStr for TreatKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meat" => Ok(Self::Meat),
            "bone" | "bones" => Ok(Self::Bone),
            other => Err(format!("unknown treat kind: {other}")),
        }
    }
}

/// The companion's mood, derived from the loyalty/trust average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Mood {
    /// Average at or above the loving threshold.
    Loving,
    /// Average at or above the happy threshold.
    Happy,
    /// Anything between angry and happy.
    #[default]
    Neutral,
    /// Average at or below the angry threshold.
    Angry,
}

/// Relationship tier between the player and the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Relationship {
    /// Average below 20.
    Strangers,
    /// Average 20..40.
    Acquaintances,
    /// Average 40..60.
    Friends,
    /// Average 60..80.
    GoodFriends,
    /// Average 80 and above.
    BestFriends,
}

/// How much recipe information the companion is willing to share.
///
/// Gated on the trust value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TrustTier {
    /// Shares nothing.
    Closed,
    /// Names a single ingredient.
    Low,
    /// Names up to two ingredients.
    Medium,
    /// Same disclosure as medium; unlocks the most playful replies.
    High,
}

/// Display language for element names and companion replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Language {
    /// Russian.
    Ru,
    /// English.
    #[default]
    En,
}

impl Language {
    /// Human-readable language name used in prompts.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ru => "Russian",
            Self::En => "English",
        }
    }
}

impl core::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" => Ok(Self::Ru),
            "en" => Ok(Self::En),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// The reward tag attached to a companion request.
///
/// Each tag names the element whose recipe the companion hints at once the
/// request is fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum RequestReward {
    /// Hint towards steam.
    SteamHint,
    /// Hint towards ice.
    IceHint,
    /// Hint towards gold.
    GoldHint,
    /// Hint towards the dragon.
    DragonHint,
}

impl RequestReward {
    /// The element this reward hints at.
    pub fn target_element(self) -> ElementId {
        let key = match self {
            Self::SteamHint => "steam",
            Self::IceHint => "ice",
            Self::GoldHint => "gold",
            Self::DragonHint => "dragon",
        };
        ElementId::from(key)
    }
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

/// The counter an achievement milestone is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum AchievementKind {
    /// Number of discovered elements.
    Discovery,
    /// Player level.
    Level,
    /// Number of successful crafts.
    Crafts,
}

impl AchievementKind {
    /// Every kind, in the order a full check runs them.
    pub const ALL: [Self; 3] = [Self::Discovery, Self::Level, Self::Crafts];
}

/// A one-time milestone achievement.
///
/// Variants are declared in ascending threshold order within each kind, so
/// the derived `Ord` matches unlock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Achievement {
    /// 10 elements discovered.
    #[serde(rename = "discovered_10")]
    Discovered10,
    /// 25 elements discovered.
    #[serde(rename = "discovered_25")]
    Discovered25,
    /// 50 elements discovered.
    #[serde(rename = "discovered_50")]
    Discovered50,
    /// 75 elements discovered.
    #[serde(rename = "discovered_75")]
    Discovered75,
    /// 100 elements discovered.
    #[serde(rename = "discovered_100")]
    Discovered100,
    /// Reached level 5.
    #[serde(rename = "level_5")]
    Level5,
    /// Reached level 10.
    #[serde(rename = "level_10")]
    Level10,
    /// Reached level 20.
    #[serde(rename = "level_20")]
    Level20,
    /// Reached level 30.
    #[serde(rename = "level_30")]
    Level30,
    /// Reached level 50.
    #[serde(rename = "level_50")]
    Level50,
    /// 50 successful crafts.
    #[serde(rename = "crafts_50")]
    Crafts50,
    /// 100 successful crafts.
    #[serde(rename = "crafts_100")]
    Crafts100,
    /// 250 successful crafts.
    #[serde(rename = "crafts_250")]
    Crafts250,
    /// 500 successful crafts.
    #[serde(rename = "crafts_500")]
    Crafts500,
    /// 1000 successful crafts.
    #[serde(rename = "crafts_1000")]
    Crafts1000,
}

impl Achievement {
    /// Discovery milestones in ascending threshold order.
    pub const DISCOVERY: [Self; 5] = [
        Self::Discovered10,
        Self::Discovered25,
        Self::Discovered50,
        Self::Discovered75,
        Self::Discovered100,
    ];

    /// Level milestones in ascending threshold order.
    pub const LEVEL: [Self; 5] = [
        Self::Level5,
        Self::Level10,
        Self::Level20,
        Self::Level30,
        Self::Level50,
    ];

    /// Craft-count milestones in ascending threshold order.
    pub const CRAFTS: [Self; 5] = [
        Self::Crafts50,
        Self::Crafts100,
        Self::Crafts250,
        Self::Crafts500,
        Self::Crafts1000,
    ];

    /// The counter this milestone is measured against.
    pub const fn kind(self) -> AchievementKind {
        match self {
            Self::Discovered10
            | Self::Discovered25
            | Self::Discovered50
            | Self::Discovered75
            | Self::Discovered100 => AchievementKind::Discovery,
            Self::Level5 | Self::Level10 | Self::Level20 | Self::Level30 | Self::Level50 => {
                AchievementKind::Level
            }
            Self::Crafts50
            | Self::Crafts100
            | Self::Crafts250
            | Self::Crafts500
            | Self::Crafts1000 => AchievementKind::Crafts,
        }
    }

    /// The counter value at which this milestone unlocks.
    pub const fn threshold(self) -> u32 {
        match self {
            Self::Discovered10 | Self::Level10 => 10,
            Self::Discovered25 => 25,
            Self::Discovered50 | Self::Level50 | Self::Crafts50 => 50,
            Self::Discovered75 => 75,
            Self::Discovered100 | Self::Crafts100 => 100,
            Self::Level5 => 5,
            Self::Level20 => 20,
            Self::Level30 => 30,
            Self::Crafts250 => 250,
            Self::Crafts500 => 500,
            Self::Crafts1000 => 1000,
        }
    }

    /// Milestones of one kind in ascending threshold order.
    pub const fn milestones(kind: AchievementKind) -> &'static [Self] {
        match kind {
            AchievementKind::Discovery => &Self::DISCOVERY,
            AchievementKind::Level => &Self::LEVEL,
            AchievementKind::Crafts => &Self::CRAFTS,
        }
    }
}
