//! Plain-text rendering of outcomes for the terminal.
//!
//! Pure functions from session data to strings. Element names follow the
//! session language; everything else is English.

use std::fmt::Write as _;

use alchemy_catalog::ElementCatalog;
use alchemy_game::GameError;
use alchemy_types::{
    Achievement, AchievementKind, CompanionRequest, ConversationApplied, Crafted, DailyBonus, ElementId, Language,
    Mood, Progress, Purchased, Relationship, RequestCompleted, ShopItem, TreatGiven,
};

use crate::session::Session;

/// Leaderboard titles by minimum level, highest first.
const TITLES: &[(u32, &str)] = &[
    (25, "Lord of Absurdity"),
    (20, "Chaos Master"),
    (15, "Element Tamer"),
    (10, "Mad Scientist"),
    (5, "Dobby's Friend"),
    (1, "Beginner Alchemist"),
];

/// Title shown next to a player's level.
pub fn title_for(level: u32) -> &'static str {
    TITLES
        .iter()
        .find(|(min, _)| level >= *min)
        .map_or("Beginner Alchemist", |(_, title)| title)
}

const fn mood_icon(mood: Mood) -> &'static str {
    match mood {
        Mood::Loving => "🥰",
        Mood::Happy => "😊",
        Mood::Neutral => "😐",
        Mood::Angry => "😠",
    }
}

const fn relationship_label(relationship: Relationship) -> &'static str {
    match relationship {
        Relationship::Strangers => "strangers",
        Relationship::Acquaintances => "acquaintances",
        Relationship::Friends => "friends",
        Relationship::GoodFriends => "good friends",
        Relationship::BestFriends => "best friends",
    }
}

fn named(catalog: &ElementCatalog, id: &ElementId, lang: Language) -> String {
    format!("{} {}", catalog.icon(id.as_str()), catalog.display_name(id.as_str(), lang))
}

fn item_name(session: &Session, item: &ShopItem) -> String {
    match item {
        ShopItem::Element(id) => named(session.reference().catalog(), id, session.language()),
        ShopItem::Treat(kind) => kind.as_str().to_owned(),
    }
}

fn achievement_name(achievement: Achievement) -> String {
    let what = match achievement.kind() {
        AchievementKind::Discovery => "elements discovered",
        AchievementKind::Level => "level reached",
        AchievementKind::Crafts => "successful crafts",
    };
    format!("{} {what}", achievement.threshold())
}

/// Level-ups and achievements, one per line.
pub fn progress(progress: &Progress) -> String {
    let mut out = String::new();
    for up in &progress.level_ups {
        let _ = writeln!(
            out,
            "🎉 Level {}! +{} 🍖 +{} 🦴 +{} 🪙",
            up.level, up.meat, up.bones, up.coins
        );
    }
    for unlocked in &progress.achievements {
        let _ = writeln!(
            out,
            "🏆 Achievement: {}! +{} 🪙 +{} exp",
            achievement_name(unlocked.achievement),
            unlocked.coins,
            unlocked.exp
        );
    }
    out
}

/// Greeting shown when the session starts.
pub fn greeting(session: &Session) -> String {
    let state = session.state();
    if state.companion.conversation_count == 0 {
        format!(
            "Woof! Hello, {}! I'm Dobby, the craziest alchemist dog in the universe! 🐕\n\
             I know recipes that would make ordinary alchemists dizzy. \
             But first I need to know if I can trust you...",
            state.player_name
        )
    } else {
        format!("Woof! {}, you're back! I missed you! 🐕", state.player_name)
    }
}

/// A successful craft.
pub fn crafted(session: &Session, crafted: &Crafted) -> String {
    let name = named(session.reference().catalog(), &crafted.result, session.language());
    let mut out = if crafted.first_discovery {
        format!("✨ New element discovered: {name}! ✨\n")
    } else {
        format!("✨ Created: {name} ✨\n")
    };
    let _ = writeln!(out, "+{} exp +{} 🪙", crafted.exp_gained, crafted.coins_gained);
    out.push_str(&progress(&crafted.progress));
    out
}

/// A purchase.
pub fn purchased(session: &Session, purchased: &Purchased) -> String {
    let mut out = format!(
        "Purchased: {} for {} 🪙\n",
        item_name(session, &purchased.item),
        purchased.price
    );
    if purchased.first_discovery {
        out.push_str("✨ New element discovered! ✨\n");
    }
    out.push_str(&progress(&purchased.progress));
    out
}

/// A treat fed to the companion.
pub fn treat_given(given: &TreatGiven) -> String {
    format!(
        "Dobby munches the {} {} +{} loyalty +{} trust",
        given.kind.as_str(),
        mood_icon(given.mood),
        given.loyalty_gained,
        given.trust_gained
    )
}

/// The companion's current request.
pub fn request(session: &Session, request: &CompanionRequest) -> String {
    let catalog = session.reference().catalog();
    let lang = session.language();
    let needs = request
        .need
        .iter()
        .map(|(id, n)| format!("{n} × {}", named(catalog, id, lang)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("🐕 {}\n   needs: {needs}  (type `give`)", request.text.get(lang))
}

/// A fulfilled request.
pub fn request_completed(session: &Session, completed: &RequestCompleted) -> String {
    format!(
        "🐕 Woof! Thank you! +{} trust +{} loyalty {}\n{}",
        completed.trust_gained,
        completed.loyalty_gained,
        mood_icon(completed.mood),
        session.describe_hint(&completed.hint)
    )
}

/// The daily bonus.
pub fn daily_bonus(bonus: &DailyBonus) -> String {
    format!(
        "🎁 Daily bonus: +{} 🪙 +{} 🍖 +{} 🦴",
        bonus.coins, bonus.meat, bonus.bones
    )
}

/// A companion reply that was applied.
pub fn conversation(applied: &ConversationApplied) -> String {
    format!(
        "🐕 {}\n   (+{} trust {})",
        applied.reply,
        applied.trust_gained,
        mood_icon(applied.mood)
    )
}

/// A failed intent.
pub fn game_error(session: &Session, error: &GameError) -> String {
    let catalog = session.reference().catalog();
    let lang = session.language();
    match error {
        GameError::NoMatchingRecipe { .. } => {
            "❌ This combination doesn't work... Maybe Dobby knows the secret?".to_owned()
        }
        GameError::IngredientUnavailable {
            element,
            requested,
            available,
        } => format!(
            "❌ Not enough {}: need {requested}, have {available}",
            named(catalog, element, lang)
        ),
        GameError::RequestUnfulfillable {
            element,
            needed,
            available,
        } => format!(
            "❌ Dobby wants {needed} × {}, you have {available}",
            named(catalog, element, lang)
        ),
        GameError::InsufficientFunds { price, available } => {
            format!("❌ Not enough coins: costs {price} 🪙, you have {available}")
        }
        other => format!("❌ {other}"),
    }
}

/// Level, coins, treats, and companion affinity.
pub fn status(session: &Session) -> String {
    let state = session.state();
    let companion = &state.companion;
    format!(
        "{} · level {} ({})\n\
         exp {}/{} · {} 🪙 · {} 🍖 · {} 🦴\n\
         Dobby {} loyalty {}/100 · trust {}/100 · {}\n\
         discovered {} elements · {} crafts",
        state.player_name,
        state.level,
        title_for(state.level),
        state.exp,
        state.exp_to_next,
        state.coins,
        state.meat,
        state.bones,
        mood_icon(companion.mood),
        companion.loyalty,
        companion.trust,
        relationship_label(state.relationship()),
        state.discovered_count(),
        state.stats.successful_crafts
    )
}

/// Held elements, one per line.
pub fn inventory(session: &Session) -> String {
    let catalog = session.reference().catalog();
    let lang = session.language();
    let lines: Vec<String> = session
        .state()
        .elements
        .iter()
        .filter(|(_, entry)| entry.discovered)
        .map(|(id, entry)| format!("{:>4} × {} ({id})", entry.count, named(catalog, id, lang)))
        .collect();
    if lines.is_empty() {
        "(empty)".to_owned()
    } else {
        lines.join("\n")
    }
}

/// The shop list.
pub fn shop(session: &Session) -> String {
    session
        .shop_items()
        .iter()
        .map(|(item, price)| {
            let key = match item {
                ShopItem::Element(id) => id.as_str(),
                ShopItem::Treat(kind) => kind.as_str(),
            };
            format!("{price:>5} 🪙  {} ({key})", item_name(session, item))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The leaderboard.
pub fn leaderboard(session: &Session) -> String {
    let rows: Vec<String> = session
        .leaderboard()
        .entries()
        .iter()
        .zip(1_u32..)
        .map(|(entry, rank)| {
            format!(
                "{rank:>3}. {} · level {} ({}) · {} elements",
                entry.name,
                entry.level,
                title_for(entry.level),
                entry.discovered
            )
        })
        .collect();
    if rows.is_empty() {
        "🏆 No entries yet. Level up to get on the board!".to_owned()
    } else {
        format!("🏆 Leaderboard\n{}", rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use alchemy_types::{AchievementUnlocked, LevelUp};

    use super::*;

    #[test]
    fn titles_follow_levels() {
        assert_eq!(title_for(0), "Beginner Alchemist");
        assert_eq!(title_for(4), "Beginner Alchemist");
        assert_eq!(title_for(5), "Dobby's Friend");
        assert_eq!(title_for(19), "Element Tamer");
        assert_eq!(title_for(99), "Lord of Absurdity");
    }

    #[test]
    fn progress_lists_every_event_in_order() {
        let progress = Progress {
            level_ups: vec![
                LevelUp { level: 2, coins: 30, meat: 1, bones: 3 },
                LevelUp { level: 3, coins: 45, meat: 2, bones: 3 },
            ],
            achievements: vec![AchievementUnlocked {
                achievement: Achievement::DISCOVERY[0],
                coins: 100,
                exp: 50,
            }],
        };
        let text = super::progress(&progress);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.first().is_some_and(|l| l.contains("Level 2")));
        assert!(lines.get(1).is_some_and(|l| l.contains("Level 3")));
        assert!(lines.get(2).is_some_and(|l| l.contains("10 elements discovered")));
    }
}
