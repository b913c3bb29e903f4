//! The companion's local voice.
//!
//! Used when no chat API is configured or a call fails. Lines are picked
//! by mood and language, optionally followed by a trust-gated hint for an
//! element the player has not discovered yet. Hints come from the game's
//! hint generator, so the local voice can never reveal more of a recipe
//! than the companion's trust allows.

use alchemy_catalog::{ElementCatalog, RecipeBook};
use alchemy_game::{CompanionBalance, GameState, hint_for};
use alchemy_types::{ElementId, Hint, Language, Mood};
use rand::Rng;

const LOVING_EN: &[&str] = &[
    "Woof woof! *spins in circles* You are my favourite human in the whole multiverse!",
    "*tail wagging so hard the cauldron tips over* Belly rubs first, alchemy later!",
    "Dobby would share his last bone with you. Well. Maybe half.",
];

const HAPPY_EN: &[&str] = &[
    "Woof! *sniffs your pockets* Smells like adventure in there.",
    "*wags tail* Dobby is in a good mood. Ask nicely and the cauldron might listen.",
    "Bark! Did you know clouds taste like nothing? Dobby checked.",
];

const NEUTRAL_EN: &[&str] = &[
    "*tilts head* Hmm. Dobby is thinking. Or napping. Hard to say.",
    "Woof. Treats first, secrets later.",
    "*sniff sniff* Dobby smells... a human who has not brought meat.",
];

const ANGRY_EN: &[&str] = &[
    "Grrrr... Dobby is not pleased. No secrets for you.",
    "*turns away and chews the alchemy book*",
    "Bark! Bark! Go away until you bring a bone.",
];

const LOVING_RU: &[&str] = &[
    "Гав-гав! *кружится на месте* Ты мой любимый человек во всей мультивселенной!",
    "*виляет хвостом так, что котёл переворачивается* Сначала почеши животик, потом алхимия!",
    "Dobby поделился бы с тобой последней косточкой. Ну. Может, половинкой.",
];

const HAPPY_RU: &[&str] = &[
    "Гав! *обнюхивает твои карманы* Пахнет приключениями.",
    "*виляет хвостом* У Dobby хорошее настроение. Попроси вежливо, и котёл послушается.",
    "Гав! А ты знал, что облака ничем не пахнут? Dobby проверял.",
];

const NEUTRAL_RU: &[&str] = &[
    "*наклоняет голову* Хм. Dobby думает. Или дремлет. Сложно сказать.",
    "Гав. Сначала лакомства, потом секреты.",
    "*нюх-нюх* Dobby чует... человека без мяса.",
];

const ANGRY_RU: &[&str] = &[
    "Грррр... Dobby не доволен. Никаких секретов.",
    "*отворачивается и грызёт книгу по алхимии*",
    "Гав! Гав! Уходи, пока не принесёшь косточку.",
];

fn lines(mood: Mood, language: Language) -> &'static [&'static str] {
    match (language, mood) {
        (Language::En, Mood::Loving) => LOVING_EN,
        (Language::En, Mood::Happy) => HAPPY_EN,
        (Language::En, Mood::Neutral) => NEUTRAL_EN,
        (Language::En, Mood::Angry) => ANGRY_EN,
        (Language::Ru, Mood::Loving) => LOVING_RU,
        (Language::Ru, Mood::Happy) => HAPPY_RU,
        (Language::Ru, Mood::Neutral) => NEUTRAL_RU,
        (Language::Ru, Mood::Angry) => ANGRY_RU,
    }
}

/// A random line in the companion's voice for `mood`.
pub fn voice_line(mood: Mood, language: Language, rng: &mut impl Rng) -> &'static str {
    let pool = lines(mood, language);
    let pick = rng.random_range(0..pool.len());
    pool.get(pick).copied().unwrap_or_default()
}

/// Put a hint into words.
pub fn describe_hint(hint: &Hint, catalog: &ElementCatalog, language: Language) -> String {
    match hint {
        Hint::Refused { element } => {
            let name = catalog.display_name(element.as_str(), language);
            match language {
                Language::En => format!("*covers nose with paws* {name}? Dobby does not know you well enough yet."),
                Language::Ru => format!("*закрывает нос лапами* {name}? Dobby тебя ещё плохо знает."),
            }
        }
        Hint::NoRecipe { element } => {
            let name = catalog.display_name(element.as_str(), language);
            match language {
                Language::En => format!("{name}? Nobody can brew that, silly human!"),
                Language::Ru => format!("{name}? Это никто не сварит, глупый человек!"),
            }
        }
        Hint::Partial {
            element,
            revealed,
            arity,
            ..
        } => {
            let name = catalog.display_name(element.as_str(), language);
            let smells = revealed
                .iter()
                .map(|id| catalog.display_name(id.as_str(), language))
                .collect::<Vec<_>>()
                .join(", ");
            let hidden = usize::try_from(*arity)
                .unwrap_or(usize::MAX)
                .saturating_sub(revealed.len());
            match language {
                Language::En => format!(
                    "*sniff sniff* {name} smells of {smells}... and {hidden} more secret thing(s)!"
                ),
                Language::Ru => format!(
                    "*нюх-нюх* {name} пахнет так: {smells}... и ещё {hidden} секрет(а)!"
                ),
            }
        }
    }
}

/// Pick a craftable element the player has not discovered yet.
fn undiscovered_target(
    state: &GameState,
    recipes: &RecipeBook,
    rng: &mut impl Rng,
) -> Option<ElementId> {
    let mut targets: Vec<&ElementId> = recipes
        .iter()
        .map(|r| &r.result)
        .filter(|id| !state.is_discovered(id.as_str()))
        .collect();
    targets.sort();
    targets.dedup();
    if targets.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..targets.len());
    targets.get(pick).map(|id| (*id).clone())
}

/// Compose a full local reply for the current state.
///
/// Below the first trust tier the reply is just a mood line. Above it, a
/// hint for a random undiscovered element is appended.
pub fn fallback_reply(
    state: &GameState,
    recipes: &RecipeBook,
    catalog: &ElementCatalog,
    rules: &CompanionBalance,
    language: Language,
    rng: &mut impl Rng,
) -> String {
    let line = voice_line(state.companion.mood, language, rng);
    if state.companion.trust < rules.hint_low_at {
        return line.to_owned();
    }
    match undiscovered_target(state, recipes, rng) {
        Some(target) => {
            let hint = hint_for(recipes, &target, state.companion.trust, rules, rng);
            format!("{line} {}", describe_hint(&hint, catalog, language))
        }
        None => line.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use alchemy_catalog::ReferenceData;
    use alchemy_game::BalanceConfig;
    use alchemy_types::TrustTier;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn reference() -> ReferenceData {
        match ReferenceData::standard() {
            Ok(r) => r,
            Err(e) => panic!("standard data must validate: {e}"),
        }
    }

    #[test]
    fn every_mood_has_lines_in_both_languages() {
        let mut rng = SmallRng::seed_from_u64(1);
        for lang in [Language::En, Language::Ru] {
            for mood in [Mood::Loving, Mood::Happy, Mood::Neutral, Mood::Angry] {
                assert!(!voice_line(mood, lang, &mut rng).is_empty());
            }
        }
    }

    #[test]
    fn partial_hint_mentions_hidden_count() {
        let reference = reference();
        let hint = Hint::Partial {
            element: ElementId::from("steam"),
            tier: TrustTier::Low,
            revealed: vec![ElementId::from("fire")],
            arity: 2,
        };
        let text = describe_hint(&hint, reference.catalog(), Language::En);
        assert!(text.contains("Steam"));
        assert!(text.contains("Fire"));
        assert!(text.contains("1 more"));
    }

    #[test]
    fn low_trust_reply_has_no_hint() {
        let reference = reference();
        let balance = BalanceConfig::default();
        let state = GameState::new("Ada", &balance);
        let mut rng = SmallRng::seed_from_u64(7);
        let reply = fallback_reply(
            &state,
            reference.recipes(),
            reference.catalog(),
            &balance.companion,
            Language::En,
            &mut rng,
        );
        assert!(NEUTRAL_EN.contains(&reply.as_str()));
    }

    #[test]
    fn trusted_reply_carries_a_hint() {
        let reference = reference();
        let balance = BalanceConfig::default();
        let mut state = GameState::new("Ada", &balance);
        state.companion.trust = 70;
        let mut rng = SmallRng::seed_from_u64(7);
        let reply = fallback_reply(
            &state,
            reference.recipes(),
            reference.catalog(),
            &balance.companion,
            Language::En,
            &mut rng,
        );
        assert!(reply.contains("sniff sniff"));
    }
}
