//! Prompt rendering via `minijinja`.
//!
//! The built-in templates are compiled into the binary. Pointing
//! `ALCHEMY_TEMPLATES_DIR` at a directory holding `system.j2` and
//! `user.j2` replaces both, so the companion's voice can be tuned without
//! recompiling.
//!
//! The prompt carries the companion's affinity and the names of elements
//! the player already knows. It never carries the recipe table.

use alchemy_catalog::ElementCatalog;
use alchemy_game::{CompanionBalance, GameState, trust_tier};
use alchemy_types::{Language, Mood, Relationship, TrustTier};
use minijinja::Environment;
use serde::Serialize;

use crate::error::CompanionError;

const DEFAULT_SYSTEM_TEMPLATE: &str = include_str!("../templates/system.j2");
const DEFAULT_USER_TEMPLATE: &str = include_str!("../templates/user.j2");

/// Everything a prompt template can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatContext {
    /// Player display name.
    pub player_name: String,
    /// Companion loyalty, `0..=100`.
    pub loyalty: u32,
    /// Companion trust, `0..=100`.
    pub trust: u32,
    /// Current mood.
    pub mood: Mood,
    /// Relationship tier.
    pub relationship: Relationship,
    /// How much the companion may reveal.
    pub trust_tier: TrustTier,
    /// Successful conversations so far.
    pub conversation_count: u32,
    /// Reply language, as a human-readable name.
    pub language: &'static str,
    /// Localized names of discovered elements.
    pub known_elements: Vec<String>,
    /// The player's message.
    pub message: String,
}

impl ChatContext {
    /// Snapshot the parts of `state` the companion is allowed to know.
    pub fn from_state(
        state: &GameState,
        catalog: &ElementCatalog,
        rules: &CompanionBalance,
        language: Language,
        message: &str,
    ) -> Self {
        let companion = &state.companion;
        let known_elements = state
            .elements
            .iter()
            .filter(|(_, entry)| entry.discovered)
            .map(|(id, _)| catalog.display_name(id.as_str(), language))
            .collect();
        Self {
            player_name: state.player_name.clone(),
            loyalty: companion.loyalty,
            trust: companion.trust,
            mood: companion.mood,
            relationship: state.relationship(),
            trust_tier: trust_tier(companion.trust, rules),
            conversation_count: companion.conversation_count,
            language: language.display_name(),
            known_elements,
            message: message.to_owned(),
        }
    }
}

/// A rendered prompt ready to send to the chat API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    /// System message establishing the companion's character.
    pub system: String,
    /// User message carrying the player's text.
    pub user: String,
}

/// Loads and renders the companion prompt templates.
pub struct PromptEngine {
    env: Environment<'static>,
}

impl PromptEngine {
    /// Create an engine from the built-in templates, or from `templates_dir`
    /// when given.
    ///
    /// An override directory must contain both `system.j2` and `user.j2`.
    pub fn new(templates_dir: Option<&str>) -> Result<Self, CompanionError> {
        let (system_tpl, user_tpl) = match templates_dir {
            Some(dir) => (load_template(dir, "system.j2")?, load_template(dir, "user.j2")?),
            None => (
                DEFAULT_SYSTEM_TEMPLATE.to_owned(),
                DEFAULT_USER_TEMPLATE.to_owned(),
            ),
        };

        let mut env = Environment::new();
        env.add_template_owned("system", system_tpl)
            .map_err(|e| CompanionError::Template(format!("failed to add system template: {e}")))?;
        env.add_template_owned("user", user_tpl)
            .map_err(|e| CompanionError::Template(format!("failed to add user template: {e}")))?;

        Ok(Self { env })
    }

    /// Render the system and user messages for `context`.
    pub fn render(&self, context: &ChatContext) -> Result<RenderedPrompt, CompanionError> {
        let system = self
            .env
            .get_template("system")
            .map_err(|e| CompanionError::Template(format!("missing system template: {e}")))?
            .render(context)
            .map_err(|e| CompanionError::Template(format!("system render failed: {e}")))?;

        let user = self
            .env
            .get_template("user")
            .map_err(|e| CompanionError::Template(format!("missing user template: {e}")))?
            .render(context)
            .map_err(|e| CompanionError::Template(format!("user render failed: {e}")))?;

        Ok(RenderedPrompt { system, user })
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, filename: &str) -> Result<String, CompanionError> {
    let path = format!("{dir}/{filename}");
    std::fs::read_to_string(&path)
        .map_err(|e| CompanionError::Template(format!("failed to read {path}: {e}")))
}

#[cfg(test)]
mod tests {
    use alchemy_catalog::ReferenceData;
    use alchemy_game::BalanceConfig;

    use super::*;

    fn context(trust: u32, message: &str) -> ChatContext {
        let balance = BalanceConfig::default();
        let reference = ReferenceData::standard();
        assert!(reference.is_ok());
        let Ok(reference) = reference else {
            return ChatContext::from_state(
                &GameState::default(),
                &ElementCatalog::new(),
                &balance.companion,
                Language::En,
                message,
            );
        };
        let mut state = GameState::new("Ada", &balance);
        state.companion.trust = trust;
        ChatContext::from_state(
            &state,
            reference.catalog(),
            &balance.companion,
            Language::En,
            message,
        )
    }

    #[test]
    fn context_lists_only_discovered_elements() {
        let ctx = context(0, "hi");
        assert_eq!(ctx.known_elements.len(), 6);
        assert!(ctx.known_elements.iter().any(|n| n == "Fire"));
        assert_eq!(ctx.trust_tier, TrustTier::Closed);
        assert_eq!(ctx.language, "English");
    }

    #[test]
    fn built_in_templates_render() {
        let engine = PromptEngine::new(None);
        assert!(engine.is_ok());
        let Ok(engine) = engine else { return };

        let prompt = engine.render(&context(0, "what makes steam?"));
        assert!(prompt.is_ok());
        let Ok(prompt) = prompt else { return };
        assert!(prompt.system.contains("Ada"));
        assert!(prompt.system.contains("do not trust this player yet"));
        assert!(prompt.system.contains("Answer in English"));
        assert!(prompt.system.contains("- Fire"));
        assert_eq!(prompt.user.trim(), "what makes steam?");
    }

    #[test]
    fn trust_changes_the_rules() {
        let Ok(engine) = PromptEngine::new(None) else {
            panic!("built-in templates must load");
        };
        let low = engine.render(&context(40, "hi")).map(|p| p.system).unwrap_or_default();
        let high = engine.render(&context(90, "hi")).map(|p| p.system).unwrap_or_default();
        assert!(low.contains("at most one ingredient"));
        assert!(high.contains("at most two ingredients"));
    }

    #[test]
    fn prompt_never_contains_recipes() {
        let Ok(engine) = PromptEngine::new(None) else {
            panic!("built-in templates must load");
        };
        let system = engine.render(&context(100, "hi")).map(|p| p.system).unwrap_or_default();
        assert!(!system.contains(" + "));
        assert!(!system.contains("Steam"));
    }

    #[test]
    fn override_directory_replaces_templates() {
        let dir = std::env::temp_dir().join(format!("alchemy-templates-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).ok();
        std::fs::write(dir.join("system.j2"), "Woof {{ player_name }}, mood {{ mood }}").ok();
        std::fs::write(dir.join("user.j2"), "> {{ message }}").ok();

        let engine = PromptEngine::new(dir.to_str());
        assert!(engine.is_ok());
        let prompt = engine.and_then(|e| e.render(&context(0, "bark")));
        assert!(prompt.is_ok());
        let Ok(prompt) = prompt else { return };
        assert_eq!(prompt.system, "Woof Ada, mood neutral");
        assert_eq!(prompt.user, "> bark");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_override_template_is_an_error() {
        let dir = std::env::temp_dir().join(format!("alchemy-templates-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).ok();
        std::fs::write(dir.join("system.j2"), "only system").ok();

        let result = PromptEngine::new(dir.to_str());
        assert!(matches!(result, Err(CompanionError::Template(_))));

        std::fs::remove_dir_all(&dir).ok();
    }
}
