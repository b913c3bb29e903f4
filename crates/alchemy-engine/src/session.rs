//! The game session: one player's state and every intent that changes it.
//!
//! A [`Session`] owns exactly one [`GameState`] and is the only thing that
//! mutates it. The terminal front end, the autosave timer, and chat replies
//! arriving from background tasks all funnel through its methods on one
//! task, so no two intents ever interleave.
//!
//! Intents return the game's outcome records on success and a
//! [`GameError`] for expected failures. A failed intent leaves the state
//! untouched, apart from the failed-craft counter.

use std::path::{Path, PathBuf};

use alchemy_catalog::ReferenceData;
use alchemy_companion::{ChatContext, PromptEngine, RenderedPrompt, describe_hint, fallback_reply};
use alchemy_game::{BalanceConfig, GameError, GameState};
use alchemy_store::{
    Leaderboard, LeaderboardEntry, RestoreSource, SavedState, StateStore, export_to, import_from,
    restore,
};
use alchemy_types::{
    CompanionRequest, ConversationApplied, Crafted, DailyBonus, ElementId, Hint, Language,
    Progress, Purchased, RequestCompleted, ShopItem, TreatGiven, TreatKind,
};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;

/// A running game for one player.
pub struct Session {
    state: GameState,
    reference: ReferenceData,
    balance: BalanceConfig,
    store: Box<dyn StateStore>,
    prompts: PromptEngine,
    leaderboard: Leaderboard,
    leaderboard_dir: Option<PathBuf>,
    language: Language,
    rng: SmallRng,
    restored_from: RestoreSource,
    dirty: bool,
}

impl Session {
    /// Open a session, restoring the saved game from `store` if there is
    /// one. The RNG is seeded from the OS.
    pub fn open(config: &EngineConfig, store: Box<dyn StateStore>) -> Result<Self, EngineError> {
        Self::build(config, store, SmallRng::from_os_rng())
    }

    /// Open a session with a fixed RNG seed.
    pub fn open_seeded(
        config: &EngineConfig,
        store: Box<dyn StateStore>,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::build(config, store, SmallRng::seed_from_u64(seed))
    }

    fn build(
        config: &EngineConfig,
        store: Box<dyn StateStore>,
        rng: SmallRng,
    ) -> Result<Self, EngineError> {
        let reference = ReferenceData::standard()?;
        let balance = config.balance.clone();
        let restored = restore(&*store, &config.player_name, &balance);
        info!(
            player = %restored.state.player_name,
            level = restored.state.level,
            source = ?restored.source,
            "session opened"
        );
        Ok(Self {
            state: restored.state,
            reference,
            balance,
            store,
            prompts: PromptEngine::new(None)?,
            leaderboard: Leaderboard::default(),
            leaderboard_dir: None,
            language: config.language,
            rng,
            restored_from: restored.source,
            dirty: false,
        })
    }

    /// Use custom prompt templates.
    #[must_use]
    pub fn with_prompts(mut self, prompts: PromptEngine) -> Self {
        self.prompts = prompts;
        self
    }

    /// Load the leaderboard from `dir` and keep it updated there.
    pub fn with_leaderboard(mut self, dir: &Path) -> Result<Self, EngineError> {
        self.leaderboard = Leaderboard::load(dir)?;
        self.leaderboard_dir = Some(dir.to_path_buf());
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// The current game state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The element catalog and recipe book.
    pub const fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// The balance in effect.
    pub const fn balance(&self) -> &BalanceConfig {
        &self.balance
    }

    /// Display language.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Where the state came from when the session opened.
    pub const fn restored_from(&self) -> &RestoreSource {
        &self.restored_from
    }

    /// The local leaderboard.
    pub const fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Whether there are changes since the last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Switch the display language.
    pub const fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Shop price of `item`, or `None` if it is not sold.
    ///
    /// Only elements with a catalog price are sold; crafted elements are
    /// not.
    pub fn price_of(&self, item: &ShopItem) -> Option<u64> {
        match item {
            ShopItem::Treat(kind) => Some(self.balance.shop.treat_price(*kind)),
            ShopItem::Element(id) => {
                let catalog = self.reference.catalog();
                if catalog.get(id.as_str())?.price.is_none() {
                    return None;
                }
                catalog.list_price(id.as_str())
            }
        }
    }

    /// Everything the shop sells, treats first, with prices.
    pub fn shop_items(&self) -> Vec<(ShopItem, u64)> {
        let treats = TreatKind::ALL.into_iter().map(ShopItem::Treat);
        let elements = self
            .reference
            .catalog()
            .iter()
            .map(|e| ShopItem::Element(e.id.clone()));
        treats
            .chain(elements)
            .filter_map(|item| self.price_of(&item).map(|price| (item, price)))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    /// Combine ingredients.
    ///
    /// The ingredients are reserved from the inventory before the recipe
    /// book is consulted and refunded if the craft fails.
    pub fn attempt_craft(&mut self, ingredients: &[ElementId]) -> Result<Crafted, GameError> {
        let outcome = self
            .state
            .craft(self.reference.recipes(), &self.balance, ingredients);
        // an unmatched craft still counts in the stats
        if matches!(outcome, Ok(_) | Err(GameError::NoMatchingRecipe { .. })) {
            self.dirty = true;
        }
        let crafted = outcome?;
        self.record_progress(&crafted.progress);
        Ok(crafted)
    }

    /// Buy one unit of `item` at its shop price.
    pub fn purchase(&mut self, item: ShopItem) -> Result<Purchased, GameError> {
        let Some(price) = self.price_of(&item) else {
            let id = match item {
                ShopItem::Element(id) => id,
                ShopItem::Treat(kind) => ElementId::from(kind.as_str()),
            };
            return Err(GameError::NotForSale(id));
        };
        let purchased = self.state.purchase(item, price, &self.balance)?;
        self.dirty = true;
        self.record_progress(&purchased.progress);
        Ok(purchased)
    }

    /// Feed the companion.
    pub fn give_treat(&mut self, kind: TreatKind) -> Result<TreatGiven, GameError> {
        let given = self.state.give_treat(kind, &self.balance)?;
        self.dirty = true;
        Ok(given)
    }

    /// The active request, drawing a new one if none is active.
    pub fn offer_request(&mut self) -> Option<CompanionRequest> {
        let had_request = self.state.companion.current_request.is_some();
        let request = self.state.offer_request(&self.balance, &mut self.rng);
        if !had_request && request.is_some() {
            self.dirty = true;
        }
        request
    }

    /// Fulfil the active request.
    pub fn complete_request(&mut self) -> Result<RequestCompleted, GameError> {
        let completed =
            self.state
                .complete_request(self.reference.recipes(), &self.balance, &mut self.rng)?;
        self.dirty = true;
        Ok(completed)
    }

    /// Claim today's bonus, by the local calendar.
    pub fn claim_daily_bonus(&mut self) -> Result<DailyBonus, GameError> {
        self.claim_daily_bonus_on(chrono::Local::now().date_naive())
    }

    /// Claim the bonus for a specific day.
    pub fn claim_daily_bonus_on(&mut self, today: NaiveDate) -> Result<DailyBonus, GameError> {
        let bonus = self.state.claim_daily_bonus(today, &self.balance)?;
        self.dirty = true;
        Ok(bonus)
    }

    /// Render the prompt for a player message.
    ///
    /// Nothing changes until the reply comes back and is passed to
    /// [`Session::apply_companion_reply`].
    pub fn prepare_companion_message(&self, text: &str) -> Result<RenderedPrompt, EngineError> {
        let context = ChatContext::from_state(
            &self.state,
            self.reference.catalog(),
            &self.balance.companion,
            self.language,
            text,
        );
        Ok(self.prompts.render(&context)?)
    }

    /// Apply a successful chat reply.
    pub fn apply_companion_reply(&mut self, reply: String) -> ConversationApplied {
        let applied = self.state.record_conversation(reply, &self.balance);
        self.dirty = true;
        debug!(
            conversations = applied.conversation_count,
            trust_gained = applied.trust_gained,
            "companion reply applied"
        );
        applied
    }

    /// A reply in the companion's local voice. Changes nothing in the game.
    pub fn companion_fallback(&mut self) -> String {
        fallback_reply(
            &self.state,
            self.reference.recipes(),
            self.reference.catalog(),
            &self.balance.companion,
            self.language,
            &mut self.rng,
        )
    }

    /// Put a hint into words in the session language.
    pub fn describe_hint(&self, hint: &Hint) -> String {
        describe_hint(hint, self.reference.catalog(), self.language)
    }

    /// Persist the game and the leaderboard.
    pub fn save(&mut self) -> Result<SavedState, EngineError> {
        let saved = self.store.save(&self.state)?;
        if let Some(dir) = &self.leaderboard_dir {
            self.leaderboard.save(dir)?;
        }
        self.dirty = false;
        Ok(saved)
    }

    /// Save only if something changed. Returns whether a save happened.
    pub fn autosave(&mut self) -> Result<bool, EngineError> {
        if !self.dirty {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Write the game to `path` without touching the save file.
    pub fn export(&self, path: &Path) -> Result<SavedState, EngineError> {
        Ok(export_to(path, &self.state)?)
    }

    /// Replace the game with the one exported at `path`.
    ///
    /// The imported state is repaired and every milestone it has already
    /// passed is unlocked. On error the current game is kept.
    pub fn import(&mut self, path: &Path) -> Result<Progress, EngineError> {
        let imported = import_from(path, &self.balance)?;
        self.state = imported.state;
        self.dirty = true;
        info!(
            player = %self.state.player_name,
            level = self.state.level,
            repaired = imported.repaired,
            "game replaced by import"
        );
        self.update_leaderboard();
        Ok(imported.progress)
    }

    /// Start over with a fresh game for the same player.
    pub fn reset(&mut self) {
        self.state.reset(&self.balance);
        self.dirty = true;
    }

    /// Update the leaderboard after any level-up.
    fn record_progress(&mut self, progress: &Progress) {
        if !progress.level_ups.is_empty() {
            self.update_leaderboard();
        }
    }

    /// Record the current level on the leaderboard and persist it.
    fn update_leaderboard(&mut self) {
        let rank = self.leaderboard.record(LeaderboardEntry::from_state(&self.state));
        info!(player = %self.state.player_name, level = self.state.level, rank = ?rank, "leaderboard entry recorded");
        let saved = self
            .leaderboard_dir
            .as_deref()
            .map(|dir| self.leaderboard.save(dir));
        if let Some(Err(e)) = saved {
            warn!(error = %e, "failed to save leaderboard");
        }
    }
}
