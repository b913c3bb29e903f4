//! Companion affinity: treats, requests, conversations, and hints.
//!
//! Loyalty and trust are clamped to `0..=100`. Mood and relationship are
//! step functions of their average and are recomputed after every change;
//! the mood stored in [`CompanionState`](crate::state::CompanionState) is
//! only a cache of that derivation.
//!
//! Average thresholds are checked as `loyalty + trust >= 2 * threshold`,
//! so half points of the average are never rounded away.

use alchemy_catalog::RecipeBook;
use alchemy_types::{
    CompanionRequest, ConversationApplied, ElementId, Hint, Mood, Relationship, RequestCompleted,
    TreatGiven, TreatKind, TrustTier,
};
use rand::Rng;
use tracing::{debug, info};

use crate::config::{BalanceConfig, CompanionBalance};
use crate::error::GameError;
use crate::inventory;
use crate::state::{AFFINITY_MAX, GameState};

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Whether the loyalty/trust average is at least `threshold`.
const fn average_at_least(sum: u32, threshold: u32) -> bool {
    sum >= threshold.saturating_mul(2)
}

/// Mood for a loyalty/trust pair.
pub fn mood_for(loyalty: u32, trust: u32, rules: &CompanionBalance) -> Mood {
    let sum = loyalty.saturating_add(trust);
    if average_at_least(sum, rules.loving_at) {
        Mood::Loving
    } else if average_at_least(sum, rules.happy_at) {
        Mood::Happy
    } else if sum <= rules.angry_at.saturating_mul(2) {
        Mood::Angry
    } else {
        Mood::Neutral
    }
}

/// Relationship tier for a loyalty/trust pair (20 / 40 / 60 / 80 steps).
pub const fn relationship_for(loyalty: u32, trust: u32) -> Relationship {
    let sum = loyalty.saturating_add(trust);
    if average_at_least(sum, 80) {
        Relationship::BestFriends
    } else if average_at_least(sum, 60) {
        Relationship::GoodFriends
    } else if average_at_least(sum, 40) {
        Relationship::Friends
    } else if average_at_least(sum, 20) {
        Relationship::Acquaintances
    } else {
        Relationship::Strangers
    }
}

/// How much the companion is willing to share at a trust level.
pub const fn trust_tier(trust: u32, rules: &CompanionBalance) -> TrustTier {
    if trust >= rules.hint_high_at {
        TrustTier::High
    } else if trust >= rules.hint_medium_at {
        TrustTier::Medium
    } else if trust >= rules.hint_low_at {
        TrustTier::Low
    } else {
        TrustTier::Closed
    }
}

/// Add to an affinity value, clamped to the maximum. Returns the gain
/// actually applied.
fn raise(value: &mut u32, amount: u32) -> u32 {
    let before = *value;
    *value = before.saturating_add(amount).min(AFFINITY_MAX);
    value.saturating_sub(before)
}

// ---------------------------------------------------------------------------
// Hints
// ---------------------------------------------------------------------------

/// Build a hint for `element` at a given trust tier.
///
/// One recipe for the element is chosen at random and some of its
/// distinct ingredients are revealed: one at [`TrustTier::Low`], two at
/// the higher tiers, and always strictly fewer than the recipe's arity so
/// the exact multiset is never disclosed.
pub fn hint_at_tier(
    recipes: &RecipeBook,
    element: &ElementId,
    tier: TrustTier,
    rng: &mut impl Rng,
) -> Hint {
    let candidates: Vec<_> = recipes.recipes_for(element.as_str()).collect();
    if candidates.is_empty() {
        return Hint::NoRecipe {
            element: element.clone(),
        };
    }
    let wanted: usize = match tier {
        TrustTier::Closed => {
            return Hint::Refused {
                element: element.clone(),
            };
        }
        TrustTier::Low => 1,
        TrustTier::Medium | TrustTier::High => 2,
    };

    let pick = rng.random_range(0..candidates.len());
    let Some(recipe) = candidates.get(pick) else {
        return Hint::NoRecipe {
            element: element.clone(),
        };
    };

    let mut distinct = recipe.signature();
    distinct.dedup();
    let count = wanted
        .min(recipe.arity().saturating_sub(1))
        .min(distinct.len());

    // Partial Fisher-Yates over the distinct ingredients.
    for i in 0..count {
        let j = rng.random_range(i..distinct.len());
        distinct.swap(i, j);
    }
    distinct.truncate(count);

    Hint::Partial {
        element: element.clone(),
        tier,
        revealed: distinct,
        arity: u32::try_from(recipe.arity()).unwrap_or(u32::MAX),
    }
}

/// Build a hint for `element` gated by the companion's trust.
pub fn hint_for(
    recipes: &RecipeBook,
    element: &ElementId,
    trust: u32,
    rules: &CompanionBalance,
    rng: &mut impl Rng,
) -> Hint {
    hint_at_tier(recipes, element, trust_tier(trust, rules), rng)
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

impl GameState {
    /// Current relationship tier.
    pub const fn relationship(&self) -> Relationship {
        relationship_for(self.companion.loyalty, self.companion.trust)
    }

    /// Feed one treat to the companion.
    ///
    /// # Errors
    ///
    /// [`GameError::InsufficientResource`] with zero stock; nothing changes.
    pub fn give_treat(&mut self, kind: TreatKind, balance: &BalanceConfig) -> Result<TreatGiven, GameError> {
        let stock = match kind {
            TreatKind::Meat => &mut self.meat,
            TreatKind::Bone => &mut self.bones,
        };
        *stock = stock
            .checked_sub(1)
            .ok_or(GameError::InsufficientResource { kind })?;

        let effect = balance.companion.treat(kind);
        let loyalty_gained = raise(&mut self.companion.loyalty, effect.loyalty);
        let trust_gained = raise(&mut self.companion.trust, effect.trust);
        self.stats.treats_given = self.stats.treats_given.saturating_add(1);
        let mood = self.refresh_mood(balance);

        info!(
            player = %self.player_id,
            treat = kind.as_str(),
            loyalty = self.companion.loyalty,
            trust = self.companion.trust,
            "treat given"
        );

        Ok(TreatGiven {
            kind,
            loyalty_gained,
            trust_gained,
            mood,
        })
    }

    /// Make sure a request is on offer and return it.
    ///
    /// An active request is returned unchanged. Otherwise one is drawn at
    /// random from the configured pool, preferring requests whose reward
    /// has not been earned yet. Returns `None` only for an empty pool.
    pub fn offer_request(&mut self, balance: &BalanceConfig, rng: &mut impl Rng) -> Option<CompanionRequest> {
        if let Some(active) = &self.companion.current_request {
            return Some(active.clone());
        }
        let pool = &balance.companion.requests;
        let fresh: Vec<&CompanionRequest> = pool
            .iter()
            .filter(|r| !self.companion.completed_requests.contains(&r.reward))
            .collect();
        let choices: Vec<&CompanionRequest> = if fresh.is_empty() {
            pool.iter().collect()
        } else {
            fresh
        };
        if choices.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..choices.len());
        let request = choices.get(idx).map(|r| (*r).clone())?;
        debug!(player = %self.player_id, reward = ?request.reward, "request offered");
        self.companion.current_request = Some(request.clone());
        Some(request)
    }

    /// Hand over the elements of the active request.
    ///
    /// All requirements are checked before anything is deducted.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoActiveRequest`] when nothing is on offer.
    /// - [`GameError::RequestUnfulfillable`] when any requirement is short;
    ///   nothing changes.
    pub fn complete_request(
        &mut self,
        recipes: &RecipeBook,
        balance: &BalanceConfig,
        rng: &mut impl Rng,
    ) -> Result<RequestCompleted, GameError> {
        let request = self
            .companion
            .current_request
            .as_ref()
            .ok_or(GameError::NoActiveRequest)?;

        if let Some((element, needed, available)) =
            inventory::first_shortfall(&self.elements, request.need.iter().map(|(id, n)| (id, *n)))
        {
            return Err(GameError::RequestUnfulfillable {
                element,
                needed,
                available,
            });
        }

        let Some(request) = self.companion.current_request.take() else {
            return Err(GameError::NoActiveRequest);
        };
        for (id, amount) in &request.need {
            inventory::remove_element(&mut self.elements, id, *amount)?;
        }

        let trust_gained = raise(&mut self.companion.trust, balance.companion.request_trust);
        let loyalty_gained = raise(&mut self.companion.loyalty, balance.companion.request_loyalty);
        self.companion.completed_requests.push(request.reward);
        let mood = self.refresh_mood(balance);
        let hint = hint_at_tier(recipes, &request.reward.target_element(), TrustTier::High, rng);

        info!(player = %self.player_id, reward = ?request.reward, "request completed");

        Ok(RequestCompleted {
            reward: request.reward,
            trust_gained,
            loyalty_gained,
            hint,
            mood,
        })
    }

    /// Apply a successful companion reply.
    pub fn record_conversation(&mut self, reply: String, balance: &BalanceConfig) -> ConversationApplied {
        let trust_gained = raise(&mut self.companion.trust, balance.companion.conversation_trust);
        self.companion.conversation_count = self.companion.conversation_count.saturating_add(1);
        self.stats.conversations = self.stats.conversations.saturating_add(1);
        let mood = self.refresh_mood(balance);
        ConversationApplied {
            reply,
            trust_gained,
            conversation_count: self.companion.conversation_count,
            mood,
        }
    }
}
