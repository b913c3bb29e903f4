//! The craft action.
//!
//! The caller reserves the ingredients from the inventory first (see
//! [`inventory::reserve`](crate::inventory::reserve)), so by the time
//! [`GameState::attempt_craft`] runs they are no longer available to any
//! other action. On success they stay consumed. On every failure they are
//! returned before the error is reported, so a failed craft never costs
//! the player anything.

use alchemy_catalog::RecipeBook;
use alchemy_types::{AchievementKind, Crafted, ElementId, Progress};
use tracing::{debug, info};

use crate::config::BalanceConfig;
use crate::error::GameError;
use crate::inventory;
use crate::state::GameState;

impl GameState {
    /// Resolve reserved ingredients against the recipe book and apply the
    /// rewards.
    ///
    /// # Errors
    ///
    /// - [`GameError::InsufficientIngredients`] for lists shorter than the
    ///   minimum (the resolver is not consulted).
    /// - [`GameError::TooManyIngredients`] for lists longer than the maximum.
    /// - [`GameError::NoMatchingRecipe`] when nothing matches.
    ///
    /// In all three cases the ingredients are refunded first.
    pub fn attempt_craft(
        &mut self,
        recipes: &RecipeBook,
        balance: &BalanceConfig,
        reserved: Vec<ElementId>,
    ) -> Result<Crafted, GameError> {
        let provided = reserved.len();
        if provided < balance.craft.min_ingredients {
            inventory::refund(&mut self.elements, &reserved)?;
            return Err(GameError::InsufficientIngredients {
                provided,
                min: balance.craft.min_ingredients,
            });
        }
        if provided > balance.craft.max_ingredients {
            inventory::refund(&mut self.elements, &reserved)?;
            return Err(GameError::TooManyIngredients {
                provided,
                max: balance.craft.max_ingredients,
            });
        }

        self.stats.total_crafts = self.stats.total_crafts.saturating_add(1);

        let Some(result) = recipes.resolve(&reserved).cloned() else {
            self.stats.failed_crafts = self.stats.failed_crafts.saturating_add(1);
            inventory::refund(&mut self.elements, &reserved)?;
            debug!(player = %self.player_id, ingredients = ?reserved, "no recipe, refunded");
            return Err(GameError::NoMatchingRecipe { refunded: reserved });
        };

        let first_discovery = inventory::add_element(&mut self.elements, &result, 1)?;
        self.stats.successful_crafts = self.stats.successful_crafts.saturating_add(1);

        let (exp_gained, coins_gained) = balance.craft.reward(first_discovery);
        self.earn_coins(coins_gained);
        let mut progress: Progress = self.gain_experience(exp_gained, balance);

        if first_discovery {
            self.stats.elements_discovered = self.stats.elements_discovered.saturating_add(1);
            progress.absorb(self.check_achievements(AchievementKind::Discovery, balance));
        }
        progress.absorb(self.check_achievements(AchievementKind::Crafts, balance));

        info!(
            player = %self.player_id,
            element = %result,
            first_discovery,
            exp = exp_gained,
            coins = coins_gained,
            "craft succeeded"
        );

        Ok(Crafted {
            result,
            first_discovery,
            exp_gained,
            coins_gained,
            progress,
        })
    }

    /// Reserve `ingredients` and craft them in one step.
    ///
    /// # Errors
    ///
    /// [`GameError::IngredientUnavailable`] if the inventory cannot cover
    /// the list (nothing is deducted), otherwise as
    /// [`GameError`] from [`GameState::attempt_craft`].
    pub fn craft(
        &mut self,
        recipes: &RecipeBook,
        balance: &BalanceConfig,
        ingredients: &[ElementId],
    ) -> Result<Crafted, GameError> {
        if ingredients.len() > balance.craft.max_ingredients {
            return Err(GameError::TooManyIngredients {
                provided: ingredients.len(),
                max: balance.craft.max_ingredients,
            });
        }
        inventory::reserve(&mut self.elements, ingredients)?;
        self.attempt_craft(recipes, balance, ingredients.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use alchemy_catalog::ReferenceData;

    use super::*;

    fn ids(keys: &[&str]) -> Vec<ElementId> {
        keys.iter().map(|k| ElementId::from(*k)).collect()
    }

    fn setup() -> (RecipeBook, BalanceConfig, GameState) {
        let recipes = ReferenceData::standard()
            .map(|d| d.recipes().clone())
            .unwrap_or_default();
        let balance = BalanceConfig::default();
        let state = GameState::new("Tester", &balance);
        (recipes, balance, state)
    }

    #[test]
    fn failed_craft_is_lossless() {
        let (recipes, balance, mut state) = setup();
        let before = state.elements.clone();
        let result = state.craft(&recipes, &balance, &ids(&["fire", "light"]));
        assert!(matches!(result, Err(GameError::NoMatchingRecipe { .. })));
        assert_eq!(state.elements, before);
        assert_eq!(state.stats.failed_crafts, 1);
        assert_eq!(state.coins, 50);
    }

    #[test]
    fn failed_reserved_craft_refunds() {
        let (recipes, balance, mut state) = setup();
        let reserved = ids(&["fire", "air", "light"]);
        assert!(inventory::reserve(&mut state.elements, &reserved).is_ok());
        assert_eq!(state.count_of("fire"), 1);
        let result = state.attempt_craft(&recipes, &balance, reserved);
        assert!(result.is_err());
        assert_eq!(state.count_of("fire"), 2);
        assert_eq!(state.count_of("air"), 2);
        assert_eq!(state.count_of("light"), 1);
    }

    #[test]
    fn short_list_fails_without_resolving() {
        let (recipes, balance, mut state) = setup();
        let reserved = ids(&["fire"]);
        assert!(inventory::reserve(&mut state.elements, &reserved).is_ok());
        let result = state.attempt_craft(&recipes, &balance, reserved);
        assert_eq!(
            result.err(),
            Some(GameError::InsufficientIngredients { provided: 1, min: 2 })
        );
        assert_eq!(state.count_of("fire"), 2);
        assert_eq!(state.stats.total_crafts, 0);
    }

    #[test]
    fn too_long_list_is_rejected_before_reserving() {
        let (recipes, balance, mut state) = setup();
        let before = state.elements.clone();
        let result = state.craft(&recipes, &balance, &ids(&["fire", "water", "earth", "air", "light"]));
        assert!(matches!(result, Err(GameError::TooManyIngredients { provided: 5, max: 4 })));
        assert_eq!(state.elements, before);
    }

    #[test]
    fn unavailable_ingredient_deducts_nothing() {
        let (recipes, balance, mut state) = setup();
        let before = state.elements.clone();
        let result = state.craft(&recipes, &balance, &ids(&["fire", "egg"]));
        assert!(matches!(result, Err(GameError::IngredientUnavailable { .. })));
        assert_eq!(state.elements, before);
    }

    #[test]
    fn first_discovery_pays_more_than_repeat() {
        let (recipes, balance, mut state) = setup();
        let first = state.craft(&recipes, &balance, &ids(&["fire", "water"]));
        let second = state.craft(&recipes, &balance, &ids(&["water", "fire"]));
        let (Ok(first), Ok(second)) = (first, second) else {
            panic!("both steam crafts should succeed");
        };
        assert_eq!(first.result.as_str(), "steam");
        assert!(first.first_discovery);
        assert!(!second.first_discovery);
        assert!(first.exp_gained > second.exp_gained);
        assert!(first.coins_gained > second.coins_gained);
        assert_eq!(state.count_of("steam"), 2);
        assert_eq!(state.count_of("fire"), 0);
        assert!(state.is_discovered("steam"));
        assert_eq!(state.stats.successful_crafts, 2);
    }

    #[test]
    fn discovery_counts_toward_milestones() {
        let (recipes, balance, mut state) = setup();
        state.elements.values_mut().for_each(|e| e.count = 10);
        // 6 starters + steam, mud, dust, energy = 10 discovered
        for pair in [["fire", "water"], ["earth", "water"], ["earth", "air"], ["fire", "air"]] {
            let _ = state.craft(&recipes, &balance, &ids(&pair));
        }
        assert_eq!(state.discovered_count(), 10);
        assert!(state.achievements.contains(&alchemy_types::Achievement::Discovered10));
    }
}
