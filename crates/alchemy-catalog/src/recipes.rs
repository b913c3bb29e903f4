//! The recipe table and the recipe resolver.
//!
//! A candidate ingredient list matches a recipe when both have the same
//! length and are equal as multisets: every identifier appears the same
//! number of times in both, order irrelevant.
//!
//! # Tie-break
//!
//! Recipes are kept in insertion order. If two recipes ever share an
//! ingredient multiset (an authoring error that
//! [`ReferenceData`](crate::ReferenceData) rejects), resolution returns
//! the one inserted first. The signature index records only the first
//! recipe seen for each multiset, so this holds even for unvalidated
//! books.

use std::collections::BTreeMap;

use alchemy_types::{ElementId, Recipe, signature_of};

/// Smallest ingredient list a craft may use.
pub const MIN_INGREDIENTS: usize = 2;

/// Largest ingredient list a craft may use.
pub const MAX_INGREDIENTS: usize = 4;

// ---------------------------------------------------------------------------
// RecipeBook
// ---------------------------------------------------------------------------

/// Ordered recipe table with a sorted-signature index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    /// Recipes in insertion order.
    recipes: Vec<Recipe>,
    /// Sorted ingredient list -> index of the first recipe with it.
    by_signature: BTreeMap<Vec<ElementId>, usize>,
}

impl RecipeBook {
    /// Create an empty recipe book.
    pub const fn new() -> Self {
        Self {
            recipes: Vec::new(),
            by_signature: BTreeMap::new(),
        }
    }

    /// Build a book from recipes, keeping their order.
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let mut book = Self::new();
        for recipe in recipes {
            book.push(recipe);
        }
        book
    }

    /// Append a recipe. An earlier recipe with the same multiset keeps
    /// priority in resolution.
    pub fn push(&mut self, recipe: Recipe) {
        let index = self.recipes.len();
        self.by_signature.entry(recipe.signature()).or_insert(index);
        self.recipes.push(recipe);
    }

    /// Resolve a candidate ingredient list to a result element.
    ///
    /// Returns `None` when no recipe has exactly this ingredient multiset.
    /// Pure: never touches any game state.
    pub fn resolve(&self, candidate: &[ElementId]) -> Option<&ElementId> {
        let index = self.by_signature.get(&signature_of(candidate))?;
        self.recipes.get(*index).map(|r| &r.result)
    }

    /// All recipes producing `result`, in table order.
    pub fn recipes_for<'a>(&'a self, result: &'a str) -> impl Iterator<Item = &'a Recipe> + 'a {
        self.recipes.iter().filter(move |r| r.result.as_str() == result)
    }

    /// Whether at least one recipe produces `result`.
    pub fn is_craftable(&self, result: &str) -> bool {
        self.recipes_for(result).next().is_some()
    }

    /// Iterate recipes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Number of recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the book has no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Pairs of recipe indices `(winner, shadowed)` that share a multiset.
    pub fn shadowed_recipes(&self) -> Vec<(usize, usize)> {
        self.recipes
            .iter()
            .enumerate()
            .filter_map(|(index, recipe)| {
                let winner = *self.by_signature.get(&recipe.signature())?;
                (winner != index).then_some((winner, index))
            })
            .collect()
    }

    /// Recipe at a table position.
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(keys: &[&str]) -> Vec<ElementId> {
        keys.iter().map(|k| ElementId::from(*k)).collect()
    }

    fn sample_book() -> RecipeBook {
        RecipeBook::from_recipes([
            Recipe::new("steam", &["fire", "water"]),
            Recipe::new("sea", &["water", "water"]),
            Recipe::new("storm_cloud", &["fire", "water", "cloud"]),
            Recipe::new("robot", &["metal", "energy", "life", "wisdom"]),
        ])
    }

    /// Reference multiset comparison: remove each recipe ingredient from a
    /// copy of the candidate.
    fn brute_force<'a>(book: &'a RecipeBook, candidate: &[ElementId]) -> Option<&'a ElementId> {
        book.iter()
            .find(|recipe| {
                if recipe.ingredients.len() != candidate.len() {
                    return false;
                }
                let mut remaining = candidate.to_vec();
                recipe.ingredients.iter().all(|item| {
                    remaining
                        .iter()
                        .position(|c| c == item)
                        .map(|pos| remaining.remove(pos))
                        .is_some()
                })
            })
            .map(|r| &r.result)
    }

    #[test]
    fn resolves_exact_pair() {
        let book = sample_book();
        assert_eq!(book.resolve(&ids(&["fire", "water"])).map(ElementId::as_str), Some("steam"));
    }

    #[test]
    fn resolution_is_commutative() {
        let book = sample_book();
        let a = book.resolve(&ids(&["fire", "water"]));
        let b = book.resolve(&ids(&["water", "fire"]));
        assert_eq!(a, b);

        let c = book.resolve(&ids(&["wisdom", "life", "metal", "energy"]));
        assert_eq!(c.map(ElementId::as_str), Some("robot"));
    }

    #[test]
    fn duplicates_must_match_exactly() {
        let book = sample_book();
        assert!(book.resolve(&ids(&["fire", "fire"])).is_none());
        assert_eq!(book.resolve(&ids(&["water", "water"])).map(ElementId::as_str), Some("sea"));
        // An extra duplicate never matches a smaller recipe.
        assert!(book.resolve(&ids(&["fire", "water", "water"])).is_none());
    }

    #[test]
    fn unknown_combination_is_no_match() {
        let book = sample_book();
        assert!(book.resolve(&ids(&["fire", "air"])).is_none());
        assert!(book.resolve(&[]).is_none());
        assert!(book.resolve(&ids(&["fire"])).is_none());
    }

    #[test]
    fn first_inserted_recipe_wins_on_identical_multiset() {
        let book = RecipeBook::from_recipes([
            Recipe::new("metal", &["stone", "fire"]),
            Recipe::new("iron", &["fire", "stone"]),
        ]);
        assert_eq!(book.resolve(&ids(&["fire", "stone"])).map(ElementId::as_str), Some("metal"));
        assert_eq!(book.shadowed_recipes(), vec![(0, 1)]);
    }

    #[test]
    fn index_agrees_with_brute_force_multiset_check() {
        let book = sample_book();
        let candidates = [
            ids(&["water", "fire"]),
            ids(&["cloud", "water", "fire"]),
            ids(&["water", "cloud", "cloud"]),
            ids(&["water", "water"]),
            ids(&["life", "energy", "wisdom", "metal"]),
            ids(&["life", "energy", "wisdom", "wisdom"]),
            ids(&["air", "earth"]),
        ];
        for candidate in &candidates {
            assert_eq!(book.resolve(candidate), brute_force(&book, candidate));
        }
    }

    #[test]
    fn recipes_for_lists_alternatives_in_order() {
        let book = RecipeBook::from_recipes([
            Recipe::new("steam", &["fire", "water"]),
            Recipe::new("mud", &["earth", "water"]),
            Recipe::new("steam", &["fire", "water", "cloud"]),
        ]);
        let arities: Vec<usize> = book.recipes_for("steam").map(Recipe::arity).collect();
        assert_eq!(arities, vec![2, 3]);
        assert!(book.is_craftable("mud"));
        assert!(!book.is_craftable("fire"));
    }
}
