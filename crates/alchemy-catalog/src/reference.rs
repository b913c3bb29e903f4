//! Validated reference data: the catalog and recipe book together.
//!
//! Validation runs once at load time and checks three invariants:
//! every recipe id resolves in the catalog, no two recipes share an
//! ingredient multiset, and every recipe uses between
//! [`MIN_INGREDIENTS`] and [`MAX_INGREDIENTS`] ingredients.

use tracing::debug;

use crate::catalog::ElementCatalog;
use crate::error::CatalogError;
use crate::recipes::{MAX_INGREDIENTS, MIN_INGREDIENTS, RecipeBook};
use crate::starting_catalog::{create_standard_catalog, create_standard_recipes};

/// The immutable tables the game engine reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    catalog: ElementCatalog,
    recipes: RecipeBook,
}

impl ReferenceData {
    /// Assemble and validate reference data.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, checking recipes in table
    /// order.
    pub fn new(catalog: ElementCatalog, recipes: RecipeBook) -> Result<Self, CatalogError> {
        validate(&catalog, &recipes)?;
        debug!(
            elements = catalog.len(),
            recipes = recipes.len(),
            "reference data validated"
        );
        Ok(Self { catalog, recipes })
    }

    /// The canonical tables shipped with the game.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the built-in data is inconsistent.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(create_standard_catalog()?, create_standard_recipes())
    }

    /// The element catalog.
    pub const fn catalog(&self) -> &ElementCatalog {
        &self.catalog
    }

    /// The recipe book.
    pub const fn recipes(&self) -> &RecipeBook {
        &self.recipes
    }
}

fn validate(catalog: &ElementCatalog, recipes: &RecipeBook) -> Result<(), CatalogError> {
    for recipe in recipes.iter() {
        let arity = recipe.arity();
        if !(MIN_INGREDIENTS..=MAX_INGREDIENTS).contains(&arity) {
            return Err(CatalogError::ArityOutOfRange {
                result: recipe.result.clone(),
                arity,
                min: MIN_INGREDIENTS,
                max: MAX_INGREDIENTS,
            });
        }
        let unknown = std::iter::once(&recipe.result)
            .chain(recipe.ingredients.iter())
            .find(|id| !catalog.contains(id.as_str()));
        if let Some(element) = unknown {
            return Err(CatalogError::UnknownElement {
                result: recipe.result.clone(),
                element: element.clone(),
            });
        }
    }

    let duplicate = recipes
        .shadowed_recipes()
        .into_iter()
        .find_map(|(winner, shadowed)| Some((recipes.get(winner)?, recipes.get(shadowed)?)));
    match duplicate {
        Some((first, second)) => Err(CatalogError::DuplicateIngredientSet {
            first: first.result.clone(),
            second: second.result.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use alchemy_types::{Category, Element, ElementId, LocalizedText, Recipe};

    use super::*;

    fn tiny_catalog(keys: &[&str]) -> ElementCatalog {
        let mut catalog = ElementCatalog::new();
        for key in keys {
            let _ = catalog.insert(Element {
                id: ElementId::from(*key),
                icon: "•".to_owned(),
                name: LocalizedText::new(key, key),
                category: Category::Basic,
                description: None,
                price: None,
            });
        }
        catalog
    }

    #[test]
    fn standard_data_is_valid() {
        let data = ReferenceData::standard();
        assert!(data.is_ok(), "{data:?}");
    }

    #[test]
    fn every_request_target_is_craftable() {
        use alchemy_types::RequestReward;
        let Ok(data) = ReferenceData::standard() else {
            panic!("standard data must validate");
        };
        for reward in [
            RequestReward::SteamHint,
            RequestReward::IceHint,
            RequestReward::GoldHint,
            RequestReward::DragonHint,
        ] {
            assert!(data.recipes().is_craftable(reward.target_element().as_str()));
        }
    }

    #[test]
    fn rejects_unknown_ingredient() {
        let catalog = tiny_catalog(&["fire", "steam"]);
        let book = RecipeBook::from_recipes([Recipe::new("steam", &["fire", "water"])]);
        let err = ReferenceData::new(catalog, book);
        assert!(matches!(
            err,
            Err(CatalogError::UnknownElement { ref element, .. }) if element.as_str() == "water"
        ));
    }

    #[test]
    fn rejects_duplicate_multiset() {
        let catalog = tiny_catalog(&["fire", "water", "steam", "fog"]);
        let book = RecipeBook::from_recipes([
            Recipe::new("steam", &["fire", "water"]),
            Recipe::new("fog", &["water", "fire"]),
        ]);
        let err = ReferenceData::new(catalog, book);
        assert!(matches!(
            err,
            Err(CatalogError::DuplicateIngredientSet { ref first, ref second })
                if first.as_str() == "steam" && second.as_str() == "fog"
        ));
    }

    #[test]
    fn rejects_arity_out_of_range() {
        let catalog = tiny_catalog(&["fire", "ash"]);
        let book = RecipeBook::from_recipes([Recipe::new("ash", &["fire"])]);
        assert!(matches!(
            ReferenceData::new(catalog, book),
            Err(CatalogError::ArityOutOfRange { arity: 1, .. })
        ));
    }
}
