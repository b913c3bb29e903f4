//! Error types for the `alchemy-catalog` crate.
//!
//! Catalog errors are authoring errors in the reference data. They are
//! raised once, when the tables are assembled, never during play.

use alchemy_types::ElementId;

/// Errors detected while assembling or validating reference data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Two catalog entries share the same key.
    #[error("duplicate element id: {0}")]
    DuplicateElement(ElementId),

    /// A recipe mentions an element that is not in the catalog.
    #[error("recipe for {result} references unknown element {element}")]
    UnknownElement {
        /// The result of the offending recipe.
        result: ElementId,
        /// The identifier that failed to resolve.
        element: ElementId,
    },

    /// Two recipes have the same ingredient multiset.
    #[error("recipes for {first} and {second} share the same ingredient set")]
    DuplicateIngredientSet {
        /// Result of the recipe that wins resolution.
        first: ElementId,
        /// Result of the recipe that can never be reached.
        second: ElementId,
    },

    /// A recipe has too few or too many ingredients.
    #[error("recipe for {result} has {arity} ingredients, expected {min}..={max}")]
    ArityOutOfRange {
        /// The result of the offending recipe.
        result: ElementId,
        /// Actual ingredient count.
        arity: usize,
        /// Minimum allowed.
        min: usize,
        /// Maximum allowed.
        max: usize,
    },
}
