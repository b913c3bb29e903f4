//! Error types for the `alchemy-game` crate.
//!
//! Every variant is an expected, locally recoverable outcome of a player
//! action. An operation that returns one of these has left the game state
//! exactly as it found it (failed crafts have already refunded their
//! ingredients by the time the error is returned).

use alchemy_types::{ElementId, TreatKind};
use chrono::NaiveDate;

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Craft attempted with fewer ingredients than the minimum.
    #[error("not enough ingredients: got {provided}, need at least {min}")]
    InsufficientIngredients {
        /// Ingredients supplied.
        provided: usize,
        /// Minimum required.
        min: usize,
    },

    /// Craft attempted with more ingredients than the maximum.
    #[error("too many ingredients: got {provided}, at most {max} allowed")]
    TooManyIngredients {
        /// Ingredients supplied.
        provided: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// The ingredient list does not match any recipe. The ingredients have
    /// been returned to the inventory.
    #[error("no recipe matches {} ingredients", refunded.len())]
    NoMatchingRecipe {
        /// The ingredients returned to the inventory.
        refunded: Vec<ElementId>,
    },

    /// An ingredient could not be reserved because too few are held.
    #[error("not enough {element}: wanted {requested}, have {available}")]
    IngredientUnavailable {
        /// The element that ran short.
        element: ElementId,
        /// Units wanted.
        requested: u32,
        /// Units held.
        available: u32,
    },

    /// The player cannot afford a purchase.
    #[error("insufficient funds: price {price}, have {available}")]
    InsufficientFunds {
        /// Price of the item.
        price: u64,
        /// Coins held.
        available: u64,
    },

    /// A treat was requested with zero stock.
    #[error("no {} left", kind.as_str())]
    InsufficientResource {
        /// The treat that ran out.
        kind: TreatKind,
    },

    /// The active request cannot be fulfilled with the current inventory.
    #[error("request needs {needed} {element}, have {available}")]
    RequestUnfulfillable {
        /// The first element found short.
        element: ElementId,
        /// Units needed.
        needed: u32,
        /// Units held.
        available: u32,
    },

    /// No companion request is active.
    #[error("the companion has not asked for anything")]
    NoActiveRequest,

    /// The daily bonus was already claimed for this date.
    #[error("daily bonus already claimed on {0}")]
    DailyBonusAlreadyClaimed(NaiveDate),

    /// The element is not sold in the shop.
    #[error("{0} is not for sale")]
    NotForSale(ElementId),

    /// An arithmetic overflow occurred while applying a change.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
