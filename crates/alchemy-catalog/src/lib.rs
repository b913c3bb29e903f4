//! Reference data for the Alchemy idle game.
//!
//! This crate holds everything that is fixed at build time: what elements
//! exist, what they look like, and which ingredient multisets combine into
//! what. Nothing here mutates during play.
//!
//! # Modules
//!
//! - [`catalog`] -- [`ElementCatalog`]: display metadata and shop prices.
//! - [`recipes`] -- [`RecipeBook`]: the recipe table and the multiset
//!   resolver with its first-match-wins tie-break.
//! - [`reference`] -- [`ReferenceData`]: catalog and recipes validated
//!   together at load time.
//! - [`starting_catalog`] -- The canonical tables shipped with the game.
//! - [`error`] -- Authoring errors in the reference data.

pub mod catalog;
pub mod error;
pub mod recipes;
pub mod reference;
pub mod starting_catalog;

pub use catalog::{DEFAULT_BASE_PRICE, ElementCatalog, UNKNOWN_ICON};
pub use error::CatalogError;
pub use recipes::{MAX_INGREDIENTS, MIN_INGREDIENTS, RecipeBook};
pub use reference::ReferenceData;
pub use starting_catalog::{create_standard_catalog, create_standard_recipes};
