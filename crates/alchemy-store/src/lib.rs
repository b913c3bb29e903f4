//! Persistence for the Alchemy idle game.
//!
//! The game state is saved as one versioned JSON snapshot. Loading checks
//! the version before decoding anything and repairs the decoded state, so
//! a bad save degrades into a new game rather than an error.
//!
//! ```text
//! Session
//!     |
//!     +-- save() ------> StateStore  --> JsonFileStore (save.json)
//!     |                              \-> MemoryStore
//!     +-- restore() <--- SavedState::decode (version gate) --> repair
//!     |
//!     +-- level up ----> Leaderboard (leaderboard.json)
//!     |
//!     +-- export/import  SavedState file --> repair --> milestone check
//! ```
//!
//! # Modules
//!
//! - [`snapshot`] -- [`SavedState`] and the version check
//! - [`store`] -- [`StateStore`] trait, [`JsonFileStore`], [`MemoryStore`]
//! - [`restore`] -- Startup loading with fallback and repair
//! - [`leaderboard`] -- Local top-100 table
//! - [`transfer`] -- Export and import of a game as one file
//! - [`error`] -- [`StoreError`]

pub mod error;
pub mod leaderboard;
pub mod restore;
pub mod snapshot;
pub mod store;
pub mod transfer;

pub use error::StoreError;
pub use leaderboard::{LEADERBOARD_FILE, LEADERBOARD_SIZE, Leaderboard, LeaderboardEntry};
pub use restore::{RestoreSource, Restored, restore};
pub use snapshot::{SAVE_VERSION, SavedState, is_compatible};
pub use store::{JsonFileStore, MemoryStore, SAVE_FILE, StateStore};
pub use transfer::{Imported, export_to, import_from, import_snapshot};
