//! Loading a game at startup.
//!
//! [`restore`] never fails: a missing save starts a new game, an
//! incompatible or unreadable save is discarded with a warning and a new
//! game starts, and a loaded save is repaired before it is handed back.

use alchemy_game::{BalanceConfig, GameState};
use tracing::{info, warn};

use crate::store::StateStore;

/// Where the restored state came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreSource {
    /// No save existed.
    Fresh,
    /// The save was loaded.
    Loaded {
        /// Whether repair had to change anything.
        repaired: bool,
    },
    /// The save could not be used and a new game was started.
    Discarded {
        /// Why the save was rejected.
        reason: String,
    },
}

/// A restored game.
#[derive(Debug, Clone)]
pub struct Restored {
    /// The state to play with.
    pub state: GameState,
    /// Where it came from.
    pub source: RestoreSource,
}

/// Load the saved game from `store`, falling back to a new game.
pub fn restore(store: &dyn StateStore, player_name: &str, balance: &BalanceConfig) -> Restored {
    match store.load() {
        Ok(Some(saved)) => {
            let mut state = saved.state;
            let repaired = state.repair(balance);
            info!(
                player = %state.player_id,
                level = state.level,
                saved_at = %saved.saved_at,
                repaired,
                "save loaded"
            );
            Restored {
                state,
                source: RestoreSource::Loaded { repaired },
            }
        }
        Ok(None) => {
            info!(player = player_name, "starting new game");
            Restored {
                state: GameState::new(player_name, balance),
                source: RestoreSource::Fresh,
            }
        }
        Err(e) => {
            warn!(error = %e, "save unusable, starting new game");
            Restored {
                state: GameState::new(player_name, balance),
                source: RestoreSource::Discarded {
                    reason: e.to_string(),
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn empty_store_starts_fresh() {
        let store = MemoryStore::new();
        let restored = restore(&store, "Ada", &BalanceConfig::default());
        assert_eq!(restored.source, RestoreSource::Fresh);
        assert_eq!(restored.state.player_name, "Ada");
    }

    #[test]
    fn incompatible_version_starts_fresh() {
        let store = MemoryStore::with_raw(r#"{"version": "9.0.0", "coins": 99999}"#);
        let restored = restore(&store, "Ada", &BalanceConfig::default());
        assert!(matches!(restored.source, RestoreSource::Discarded { .. }));
        assert_eq!(restored.state.coins, 50);
    }

    #[test]
    fn loaded_save_is_repaired() {
        let balance = BalanceConfig::default();
        let mut broken = GameState::new("Ada", &balance);
        broken.companion.trust = 180;
        for entry in broken.elements.values_mut() {
            entry.count = 0;
        }
        let mut store = MemoryStore::new();
        assert!(store.save(&broken).is_ok());

        let restored = restore(&store, "ignored", &balance);
        assert_eq!(restored.source, RestoreSource::Loaded { repaired: true });
        assert_eq!(restored.state.player_name, "Ada");
        assert_eq!(restored.state.companion.trust, 100);
        assert_eq!(restored.state.count_of("fire"), 2);
    }

    #[test]
    fn healthy_save_loads_unchanged() {
        let balance = BalanceConfig::default();
        let mut state = GameState::new("Ada", &balance);
        state.coins = 321;
        let mut store = MemoryStore::new();
        assert!(store.save(&state).is_ok());
        let restored = restore(&store, "Ada", &balance);
        assert_eq!(restored.source, RestoreSource::Loaded { repaired: false });
        assert_eq!(restored.state, state);
    }
}
