//! Moving a game between machines as a single JSON file.
//!
//! An export is the same versioned snapshot the save file holds. An import
//! goes through the same version gate, is repaired, and then has every
//! milestone checked, since a state brought in wholesale may already be
//! past several thresholds that were never unlocked.

use std::fs;
use std::path::Path;

use alchemy_game::{BalanceConfig, GameState};
use alchemy_types::Progress;
use tracing::info;

use crate::error::StoreError;
use crate::snapshot::SavedState;

/// A game read back from an export file.
#[derive(Debug, Clone)]
pub struct Imported {
    /// The repaired state, achievements included.
    pub state: GameState,
    /// Whether repair had to change anything.
    pub repaired: bool,
    /// Milestones unlocked on import.
    pub progress: Progress,
}

/// Write `state` to `path` as a snapshot.
///
/// # Errors
///
/// Returns [`StoreError`] if encoding or writing fails.
pub fn export_to(path: &Path, state: &GameState) -> Result<SavedState, StoreError> {
    let snapshot = SavedState::capture(state);
    fs::write(path, snapshot.encode()?)?;
    info!(path = %path.display(), level = state.level, "game exported");
    Ok(snapshot)
}

/// Decode an exported snapshot and bring it within the game's invariants.
///
/// # Errors
///
/// - [`StoreError::IncompatibleSaveVersion`] for another major version.
/// - [`StoreError::Serialization`] for malformed JSON.
pub fn import_snapshot(json: &str, balance: &BalanceConfig) -> Result<Imported, StoreError> {
    let mut state = SavedState::decode(json)?.state;
    let repaired = state.repair(balance);
    let progress = state.check_all_achievements(balance);
    Ok(Imported {
        state,
        repaired,
        progress,
    })
}

/// Read an export file from `path`.
///
/// # Errors
///
/// As [`import_snapshot`], plus [`StoreError::Io`] if the file cannot be
/// read.
pub fn import_from(path: &Path, balance: &BalanceConfig) -> Result<Imported, StoreError> {
    let imported = import_snapshot(&fs::read_to_string(path)?, balance)?;
    info!(
        path = %path.display(),
        level = imported.state.level,
        unlocked = imported.progress.achievements.len(),
        "game imported"
    );
    Ok(imported)
}

#[cfg(test)]
mod tests {
    use alchemy_types::{Achievement, ElementId, InventoryEntry};

    use super::*;

    #[test]
    fn import_unlocks_every_milestone_already_passed() {
        let balance = BalanceConfig::default();
        let mut state = GameState::new("Ada", &balance);
        for i in 0..20 {
            state
                .elements
                .insert(ElementId::new(format!("thing_{i}")), InventoryEntry::discovered(1));
        }
        let json = SavedState::capture(&state).encode().unwrap_or_default();

        let imported = import_snapshot(&json, &balance);
        assert!(imported.is_ok());
        let Ok(imported) = imported else { return };
        let unlocked: Vec<Achievement> =
            imported.progress.achievements.iter().map(|a| a.achievement).collect();
        assert_eq!(unlocked, vec![Achievement::Discovered10, Achievement::Discovered25]);
        assert!(imported.state.achievements.contains(&Achievement::Discovered25));
        // 175 bonus exp also reaches level 2, worth 30 coins
        assert_eq!(imported.state.level, 2);
        assert_eq!(imported.state.coins, 50 + 100 + 250 + 30);
        assert!(imported.state.exp < imported.state.exp_to_next);
    }

    #[test]
    fn import_rejects_other_major_version() {
        let result = import_snapshot(r#"{"version": "3.1.0", "level": 9}"#, &BalanceConfig::default());
        assert!(matches!(result, Err(StoreError::IncompatibleSaveVersion { .. })));
    }

    #[test]
    fn export_then_import_from_file() {
        let dir = std::env::temp_dir().join(format!("alchemy-export-{}", uuid::Uuid::now_v7()));
        assert!(fs::create_dir_all(&dir).is_ok());
        let path = dir.join("export.json");
        let balance = BalanceConfig::default();
        let mut state = GameState::new("Ada", &balance);
        state.coins = 321;

        assert!(export_to(&path, &state).is_ok());
        let imported = import_from(&path, &balance);
        assert!(imported.as_ref().is_ok_and(|i| !i.repaired && i.progress.is_empty()));
        assert_eq!(imported.ok().map(|i| i.state), Some(state));
        let _ = fs::remove_dir_all(dir);
    }
}
