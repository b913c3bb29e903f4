//! Local leaderboard kept next to the save file.
//!
//! One row per player name, sorted by level (highest first), then by
//! discovered elements. Only the top [`LEADERBOARD_SIZE`] rows are kept.

use std::fs;
use std::path::Path;

use alchemy_game::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::store::write_atomic;

/// Maximum number of rows kept.
pub const LEADERBOARD_SIZE: usize = 100;

/// File name of the leaderboard inside the save directory.
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player display name.
    pub name: String,
    /// Level reached.
    pub level: u32,
    /// Elements discovered.
    pub discovered: u32,
    /// When the row was last updated.
    pub recorded_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    /// Build a row from the current state.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            name: state.player_name.clone(),
            level: state.level,
            discovered: u32::try_from(state.discovered_count()).unwrap_or(u32::MAX),
            recorded_at: Utc::now(),
        }
    }
}

/// Sorted, bounded list of leaderboard rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Load the leaderboard from `dir`, empty if missing.
    ///
    /// A file that cannot be decoded is logged and replaced by an empty
    /// board on the next save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read.
    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let path = dir.join(LEADERBOARD_FILE);
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(mut board) => {
                    board.normalize();
                    Ok(board)
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "leaderboard unreadable, starting empty");
                    Ok(Self::default())
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the leaderboard into `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be written.
    pub fn save(&self, dir: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(dir, LEADERBOARD_FILE, &json)
    }

    /// Insert or replace the row for `entry.name`. Returns the 1-based rank
    /// of the row, or `None` if it fell off the board.
    pub fn record(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let name = entry.name.clone();
        self.entries.retain(|e| e.name != name);
        self.entries.push(entry);
        self.normalize();
        let rank = self.entries.iter().position(|e| e.name == name)?;
        debug!(player = %name, rank, "leaderboard updated");
        rank.checked_add(1)
    }

    /// Rows, best first.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| {
            b.level
                .cmp(&a.level)
                .then_with(|| b.discovered.cmp(&a.discovered))
        });
        self.entries.truncate(LEADERBOARD_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, level: u32, discovered: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_owned(),
            level,
            discovered,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn sorted_by_level_then_discoveries() {
        let mut board = Leaderboard::default();
        board.record(entry("a", 3, 10));
        board.record(entry("b", 5, 2));
        board.record(entry("c", 3, 20));
        let names: Vec<&str> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn record_replaces_same_player() {
        let mut board = Leaderboard::default();
        board.record(entry("a", 1, 6));
        let rank = board.record(entry("a", 4, 9));
        assert_eq!(rank, Some(1));
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries().first().map(|e| e.level), Some(4));
    }

    #[test]
    fn board_is_bounded() {
        let mut board = Leaderboard::default();
        for i in 0..150_u32 {
            board.record(entry(&format!("p{i}"), i, 0));
        }
        assert_eq!(board.entries().len(), LEADERBOARD_SIZE);
        assert_eq!(board.entries().first().map(|e| e.level), Some(149));
        assert_eq!(board.record(entry("low", 0, 0)), None);
    }

    #[test]
    fn persists_to_directory() {
        let dir = std::env::temp_dir().join(format!("alchemy-board-{}", uuid::Uuid::now_v7()));
        let mut board = Leaderboard::default();
        board.record(entry("a", 2, 7));
        assert!(board.save(&dir).is_ok());
        let loaded = Leaderboard::load(&dir);
        assert_eq!(loaded.ok(), Some(board));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = std::env::temp_dir().join(format!("alchemy-board-{}", uuid::Uuid::now_v7()));
        assert!(fs::create_dir_all(&dir).is_ok());
        assert!(fs::write(dir.join(LEADERBOARD_FILE), "garbage").is_ok());
        let loaded = Leaderboard::load(&dir);
        assert_eq!(loaded.ok(), Some(Leaderboard::default()));
        let _ = fs::remove_dir_all(dir);
    }
}
