//! Storage backends for save snapshots.
//!
//! [`StateStore`] is the seam between the session and wherever the save
//! lives. [`JsonFileStore`] writes a JSON file into a save directory,
//! replacing it atomically through a temporary file and a rename.
//! [`MemoryStore`] keeps the encoded snapshot in memory for tests and
//! throwaway sessions.

use std::fs;
use std::path::{Path, PathBuf};

use alchemy_game::GameState;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::snapshot::SavedState;

/// File name of the save inside the save directory.
pub const SAVE_FILE: &str = "save.json";

/// Load and save one player's snapshot.
pub trait StateStore: Send {
    /// Load the stored snapshot, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot cannot be read or decoded.
    fn load(&self) -> Result<Option<SavedState>, StoreError>;

    /// Snapshot and persist `state`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the snapshot cannot be written.
    fn save(&mut self, state: &GameState) -> Result<SavedState, StoreError>;
}

// ---------------------------------------------------------------------------
// JSON file
// ---------------------------------------------------------------------------

/// Save file in a directory on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The save directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the save file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(SAVE_FILE)
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<SavedState>, StoreError> {
        let path = self.path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no save file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        SavedState::decode(&contents).map(Some)
    }

    fn save(&mut self, state: &GameState) -> Result<SavedState, StoreError> {
        let snapshot = SavedState::capture(state);
        let json = snapshot.encode()?;
        write_atomic(&self.dir, SAVE_FILE, &json)?;
        info!(path = %self.path().display(), level = state.level, "game saved");
        Ok(snapshot)
    }
}

/// Write `contents` to `dir/name` via a temporary file and a rename.
pub(crate) fn write_atomic(dir: &Path, name: &str, contents: &str) -> Result<(), StoreError> {
    fs::create_dir_all(dir)?;
    let tmp = dir.join(format!(".{name}.tmp"));
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, dir.join(name))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Memory
// ---------------------------------------------------------------------------

/// In-memory store holding the encoded snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// Create a store pre-loaded with raw snapshot JSON.
    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            slot: Some(json.into()),
        }
    }

    /// The raw snapshot JSON, if any.
    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<SavedState>, StoreError> {
        self.slot.as_deref().map(SavedState::decode).transpose()
    }

    fn save(&mut self, state: &GameState) -> Result<SavedState, StoreError> {
        let snapshot = SavedState::capture(state);
        self.slot = Some(snapshot.encode()?);
        Ok(snapshot)
    }
}
