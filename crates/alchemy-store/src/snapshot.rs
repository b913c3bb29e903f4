//! The versioned save snapshot.
//!
//! A snapshot is the whole [`GameState`] flattened into one JSON object
//! next to a `version` string and a `saved_at` timestamp. Versions are
//! compatible when their major component matches. The version is checked
//! on the raw JSON value before the state itself is decoded, so a save
//! from an incompatible build is never partially loaded.

use alchemy_game::GameState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Version written into every snapshot.
pub const SAVE_VERSION: &str = "1.0.0";

/// A game state as written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Game version that wrote the snapshot.
    pub version: String,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// The captured state.
    #[serde(flatten)]
    pub state: GameState,
}

impl SavedState {
    /// Capture a state now. The copy is taken in one synchronous step.
    pub fn capture(state: &GameState) -> Self {
        Self {
            version: SAVE_VERSION.to_owned(),
            saved_at: Utc::now(),
            state: state.clone(),
        }
    }

    /// Encode as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if encoding fails.
    pub fn encode(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a snapshot, rejecting incompatible versions first.
    ///
    /// # Errors
    ///
    /// - [`StoreError::IncompatibleSaveVersion`] if the version is missing
    ///   or its major component differs from [`SAVE_VERSION`].
    /// - [`StoreError::Serialization`] if the JSON is malformed.
    pub fn decode(json: &str) -> Result<Self, StoreError> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        let found = raw
            .get("version")
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned);
        if !found.as_deref().is_some_and(is_compatible) {
            return Err(StoreError::IncompatibleSaveVersion {
                found,
                expected: SAVE_VERSION,
            });
        }
        Ok(serde_json::from_value(raw)?)
    }
}

fn major(version: &str) -> Option<u32> {
    version.split('.').next()?.trim().parse().ok()
}

/// Whether a snapshot version can be loaded by this build.
pub fn is_compatible(version: &str) -> bool {
    major(version).is_some_and(|m| Some(m) == major(SAVE_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_versions_share_major() {
        assert!(is_compatible("1.0.0"));
        assert!(is_compatible("1.4.2"));
        assert!(!is_compatible("2.0.0"));
        assert!(!is_compatible("garbage"));
    }

    #[test]
    fn snapshot_round_trips() {
        let mut state = GameState::default();
        state.coins = 1234;
        let saved = SavedState::capture(&state);
        let decoded = saved.encode().and_then(|json| SavedState::decode(&json));
        assert_eq!(decoded.ok().map(|s| s.state), Some(state));
    }

    #[test]
    fn flat_layout_keeps_core_fields_at_top_level() {
        let saved = SavedState::capture(&GameState::default());
        let value = serde_json::to_value(&saved).unwrap_or_default();
        for key in ["version", "saved_at", "player_name", "level", "coins", "companion", "elements"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn rejects_other_major_version() {
        let json = r#"{"version": "2.0.0", "level": 3}"#;
        assert!(matches!(
            SavedState::decode(json),
            Err(StoreError::IncompatibleSaveVersion { found: Some(_), .. })
        ));
    }

    #[test]
    fn rejects_missing_version() {
        assert!(matches!(
            SavedState::decode(r#"{"level": 3}"#),
            Err(StoreError::IncompatibleSaveVersion { found: None, .. })
        ));
    }

    #[test]
    fn sparse_snapshot_fills_defaults() {
        let json = r#"{"version": "1.0.0", "saved_at": "2026-01-01T00:00:00Z", "level": 4, "coins": 7}"#;
        let decoded = SavedState::decode(json);
        assert!(decoded.is_ok());
        let state = decoded.map(|s| s.state).unwrap_or_default();
        assert_eq!(state.level, 4);
        assert_eq!(state.coins, 7);
    }
}
