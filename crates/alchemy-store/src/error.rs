//! Error types for the persistence layer.

/// Errors that can occur while loading or saving.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible game version.
    #[error("incompatible save version {found:?}, expected major version of {expected}")]
    IncompatibleSaveVersion {
        /// Version found in the snapshot, if any.
        found: Option<String>,
        /// Version this build writes.
        expected: &'static str,
    },
}
