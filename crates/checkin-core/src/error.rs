// error.rs — Error types for the check-in subsystem.

use thiserror::Error;

/// Errors from the storage and notification boundaries.
///
/// None of these are fatal: persistence-write failures are swallowed by the
/// store (in-memory state stays authoritative), and decode failures never
/// surface past the codec.
#[derive(Debug, Error)]
pub enum CheckInError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },

    /// Failed to serialize/deserialize check-in data.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A notification dispatch failed (non-fatal).
    #[error("notification error: {0}")]
    NotificationError(String),
}

/// User-input validation failures from `apply_check_in`.
///
/// Returned as values, never panicked — the view renders them as
/// field-level hints next to the offending input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The attendee name was empty after trimming.
    #[error("attendee name must not be empty")]
    EmptyName,

    /// The submitted team code is not one of the recognized codes.
    #[error("unrecognized team code")]
    UnknownTeam,
}
