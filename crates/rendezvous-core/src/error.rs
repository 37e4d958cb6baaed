//! Error types for the participants list

use thiserror::Error;

use crate::types::ParticipantId;

/// Main error type for participant list operations
#[derive(Error, Debug)]
pub enum ParticipantsError {
    /// The delete operation resolved without a replacement event
    #[error("Failed to delete guest {guest_id}")]
    DeleteFailed { guest_id: ParticipantId },

    /// The delete operation did not resolve within the configured timeout
    #[error("Deleting guest {guest_id} timed out after {timeout_ms}ms")]
    DeleteTimedOut {
        guest_id: ParticipantId,
        timeout_ms: u64,
    },

    /// A new event snapshot no longer contains the guest pending deletion
    #[error("Guest {guest_id} is no longer part of the event")]
    StaleSnapshot { guest_id: ParticipantId },

    /// A required field was absent from incoming event or user data
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Confirmation was requested with no guest staged for deletion
    #[error("No guest is pending deletion")]
    NoPendingDelete,

    /// A delete is already outstanding
    #[error("A guest delete is already in flight")]
    DeleteInFlight,

    /// Error raised by the parent's delete operation
    #[error("Backend error: {0}")]
    Backend(String),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParticipantsError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        ParticipantsError::MissingField {
            field: field.into(),
        }
    }
}

/// Result type alias using ParticipantsError
pub type ParticipantsResult<T> = Result<T, ParticipantsError>;
