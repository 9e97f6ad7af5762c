//! Error types for the interview upload panel.
//!
//! - [`SubmitError`] - everything that can stop a submission
//! - [`PreviewError`] - object URL creation failures for the video preview
//!
//! None of these escape the form: each submit failure is turned into a
//! [`StatusMessage`] and shown in the status line.

use thiserror::Error;

use crate::types::StatusMessage;

// =============================================================================
// Submit Errors
// =============================================================================

/// Errors raised while submitting an interview.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required field is empty.
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    /// The selected video is over the size ceiling.
    #[error("Video is {size} bytes, over the {limit_mb}MB limit")]
    SizeLimit { size: u64, limit_mb: u64 },

    /// No upload endpoint was configured.
    #[error("Backend URL not found")]
    Configuration,

    /// The request could not be sent.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server rejected the interview (status {status})")]
    Upload { status: u16 },
}

impl SubmitError {
    /// What the status line shows for this failure.
    ///
    /// Configuration, network and server failures all collapse into the same
    /// generic message.
    pub fn status_message(&self) -> StatusMessage {
        match self {
            SubmitError::Validation { .. } => StatusMessage::MissingFields,
            SubmitError::SizeLimit { limit_mb, .. } => StatusMessage::VideoTooLarge {
                limit_mb: *limit_mb,
            },
            SubmitError::Configuration | SubmitError::Network(_) | SubmitError::Upload { .. } => {
                StatusMessage::UploadFailed
            }
        }
    }
}

// =============================================================================
// Preview Errors
// =============================================================================

/// The browser refused to create a playable reference for the selected file.
#[derive(Debug, Error)]
#[error("Failed to create video preview: {0}")]
pub struct PreviewError(pub String);

/// Result type for submit operations.
pub type SubmitResult<T> = Result<T, SubmitError>;
