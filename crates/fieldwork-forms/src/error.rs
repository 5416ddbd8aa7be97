//! Error types for form lifecycle operations.

use thiserror::Error;

/// Lifecycle and collaborator errors.
///
/// Nothing here is fatal to the host: the worst case of any failure
/// path is that one form operation did not complete.
#[derive(Debug, Error)]
pub enum FormsError {
    /// The form to bind to does not exist.
    #[error("form not found: {0}")]
    FormNotFound(String),

    /// The per-form configuration attribute could not be parsed.
    #[error("invalid form configuration: {0}")]
    BadConfig(String),

    /// Network or non-2xx response during submission, normalized to a
    /// user-facing message.
    #[error("{message}")]
    Transport {
        /// Server-supplied message when present, status-derived
        /// generic otherwise.
        message: String,
    },
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormsError>;
