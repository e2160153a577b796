//! Error types for maskcheck.
//!
//! One error hierarchy built with `thiserror`, grouped by the stage of the
//! form that produces it.

use thiserror::Error;

use crate::types::Role;

/// Result type alias using `MaskcheckError`.
pub type Result<T> = std::result::Result<T, MaskcheckError>;

/// Main error type for all maskcheck operations.
#[derive(Debug, Error)]
pub enum MaskcheckError {
    // ═══════════════════════════════════════════════════════════════════════════
    // FORM ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// A file was offered for a role whose type filter is not set.
    #[error("No type selected for {0}")]
    NoTypeFilter(Role),

    /// A type filter string outside the supported set.
    #[error("Unsupported type filter: {0}")]
    InvalidTypeFilter(String),

    /// Local preview could not be produced.
    #[error("Preview failed: {0}")]
    PreviewFailed(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // IPFS ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Pinning upload failed (non-2xx, transport, or unreadable body).
    #[error("IPFS upload failed: {0}")]
    IpfsUploadFailed(String),

    /// The pinning service returned an unusable content hash.
    #[error("Invalid IPFS CID: {0}")]
    InvalidIpfsCid(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The validation route rejected the link or answered with garbage.
    #[error("Link validation failed: {0}")]
    ValidationFailed(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // NETWORK ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request timed out.
    #[error("Connection timeout: {0}")]
    ConnectionTimeout(String),

    /// A configured endpoint is not a valid URL.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // ═══════════════════════════════════════════════════════════════════════════
    // STORAGE ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// File I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error (missing credentials, bad values).
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl MaskcheckError {
    /// Returns true if retrying the same action could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MaskcheckError::HttpError(_) | MaskcheckError::ConnectionTimeout(_)
        )
    }

    /// Returns true if the error came from talking to a remote service.
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            MaskcheckError::HttpError(_)
                | MaskcheckError::ConnectionTimeout(_)
                | MaskcheckError::IpfsUploadFailed(_)
                | MaskcheckError::ValidationFailed(_)
        )
    }

    /// Returns true if the error is a form precondition failure.
    ///
    /// These never reach the network.
    pub fn is_form_error(&self) -> bool {
        matches!(
            self,
            MaskcheckError::NoTypeFilter(_) | MaskcheckError::InvalidTypeFilter(_)
        )
    }
}
