//! Common traits for maskcheck.
//!
//! The form talks to the outside world only through these seams, so the
//! pinning service, the validation backend, and the toast surface can each
//! be swapped (or faked in tests).

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{PinnedFile, SelectedFile, Toast, ValidatedLink};

// ═══════════════════════════════════════════════════════════════════════════════
// PINNING
// ═══════════════════════════════════════════════════════════════════════════════

/// Stores a file on IPFS and hands back its public gateway URL.
#[async_trait]
pub trait Pinner: Send + Sync {
    /// Uploads and pins `file`.
    async fn pin_file(&self, file: &SelectedFile) -> Result<PinnedFile>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// VALIDATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Asks the backend whether a gateway link is valid.
#[async_trait]
pub trait LinkValidator: Send + Sync {
    /// Validates `link`, returning what the backend resolved it to.
    async fn validate_link(&self, link: &str) -> Result<ValidatedLink>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// NOTIFICATIONS
// ═══════════════════════════════════════════════════════════════════════════════

/// Receives toasts raised by the form.
pub trait Notifier: Send + Sync {
    /// Shows (or records) a toast.
    fn notify(&self, toast: Toast);
}
