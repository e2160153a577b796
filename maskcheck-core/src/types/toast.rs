//! Transient notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Something finished as intended.
    Success,
    /// Something failed.
    Error,
}

/// A transient notification raised by the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Severity
    pub level: ToastLevel,
    /// Text shown to the user
    pub message: String,
    /// When the toast was raised
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }

    /// Returns true for error toasts.
    pub fn is_error(&self) -> bool {
        self.level == ToastLevel::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = Toast::success("done");
        assert_eq!(ok.level, ToastLevel::Success);
        assert!(!ok.is_error());

        let bad = Toast::error("nope");
        assert!(bad.is_error());
        assert_eq!(bad.message, "nope");
    }
}
