//! # maskcheck Core
//!
//! Core types, errors, and traits for the maskcheck "Upload & Validate" form.
//!
//! This crate provides the vocabulary shared by every other maskcheck crate:
//!
//! - **Types**: roles, type filters, selected files, statuses, and toasts
//! - **Errors**: a single error enum with classification helpers
//! - **Constants**: endpoints and environment variable names
//! - **Traits**: the pinning, validation, and notification seams
//!
//! ## Example
//!
//! ```rust
//! use maskcheck_core::{Role, TypeFilter};
//!
//! let filter: TypeFilter = "application/pdf".parse().unwrap();
//! assert!(filter.is_previewable());
//! assert_eq!(Role::Certificate.to_string(), "certificate");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{MaskcheckError, Result};
pub use traits::*;
pub use types::*;
