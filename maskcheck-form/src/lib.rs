//! # maskcheck Form
//!
//! Headless engine behind the "Validate Masked Element" form: two file
//! slots (element and certificate), local previews, and the
//! upload-then-validate pipeline for each slot.
//!
//! ## Example
//!
//! ```rust,ignore
//! use maskcheck_form::{FormConfig, ToastLog, ValidationForm};
//! use maskcheck_core::{Role, SelectedFile, TypeFilter};
//!
//! let toasts = Arc::new(ToastLog::new());
//! let form = ValidationForm::from_config(FormConfig::from_env()?, toasts.clone())?;
//!
//! form.select_type(Role::Element, TypeFilter::Image);
//! form.select_file(Role::Element, vec![SelectedFile::from_path("scan.png").await?]).await?;
//! form.select_type(Role::Certificate, TypeFilter::Pdf);
//! form.select_file(Role::Certificate, vec![SelectedFile::from_path("cert.pdf").await?]).await?;
//!
//! let outcome = form.submit().await;
//! for line in form.banner_lines() {
//!     println!("{line}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod form;
pub mod messages;
mod notify;
mod state;

pub use config::{FormConfig, PipelineMode};
pub use form::{SubmitOutcome, ValidationForm};
pub use notify::ToastLog;
pub use state::{FormState, RoleSlot};
