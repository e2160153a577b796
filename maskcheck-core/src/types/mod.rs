//! Domain types for maskcheck.
//!
//! - [`Role`]: which of the two file slots an action targets
//! - [`TypeFilter`]: the MIME family a slot accepts
//! - [`SelectedFile`]: a file picked for a slot
//! - [`RoleStatus`]: per-role progress through upload and validation
//! - [`Toast`]: a transient notification
//! - [`PinnedFile`] / [`ValidatedLink`]: results of the two remote calls

mod file;
mod filter;
mod outcome;
mod role;
mod status;
mod toast;

pub use file::*;
pub use filter::*;
pub use outcome::*;
pub use role::*;
pub use status::*;
pub use toast::*;
