//! Client for the backend route that validates pinned gateway links.
//!
//! The backend itself lives elsewhere; this crate only speaks its
//! `POST /api/validategetlink` contract.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod client;

pub use client::{ValidationClient, ValidationConfig};
