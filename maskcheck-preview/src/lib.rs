//! Local previews for files picked in the form.
//!
//! Previews never touch the network: the file content is inlined as a
//! `data:` URL and rendered with the element matching its type filter.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod html;
mod preview;

pub use html::{render_page, render_preview, PreviewSection};
pub use preview::{encode_data_url, generate_preview};
