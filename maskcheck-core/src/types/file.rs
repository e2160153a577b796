//! Files picked for a role.

use std::path::Path;

use bytes::Bytes;

use crate::constants::FALLBACK_MIME;
use crate::error::Result;

/// A file chosen in the picker: name, MIME type, and full content.
///
/// Content is held as [`Bytes`] so the preview and upload paths share one
/// buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as shown to the user and sent to the pinning service
    pub name: String,
    /// MIME type (declared or guessed from the name)
    pub mime: String,
    /// Raw file content
    pub bytes: Bytes,
}

impl SelectedFile {
    /// Creates a file, guessing its MIME type from the name.
    pub fn new(name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let name = name.into();
        let mime = guess_mime(&name);
        Self {
            name,
            mime,
            bytes: bytes.into(),
        }
    }

    /// Creates a file with an explicit MIME type.
    pub fn with_mime(
        name: impl Into<String>,
        mime: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        let mime = mime.into();
        Self {
            name: name.into(),
            mime: if mime.trim().is_empty() {
                FALLBACK_MIME.to_string()
            } else {
                mime
            },
            bytes: bytes.into(),
        }
    }

    /// Loads a file from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        Ok(Self::new(name, bytes))
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the file has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}
