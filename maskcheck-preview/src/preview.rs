//! Data-URL preview generation.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use tracing::{debug, instrument};

use maskcheck_core::error::{MaskcheckError, Result};
use maskcheck_core::types::{SelectedFile, TypeFilter};

/// Encodes `bytes` as a `data:<mime>;base64,<payload>` URL.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let payload = BASE64_STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, payload)
}

/// Builds the inline preview for `file` under `filter`.
///
/// Returns an empty string when the filter has no inline preview. The
/// encoding runs on the blocking pool since files can be large.
#[instrument(skip(file), fields(name = %file.name, size = file.len()))]
pub async fn generate_preview(filter: TypeFilter, file: &SelectedFile) -> Result<String> {
    if !filter.is_previewable() {
        debug!(%filter, "No inline preview for filter");
        return Ok(String::new());
    }

    let mime = file.mime.clone();
    let bytes = file.bytes.clone();
    let url = tokio::task::spawn_blocking(move || encode_data_url(&mime, &bytes))
        .await
        .map_err(|e| MaskcheckError::PreviewFailed(e.to_string()))?;

    debug!(len = url.len(), "Preview generated");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_encode_data_url() {
        assert_eq!(encode_data_url("text/plain", b"hi"), "data:text/plain;base64,aGk=");
        assert_eq!(encode_data_url("image/png", b""), "data:image/png;base64,");
    }

    #[test_case(TypeFilter::Image, "photo.png")]
    #[test_case(TypeFilter::Pdf, "cert.pdf")]
    #[test_case(TypeFilter::Mp4, "clip.mp4")]
    #[test_case(TypeFilter::Mp3, "voice.mp3")]
    #[tokio::test]
    async fn test_previewable_filters_produce_data_url(filter: TypeFilter, name: &str) {
        let file = SelectedFile::new(name, b"content".to_vec());
        let preview = generate_preview(filter, &file).await.unwrap();
        assert!(preview.starts_with(&format!("data:{};base64,", file.mime)));
        assert!(preview.ends_with("Y29udGVudA=="));
    }

    #[tokio::test]
    async fn test_doc_filter_has_empty_preview() {
        let file = SelectedFile::new("letter.doc", b"content".to_vec());
        let preview = generate_preview(TypeFilter::Doc, &file).await.unwrap();
        assert!(preview.is_empty());
    }

    #[tokio::test]
    async fn test_preview_uses_file_mime_not_filter() {
        // An image/* filter still encodes the concrete type of the file
        let file = SelectedFile::new("scan.jpg", vec![1u8, 2, 3]);
        let preview = generate_preview(TypeFilter::Image, &file).await.unwrap();
        assert!(preview.starts_with("data:image/jpeg;base64,"));
    }
}
