//! MIME-type filters a role can be restricted to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MaskcheckError;

/// The fixed set of type filters offered by the form.
///
/// Renders to and parses from the exact MIME strings used as the file
/// input's `accept` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeFilter {
    /// `image/*`
    Image,
    /// `application/pdf`
    Pdf,
    /// `application/msword`
    Doc,
    /// `video/mp4`
    Mp4,
    /// `audio/mp3`
    Mp3,
}

/// How a previewable file is shown inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    /// `<img>`
    Image,
    /// `<iframe>`
    Pdf,
    /// `<video controls>`
    Video,
    /// `<audio controls>`
    Audio,
}

impl TypeFilter {
    /// Every filter, in the order the form lists them.
    pub const ALL: [TypeFilter; 5] = [
        TypeFilter::Image,
        TypeFilter::Pdf,
        TypeFilter::Doc,
        TypeFilter::Mp4,
        TypeFilter::Mp3,
    ];

    /// The `accept` string for this filter.
    pub fn as_mime(&self) -> &'static str {
        match self {
            TypeFilter::Image => "image/*",
            TypeFilter::Pdf => "application/pdf",
            TypeFilter::Doc => "application/msword",
            TypeFilter::Mp4 => "video/mp4",
            TypeFilter::Mp3 => "audio/mp3",
        }
    }

    /// Human label shown in the type picker.
    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::Image => "Image (JPEG, PNG, etc.)",
            TypeFilter::Pdf => "PDF",
            TypeFilter::Doc => "DOC",
            TypeFilter::Mp4 => "MP4 Video",
            TypeFilter::Mp3 => "MP3 Audio",
        }
    }

    /// How files of this filter are previewed, if at all.
    pub fn preview_kind(&self) -> Option<PreviewKind> {
        match self {
            TypeFilter::Image => Some(PreviewKind::Image),
            TypeFilter::Pdf => Some(PreviewKind::Pdf),
            TypeFilter::Mp4 => Some(PreviewKind::Video),
            TypeFilter::Mp3 => Some(PreviewKind::Audio),
            TypeFilter::Doc => None,
        }
    }

    /// Returns true if files of this filter get an inline preview.
    pub fn is_previewable(&self) -> bool {
        self.preview_kind().is_some()
    }

    /// Checks a concrete MIME type against this filter.
    ///
    /// Mirrors the browser `accept` attribute: a hint, not an enforcement.
    pub fn accepts(&self, mime: &str) -> bool {
        let mime = mime.trim().to_ascii_lowercase();
        match self {
            TypeFilter::Image => mime.starts_with("image/"),
            // mp3 files are registered as audio/mpeg
            TypeFilter::Mp3 => mime == "audio/mp3" || mime == "audio/mpeg",
            other => mime == other.as_mime(),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_mime())
    }
}

impl FromStr for TypeFilter {
    type Err = MaskcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        TypeFilter::ALL
            .into_iter()
            .find(|f| f.as_mime().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MaskcheckError::InvalidTypeFilter(s.to_string()))
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = MaskcheckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(value: TypeFilter) -> Self {
        value.as_mime().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("image/*", TypeFilter::Image)]
    #[test_case("application/pdf", TypeFilter::Pdf)]
    #[test_case("application/msword", TypeFilter::Doc)]
    #[test_case("video/mp4", TypeFilter::Mp4)]
    #[test_case("audio/mp3", TypeFilter::Mp3)]
    fn test_parse_round_trip(s: &str, expected: TypeFilter) {
        let parsed: TypeFilter = s.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), s);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "text/plain".parse::<TypeFilter>().unwrap_err();
        assert!(matches!(err, MaskcheckError::InvalidTypeFilter(s) if s == "text/plain"));
    }

    #[test]
    fn test_only_doc_is_not_previewable() {
        let previewable: Vec<_> = TypeFilter::ALL
            .into_iter()
            .filter(|f| !f.is_previewable())
            .collect();
        assert_eq!(previewable, vec![TypeFilter::Doc]);
    }

    #[test_case(TypeFilter::Image, "image/png", true)]
    #[test_case(TypeFilter::Image, "IMAGE/JPEG", true)]
    #[test_case(TypeFilter::Image, "application/pdf", false)]
    #[test_case(TypeFilter::Mp3, "audio/mpeg", true)]
    #[test_case(TypeFilter::Mp4, "video/webm", false)]
    #[test_case(TypeFilter::Doc, "application/msword", true)]
    fn test_accepts(filter: TypeFilter, mime: &str, expected: bool) {
        assert_eq!(filter.accepts(mime), expected);
    }

    #[test]
    fn test_serde_as_mime_string() {
        let json = serde_json::to_string(&TypeFilter::Pdf).unwrap();
        assert_eq!(json, "\"application/pdf\"");
        assert!(serde_json::from_str::<TypeFilter>("\"video/avi\"").is_err());
    }
}
