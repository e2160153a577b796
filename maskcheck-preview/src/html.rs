//! Preview markup.
//!
//! Renders the same elements a browser form would show: an `<img>`,
//! `<iframe>`, `<video>` or `<audio>` depending on the type filter, plus the
//! result banner.

use maskcheck_core::types::{PreviewKind, TypeFilter};

/// One preview block on the page.
#[derive(Clone, Debug)]
pub struct PreviewSection {
    /// Heading above the preview (e.g. "Preview:")
    pub heading: String,
    /// Filter the file was picked under
    pub filter: TypeFilter,
    /// Data URL; sections with an empty URL are skipped
    pub data_url: String,
}

/// Renders the inline element for one preview.
///
/// Returns `None` when there is nothing to show.
pub fn render_preview(filter: TypeFilter, data_url: &str) -> Option<String> {
    if data_url.is_empty() {
        return None;
    }
    let src = escape(data_url);
    let markup = match filter.preview_kind()? {
        PreviewKind::Image => format!(r#"<img src="{}" alt="Preview">"#, src),
        PreviewKind::Pdf => format!(r#"<iframe src="{}" title="PDF Preview"></iframe>"#, src),
        PreviewKind::Video => format!(r#"<video src="{}" controls></video>"#, src),
        PreviewKind::Audio => format!(r#"<audio src="{}" controls></audio>"#, src),
    };
    Some(markup)
}

/// Renders a standalone page with all previews and banner lines.
pub fn render_page(title: &str, sections: &[PreviewSection], banner: &[String]) -> String {
    let mut body = String::new();

    for section in sections {
        if let Some(element) = render_preview(section.filter, &section.data_url) {
            body.push_str(&format!(
                "<section>\n<h3>{}</h3>\n{}\n</section>\n",
                escape(&section.heading),
                element
            ));
        }
    }

    for line in banner.iter().filter(|l| !l.is_empty()) {
        body.push_str(&format!("<div class=\"banner\">{}</div>\n", escape(line)));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<h2>{title}</h2>\n{body}</body>\n</html>\n",
        title = escape(title),
        body = body,
        STYLE = STYLE,
    )
}

const STYLE: &str = "body{font-family:sans-serif;max-width:32rem;margin:2rem auto}\
img,iframe,video,audio{width:100%;max-height:20rem;border:1px solid #ccc}\
.banner{margin-top:1.5rem;padding:1rem;background:#dcfce7;border:1px solid #4ade80}";

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const URL: &str = "data:x/y;base64,AAAA";

    #[test_case(TypeFilter::Image, "<img ")]
    #[test_case(TypeFilter::Pdf, "<iframe ")]
    #[test_case(TypeFilter::Mp4, "<video ")]
    #[test_case(TypeFilter::Mp3, "<audio ")]
    fn test_element_per_filter(filter: TypeFilter, tag: &str) {
        let markup = render_preview(filter, URL).unwrap();
        assert!(markup.starts_with(tag));
        assert!(markup.contains(URL));
    }

    #[test]
    fn test_nothing_for_doc_or_empty() {
        assert!(render_preview(TypeFilter::Doc, URL).is_none());
        assert!(render_preview(TypeFilter::Image, "").is_none());
    }

    #[test]
    fn test_page_escapes_banner() {
        let page = render_page(
            "Validate Masked Element",
            &[PreviewSection {
                heading: "Preview:".into(),
                filter: TypeFilter::Image,
                data_url: URL.into(),
            }],
            &["Validation successful for element! Link: <a>, Username: bob".into()],
        );
        assert!(page.contains("<h3>Preview:</h3>"));
        assert!(page.contains("Link: &lt;a&gt;"));
        assert!(!page.contains("<a>"));
    }

    #[test]
    fn test_page_skips_empty_sections() {
        let page = render_page(
            "t",
            &[PreviewSection {
                heading: "Certificate Preview:".into(),
                filter: TypeFilter::Doc,
                data_url: String::new(),
            }],
            &[],
        );
        assert!(!page.contains("Certificate Preview:"));
        assert!(!page.contains("class=\"banner\""));
    }
}
