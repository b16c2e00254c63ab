/*! Markup tree adapter.

Wraps a forgiving HTML parse ([scraper], html5ever-based) behind a small
surface: document-order element iteration, ancestry (through
[scraper::ElementRef]) and plain-text extraction.

html5ever never fails outright, it always produces *some* tree. Parse
failure is therefore decided on the input itself: empty documents and
inputs with no tag-open sequence (crash dumps, SQL error strings and other
non-markup payloads found in crawls) are refused before parsing so that
callers can flag the document instead of scanning a meaningless tree.
!*/
use scraper::{ElementRef, Html};

use crate::error::Error;

/// Tag names whose text content is not document text.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript"];

/// A parsed HTML document.
pub struct HtmlTree {
    doc: Html,
}

impl HtmlTree {
    /// Parse raw markup into a navigable tree.
    ///
    /// # Errors
    /// [Error::Markup] when the input is empty or does not look like
    /// markup at all. Malformed markup is *not* an error: the underlying
    /// parser recovers and yields a tree.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        if raw.trim().is_empty() {
            return Err(Error::Markup("empty document".to_string()));
        }
        if !looks_like_markup(raw) {
            return Err(Error::Markup("input contains no markup".to_string()));
        }

        Ok(Self {
            doc: Html::parse_document(raw),
        })
    }

    /// All elements in document order (pre-order, depth-first), root
    /// included.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
    }

    /// Concatenated text content, one line per text node, skipping
    /// script/style bodies.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in self.doc.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            if let Some(parent) = node.parent().and_then(ElementRef::wrap) {
                if NON_CONTENT_TAGS.contains(&parent.value().name()) {
                    continue;
                }
            }
            let text = text.trim();
            if !text.is_empty() {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(text);
            }
        }
        out
    }
}

/// A tag-open sequence: `<` followed by a letter, `/` or `!`.
fn looks_like_markup(raw: &str) -> bool {
    raw.as_bytes()
        .windows(2)
        .any(|w| w[0] == b'<' && (w[1].is_ascii_alphabetic() || w[1] == b'/' || w[1] == b'!'))
}
