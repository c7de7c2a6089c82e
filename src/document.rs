//! Parsed documentation page and the query primitives the extractors use
//!
//! Wraps a `scraper::Html` tree. All queries walk the tree in document order
//! (pre-order: an element comes before its descendants, which come before its
//! following siblings).

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Raised when a fetched body cannot be turned into any tree at all
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("page body is empty")]
    Empty,
}

/// A parsed documentation page
pub struct DocumentPage {
    html: Html,
}

impl DocumentPage {
    /// Parse raw response bytes.
    ///
    /// html5ever recovers from broken markup and invalid byte sequences are
    /// replaced with U+FFFD, so any body with content yields a (possibly
    /// partial) tree.
    pub fn parse(body: &[u8]) -> Result<Self, ParseError> {
        Self::parse_str(&String::from_utf8_lossy(body))
    }

    pub fn parse_str(html: &str) -> Result<Self, ParseError> {
        if html.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self {
            html: Html::parse_document(html),
        })
    }

    /// First element of `kind` in the document
    pub fn first_of_kind(&self, kind: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(kind).ok()?;
        self.html.select(&selector).next()
    }

    /// First element of `kind` whose full inner text satisfies `predicate`
    pub fn first_matching<P>(&self, kind: &str, predicate: P) -> Option<ElementRef<'_>>
    where
        P: Fn(&str) -> bool,
    {
        let selector = Selector::parse(kind).ok()?;
        self.html
            .select(&selector)
            .find(|el| predicate(&text_of(el)))
    }

    /// First element of `kind` after `after` in document order.
    ///
    /// Not limited to siblings: documentation pages rarely nest a section's
    /// content inside its heading, so the search continues through the rest of
    /// the document.
    pub fn next_of_kind(&self, after: ElementRef<'_>, kind: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(kind).ok()?;
        let start = (*after).id();
        self.html
            .tree
            .root()
            .descendants()
            .skip_while(|node| node.id() != start)
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el))
    }

    /// Every element of `kind` inside `container`, in document order
    pub fn children_of_kind<'a>(&self, container: ElementRef<'a>, kind: &str) -> Vec<ElementRef<'a>> {
        let selector = match Selector::parse(kind) {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        container.select(&selector).collect()
    }
}

/// Concatenated text of every descendant text node
pub fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Text with each fragment trimmed and empty fragments dropped, joined with
/// nothing in between
pub fn stripped_text_of(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<String>()
}

/// Collapse whitespace runs into a single space and trim
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
    <html>
    <body>
        <h1>CreateFileW function</h1>
        <div class="content">
            <h2>Syntax</h2>
            <p>lede</p>
        </div>
        <div>
            <p>second</p>
            <ul><li>one</li><li><ul><li>nested</li></ul></li></ul>
        </div>
    </body>
    </html>
    "#;

    #[test]
    fn test_empty_body_is_parse_error() {
        assert_eq!(DocumentPage::parse(b"").err(), Some(ParseError::Empty));
        assert_eq!(DocumentPage::parse(b"  \n\t ").err(), Some(ParseError::Empty));
    }

    #[test]
    fn test_stray_non_utf8_byte_keeps_sections() {
        let page = DocumentPage::parse(b"<h2>Syntax</h2><pre>BOOL WriteFile(...)</pre><p>caf\xe9</p>").unwrap();
        let pre = page.first_of_kind("pre").unwrap();
        assert_eq!(text_of(&pre), "BOOL WriteFile(...)");
        let p = page.first_of_kind("p").unwrap();
        assert_eq!(text_of(&p), "caf\u{FFFD}");
    }

    #[test]
    fn test_malformed_markup_still_parses() {
        let page = DocumentPage::parse(b"<h2>Syntax<pre>int x(</h2><p>unterminated").unwrap();
        assert!(page.first_of_kind("h2").is_some());
        assert!(page.first_of_kind("p").is_some());
    }

    #[test]
    fn test_first_of_kind() {
        let page = DocumentPage::parse_str(PAGE).unwrap();
        let h1 = page.first_of_kind("h1").unwrap();
        assert_eq!(text_of(&h1), "CreateFileW function");
        assert!(page.first_of_kind("table").is_none());
    }

    #[test]
    fn test_first_matching_is_case_sensitive_substring() {
        let page = DocumentPage::parse_str(PAGE).unwrap();
        assert!(page.first_matching("h2", |t| t.contains("Synt")).is_some());
        assert!(page.first_matching("h2", |t| t.contains("syntax")).is_none());
        let p = page.first_matching("p", |t| t.contains("sec")).unwrap();
        assert_eq!(text_of(&p), "second");
    }

    #[test]
    fn test_next_of_kind_crosses_parent_boundaries() {
        let page = DocumentPage::parse_str(PAGE).unwrap();
        let h2 = page.first_of_kind("h2").unwrap();
        let p = page.next_of_kind(h2, "p").unwrap();
        assert_eq!(text_of(&p), "lede");
        let after_lede = page.next_of_kind(p, "p").unwrap();
        assert_eq!(text_of(&after_lede), "second");
        assert!(page.next_of_kind(after_lede, "p").is_none());
    }

    #[test]
    fn test_children_of_kind_includes_nested() {
        let page = DocumentPage::parse_str(PAGE).unwrap();
        let ul = page.first_of_kind("ul").unwrap();
        let items: Vec<String> = page
            .children_of_kind(ul, "li")
            .iter()
            .map(|li| stripped_text_of(li))
            .collect();
        assert_eq!(items, vec!["one", "nested", "nested"]);
    }

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("  Return\n   Value \t(HRESULT) "), "Return Value (HRESULT)");
    }
}
