//! Syntax block extraction

use crate::document::DocumentPage;

use super::{text_after_section, HeadingLabel};

/// The first preformatted block after the "Syntax" heading, trimmed
pub fn extract_syntax(page: &DocumentPage) -> String {
    text_after_section(page, HeadingLabel::Syntax, "pre")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax(html: &str) -> String {
        extract_syntax(&DocumentPage::parse_str(html).unwrap())
    }

    #[test]
    fn test_syntax_block_after_heading() {
        let html = r#"<h2>Syntax</h2><pre>BOOL WriteFile(...)</pre>"#;
        assert_eq!(syntax(html), "BOOL WriteFile(...)");
    }

    #[test]
    fn test_syntax_ignores_code_before_heading() {
        let html = r#"
        <pre>// unrelated sample</pre>
        <h2 id="syntax">Syntax</h2>
        <div class="codeHeader">C++</div>
        <pre>
            HANDLE GetCurrentProcess();
        </pre>
        "#;
        assert_eq!(syntax(html), "HANDLE GetCurrentProcess();");
    }

    #[test]
    fn test_missing_heading_gives_empty_syntax() {
        assert_eq!(syntax("<pre>int main();</pre>"), "");
        assert_eq!(syntax("<h3>Syntax</h3><pre>int main();</pre>"), "");
    }
}
