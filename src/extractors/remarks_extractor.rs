//! Remarks extraction

use crate::document::DocumentPage;

use super::{text_after_section, HeadingLabel};

/// The first paragraph after the "Remarks" heading
pub fn extract_remarks(page: &DocumentPage) -> String {
    text_after_section(page, HeadingLabel::Remarks, "p")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remarks_paragraph() {
        let html = r#"
        <h2>Remarks</h2>
        <div class="alert"><p>
            To get extended error information, call GetLastError.
        </p></div>
        <p>Second paragraph is not taken.</p>
        "#;
        let page = DocumentPage::parse_str(html).unwrap();
        assert_eq!(
            extract_remarks(&page),
            "To get extended error information, call GetLastError."
        );
    }

    #[test]
    fn test_no_remarks_heading() {
        let page = DocumentPage::parse_str("<h2>See also</h2><p>CreateFile</p>").unwrap();
        assert_eq!(extract_remarks(&page), "");
    }
}
