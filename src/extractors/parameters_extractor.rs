//! Parameter list extraction
//!
//! Parameters are a bulleted list after the "Parameters" heading. Each item
//! starts with the parameter name in bold. The recorded description is the
//! whole item text, so it repeats the name; this mirrors how the page reads.

use crate::document::{stripped_text_of, text_of, DocumentPage};
use crate::record::Parameter;

use super::{find_section, HeadingLabel};

/// Inline nodes that carry a parameter name
const EMPHASIS: &str = "strong, b";

/// Named list items under the "Parameters" heading, in document order
pub fn extract_parameters(page: &DocumentPage) -> Vec<Parameter> {
    let list = match find_section(page, HeadingLabel::Parameters)
        .and_then(|heading| page.next_of_kind(heading, "ul"))
    {
        Some(list) => list,
        None => return vec![],
    };

    page.children_of_kind(list, "li")
        .into_iter()
        .filter_map(|item| {
            // Items without a bold name are not parameters
            let name = page.children_of_kind(item, EMPHASIS).into_iter().next()?;
            Some(Parameter {
                name: text_of(&name).trim().to_string(),
                description: stripped_text_of(&item),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(html: &str) -> Vec<Parameter> {
        extract_parameters(&DocumentPage::parse_str(html).unwrap())
    }

    #[test]
    fn test_named_items_in_order() {
        let html = r#"
        <h2>Parameters</h2>
        <ul>
            <li><strong> hObject </strong>
                A valid handle to an open object.</li>
            <li>[in, optional] no name here</li>
            <li><b>dwFlags</b> Flags.</li>
        </ul>
        "#;
        let result = params(html);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "hObject");
        assert_eq!(result[0].description, "hObjectA valid handle to an open object.");
        assert_eq!(result[1].name, "dwFlags");
        assert_eq!(result[1].description, "dwFlagsFlags.");
    }

    #[test]
    fn test_only_first_list_after_heading() {
        let html = r#"
        <ul><li><strong>nav</strong> menu</li></ul>
        <h2>Parameters</h2>
        <p>This function has the following parameters.</p>
        <ul><li><strong>uType</strong> The sound type.</li></ul>
        <ul><li><strong>other</strong> Not a parameter.</li></ul>
        "#;
        let result = params(html);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "uType");
    }

    #[test]
    fn test_missing_heading_gives_empty_list() {
        let html = r#"<ul><li><strong>x</strong> y</li></ul>"#;
        assert!(params(html).is_empty());
    }

    #[test]
    fn test_heading_without_list() {
        assert!(params("<h2>Parameters</h2><p>This function has no parameters.</p>").is_empty());
    }
}
