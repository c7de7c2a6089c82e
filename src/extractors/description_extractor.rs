//! Description extraction
//!
//! Documentation ledes come in two shapes: "The X function does..." prose,
//! or a title followed by a plain paragraph. Strategies are tried in that
//! order.

use crate::document::{text_of, DocumentPage};

use super::{first_non_empty, Strategy};

const DESCRIPTION_STRATEGIES: [Strategy; 2] = [function_paragraph, paragraph_after_title];

/// Extract the page's lede paragraph
pub fn extract_description(page: &DocumentPage) -> String {
    first_non_empty(page, &DESCRIPTION_STRATEGIES)
}

/// First paragraph mentioning "function", any case
fn function_paragraph(page: &DocumentPage) -> String {
    page.first_matching("p", |text| text.to_lowercase().contains("function"))
        .map(|p| text_of(&p).trim().to_string())
        .unwrap_or_default()
}

/// First paragraph after the page title
fn paragraph_after_title(page: &DocumentPage) -> String {
    page.first_of_kind("h1")
        .and_then(|h1| page.next_of_kind(h1, "p"))
        .map(|p| text_of(&p).trim().to_string())
        .unwrap_or_default()
}
