//! Return value extraction
//!
//! Pages describe the return value either as prose under a "Return Value"
//! heading or as a "Return value" row in a table. The heading form takes
//! precedence; the table is only consulted when it yields nothing.

use crate::document::{text_of, DocumentPage};

use super::{first_non_empty, text_after_section, HeadingLabel, Strategy};

const RETURN_VALUE_STRATEGIES: [Strategy; 2] = [return_value_paragraph, return_value_table_row];

/// Row label used by table-form return values
const TABLE_ROW_LABEL: &str = "Return value";

pub fn extract_return_value(page: &DocumentPage) -> String {
    first_non_empty(page, &RETURN_VALUE_STRATEGIES)
}

/// First paragraph after the "Return Value" heading
fn return_value_paragraph(page: &DocumentPage) -> String {
    text_after_section(page, HeadingLabel::ReturnValue, "p")
}

/// Second cell of the first two-cell row labelled "Return value" in the
/// document's first table
fn return_value_table_row(page: &DocumentPage) -> String {
    let table = match page.first_of_kind("table") {
        Some(t) => t,
        None => return String::new(),
    };

    page.children_of_kind(table, "tr")
        .into_iter()
        .find_map(|row| {
            let cells = page.children_of_kind(row, "td");
            match cells.as_slice() {
                [label, value] if text_of(label).contains(TABLE_ROW_LABEL) => {
                    Some(text_of(value).trim().to_string())
                }
                _ => None,
            }
        })
        .unwrap_or_default()
}
