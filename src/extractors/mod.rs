//! Section extractors
//!
//! One module per record field. Each extractor is a pure function over a
//! parsed page that returns the field's empty value when the section is
//! missing; nothing here fails on absent content.

mod description_extractor;
mod parameters_extractor;
mod remarks_extractor;
mod requirements_extractor;
mod return_value_extractor;
mod syntax_extractor;

pub use description_extractor::*;
pub use parameters_extractor::*;
pub use remarks_extractor::*;
pub use requirements_extractor::*;
pub use return_value_extractor::*;
pub use syntax_extractor::*;

use scraper::ElementRef;

use crate::document::{normalize_ws, text_of, DocumentPage, ParseError};
use crate::record::DocumentationRecord;

/// Tag that introduces a documentation section
pub const SECTION_HEADING: &str = "h2";

/// Section headings the extractors look for.
///
/// Matching is a case-sensitive substring test on whitespace-normalized
/// heading text, so "Return Value (HRESULT)" still counts as "Return Value".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLabel {
    Syntax,
    Parameters,
    ReturnValue,
    Remarks,
    Requirements,
}

impl HeadingLabel {
    pub fn label(self) -> &'static str {
        match self {
            HeadingLabel::Syntax => "Syntax",
            HeadingLabel::Parameters => "Parameters",
            HeadingLabel::ReturnValue => "Return Value",
            HeadingLabel::Remarks => "Remarks",
            HeadingLabel::Requirements => "Requirements",
        }
    }

    pub fn matches(self, heading_text: &str) -> bool {
        normalize_ws(heading_text).contains(self.label())
    }
}

/// An extraction strategy for a text field
pub type Strategy = fn(&DocumentPage) -> String;

/// Try `strategies` in order; the first non-empty result wins
pub fn first_non_empty(page: &DocumentPage, strategies: &[Strategy]) -> String {
    strategies
        .iter()
        .map(|strategy| strategy(page))
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

/// First section heading carrying `label`
pub fn find_section<'a>(page: &'a DocumentPage, label: HeadingLabel) -> Option<ElementRef<'a>> {
    page.first_matching(SECTION_HEADING, |text| label.matches(text))
}

/// Trimmed text of the first `kind` element following the `label` heading
pub fn text_after_section(page: &DocumentPage, label: HeadingLabel, kind: &str) -> String {
    find_section(page, label)
        .and_then(|heading| page.next_of_kind(heading, kind))
        .map(|el| text_of(&el).trim().to_string())
        .unwrap_or_default()
}

/// Run every extractor against one page
pub fn assemble_record(page: &DocumentPage) -> DocumentationRecord {
    let record = DocumentationRecord {
        description: extract_description(page),
        syntax: extract_syntax(page),
        parameters: extract_parameters(page),
        return_value: extract_return_value(page),
        remarks: extract_remarks(page),
        requirements: extract_requirements(page),
    };

    tracing::debug!(
        description = !record.description.is_empty(),
        syntax = !record.syntax.is_empty(),
        parameters = record.parameters.len(),
        return_value = !record.return_value.is_empty(),
        remarks = !record.remarks.is_empty(),
        requirements = record.requirements.len(),
        "assembled documentation record"
    );

    record
}

/// Parse `html` and extract a record from it
pub fn extract_record(html: &str) -> Result<DocumentationRecord, ParseError> {
    let page = DocumentPage::parse_str(html)?;
    Ok(assemble_record(&page))
}
