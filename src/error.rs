//! Errors that end a lookup run

use thiserror::Error;

use crate::document::ParseError;

pub type Result<T> = std::result::Result<T, InsightError>;

/// Terminal failures of a single run.
///
/// A missing section on the page is never one of these; extractors degrade to
/// empty values instead.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("symbol name is empty")]
    EmptySymbol,
    #[error("trusted documentation domain is empty")]
    EmptyDomain,
    #[error("no results found on {domain} for '{symbol}'")]
    NoResultsFound { symbol: String, domain: String },
    #[error("failed to fetch page, status code: {status}")]
    FetchFailed { status: u16 },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not parse page: {0}")]
    Parse(#[from] ParseError),
    #[error("could not render record: {0}")]
    Render(#[from] serde_json::Error),
}
