//! API documentation lookup and extraction
//!
//! Finds the documentation page for an API symbol and extracts a fixed
//! record from it:
//! - Description
//! - Syntax
//! - Parameters
//! - Return value (heading prose, or a table row)
//! - Remarks
//! - Requirements

pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod logging;
pub mod lookup;
pub mod pipeline;
pub mod record;
pub mod render;

pub use document::{DocumentPage, ParseError};
pub use error::InsightError;
pub use extractors::*;
pub use record::*;
