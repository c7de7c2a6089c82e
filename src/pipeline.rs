//! One lookup run: search, fetch, extract, render
//!
//! Collaborators are passed in explicitly so a run can be driven without a
//! network.

use crate::document::DocumentPage;
use crate::error::{InsightError, Result};
use crate::extractors::assemble_record;
use crate::fetch::PageFetcher;
use crate::lookup::{select_candidate, LookupProvider, SearchQuery};
use crate::record::DocumentationRecord;
use crate::render::{render_json, render_text, RenderOptions};

/// Output format for a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Per-run settings shared by every stage
#[derive(Debug, Clone)]
pub struct RunContext {
    pub domain: String,
    pub format: OutputFormat,
    pub render: RenderOptions,
}

/// Everything a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub symbol: String,
    pub url: String,
    pub record: DocumentationRecord,
}

impl LookupOutcome {
    pub fn render(&self, ctx: &RunContext) -> Result<String> {
        match ctx.format {
            OutputFormat::Text => Ok(render_text(&self.symbol, &self.record, &self.url, &ctx.render)),
            OutputFormat::Json => Ok(render_json(&self.symbol, &self.record, &self.url)?),
        }
    }
}

/// Look up `symbol` and extract its documentation record.
///
/// Stops at the first failing stage: no fetch without a candidate, no
/// extraction without a 200 response.
pub fn run<L, F>(ctx: &RunContext, provider: &L, fetcher: &F, symbol: &str) -> Result<LookupOutcome>
where
    L: LookupProvider + ?Sized,
    F: PageFetcher + ?Sized,
{
    let query = SearchQuery::new(symbol, &ctx.domain)?;
    let url = select_candidate(provider, &query)?;

    let response = fetcher
        .fetch(url.as_str())
        .map_err(|e| InsightError::Transport(e.to_string()))?;
    if response.status != 200 {
        return Err(InsightError::FetchFailed {
            status: response.status,
        });
    }

    let page = DocumentPage::parse(&response.body)?;
    let record = assemble_record(&page);

    Ok(LookupOutcome {
        symbol: query.symbol().to_string(),
        url: url.to_string(),
        record,
    })
}
