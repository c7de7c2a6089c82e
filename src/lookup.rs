//! Finding the documentation page for a symbol
//!
//! A [`LookupProvider`] turns a [`SearchQuery`] into ranked candidate URLs.
//! [`select_candidate`] applies the trusted-domain filter and keeps the first
//! hit; there is no further ranking.

use std::fmt;

use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

use crate::error::{InsightError, Result};

/// Documentation host searched when none is configured
pub const DEFAULT_DOMAIN: &str = "learn.microsoft.com";

const DUCKDUCKGO_HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Symbol to look up plus the domain results must come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    symbol: String,
    domain: String,
}

impl SearchQuery {
    pub fn new(symbol: &str, domain: &str) -> Result<Self> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(InsightError::EmptySymbol);
        }
        // An empty filter would match every URL
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(InsightError::EmptyDomain);
        }
        Ok(Self {
            symbol: symbol.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Search engine query restricted to the trusted domain
    pub fn search_terms(&self) -> String {
        format!("{} site:{}", self.symbol, self.domain)
    }
}

/// A documentation URL returned by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateUrl(String);

impl CandidateUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("search request failed: {0}")]
    Request(String),
    #[error("search returned status {0}")]
    Status(u16),
}

/// Source of candidate documentation URLs
pub trait LookupProvider {
    fn lookup(&self, query: &SearchQuery) -> std::result::Result<Vec<CandidateUrl>, LookupError>;
}

/// First candidate on the trusted domain.
///
/// A failing provider is reported the same way as an empty result.
pub fn select_candidate<P>(provider: &P, query: &SearchQuery) -> Result<CandidateUrl>
where
    P: LookupProvider + ?Sized,
{
    tracing::info!(symbol = query.symbol(), "searching for '{}'", query.symbol());

    let candidates = provider.lookup(query).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "lookup provider failed");
        vec![]
    });

    let relevant: Vec<CandidateUrl> = candidates
        .into_iter()
        .filter(|url| url.as_str().contains(query.domain()))
        .collect();
    let count = relevant.len();

    let first = relevant
        .into_iter()
        .next()
        .ok_or_else(|| InsightError::NoResultsFound {
            symbol: query.symbol().to_string(),
            domain: query.domain().to_string(),
        })?;

    tracing::info!("found {} relevant result(s)", count);
    Ok(first)
}

/// Web search through DuckDuckGo's HTML endpoint
pub struct DuckDuckGoProvider {
    agent: ureq::Agent,
    user_agent: String,
    max_results: usize,
}

impl DuckDuckGoProvider {
    pub fn new(agent: ureq::Agent, user_agent: impl Into<String>, max_results: usize) -> Self {
        Self {
            agent,
            user_agent: user_agent.into(),
            max_results,
        }
    }
}

impl LookupProvider for DuckDuckGoProvider {
    fn lookup(&self, query: &SearchQuery) -> std::result::Result<Vec<CandidateUrl>, LookupError> {
        let terms = query.search_terms();
        tracing::debug!(%terms, "querying DuckDuckGo");

        let response = self
            .agent
            .get(DUCKDUCKGO_HTML_ENDPOINT)
            .query("q", &terms)
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept", "text/html")
            .call()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(LookupError::Status(status));
        }

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let mut links = parse_result_links(&body);
        links.truncate(self.max_results);
        Ok(links)
    }
}

/// Result links from a DuckDuckGo HTML results page, in rank order
pub fn parse_result_links(html: &str) -> Vec<CandidateUrl> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a.result__a") {
        Ok(s) => s,
        Err(_) => return vec![],
    };

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .filter_map(resolve_result_href)
        .map(CandidateUrl::new)
        .collect()
}

/// Unwrap `//duckduckgo.com/l/?uddg=<target>&rut=...` redirect links.
/// Plain absolute links pass through.
fn resolve_result_href(href: &str) -> Option<String> {
    let base = Url::parse("https://duckduckgo.com/").ok()?;
    let url = base.join(href.trim()).ok()?;

    if let Some((_, target)) = url.query_pairs().find(|(k, _)| k == "uddg") {
        return Some(target.into_owned());
    }

    // Only http/https URLs
    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    match url.host_str() {
        Some(host) if host.ends_with("duckduckgo.com") => None,
        Some(_) => Some(url.to_string()),
        None => None,
    }
}
