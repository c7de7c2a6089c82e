//! Command-line configuration

use std::time::Duration;

use clap::Parser;

use crate::fetch::DEFAULT_USER_AGENT;
use crate::lookup::DEFAULT_DOMAIN;
use crate::pipeline::{OutputFormat, RunContext};
use crate::render::RenderOptions;

#[derive(Debug, Parser)]
#[command(
    name = "apidoc-insight",
    version,
    about = "Look up an API function and summarize its documentation page"
)]
pub struct Cli {
    /// Function name to look up. Prompted for when omitted.
    pub symbol: Option<String>,

    /// Documentation host results must come from
    #[arg(
        long,
        env = "APIDOC_DOMAIN",
        default_value = DEFAULT_DOMAIN,
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub domain: String,

    /// Search results to consider
    #[arg(long, default_value_t = 10)]
    pub max_results: usize,

    /// Timeout for each HTTP request, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent header for outgoing requests
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the full record as JSON instead of tables
    #[arg(long)]
    pub json: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved settings for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    pub symbol: Option<String>,
    pub domain: String,
    pub max_results: usize,
    pub timeout: Duration,
    pub user_agent: String,
    pub format: OutputFormat,
    pub color: bool,
    pub banner: bool,
    pub verbosity: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let format = if cli.json { OutputFormat::Json } else { OutputFormat::Text };
        Self {
            symbol: cli.symbol,
            domain: cli.domain,
            max_results: cli.max_results,
            timeout: Duration::from_secs(cli.timeout_secs),
            user_agent: cli.user_agent,
            format,
            // Styling would corrupt JSON output
            color: !cli.no_color && format == OutputFormat::Text,
            banner: !cli.no_banner && format == OutputFormat::Text,
            verbosity: cli.verbose,
        }
    }
}

impl Config {
    pub fn run_context(&self) -> RunContext {
        RunContext {
            domain: self.domain.clone(),
            format: self.format,
            render: RenderOptions { color: self.color },
        }
    }
}
