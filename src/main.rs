//! apidoc-insight: look up an API function on its documentation site and
//! print a structured summary of the page.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use apidoc_insight::config::{Cli, Config};
use apidoc_insight::fetch::{build_agent, UreqFetcher};
use apidoc_insight::lookup::DuckDuckGoProvider;
use apidoc_insight::{logging, pipeline, render};

const PROMPT: &str = "Enter the Windows API function name: ";

fn main() -> ExitCode {
    let config: Config = Cli::parse().into();
    logging::init(config.verbosity);

    // Interruption is a normal way to leave, not a failure
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\n[INFO] Process interrupted. Exiting gracefully...");
        std::process::exit(0);
    }) {
        tracing::warn!(error = %e, "could not install interrupt handler");
    }

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(config: &Config) -> Result<()> {
    if config.banner {
        println!("{}", render::banner(&config.run_context().render));
    }

    let symbol = match &config.symbol {
        Some(symbol) => symbol.clone(),
        // The prompt goes to stderr so stdout carries only the report
        None => match prompt_symbol(io::stdin().lock(), io::stderr())? {
            Some(symbol) => symbol,
            None => {
                // stdin closed before a name was entered
                eprintln!("\n[INFO] No function name given. Exiting.");
                return Ok(());
            }
        },
    };

    let agent = build_agent(config.timeout);
    let provider = DuckDuckGoProvider::new(agent.clone(), config.user_agent.clone(), config.max_results);
    let fetcher = UreqFetcher::new(agent, config.user_agent.clone());

    let ctx = config.run_context();
    let outcome = pipeline::run(&ctx, &provider, &fetcher, &symbol)?;
    println!("{}", outcome.render(&ctx)?);

    Ok(())
}

/// Ask until a non-empty name is entered. `None` on end of input.
fn prompt_symbol<R: BufRead, W: Write>(mut input: R, mut prompt_out: W) -> Result<Option<String>> {
    let mut line = String::new();

    loop {
        write!(prompt_out, "{PROMPT}").context("failed to write prompt")?;
        prompt_out.flush().context("failed to write prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read function name")?;
        if read == 0 {
            return Ok(None);
        }

        let symbol = line.trim();
        if !symbol.is_empty() {
            return Ok(Some(symbol.to_string()));
        }
    }
}
