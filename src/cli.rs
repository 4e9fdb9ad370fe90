//! Command-line interface — `wordgrid serve` and `wordgrid find`.

use std::io::Write;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use wordgrid_core::config::{Config, Limits};
use wordgrid_core::GridSearchEngine;
use wordgrid_http::{validate, AppState, FindRequest, NO_MATCHES};

#[derive(Debug, Parser)]
#[command(name = "wordgrid", about = "Word grid search — rank the words hidden in a letter grid")]
pub struct Cli {
    /// Write debug logs to /tmp/wordgrid-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file to use instead of ~/.config/wordgrid/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the word finder HTTP API.
    Serve {
        /// Listen address, overriding `[server] bind` from the config.
        #[arg(long, value_name = "ADDR")]
        bind: Option<SocketAddr>,
    },
    /// Search a grid given on the command line and print the ranked words.
    Find {
        /// Grid row, top to bottom. Repeat once per row.
        #[arg(short = 'r', long = "row", value_name = "ROW", required = true)]
        rows: Vec<String>,

        /// Word to search for. Repeat once per word.
        #[arg(short = 'w', long = "word", value_name = "WORD", required = true)]
        words: Vec<String>,

        /// Print each word's occurrence count next to it.
        #[arg(long)]
        counts: bool,
    },
}

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { bind } => serve(&config, bind),
        Command::Find {
            rows,
            words,
            counts,
        } => {
            let stdout = std::io::stdout();
            find(&rows, &words, counts, &config.limits, &mut stdout.lock())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Config::load(),
    }
}

fn serve(config: &Config, bind: Option<SocketAddr>) -> anyhow::Result<()> {
    let addr = match bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid [server] bind address {:?}", config.server.bind))?,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(wordgrid_http::serve(addr, AppState::new(config.limits)))?;
    Ok(())
}

/// Validate and search one grid, writing one word per line to `out`.
///
/// Input goes through the same validation as the HTTP API, so the error
/// messages match.
pub fn find(
    rows: &[String],
    words: &[String],
    counts: bool,
    limits: &Limits,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let request = FindRequest::new(rows.iter().cloned(), words.iter().cloned());
    let valid = validate(&request, limits)?;
    let engine = GridSearchEngine::new(valid.matrix)?;
    let matches = engine.rank(valid.words);

    if matches.is_empty() {
        writeln!(out, "{NO_MATCHES}")?;
    }
    for m in &matches {
        if counts {
            writeln!(out, "{m}")?;
        } else {
            writeln!(out, "{}", m.word)?;
        }
    }
    Ok(())
}
