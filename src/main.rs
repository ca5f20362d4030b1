//! string-validator
//!
//! Runs one predicate over command-line values or the lines of a file and
//! reports each verdict.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

use string_validator::utils::logger::init_logger;
use string_validator::{Predicate, SystemResolver, ValidatorConfig};

#[derive(Parser)]
#[command(name = "string-validator")]
#[command(version)]
#[command(about = "Validate strings against character-class, email and URL predicates", long_about = None)]
struct Cli {
    /// Predicate to apply
    #[arg(value_enum)]
    predicate: Predicate,

    /// Candidate strings
    values: Vec<String>,

    /// Read one candidate per line from FILE
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print one JSON object per candidate
    #[arg(long)]
    json: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Verdict<'a> {
    input: &'a str,
    predicate: Predicate,
    valid: bool,
}

const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ValidatorConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if let Err(e) = init_logger(config.log_dir.as_deref(), cli.verbose) {
        eprintln!("Error: {:#}", e);
        return ExitCode::from(EXIT_USAGE);
    }

    let candidates = match collect_candidates(&cli) {
        Ok(candidates) if candidates.is_empty() => {
            eprintln!("Error: no values given; pass VALUES or --file");
            return ExitCode::from(EXIT_USAGE);
        }
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let json = cli.json || config.json;
    match run(cli.predicate, &candidates, json, config.dns.resolver()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Command-line values first, then file lines as raw bytes.
fn collect_candidates(cli: &Cli) -> Result<Vec<Vec<u8>>> {
    let mut candidates: Vec<Vec<u8>> = cli.values.iter().map(|v| v.clone().into_bytes()).collect();

    if let Some(path) = &cli.file {
        let contents = fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let lines = split_lines(&contents);
        debug!("Read {} lines from {}", lines.len(), path.display());
        candidates.extend(lines.into_iter().map(<[u8]>::to_vec));
    }

    Ok(candidates)
}

/// Splits on `\n`, dropping a trailing `\r` and the empty tail after a final
/// newline.
fn split_lines(contents: &[u8]) -> Vec<&[u8]> {
    let mut lines: Vec<&[u8]> = contents
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();
    if contents.ends_with(b"\n") || contents.is_empty() {
        lines.pop();
    }
    lines
}

/// Prints a verdict per candidate; returns whether all were valid.
fn run(predicate: Predicate, candidates: &[Vec<u8>], json: bool, resolver: SystemResolver) -> Result<bool> {
    info!("Checking {} candidates with {}", candidates.len(), predicate);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut all_valid = true;

    for candidate in candidates {
        let valid = predicate.evaluate_bytes_with_resolver(candidate, &resolver);
        all_valid &= valid;

        let input = String::from_utf8_lossy(candidate);
        if json {
            let verdict = Verdict { input: &input, predicate, valid };
            serde_json::to_writer(&mut out, &verdict).context("Failed to write JSON")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}\t{}", valid, input)?;
        }
    }

    out.flush()?;
    Ok(all_valid)
}
