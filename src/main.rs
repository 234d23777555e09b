//! activist-config binary
//!
//! Shell-facing inspection of the resolved configuration: look up dotted
//! keys, show which file is in use, and list the search candidates.

use activist_config::cli::{Cli, Command, OutputFormat};
use activist_config::config::{Config, SearchPaths};
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use serde_yaml::Value;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// One search candidate and how the search treated it.
#[derive(Debug, Serialize)]
struct CandidateStatus {
    path: PathBuf,
    exists: bool,
    selected: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    match cli.command {
        Command::Get {
            key,
            default,
            format,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let fallback = match default {
                Some(raw) => serde_yaml::from_str(&raw)?,
                None => Value::Null,
            };
            print_value(config.get_or(&key, &fallback), format)?;
        }
        Command::Source => {
            let config = load_config(cli.config.as_deref())?;
            println!("{}", config.source().display());
        }
        Command::Paths { format } => {
            let paths = SearchPaths::discover();
            let selected = paths.first_existing().map(Path::to_path_buf);
            let candidates: Vec<CandidateStatus> = paths
                .candidates()
                .iter()
                .map(|path| CandidateStatus {
                    exists: path.exists(),
                    selected: selected.as_deref() == Some(path.as_path()),
                    path: path.clone(),
                })
                .collect();
            print_candidates(&candidates, format)?;
        }
    }

    Ok(())
}

/// Load from an explicit file when `--config` was given, otherwise search.
fn load_config(explicit: Option<&str>) -> Result<Config> {
    let config = match explicit {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };
    Ok(config)
}

fn print_value(value: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn print_candidates(candidates: &[CandidateStatus], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(candidates)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(candidates)?),
    }
    Ok(())
}
