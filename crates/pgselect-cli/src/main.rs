//! pgselect CLI
//!
//! Parses one SELECT statement and prints its AST.

mod report;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use pgselect_core::SelectStatement;

/// Parse a PostgreSQL SELECT statement and print its AST.
#[derive(Parser)]
#[command(name = "pgselect")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL text to parse. Read from stdin when neither SQL nor --file is given.
    #[arg(conflicts_with = "file")]
    sql: Option<String>,

    /// Read the SQL from a file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, env = "PGSELECT_FORMAT", default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Indented JSON.
    Pretty,
    /// Single-line JSON.
    Compact,
    /// Rust debug representation.
    Debug,
}

impl OutputFormat {
    fn render(self, statement: &SelectStatement) -> anyhow::Result<String> {
        Ok(match self {
            Self::Pretty => serde_json::to_string_pretty(statement)?,
            Self::Compact => serde_json::to_string(statement)?,
            Self::Debug => format!("{statement:#?}"),
        })
    }
}

fn read_input(cli: &Cli) -> anyhow::Result<String> {
    if let Some(sql) = &cli.sql {
        return Ok(sql.clone());
    }
    if let Some(path) = &cli.file {
        return fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut sql = String::new();
    io::stdin()
        .read_to_string(&mut sql)
        .context("failed to read SQL from stdin")?;
    Ok(sql)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let sql = read_input(&cli)?;
    debug!(bytes = sql.len(), format = ?cli.format, "parsing input");

    match pgselect_core::parse_select(&sql) {
        Ok(statement) => {
            println!("{}", cli.format.render(&statement)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprint!("{}", report::render(&err, &sql));
            Ok(ExitCode::FAILURE)
        }
    }
}
