//! Command-line parsing for the table-interpolated function evaluator.
//!
//! The goal of this module is to keep **argument parsing** separate from
//! evaluation; `app` turns these structs into configuration and dispatches.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tfun", version, about = "Evaluate fun(x, y, z) over interpolated T/U tables")]
pub struct Cli {
    /// Log table loads and fallback decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate fun(x, y, z) once.
    #[command(allow_negative_numbers = true)]
    Eval(EvalArgs),
    /// Read `x y z` triples from stdin until EOF and evaluate each.
    Repl(ReplArgs),
    /// Evaluate every triple in a file (one per line) in parallel.
    Batch(BatchArgs),
    /// Show which table an argument maps to and its T/U values.
    #[command(allow_negative_numbers = true)]
    Lookup(LookupArgs),
}

/// Table binding options shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct TableArgs {
    /// Directory holding the table files (default: $TFUN_TABLE_DIR or `tables`).
    #[arg(long, value_name = "DIR")]
    pub table_dir: Option<PathBuf>,

    /// Central table file, relative to the table directory unless absolute.
    #[arg(long, value_name = "FILE")]
    pub central: Option<PathBuf>,

    /// Negative-tail table file.
    #[arg(long, value_name = "FILE")]
    pub negative_tail: Option<PathBuf>,

    /// Positive-tail table file.
    #[arg(long, value_name = "FILE")]
    pub positive_tail: Option<PathBuf>,

    /// Re-read table files on every lookup instead of caching them.
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(Debug, Clone, Args)]
pub struct EvalArgs {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    /// Also print the T/U lookups for each argument.
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub tables: TableArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ReplArgs {
    #[command(flatten)]
    pub tables: TableArgs,
}

#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Input file with one `x y z` triple per line.
    #[arg(long, short, value_name = "FILE")]
    pub input: PathBuf,

    /// Export per-line results to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Print results as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub tables: TableArgs,
}

#[derive(Debug, Clone, Args)]
pub struct LookupArgs {
    /// Argument(s) to resolve.
    #[arg(required = true)]
    pub values: Vec<f64>,

    #[command(flatten)]
    pub tables: TableArgs,
}
