//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves table configuration (flags, `.env`, environment)
//! - builds the table source and evaluator
//! - prints results and writes optional exports

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::{BatchArgs, Command, EvalArgs, LookupArgs, ReplArgs, TableArgs};
use crate::domain::{EvaluationRequest, TableConfig};
use crate::error::{AppError, EXIT_IO};
use crate::models::Evaluator;

pub mod pipeline;
pub mod repl;

/// Environment variable naming the default table directory.
pub const TABLE_DIR_ENV_VAR: &str = "TFUN_TABLE_DIR";

/// Entry point for the `tfun` binary.
pub fn run() -> Result<(), AppError> {
    // `tfun` alone starts the prompt and `tfun 1 2 3` evaluates directly.
    // Clap requires a subcommand name, so argv is rewritten before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init(cli.verbose);

    match cli.command {
        Command::Eval(args) => handle_eval(args),
        Command::Repl(args) => handle_repl(args),
        Command::Batch(args) => handle_batch(args),
        Command::Lookup(args) => handle_lookup(args),
    }
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let config = table_config_from_args(&args.tables);
    let evaluator = Evaluator::new(pipeline::table_source(&config));
    let request = EvaluationRequest::new(args.x, args.y, args.z);

    if args.explain {
        let lines: Vec<_> = [request.x, request.y, request.z]
            .into_iter()
            .map(|v| crate::report::lookup_line(&evaluator, v))
            .collect();
        println!("{}", crate::report::format_explain(&request, &lines));
    }

    let value = evaluator.evaluate(request)?;
    println!("{}", crate::report::format_result(value));
    Ok(())
}

fn handle_repl(args: ReplArgs) -> Result<(), AppError> {
    let config = table_config_from_args(&args.tables);
    let evaluator = Evaluator::new(pipeline::table_source(&config));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run_prompt(&evaluator, stdin.lock(), stdout.lock())
        .map_err(|e| AppError::new(EXIT_IO, format!("Terminal I/O failed: {e}")))
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = table_config_from_args(&args.tables);
    let evaluator = Evaluator::new(pipeline::table_source(&config));

    let input = crate::io::input::read_batch(&args.input)?;
    let rows = pipeline::evaluate_batch(&evaluator, &input.requests);
    let summary = crate::report::summarize_batch(&rows, input.row_errors.len());

    if args.json {
        println!("{}", crate::io::export::results_json(&rows)?);
    } else {
        print!("{}", crate::report::format_batch(&rows, &input.row_errors, &summary));
    }

    if let Some(path) = &args.export {
        crate::io::export::write_results_csv(path, &rows)?;
    }

    std::io::stdout()
        .flush()
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to flush output: {e}")))
}

fn handle_lookup(args: LookupArgs) -> Result<(), AppError> {
    let config = table_config_from_args(&args.tables);
    let evaluator = Evaluator::new(pipeline::table_source(&config));

    let lines: Vec<_> = args
        .values
        .iter()
        .map(|&v| crate::report::lookup_line(&evaluator, v))
        .collect();
    print!("{}", crate::report::format_lookup_table(&lines));
    Ok(())
}

/// Resolve table bindings: flags first, then `$TFUN_TABLE_DIR` (also read from
/// `.env`), then the built-in defaults.
pub fn table_config_from_args(args: &TableArgs) -> TableConfig {
    dotenvy::dotenv().ok();
    let env_dir = std::env::var(TABLE_DIR_ENV_VAR).ok().filter(|s| !s.trim().is_empty());
    resolve_table_config(args, env_dir.map(PathBuf::from))
}

fn resolve_table_config(args: &TableArgs, env_dir: Option<PathBuf>) -> TableConfig {
    let mut config = match args.table_dir.clone().or(env_dir) {
        Some(dir) => TableConfig::in_dir(dir),
        None => TableConfig::default(),
    };
    if let Some(file) = &args.central {
        config.central = file.clone();
    }
    if let Some(file) = &args.negative_tail {
        config.negative_tail = file.clone();
    }
    if let Some(file) = &args.positive_tail {
        config.positive_tail = file.clone();
    }
    config.cache = !args.no_cache;
    config
}

/// Top-level flags that consume the following token.
const VALUE_FLAGS: [&str; 4] = ["--table-dir", "--central", "--negative-tail", "--positive-tail"];

/// Rewrite argv so bare invocations pick a subcommand.
///
/// Rules (decided by the first positional token, skipping flags):
/// - `tfun`                      -> `tfun repl`
/// - `tfun 1 -2 3 ...`           -> `tfun eval 1 -2 3 ...`
/// - `tfun -v --table-dir d 1 2 3` -> `tfun eval -v --table-dir d 1 2 3`
/// - `tfun --table-dir d ...`    -> `tfun repl --table-dir d ...`
/// - `tfun --help/--version/-h`  -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1) else {
        argv.push("repl".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let numeric = first_positional(&argv[1..]).map(|token| token.parse::<f64>().is_ok());
    match numeric {
        None => argv.insert(1, "repl".to_string()),
        Some(true) => argv.insert(1, "eval".to_string()),
        // A subcommand name, or something clap should reject.
        Some(false) => {}
    }
    argv
}

fn first_positional(args: &[String]) -> Option<&str> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if !arg.starts_with('-') || arg.parse::<f64>().is_ok() {
            return Some(arg);
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            iter.next();
        }
    }
    None
}
