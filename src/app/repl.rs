//! Interactive prompt: read `x y z` lines until EOF.
//!
//! A bad line or a failed evaluation is reported and the prompt continues.

use std::io::{BufRead, Write};

use crate::io::input::parse_triple;
use crate::io::table::TableSource;
use crate::models::Evaluator;
use crate::report::format_result;

pub const PROMPT: &str = "Enter x, y, z: ";

pub fn run_prompt<S, R, W>(evaluator: &Evaluator<S>, input: R, mut output: W) -> std::io::Result<()>
where
    S: TableSource,
    R: BufRead,
    W: Write,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match parse_triple(&line) {
                Ok(request) => match evaluator.evaluate(request) {
                    Ok(value) => writeln!(output, "{}", format_result(value))?,
                    Err(err) => writeln!(output, "Error: {err}")?,
                },
                Err(message) => writeln!(output, "Error: {message}")?,
            }
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }
    writeln!(output)?;
    Ok(())
}
