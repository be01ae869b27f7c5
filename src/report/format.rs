//! Formatted terminal output.
//!
//! Formatting lives in one place so the evaluation code stays free of
//! presentation concerns and output changes stay localized.

use crate::domain::{BatchRow, EvaluationRequest};
use crate::io::input::RowError;
use crate::report::{BatchSummary, LookupLine};

/// Decimal places used for printed results.
pub const RESULT_PRECISION: usize = 4;

pub fn format_result(value: f64) -> String {
    format!("Result: {value:.prec$}", prec = RESULT_PRECISION)
}

/// `T`/`U` breakdown for each argument of a request.
pub fn format_explain(request: &EvaluationRequest, lines: &[LookupLine]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Lookups for {request}:\n"));
    out.push_str(&format_lookup_table(lines));
    out
}

pub fn format_lookup_table(lines: &[LookupLine]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>12} {:<14} {:>12} {:>12} {:>12}\n",
            "arg", "table", "lookup_x", "T", "U"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<12} {:-<14} {:-<12} {:-<12} {:-<12}\n", "", "", "", "", "").trim_end());
    out.push('\n');

    let mut errors = Vec::new();
    for line in lines {
        out.push_str(
            format!(
                "{:>12} {:<14} {:>12.6} {:>12} {:>12}\n",
                line.arg,
                line.key.as_str(),
                line.mapped,
                fmt_cell(&line.t, &mut errors),
                fmt_cell(&line.u, &mut errors),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    errors.dedup();
    for e in errors {
        out.push_str(&format!("  ! {e}\n"));
    }
    out
}

fn fmt_cell(v: &Result<f64, String>, errors: &mut Vec<String>) -> String {
    match v {
        Ok(v) => format!("{v:.6}"),
        Err(e) => {
            errors.push(e.clone());
            "n/a".to_string()
        }
    }
}

/// Per-row batch table followed by skipped lines and a summary.
pub fn format_batch(rows: &[BatchRow], row_errors: &[RowError], summary: &BatchSummary) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:>6} {:>12} {:>12} {:>12} {:>14}\n",
            "line", "x", "y", "z", "fun"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<6} {:-<12} {:-<12} {:-<12} {:-<14}\n", "", "", "", "", "").trim_end());
    out.push('\n');

    for r in rows {
        let value = match (&r.value, &r.error) {
            (Some(v), _) => format!("{v:.prec$}", prec = RESULT_PRECISION),
            (None, Some(e)) => format!("error: {e}"),
            (None, None) => String::new(),
        };
        out.push_str(
            format!(
                "{:>6} {:>12} {:>12} {:>12} {:>14}\n",
                r.line, r.request.x, r.request.y, r.request.z, value
            )
            .trim_end(),
        );
        out.push('\n');
    }

    if !row_errors.is_empty() {
        out.push_str("\nSkipped lines:\n");
        for e in row_errors {
            out.push_str(&format!("  line {}: {}\n", e.line, e.message));
        }
    }

    out.push_str(&format!(
        "\nEvaluated: {} | failed: {} | skipped: {}\n",
        summary.evaluated, summary.failed, summary.skipped
    ));
    out
}
