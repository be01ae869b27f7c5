//! Parsing of `x y z` input triples from the prompt and from batch files.
//!
//! A triple is three finite numbers separated by whitespace and/or commas.
//! Batch files hold one triple per line; blank lines and `#` comments are skipped
//! and bad lines are collected as row errors instead of aborting the batch.

use std::path::Path;

use crate::domain::EvaluationRequest;
use crate::error::{AppError, EXIT_IO};

/// A line of a batch file that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Parsed batch file: requests tagged with their 1-based line number.
#[derive(Debug, Clone, Default)]
pub struct BatchInput {
    pub requests: Vec<(usize, EvaluationRequest)>,
    pub row_errors: Vec<RowError>,
}

/// Parse one `x y z` triple.
pub fn parse_triple(line: &str) -> Result<EvaluationRequest, String> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    if tokens.len() != 3 {
        return Err(format!("expected 3 numbers (x y z), got {}", tokens.len()));
    }

    let mut values = [0.0; 3];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        *slot = parse_finite(token)?;
    }
    Ok(EvaluationRequest::new(values[0], values[1], values[2]))
}

fn parse_finite(token: &str) -> Result<f64, String> {
    let v = token
        .parse::<f64>()
        .map_err(|_| format!("invalid number `{token}`"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("non-finite number `{token}`"))
    }
}

/// Parse the contents of a batch file.
pub fn parse_batch(text: &str) -> BatchInput {
    let mut input = BatchInput::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        if content.trim().is_empty() {
            continue;
        }
        match parse_triple(content) {
            Ok(request) => input.requests.push((line, request)),
            Err(message) => input.row_errors.push(RowError { line, message }),
        }
    }
    input
}

/// Read and parse a batch file.
pub fn read_batch(path: &Path) -> Result<BatchInput, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::new(EXIT_IO, format!("Failed to read input '{}': {e}", path.display())))?;
    Ok(parse_batch(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triple_accepts_whitespace_and_commas() {
        let expected = EvaluationRequest::new(1.0, -2.5, 3e-1);
        assert_eq!(parse_triple("1 -2.5 3e-1").unwrap(), expected);
        assert_eq!(parse_triple("1,-2.5,3e-1").unwrap(), expected);
        assert_eq!(parse_triple("  1 ,\t-2.5 , 3e-1  ").unwrap(), expected);
    }

    #[test]
    fn triple_rejects_wrong_arity_and_bad_numbers() {
        assert!(parse_triple("1 2").unwrap_err().contains("got 2"));
        assert!(parse_triple("1 2 3 4").unwrap_err().contains("got 4"));
        assert!(parse_triple("1 two 3").unwrap_err().contains("two"));
        assert!(parse_triple("1 NaN 3").unwrap_err().contains("non-finite"));
    }

    #[test]
    fn batch_keeps_line_numbers_and_collects_errors() {
        let text = "# header\n0.1 0.2 0.3\n\n1 2\n-1, -2, -3 # trailing\nx y z\n";
        let input = parse_batch(text);
        assert_eq!(
            input.requests,
            vec![
                (2, EvaluationRequest::new(0.1, 0.2, 0.3)),
                (5, EvaluationRequest::new(-1.0, -2.0, -3.0)),
            ]
        );
        let lines: Vec<usize> = input.row_errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![4, 6]);
    }

    #[test]
    fn missing_batch_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_batch(&dir.path().join("nope.txt")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_IO);
    }
}
