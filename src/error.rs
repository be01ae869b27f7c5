//! Error types.
//!
//! - `EvalError`: typed failures raised inside the function graph. Fallback
//!   boundaries (`Srz`, `Grs`) match on these and substitute a closed form.
//! - `AppError`: what the binary reports, carrying the process exit code.

use thiserror::Error;

use crate::domain::TableKey;

/// Exit code for failures reading input files or writing exports.
pub const EXIT_IO: u8 = 3;
/// Exit code for an evaluation that could not be completed.
pub const EXIT_EVAL: u8 = 4;

/// Failure raised by a table lookup, interpolation, or combinator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The table resource is missing, unreadable, or holds no records.
    #[error("table `{key}` unavailable: {reason}")]
    TableUnavailable { key: TableKey, reason: String },

    /// The table resource exists but does not follow the `x T U` format.
    /// Absorbed like `TableUnavailable`, but logged at `warn`.
    #[error("table `{key}` is malformed: {reason}")]
    MalformedTable { key: TableKey, reason: String },

    /// No interval of the table covers the query.
    #[error("value {value} is outside the interpolation range [{lo}, {hi}]")]
    OutOfDomain { value: f64, lo: f64, hi: f64 },

    /// Neither guarded branch of `Gold` applies.
    #[error("division by zero in Gold({x}, {y})")]
    DivisionByZero { x: f64, y: f64 },
}

impl EvalError {
    /// Short name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            EvalError::TableUnavailable { .. } => "table-unavailable",
            EvalError::MalformedTable { .. } => "malformed-table",
            EvalError::OutOfDomain { .. } => "out-of-domain",
            EvalError::DivisionByZero { .. } => "division-by-zero",
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<EvalError> for AppError {
    fn from(err: EvalError) -> Self {
        AppError::new(EXIT_EVAL, format!("Error: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
