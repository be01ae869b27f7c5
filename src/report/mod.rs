//! Reporting utilities: lookup breakdowns, batch summaries, terminal formatting.

pub mod format;

pub use format::*;

use crate::domain::{BatchRow, TableKey};
use crate::io::table::TableSource;
use crate::math::map_argument;
use crate::models::Evaluator;

/// How one raw argument resolves through the tables.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupLine {
    pub arg: f64,
    pub key: TableKey,
    pub mapped: f64,
    pub t: Result<f64, String>,
    pub u: Result<f64, String>,
}

/// Resolve `arg` through the domain mapper and both ordinates.
pub fn lookup_line<S: TableSource>(evaluator: &Evaluator<S>, arg: f64) -> LookupLine {
    let mapped = map_argument(arg);
    LookupLine {
        arg,
        key: mapped.key,
        mapped: mapped.value,
        t: evaluator.t(arg).map_err(|e| e.to_string()),
        u: evaluator.u(arg).map_err(|e| e.to_string()),
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub failed: usize,
    pub skipped: usize,
}

pub fn summarize_batch(rows: &[BatchRow], skipped: usize) -> BatchSummary {
    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    BatchSummary {
        evaluated: rows.len() - failed,
        failed,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EvaluationRequest;
    use crate::io::table::MemoryTableSource;

    #[test]
    fn lookup_line_resolves_tail_argument() {
        let ev = Evaluator::new(MemoryTableSource::uniform(&[
            (-1.0, 0.0, 0.0),
            (0.0, 1.0, 2.0),
            (1.0, 2.0, 4.0),
        ]));
        let line = lookup_line(&ev, 4.0);
        assert_eq!(line.key, TableKey::PositiveTail);
        assert_eq!(line.mapped, 0.25);
        assert_eq!(line.t, Ok(1.25));
        assert_eq!(line.u, Ok(2.5));
    }

    #[test]
    fn lookup_line_keeps_error_text() {
        let ev = Evaluator::new(MemoryTableSource::empty());
        let line = lookup_line(&ev, 0.0);
        assert_eq!(line.key, TableKey::Central);
        assert!(line.t.unwrap_err().contains("central"));
    }

    #[test]
    fn summary_counts_failures() {
        let req = EvaluationRequest::new(0.0, 0.0, 0.0);
        let rows = vec![
            BatchRow::new(1, req, Ok(0.0)),
            BatchRow::new(2, req, Err("boom".to_string())),
            BatchRow::new(3, req, Ok(1.0)),
        ];
        assert_eq!(
            summarize_batch(&rows, 4),
            BatchSummary {
                evaluated: 2,
                failed: 1,
                skipped: 4
            }
        );
    }
}
