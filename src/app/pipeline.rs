//! Shared evaluation plumbing used by every front-end.
//!
//! Builds the configured table source and runs batches across threads. Each
//! evaluation is independent, so rows are mapped with `rayon` and collected
//! back in input order.

use rayon::prelude::*;

use crate::domain::{BatchRow, EvaluationRequest, TableConfig};
use crate::io::cache::CachedTableSource;
use crate::io::table::{FileTableSource, TableSource};
use crate::models::Evaluator;

/// File-backed table source for `config`, cached unless disabled.
pub fn table_source(config: &TableConfig) -> Box<dyn TableSource> {
    let files = FileTableSource::new(config.clone());
    if config.cache {
        Box::new(CachedTableSource::new(files))
    } else {
        Box::new(files)
    }
}

/// Evaluate every request; failures become per-row errors.
pub fn evaluate_batch<S: TableSource>(
    evaluator: &Evaluator<S>,
    requests: &[(usize, EvaluationRequest)],
) -> Vec<BatchRow> {
    requests
        .par_iter()
        .map(|&(line, request)| {
            let outcome = evaluator.evaluate(request).map_err(|e| e.to_string());
            BatchRow::new(line, request, outcome)
        })
        .collect()
}
