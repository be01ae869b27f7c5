//! Piecewise-linear interpolation over a loaded table.
//!
//! ```text
//! y(v) = y0 + (y1 - y0) * (v - x0) / (x1 - x0)   for v in [x0, x1]
//! ```
//!
//! Adjacent record pairs are scanned in table order and the first closed
//! interval containing `v` wins, so a query sitting on a shared breakpoint uses
//! the left interval. There is no extrapolation.

use crate::domain::{Ordinate, Table};
use crate::error::EvalError;

/// Interpolate the `which` ordinate of `table` at `value`.
pub fn interpolate(value: f64, table: &Table, which: Ordinate) -> Result<f64, EvalError> {
    for w in table.records.windows(2) {
        let (lo, hi) = (&w[0], &w[1]);
        if value >= lo.x && value <= hi.x {
            let y0 = lo.ordinate(which);
            let y1 = hi.ordinate(which);
            // Zero-width interval: the query equals both breakpoints.
            if hi.x == lo.x {
                return Ok(y0);
            }
            return Ok(y0 + (y1 - y0) * (value - lo.x) / (hi.x - lo.x));
        }
    }

    let (lo, hi) = table.span().unwrap_or((f64::NAN, f64::NAN));
    Err(EvalError::OutOfDomain { value, lo, hi })
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::{TableKey, TableRecord};

    fn synthetic() -> Table {
        Table::from_rows(TableKey::Central, &[(-1.0, 0.0, 0.0), (0.0, 1.0, 2.0), (1.0, 2.0, 4.0)])
    }

    fn jagged() -> Table {
        Table::from_rows(
            TableKey::Central,
            &[
                (-1.0, 3.0, -2.0),
                (-0.4, -1.5, 0.5),
                (0.1, 7.25, 0.5),
                (0.35, 0.0, -4.0),
                (1.0, 2.0, 9.0),
            ],
        )
    }

    #[test]
    fn midpoints_of_synthetic_table() {
        let table = synthetic();
        assert!((interpolate(0.5, &table, Ordinate::T).unwrap() - 1.5).abs() < 1e-12);
        assert!((interpolate(0.5, &table, Ordinate::U).unwrap() - 3.0).abs() < 1e-12);
        assert!((interpolate(-0.25, &table, Ordinate::T).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn breakpoints_return_stored_ordinates() {
        let table = jagged();
        for r in &table.records {
            for which in [Ordinate::T, Ordinate::U] {
                let y = interpolate(r.x, &table, which).unwrap();
                assert!(
                    (y - r.ordinate(which)).abs() < 1e-12,
                    "x={} {which:?}: expected {}, got {y}",
                    r.x,
                    r.ordinate(which)
                );
            }
        }
    }

    #[test]
    fn interior_values_stay_between_bracketing_ordinates() {
        let table = jagged();
        let mut rng = StdRng::seed_from_u64(7);
        for w in table.records.windows(2) {
            for _ in 0..200 {
                let v = rng.gen_range(w[0].x..w[1].x);
                if v <= w[0].x {
                    continue;
                }
                for which in [Ordinate::T, Ordinate::U] {
                    let y = interpolate(v, &table, which).unwrap();
                    let a = w[0].ordinate(which);
                    let b = w[1].ordinate(which);
                    assert!(y >= a.min(b) - 1e-12 && y <= a.max(b) + 1e-12, "overshoot at {v}: {y}");
                }
            }
        }
    }

    #[test]
    fn outside_span_is_out_of_domain() {
        let table = synthetic();
        for v in [-1.000001, 1.000001, -50.0, 50.0, f64::INFINITY, f64::NAN] {
            let err = interpolate(v, &table, Ordinate::T).unwrap_err();
            assert!(matches!(err, EvalError::OutOfDomain { lo, hi, .. } if lo == -1.0 && hi == 1.0));
        }
    }

    #[test]
    fn fewer_than_two_records_is_out_of_domain() {
        let single = Table::new(TableKey::Central, vec![TableRecord::new(0.0, 1.0, 1.0)]);
        assert!(matches!(
            interpolate(0.0, &single, Ordinate::T),
            Err(EvalError::OutOfDomain { .. })
        ));

        let empty = Table::new(TableKey::Central, Vec::new());
        assert!(matches!(
            interpolate(0.0, &empty, Ordinate::U),
            Err(EvalError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn first_matching_interval_wins_on_duplicate_breakpoint() {
        let table = Table::from_rows(
            TableKey::Central,
            &[(0.0, 0.0, 0.0), (1.0, 10.0, 1.0), (1.0, 20.0, 2.0), (2.0, 30.0, 3.0)],
        );
        assert_eq!(interpolate(1.0, &table, Ordinate::T).unwrap(), 10.0);
        assert_eq!(interpolate(1.0, &table, Ordinate::U).unwrap(), 1.0);
        assert!((interpolate(1.5, &table, Ordinate::T).unwrap() - 25.0).abs() < 1e-12);
    }
}
