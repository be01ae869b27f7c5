//! The function graph: `T`, `U`, `Srz`, `Grs`, `fun`.
//!
//! ```text
//! fun ──► Grs ×3 ──► Srz ──► T / U ──► map_argument ─► TableSource ─► interpolate
//!                 ├► Gold
//!                 └► Glr
//! ```
//!
//! Failures travel up as `EvalError` until the nearest fallback boundary:
//! - `Srz` absorbs every table failure (`TableUnavailable`, `MalformedTable`,
//!   `OutOfDomain`) by returning `alg3`
//! - `Grs` absorbs `DivisionByZero` by returning `alg2`
//!
//! Nothing reaches `fun` for a finite input triple.

use crate::domain::{EvaluationRequest, Formula, Ordinate};
use crate::error::EvalError;
use crate::io::table::TableSource;
use crate::math::{interpolate, map_argument};
use crate::models::combinators::{alg2, alg3, glr, gold};

/// Evaluates the function graph against an injected table source.
///
/// Holds no mutable state; one evaluator can serve any number of threads.
pub struct Evaluator<S> {
    source: S,
}

impl<S: TableSource> Evaluator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Interpolated `T` ordinate at `x`.
    pub fn t(&self, x: f64) -> Result<f64, EvalError> {
        self.lookup(x, Ordinate::T)
    }

    /// Interpolated `U` ordinate at `x`.
    pub fn u(&self, x: f64) -> Result<f64, EvalError> {
        self.lookup(x, Ordinate::U)
    }

    fn lookup(&self, x: f64, which: Ordinate) -> Result<f64, EvalError> {
        let mapped = map_argument(x);
        let table = self.source.load(mapped.key)?;
        interpolate(mapped.value, &table, which)
    }

    pub fn srz(&self, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
        match self.srz_primary(x, y, z) {
            Ok(v) => {
                tracing::trace!(x, y, z, formula = %Formula::Primary, "Srz");
                Ok(v)
            }
            Err(err @ EvalError::MalformedTable { .. }) => {
                tracing::warn!(x, y, z, error = %err, kind = err.kind(), formula = %Formula::Alg3, "Srz fallback");
                Ok(alg3(x, y, z))
            }
            Err(err @ (EvalError::TableUnavailable { .. } | EvalError::OutOfDomain { .. })) => {
                tracing::debug!(x, y, z, error = %err, kind = err.kind(), formula = %Formula::Alg3, "Srz fallback");
                Ok(alg3(x, y, z))
            }
            Err(err) => Err(err),
        }
    }

    fn srz_primary(&self, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
        if z <= x + y {
            // The U(y) terms cancel, but both lookups still run and can fail.
            let t_z = self.t(z)?;
            let u_y = self.u(y)?;
            let u_y_again = self.u(y)?;
            Ok(t_z + u_y - u_y_again)
        } else {
            let t_x = self.t(x)?;
            let t_z = self.t(z)?;
            let u_y = self.u(y)?;
            Ok(t_x + t_z - u_y)
        }
    }

    pub fn grs(&self, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
        match self.grs_primary(x, y, z) {
            Ok(v) => {
                tracing::trace!(x, y, z, formula = %Formula::Primary, "Grs");
                Ok(v)
            }
            Err(err @ EvalError::DivisionByZero { .. }) => {
                tracing::debug!(x, y, z, error = %err, kind = err.kind(), formula = %Formula::Alg2, "Grs fallback");
                Ok(alg2(x, y, z))
            }
            Err(err) => Err(err),
        }
    }

    fn grs_primary(&self, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
        // Srz(x, y, z) runs twice: once up front and once inline below.
        let _srz1 = self.srz(x, y, z)?;
        let srz2 = self.srz(z, x, y)?;

        let lhs = 1.389 * glr(x, y) * gold(x, y)? * self.srz(x, y, z)?;
        let rhs = 0.838 * gold(y, y / 5.0)? * glr(x, y) * srz2;
        Ok(lhs + rhs)
    }

    pub fn fun(&self, x: f64, y: f64, z: f64) -> Result<f64, EvalError> {
        Ok(0.33 * self.grs(x, y, z)? + self.grs(y, z, x)? + self.grs(z, x, y)?)
    }

    /// `fun` applied to a request, logging any failure that escapes the fallbacks.
    pub fn evaluate(&self, request: EvaluationRequest) -> Result<f64, EvalError> {
        let EvaluationRequest { x, y, z } = request;
        self.fun(x, y, z).inspect_err(|err| {
            tracing::warn!(%request, error = %err, "evaluation failed");
        })
    }
}
