//! Shared domain types.
//!
//! These types are kept small and `Copy` where possible so that evaluations can
//! run on many threads without sharing anything but the loaded tables.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Logical identity of one of the three interpolation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKey {
    /// Arguments in the native range, looked up without transform.
    Central,
    /// Arguments below -1, looked up as `1/x`.
    NegativeTail,
    /// Arguments above 1, looked up as `1/x`.
    PositiveTail,
}

impl TableKey {
    pub const ALL: [TableKey; 3] = [TableKey::Central, TableKey::NegativeTail, TableKey::PositiveTail];

    pub fn as_str(self) -> &'static str {
        match self {
            TableKey::Central => "central",
            TableKey::NegativeTail => "negative-tail",
            TableKey::PositiveTail => "positive-tail",
        }
    }

    /// File name used when no override is configured.
    pub fn default_file_name(self) -> &'static str {
        match self {
            TableKey::Central => "dat_X_1_1.dat",
            TableKey::NegativeTail => "dat_X00_1.dat",
            TableKey::PositiveTail => "dat_X1_00.dat",
        }
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(x, T, U)` row of a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRecord {
    pub x: f64,
    pub t: f64,
    pub u: f64,
}

impl TableRecord {
    pub fn new(x: f64, t: f64, u: f64) -> Self {
        Self { x, t, u }
    }

    pub fn ordinate(&self, which: Ordinate) -> f64 {
        match which {
            Ordinate::T => self.t,
            Ordinate::U => self.u,
        }
    }
}

/// Which ordinate column an interpolation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordinate {
    T,
    U,
}

/// A loaded table: records ordered by non-decreasing `x`.
///
/// Tables are never mutated after loading; sources hand them out as `Arc<Table>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub key: TableKey,
    pub records: Vec<TableRecord>,
}

impl Table {
    pub fn new(key: TableKey, records: Vec<TableRecord>) -> Self {
        Self { key, records }
    }

    /// Build a table from `(x, T, U)` tuples.
    pub fn from_rows(key: TableKey, rows: &[(f64, f64, f64)]) -> Self {
        let records = rows.iter().map(|&(x, t, u)| TableRecord::new(x, t, u)).collect();
        Self { key, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(min x, max x)` of the table, if it has any records.
    pub fn span(&self) -> Option<(f64, f64)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.x, last.x))
    }
}

/// The `(x, y, z)` triple handed to `fun`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationRequest {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EvaluationRequest {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for EvaluationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Outcome of one line of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchRow {
    pub line: usize,
    #[serde(flatten)]
    pub request: EvaluationRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchRow {
    pub fn new(line: usize, request: EvaluationRequest, outcome: Result<f64, String>) -> Self {
        let (value, error) = match outcome {
            Ok(v) => (Some(v), None),
            Err(e) => (None, Some(e)),
        };
        Self {
            line,
            request,
            value,
            error,
        }
    }
}

/// Which formula produced the value of a sub-call. Only reported in traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    Primary,
    Alg2,
    Alg3,
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Formula::Primary => "primary",
            Formula::Alg2 => "alg2",
            Formula::Alg3 => "alg3",
        };
        f.write_str(name)
    }
}

/// Binding from table key to physical file, plus cache behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub dir: PathBuf,
    pub central: PathBuf,
    pub negative_tail: PathBuf,
    pub positive_tail: PathBuf,
    /// Load each table at most once per process.
    pub cache: bool,
}

impl TableConfig {
    /// Defaults rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            central: PathBuf::from(TableKey::Central.default_file_name()),
            negative_tail: PathBuf::from(TableKey::NegativeTail.default_file_name()),
            positive_tail: PathBuf::from(TableKey::PositiveTail.default_file_name()),
            cache: true,
        }
    }

    /// Resolved path of the resource bound to `key`.
    ///
    /// Absolute file overrides are used as-is; relative ones are joined onto `dir`.
    pub fn path_for(&self, key: TableKey) -> PathBuf {
        let file = match key {
            TableKey::Central => &self.central,
            TableKey::NegativeTail => &self.negative_tail,
            TableKey::PositiveTail => &self.positive_tail,
        };
        self.dir.join(file)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::in_dir("tables")
    }
}
