//! Table resources: the `TableSource` seam plus file and in-memory sources.
//!
//! A table file is a sequence of whitespace-separated `x T U` triples sorted by
//! `x`. Records may span lines (the parser reads token groups, not lines); blank
//! lines and `#` comments are skipped.
//!
//! Two failure classes, both recovered by the `Srz` fallback:
//! - missing, unreadable or empty resources are `TableUnavailable`
//! - content that is present but not a valid table is `MalformedTable`, kept
//!   apart so the fallback can log it louder

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{Table, TableConfig, TableKey, TableRecord};
use crate::error::EvalError;

/// Something that can produce the table bound to a key.
///
/// Implementations must be shareable across threads; loaded tables are
/// immutable and handed out as `Arc<Table>`.
pub trait TableSource: Send + Sync {
    fn load(&self, key: TableKey) -> Result<Arc<Table>, EvalError>;
}

impl<S: TableSource + ?Sized> TableSource for &S {
    fn load(&self, key: TableKey) -> Result<Arc<Table>, EvalError> {
        (**self).load(key)
    }
}

impl<S: TableSource + ?Sized> TableSource for Box<S> {
    fn load(&self, key: TableKey) -> Result<Arc<Table>, EvalError> {
        (**self).load(key)
    }
}

impl<S: TableSource + ?Sized> TableSource for Arc<S> {
    fn load(&self, key: TableKey) -> Result<Arc<Table>, EvalError> {
        (**self).load(key)
    }
}

/// Reads tables from the files bound in a `TableConfig`, on every call.
#[derive(Debug, Clone)]
pub struct FileTableSource {
    config: TableConfig,
}

impl FileTableSource {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }
}

impl TableSource for FileTableSource {
    fn load(&self, key: TableKey) -> Result<Arc<Table>, EvalError> {
        let path = self.config.path_for(key);
        let table = read_table(key, &path)?;
        tracing::debug!(%key, path = %path.display(), records = table.len(), "loaded table");
        Ok(Arc::new(table))
    }
}

/// Tables held in memory, keyed by identity. Keys without a table are unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableSource {
    tables: HashMap<TableKey, Arc<Table>>,
}

impl MemoryTableSource {
    /// A source with no tables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The same rows bound to every key.
    pub fn uniform(rows: &[(f64, f64, f64)]) -> Self {
        let mut source = Self::empty();
        for key in TableKey::ALL {
            source = source.with_table(Table::from_rows(key, rows));
        }
        source
    }

    pub fn with_table(mut self, table: Table) -> Self {
        self.tables.insert(table.key, Arc::new(table));
        self
    }
}

impl TableSource for MemoryTableSource {
    fn load(&self, key: TableKey) -> Result<Arc<Table>, EvalError> {
        self.tables
            .get(&key)
            .cloned()
            .ok_or_else(|| EvalError::TableUnavailable {
                key,
                reason: "no table bound to this key".to_string(),
            })
    }
}

/// Read and parse the table at `path`.
pub fn read_table(key: TableKey, path: &Path) -> Result<Table, EvalError> {
    let text = std::fs::read_to_string(path).map_err(|e| EvalError::TableUnavailable {
        key,
        reason: format!("cannot read '{}': {e}", path.display()),
    })?;
    parse_table(key, &text)
}

/// Parse `x T U` triples into a table.
pub fn parse_table(key: TableKey, text: &str) -> Result<Table, EvalError> {
    let malformed = |reason: String| EvalError::MalformedTable { key, reason };

    let mut values = Vec::new();
    let mut last_line = 0usize;
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        for token in content.split_whitespace() {
            let v = token
                .parse::<f64>()
                .map_err(|_| malformed(format!("line {line_no}: invalid number `{token}`")))?;
            if !v.is_finite() {
                return Err(malformed(format!("line {line_no}: non-finite value `{token}`")));
            }
            values.push(v);
            last_line = line_no;
        }
    }

    if values.is_empty() {
        return Err(EvalError::TableUnavailable {
            key,
            reason: "table has no records".to_string(),
        });
    }
    if values.len() % 3 != 0 {
        return Err(malformed(format!(
            "line {last_line}: incomplete record ({} trailing value(s), expected `x T U`)",
            values.len() % 3
        )));
    }

    let records: Vec<TableRecord> = values
        .chunks_exact(3)
        .map(|c| TableRecord::new(c[0], c[1], c[2]))
        .collect();

    if let Some(i) = records.windows(2).position(|w| w[1].x < w[0].x) {
        return Err(malformed(format!(
            "record {} has x={} after x={} (must be sorted ascending)",
            i + 2,
            records[i + 1].x,
            records[i].x
        )));
    }

    Ok(Table::new(key, records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn parses_triples_across_lines_and_comments() {
        let text = "# x T U\n-1 0 0\n0 1\n 2   # split record\n1 2 4\n\n";
        let table = parse_table(TableKey::Central, text).unwrap();
        assert_eq!(table.key, TableKey::Central);
        assert_eq!(
            table.records,
            vec![
                TableRecord::new(-1.0, 0.0, 0.0),
                TableRecord::new(0.0, 1.0, 2.0),
                TableRecord::new(1.0, 2.0, 4.0),
            ]
        );
    }

    #[test]
    fn empty_table_is_unavailable() {
        for text in ["", "\n\n", "# only a comment\n"] {
            assert!(matches!(
                parse_table(TableKey::PositiveTail, text),
                Err(EvalError::TableUnavailable {
                    key: TableKey::PositiveTail,
                    ..
                })
            ));
        }
    }

    #[test]
    fn bad_content_is_malformed() {
        let cases = [
            "0 1 2\n0.5 abc 3\n",
            "0 1 2\n0.5 1\n",
            "0 1 2\n0.5 inf 3\n",
            "0 1 2\n-0.5 1 3\n",
        ];
        for text in cases {
            let err = parse_table(TableKey::Central, text).unwrap_err();
            assert!(matches!(err, EvalError::MalformedTable { .. }), "{text:?} -> {err}");
        }
    }

    #[test]
    fn malformed_reason_names_the_line() {
        let err = parse_table(TableKey::Central, "0 1 2\n0.5 abc 3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
        assert!(err.to_string().contains("abc"), "{err}");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileTableSource::new(TableConfig::in_dir(dir.path()));
        let err = source.load(TableKey::Central).unwrap_err();
        assert!(matches!(err, EvalError::TableUnavailable { key: TableKey::Central, .. }));
        assert!(err.to_string().contains("dat_X_1_1.dat"));
    }

    #[test]
    fn file_source_reads_bound_file() {
        let mut file = NamedTempFile::with_suffix(".dat").unwrap();
        writeln!(file, "-1 0 0\n0 1 2\n1 2 4").unwrap();

        let mut config = TableConfig::in_dir("unused");
        config.positive_tail = file.path().to_path_buf();
        let source = FileTableSource::new(config);

        let table = source.load(TableKey::PositiveTail).unwrap();
        assert_eq!(table.key, TableKey::PositiveTail);
        assert_eq!(table.len(), 3);
        assert!(source.load(TableKey::Central).is_err());
    }

    #[test]
    fn shipped_tables_parse_and_cover_their_ranges() {
        let central = parse_table(TableKey::Central, include_str!("../../tables/dat_X_1_1.dat")).unwrap();
        assert_eq!(central.span(), Some((-1.0, 1.0)));

        let negative = parse_table(TableKey::NegativeTail, include_str!("../../tables/dat_X00_1.dat")).unwrap();
        assert_eq!(negative.span(), Some((-1.0, 0.0)));

        let positive = parse_table(TableKey::PositiveTail, include_str!("../../tables/dat_X1_00.dat")).unwrap();
        assert_eq!(positive.span(), Some((0.0, 1.0)));
    }

    #[test]
    fn memory_source_reports_unbound_keys() {
        let source = MemoryTableSource::empty().with_table(Table::from_rows(
            TableKey::Central,
            &[(0.0, 1.0, 1.0), (1.0, 2.0, 2.0)],
        ));
        assert!(source.load(TableKey::Central).is_ok());
        assert!(matches!(
            source.load(TableKey::NegativeTail),
            Err(EvalError::TableUnavailable { .. })
        ));
    }
}
