//! Read-through table cache.
//!
//! Wraps another `TableSource` so each table is loaded at most once per
//! process. Every key has its own slot lock, held for the duration of that
//! key's load: concurrent first access to one key performs a single load, and
//! a slow load never blocks hits on the other keys. Failed loads are not
//! remembered and are retried on the next request.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{Table, TableKey};
use crate::error::EvalError;
use crate::io::table::TableSource;

pub struct CachedTableSource<S> {
    inner: S,
    slots: HashMap<TableKey, Mutex<Option<Arc<Table>>>>,
}

impl<S: TableSource> CachedTableSource<S> {
    pub fn new(inner: S) -> Self {
        let slots = TableKey::ALL.into_iter().map(|key| (key, Mutex::new(None))).collect();
        Self { inner, slots }
    }

    /// Number of tables currently held.
    pub fn cached(&self) -> usize {
        self.slots.values().filter(|slot| slot.lock().is_some()).count()
    }
}

impl<S: TableSource> TableSource for CachedTableSource<S> {
    fn load(&self, key: TableKey) -> Result<Arc<Table>, EvalError> {
        let Some(slot) = self.slots.get(&key) else {
            return self.inner.load(key);
        };

        let mut slot = slot.lock();
        if let Some(table) = slot.as_ref() {
            tracing::trace!(%key, "table cache hit");
            return Ok(Arc::clone(table));
        }

        let table = self.inner.load(key)?;
        *slot = Some(Arc::clone(&table));
        Ok(table)
    }
}
