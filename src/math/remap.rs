//! Argument routing between the central table and the reciprocal tail tables.
//!
//! The tail tables are indexed by `1/x`, so they cover the unit interval in
//! transformed space. The three-way branch is evaluated in a fixed order with
//! the comparisons below; the order decides which table a boundary value uses.

use crate::domain::TableKey;

/// A raw argument routed to a table, with the abscissa to look up there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MappedArgument {
    pub key: TableKey,
    pub value: f64,
}

/// Route `v` to a table key and its lookup abscissa.
pub fn map_argument(v: f64) -> MappedArgument {
    if v <= 1.0 {
        MappedArgument {
            key: TableKey::Central,
            value: v,
        }
    } else if v < -1.0 {
        MappedArgument {
            key: TableKey::NegativeTail,
            value: 1.0 / v,
        }
    } else {
        MappedArgument {
            key: TableKey::PositiveTail,
            value: 1.0 / v,
        }
    }
}
