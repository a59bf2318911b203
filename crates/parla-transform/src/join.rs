//! Composite-key joins.
//!
//! Keys compare as exact, case-sensitive strings. A row with a null in any
//! key column never matches. When the right table repeats a key, the first
//! row wins, so a left join always keeps the left table's height and order.
//!
//! Output columns follow the usual relational-merge naming: left columns in
//! order, then right columns in order. Key columns that have the same name
//! on both sides appear once (with the left values); every other name present
//! on both sides is suffixed `_x` (left) and `_y` (right).

use std::collections::{HashMap, HashSet};

use parla_model::{Column, Table};
use tracing::{debug, warn};

use crate::error::{Result, TransformError};

const LEFT_SUFFIX: &str = "_x";
const RIGHT_SUFFIX: &str = "_y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    /// Keep only left rows with a match.
    Inner,
    /// Keep every left row; unmatched rows get nulls on the right side.
    Left,
}

#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub table: Table,
    /// Left rows that found a right row.
    pub matched: usize,
    /// Right rows ignored because an earlier row had the same key.
    pub duplicate_right_keys: usize,
}

pub fn join(
    left: &Table,
    right: &Table,
    left_on: &[&str],
    right_on: &[&str],
    kind: JoinKind,
) -> Result<JoinOutcome> {
    if left_on.is_empty() {
        return Err(TransformError::EmptyJoinKey);
    }
    if left_on.len() != right_on.len() {
        return Err(TransformError::JoinKeyArity {
            left: left_on.len(),
            right: right_on.len(),
        });
    }
    let left_keys = key_columns(left, left_on)?;
    let right_keys = key_columns(right, right_on)?;

    let mut index: HashMap<Vec<&str>, usize> = HashMap::with_capacity(right.height());
    let mut duplicate_right_keys = 0usize;
    for row in 0..right.height() {
        let Some(key) = row_key(&right_keys, row) else {
            continue;
        };
        if index.contains_key(&key) {
            duplicate_right_keys += 1;
        } else {
            index.insert(key, row);
        }
    }
    if duplicate_right_keys > 0 {
        warn!(
            keys = ?right_on,
            duplicates = duplicate_right_keys,
            "right table repeats join keys, keeping first occurrence"
        );
    }

    let mut left_rows: Vec<Option<usize>> = Vec::with_capacity(left.height());
    let mut right_rows: Vec<Option<usize>> = Vec::with_capacity(left.height());
    let mut matched = 0usize;
    for row in 0..left.height() {
        let hit = row_key(&left_keys, row).and_then(|key| index.get(&key).copied());
        if hit.is_some() {
            matched += 1;
        } else if kind == JoinKind::Inner {
            continue;
        }
        left_rows.push(Some(row));
        right_rows.push(hit);
    }

    let shared_keys: HashSet<&str> = left_on
        .iter()
        .zip(right_on)
        .filter(|(l, r)| l == r)
        .map(|(l, _)| *l)
        .collect();
    let left_names: HashSet<&str> = left.column_names().into_iter().collect();
    let right_names: HashSet<&str> = right.column_names().into_iter().collect();

    let mut table = Table::new();
    for column in left.columns() {
        let name = column.name();
        let output = if !shared_keys.contains(name) && right_names.contains(name) {
            format!("{name}{LEFT_SUFFIX}")
        } else {
            name.to_string()
        };
        table.push_column(Column::new(output, column.data().take(&left_rows)))?;
    }
    for column in right.columns() {
        let name = column.name();
        if shared_keys.contains(name) {
            continue;
        }
        let output = if left_names.contains(name) {
            format!("{name}{RIGHT_SUFFIX}")
        } else {
            name.to_string()
        };
        table.push_column(Column::new(output, column.data().take(&right_rows)))?;
    }

    debug!(
        ?kind,
        keys = ?left_on,
        left_rows = left.height(),
        right_rows = right.height(),
        output_rows = table.height(),
        matched,
        "join complete"
    );

    Ok(JoinOutcome {
        table,
        matched,
        duplicate_right_keys,
    })
}

fn key_columns<'a>(table: &'a Table, names: &[&str]) -> Result<Vec<&'a Column>> {
    names
        .iter()
        .map(|name| table.require_column(name).map_err(TransformError::from))
        .collect()
}

fn row_key<'a>(columns: &[&'a Column], row: usize) -> Option<Vec<&'a str>> {
    columns.iter().map(|&column| column.value(row)).collect()
}
