//! Column-oriented in-memory table.
//!
//! A [`Table`] is an ordered list of named columns that all have the same
//! height. Scalar cells are nullable strings; values read from numeric
//! spreadsheet cells are canonicalized to text by the readers so that join
//! keys from different sources compare equal.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ModelError, Result};
use crate::record::UtteranceRecord;

/// Storage kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Categorical,
    Sentences,
}

impl ColumnKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Categorical => "categorical",
            Self::Sentences => "sentences",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dictionary-encoded column: distinct values plus one code per row.
///
/// Categories are ordered by first appearance, so encoding is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalColumn {
    categories: Vec<String>,
    codes: Vec<Option<u32>>,
}

impl CategoricalColumn {
    pub fn from_values(values: &[Option<String>]) -> Result<Self> {
        let mut lookup: HashMap<&str, u32> = HashMap::new();
        let mut categories: Vec<String> = Vec::new();
        let mut codes = Vec::with_capacity(values.len());
        for value in values {
            let Some(text) = value.as_deref() else {
                codes.push(None);
                continue;
            };
            if let Some(code) = lookup.get(text) {
                codes.push(Some(*code));
                continue;
            }
            let code = u32::try_from(categories.len()).map_err(|_| {
                ModelError::TooManyCategories {
                    count: categories.len() + 1,
                }
            })?;
            lookup.insert(text, code);
            categories.push(text.to_string());
            codes.push(Some(code));
        }
        Ok(Self { categories, codes })
    }

    /// Rebuild a column from stored parts, rejecting dangling codes.
    pub fn from_parts(categories: Vec<String>, codes: Vec<Option<u32>>) -> Result<Self> {
        for code in codes.iter().flatten() {
            if *code as usize >= categories.len() {
                return Err(ModelError::InvalidCategoryCode {
                    code: *code,
                    categories: categories.len(),
                });
            }
        }
        Ok(Self { categories, codes })
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        let code = self.codes.get(row).copied().flatten()?;
        self.categories.get(code as usize).map(String::as_str)
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn codes(&self) -> &[Option<u32>] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn to_values(&self) -> Vec<Option<String>> {
        (0..self.codes.len())
            .map(|row| self.get(row).map(str::to_string))
            .collect()
    }
}

/// Cell storage of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnData {
    Text(Vec<Option<String>>),
    Categorical(CategoricalColumn),
    Sentences(Vec<Vec<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::Categorical(column) => column.len(),
            Self::Sentences(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Text(_) => ColumnKind::Text,
            Self::Categorical(_) => ColumnKind::Categorical,
            Self::Sentences(_) => ColumnKind::Sentences,
        }
    }

    /// Scalar value at `row`; `None` for nulls and for sentence columns.
    pub fn text_at(&self, row: usize) -> Option<&str> {
        match self {
            Self::Text(values) => values.get(row).and_then(Option::as_deref),
            Self::Categorical(column) => column.get(row),
            Self::Sentences(_) => None,
        }
    }

    pub fn sentences_at(&self, row: usize) -> Option<&[String]> {
        match self {
            Self::Sentences(values) => values.get(row).map(Vec::as_slice),
            _ => None,
        }
    }

    /// Gather rows by index; `None` produces a null (or an empty sentence list).
    pub fn take(&self, indices: &[Option<usize>]) -> Self {
        match self {
            Self::Text(values) => Self::Text(
                indices
                    .iter()
                    .map(|index| index.and_then(|i| values.get(i).cloned().flatten()))
                    .collect(),
            ),
            Self::Categorical(column) => Self::Categorical(CategoricalColumn {
                categories: column.categories.clone(),
                codes: indices
                    .iter()
                    .map(|index| index.and_then(|i| column.codes.get(i).copied().flatten()))
                    .collect(),
            }),
            Self::Sentences(values) => Self::Sentences(
                indices
                    .iter()
                    .map(|index| {
                        index
                            .and_then(|i| values.get(i).cloned())
                            .unwrap_or_default()
                    })
                    .collect(),
            ),
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self::new(name, ColumnData::Text(values))
    }

    pub fn sentences(name: impl Into<String>, values: Vec<Vec<String>>) -> Self {
        Self::new(name, ColumnData::Sentences(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn value(&self, row: usize) -> Option<&str> {
        self.data.text_at(row)
    }

    /// Scalar values as owned nullable strings (empty for sentence columns).
    pub fn text_values(&self) -> Vec<Option<String>> {
        match &self.data {
            ColumnData::Text(values) => values.clone(),
            ColumnData::Categorical(column) => column.to_values(),
            ColumnData::Sentences(_) => Vec::new(),
        }
    }
}

/// Ordered collection of equal-height columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.push_column(column)?;
        }
        Ok(table)
    }

    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.contains(column.name()) {
            return Err(ModelError::DuplicateColumn {
                name: column.name().to_string(),
            });
        }
        if self.columns.is_empty() {
            self.height = column.len();
        } else if column.len() != self.height {
            return Err(ModelError::HeightMismatch {
                name: column.name().to_string(),
                expected: self.height,
                actual: column.len(),
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Swap the storage of an existing column, keeping its position.
    pub fn replace_column(&mut self, name: &str, data: ColumnData) -> Result<()> {
        let height = self.height;
        let column = self
            .columns
            .iter_mut()
            .find(|column| column.name == name)
            .ok_or_else(|| ModelError::MissingColumn {
                name: name.to_string(),
            })?;
        if data.len() != height {
            return Err(ModelError::HeightMismatch {
                name: name.to_string(),
                expected: height,
                actual: data.len(),
            });
        }
        column.data = data;
        Ok(())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| ModelError::MissingColumn {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        self.column(name).and_then(|column| column.value(row))
    }

    pub fn row(&self, index: usize) -> Option<UtteranceRecord<'_>> {
        (index < self.height).then(|| UtteranceRecord::new(self, index))
    }

    pub fn rows(&self) -> impl Iterator<Item = UtteranceRecord<'_>> {
        (0..self.height).map(move |index| UtteranceRecord::new(self, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn column_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ColumnKind::Categorical).unwrap(),
            "\"categorical\""
        );
        let kind: ColumnKind = serde_json::from_str("\"sentences\"").unwrap();
        assert_eq!(kind, ColumnKind::Sentences);
    }

    #[test]
    fn categorical_orders_categories_by_first_appearance() {
        let column =
            CategoricalColumn::from_values(&text(&[Some("b"), None, Some("a"), Some("b")]))
                .unwrap();
        assert_eq!(column.categories(), &["b".to_string(), "a".to_string()]);
        assert_eq!(column.codes(), &[Some(0), None, Some(1), Some(0)]);
        assert_eq!(column.get(2), Some("a"));
        assert_eq!(column.get(1), None);
    }

    #[test]
    fn categorical_rejects_dangling_codes() {
        let error = CategoricalColumn::from_parts(vec!["a".into()], vec![Some(3)]).unwrap_err();
        assert_eq!(
            error,
            ModelError::InvalidCategoryCode {
                code: 3,
                categories: 1
            }
        );
    }

    #[test]
    fn push_column_checks_height_and_names() {
        let mut table = Table::new();
        table
            .push_column(Column::text("ID", text(&[Some("a"), Some("b")])))
            .unwrap();
        let mismatch = table.push_column(Column::text("Text", text(&[Some("x")])));
        assert!(matches!(mismatch, Err(ModelError::HeightMismatch { .. })));
        let duplicate = table.push_column(Column::text("ID", text(&[None, None])));
        assert!(matches!(duplicate, Err(ModelError::DuplicateColumn { .. })));
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 1);
    }

    #[test]
    fn take_with_missing_indices_yields_nulls() {
        let data = ColumnData::Text(text(&[Some("a"), Some("b")]));
        let taken = data.take(&[Some(1), None, Some(0)]);
        assert_eq!(taken, ColumnData::Text(text(&[Some("b"), None, Some("a")])));

        let sentences = ColumnData::Sentences(vec![vec!["One.".into()]]);
        let taken = sentences.take(&[None, Some(0)]);
        assert_eq!(
            taken,
            ColumnData::Sentences(vec![Vec::new(), vec!["One.".to_string()]])
        );
    }
}
