use thiserror::Error;

use crate::table::ColumnKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("identifier '{value}' does not match ParlaMint-{{lang}}_T{{term}}.S{{session}}.{{rest}}")]
    InvalidIdentifier { value: String },
    #[error("column '{name}' not found")]
    MissingColumn { name: String },
    #[error("duplicate column '{name}'")]
    DuplicateColumn { name: String },
    #[error("column '{name}' has {actual} rows, expected {expected}")]
    HeightMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("column '{name}' holds {kind} values and cannot be categorized")]
    NotCategorizable { name: String, kind: ColumnKind },
    #[error("{count} categories exceed the categorical code range")]
    TooManyCategories { count: usize },
    #[error("category code {code} out of range for {categories} categories")]
    InvalidCategoryCode { code: u32, categories: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
