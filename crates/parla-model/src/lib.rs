//! Data model shared by every stage of the ParlaMint converter.
//!
//! - [`Table`]: ordered, named, equal-height columns (text, categorical, sentences)
//! - [`UtteranceRecord`]: read-only view of one merged row
//! - [`normalize_id`]: zero-padding of term/session components in utterance IDs
//! - [`columns`]: names of the columns the pipeline reads and writes

pub mod columns;
pub mod error;
pub mod ids;
pub mod record;
pub mod table;

pub use error::{ModelError, Result};
pub use ids::{ParlaMintId, normalize_id};
pub use record::UtteranceRecord;
pub use table::{CategoricalColumn, Column, ColumnData, ColumnKind, Table};
