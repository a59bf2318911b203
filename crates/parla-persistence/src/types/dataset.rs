use chrono::{DateTime, Utc};
use rkyv::{Archive, Deserialize, Serialize};

use super::SourceFingerprint;

/// Merged dataset as stored on disk.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub schema_version: u32,

    /// RFC 3339 creation timestamp.
    pub created_at: String,

    /// Version of the tool that wrote the snapshot.
    pub tool_version: String,

    /// Language the sentences were segmented with.
    pub language: String,

    pub sources: Vec<SourceFingerprint>,

    pub rows: u64,

    /// Columns in table order.
    pub columns: Vec<ColumnSnapshot>,
}

impl DatasetSnapshot {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSnapshot> {
        self.columns.iter().find(|column| column.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub name: String,
    pub values: ColumnValuesSnapshot,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub enum ColumnValuesSnapshot {
    Text(Vec<Option<String>>),
    Categorical {
        categories: Vec<String>,
        codes: Vec<Option<u32>>,
    },
    Sentences(Vec<Vec<String>>),
}

impl ColumnValuesSnapshot {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Categorical { .. } => "categorical",
            Self::Sentences(_) => "sentences",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::Categorical { codes, .. } => codes.len(),
            Self::Sentences(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
