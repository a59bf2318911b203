use std::path::PathBuf;
use std::time::Duration;

use parla_model::{ColumnKind, ModelError};
use parla_persistence::{DatasetSnapshot, SourceFingerprint};
use parla_tei::RenderStats;
use parla_transform::{CategorizeReport, MergeStats};

/// Outcome of `prepare`.
#[derive(Debug)]
pub struct PrepareResult {
    pub snapshot_path: PathBuf,
    pub language: String,
    pub sources: Vec<SourceFingerprint>,
    pub merge: MergeStats,
    pub categorize: CategorizeReport,
    pub columns: Vec<(String, ColumnKind)>,
    pub duration: Duration,
}

/// Outcome of `render`.
#[derive(Debug)]
pub struct RenderResult {
    pub output_path: PathBuf,
    pub document_id: String,
    pub language: String,
    pub stats: RenderStats,
    pub duration: Duration,
}

/// Whether a recorded source file still matches its fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    Unchanged,
    Changed,
    Missing,
    Unreadable(String),
}

#[derive(Debug)]
pub struct InspectResult {
    pub snapshot_path: PathBuf,
    pub snapshot: DatasetSnapshot,
    pub sources: Vec<(SourceFingerprint, SourceStatus)>,
}

/// One `normalize-id` input and its result.
#[derive(Debug)]
pub struct NormalizedId {
    pub input: String,
    pub result: Result<String, ModelError>,
}
