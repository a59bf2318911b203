//! Merge pipeline: join the four source tables and segment utterance text.

use std::time::Instant;

use indicatif::ProgressBar;
use parla_model::{Column, ColumnData, Table, columns, normalize_id};
use parla_segment::Segmenter;
use tracing::{debug, info, info_span, warn};

use crate::error::{Result, TransformError};
use crate::join::{JoinKind, join};

/// The four source tables.
#[derive(Debug, Clone)]
pub struct MergeInputs {
    /// `ID` and `Text`, one row per utterance.
    pub text: Table,
    /// Session metadata keyed by `ID`; must contain `Term`.
    pub session_meta: Table,
    /// Speaker roster keyed by (`term2`, `codemp`).
    pub speakers: Table,
    /// Party roster keyed by (`term2`, `party`).
    pub parties: Table,
}

#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Rewrite `ID` values to the zero-padded form after the metadata join.
    pub normalize_ids: bool,
}

impl MergeOptions {
    pub fn with_normalize_ids(mut self, normalize_ids: bool) -> Self {
        self.normalize_ids = normalize_ids;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub text_rows: usize,
    /// Rows left after the inner join with session metadata.
    pub utterances: usize,
    pub dropped_text_rows: usize,
    pub speaker_matches: usize,
    pub party_matches: usize,
    pub normalized_ids: usize,
    pub malformed_ids: usize,
    pub sentences: usize,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub table: Table,
    pub stats: MergeStats,
}

/// Build the merged utterance table.
///
/// 1. `text ⨝ session_meta` on `ID` (inner)
/// 2. `term2 := Term`
/// 3. `⟕ speakers` on (`term2`, `Codemp`) = (`term2`, `codemp`)
/// 4. `⟕ parties` on (`term2`, `party`)
/// 5. `sentences := segment(Text)` for every row, advancing `progress`
///
/// Row order follows the text table. Segmentation errors abort the merge.
pub fn merge(
    inputs: MergeInputs,
    segmenter: &mut Segmenter,
    progress: &ProgressBar,
    options: &MergeOptions,
) -> Result<MergeOutcome> {
    let span = info_span!("merge");
    let _guard = span.enter();
    let start = Instant::now();
    let mut stats = MergeStats {
        text_rows: inputs.text.height(),
        ..MergeStats::default()
    };

    let sessions = join(
        &inputs.text,
        &inputs.session_meta,
        &[columns::ID],
        &[columns::ID],
        JoinKind::Inner,
    )?;
    let mut table = sessions.table;
    stats.utterances = table.height();
    stats.dropped_text_rows = stats.text_rows - stats.utterances;
    if stats.dropped_text_rows > 0 {
        debug!(
            dropped = stats.dropped_text_rows,
            "text rows without session metadata dropped"
        );
    }

    if options.normalize_ids {
        let (normalized, malformed) = normalize_id_column(&mut table)?;
        stats.normalized_ids = normalized;
        stats.malformed_ids = malformed;
    }

    derive_term_key(&mut table)?;

    let speakers = join(
        &table,
        &inputs.speakers,
        &[columns::TERM_KEY, columns::SPEAKER_CODE],
        &[columns::TERM_KEY, columns::ROSTER_SPEAKER_CODE],
        JoinKind::Left,
    )?;
    stats.speaker_matches = speakers.matched;

    let parties = join(
        &speakers.table,
        &inputs.parties,
        &[columns::TERM_KEY, columns::PARTY],
        &[columns::TERM_KEY, columns::PARTY],
        JoinKind::Left,
    )?;
    stats.party_matches = parties.matched;
    let mut table = parties.table;

    let sentences = segment_rows(&table, segmenter, progress)?;
    stats.sentences = sentences.iter().map(Vec::len).sum();
    if table.contains(columns::SENTENCES) {
        table.replace_column(columns::SENTENCES, ColumnData::Sentences(sentences))?;
    } else {
        table.push_column(Column::sentences(columns::SENTENCES, sentences))?;
    }

    info!(
        text_rows = stats.text_rows,
        utterances = stats.utterances,
        speaker_matches = stats.speaker_matches,
        party_matches = stats.party_matches,
        sentences = stats.sentences,
        duration_ms = start.elapsed().as_millis(),
        "merge complete"
    );
    Ok(MergeOutcome { table, stats })
}

/// `term2` mirrors `Term` so both rosters can be joined on the same name.
fn derive_term_key(table: &mut Table) -> Result<()> {
    let values = table.require_column(columns::TERM)?.text_values();
    if table.contains(columns::TERM_KEY) {
        table.replace_column(columns::TERM_KEY, ColumnData::Text(values))?;
    } else {
        table.push_column(Column::text(columns::TERM_KEY, values))?;
    }
    Ok(())
}

/// Returns (normalized, malformed). Malformed IDs are kept unchanged.
fn normalize_id_column(table: &mut Table) -> Result<(usize, usize)> {
    let mut normalized = 0usize;
    let mut malformed = 0usize;
    let values = table
        .require_column(columns::ID)?
        .text_values()
        .into_iter()
        .map(|value| {
            let raw = value?;
            match normalize_id(&raw) {
                Ok(id) => {
                    if id != raw {
                        normalized += 1;
                    }
                    Some(id)
                }
                Err(error) => {
                    malformed += 1;
                    warn!(id = %raw, %error, "keeping malformed utterance ID");
                    Some(raw)
                }
            }
        })
        .collect();
    table.replace_column(columns::ID, ColumnData::Text(values))?;
    Ok((normalized, malformed))
}

fn segment_rows(
    table: &Table,
    segmenter: &mut Segmenter,
    progress: &ProgressBar,
) -> Result<Vec<Vec<String>>> {
    let span = info_span!("segment", rows = table.height());
    let _guard = span.enter();
    progress.set_length(table.height() as u64);
    let mut sentences = Vec::with_capacity(table.height());
    for row in table.rows() {
        let text = row.text().unwrap_or_default();
        let segmented = segmenter
            .segment(text)
            .map_err(|source| TransformError::Segmentation {
                id: row.id().unwrap_or("<missing ID>").to_string(),
                source,
            })?;
        sentences.push(segmented);
        progress.inc(1);
    }
    Ok(sentences)
}
