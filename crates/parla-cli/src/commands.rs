use std::io::{self, IsTerminal};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span, warn};

use parla_ingest::{read_meta_file, read_roster, read_text_file};
use parla_model::normalize_id;
use parla_persistence::{
    DatasetSnapshot, PersistenceError, SourceFingerprint, load_snapshot, save_snapshot,
};
use parla_segment::{Segmenter, SegmenterConfig};
use parla_tei::{RenderOptions, render, write_document};
use parla_transform::{MergeInputs, MergeOptions, categorize_default, merge};

use crate::cli::{InspectArgs, PrepareArgs, RenderArgs};
use crate::types::{InspectResult, NormalizedId, PrepareResult, RenderResult, SourceStatus};

pub fn run_prepare(args: &PrepareArgs) -> Result<PrepareResult> {
    let span = info_span!("prepare", out = %args.out.display());
    let _guard = span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let ingest_span = info_span!("ingest");
    let inputs = ingest_span.in_scope(|| -> Result<MergeInputs> {
        Ok(MergeInputs {
            text: read_text_file(&args.text)
                .with_context(|| format!("read session text {}", args.text.display()))?,
            session_meta: read_meta_file(&args.meta)
                .with_context(|| format!("read session metadata {}", args.meta.display()))?,
            speakers: read_roster(&args.speakers)
                .with_context(|| format!("read speaker roster {}", args.speakers.display()))?,
            parties: read_roster(&args.parties)
                .with_context(|| format!("read party roster {}", args.parties.display()))?,
        })
    })?;
    let sources = fingerprint_sources(args)?;
    info!(
        text_rows = inputs.text.height(),
        meta_rows = inputs.session_meta.height(),
        speakers = inputs.speakers.height(),
        parties = inputs.parties.height(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Merge and segment
    // =========================================================================
    let mut config = SegmenterConfig::new(&args.language).with_processors(&args.processors);
    if let Some(dir) = &args.resource_dir {
        config = config.with_resource_dir(dir.clone());
    }
    let language = config.language().to_string();
    let mut segmenter = Segmenter::new(config);
    let progress = segmentation_progress();
    let options = MergeOptions::default().with_normalize_ids(args.normalize_ids);
    let outcome = merge(inputs, &mut segmenter, &progress, &options);
    progress.finish_and_clear();
    let outcome = outcome.context("merge session tables")?;
    let merge_stats = outcome.stats;
    let mut table = outcome.table;

    // =========================================================================
    // Stage 3: Categorize and persist
    // =========================================================================
    let categorize = categorize_default(&mut table);
    let columns = table
        .columns()
        .iter()
        .map(|column| (column.name().to_string(), column.kind()))
        .collect();

    let save_start = Instant::now();
    let snapshot = DatasetSnapshot::from_table(&table, &language, sources.clone());
    save_snapshot(&snapshot, &args.out)
        .with_context(|| format!("write snapshot {}", args.out.display()))?;
    info!(
        rows = table.height(),
        columns = table.width(),
        duration_ms = save_start.elapsed().as_millis(),
        "snapshot saved"
    );

    Ok(PrepareResult {
        snapshot_path: args.out.clone(),
        language,
        sources,
        merge: merge_stats,
        categorize,
        columns,
        duration: start.elapsed(),
    })
}

pub fn run_render(args: &RenderArgs) -> Result<RenderResult> {
    let span = info_span!("render_session", term = args.term, session = args.session);
    let _guard = span.enter();
    let start = Instant::now();

    let snapshot = open_snapshot(&args.snapshot)?;
    if args.verify_sources {
        for source in &snapshot.sources {
            source
                .verify()
                .map_err(|error| with_suggestion(error, "verify snapshot sources"))?;
        }
    }
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| snapshot.language.clone());
    let table = snapshot
        .into_table()
        .map_err(|error| with_suggestion(error, "rebuild merged table"))?;

    let options = RenderOptions::new(args.term, args.session, &language);
    let document = render(&table, &options).context("render TEI document")?;
    write_document(&args.out, &document)
        .with_context(|| format!("write TEI document {}", args.out.display()))?;
    let document_id = document
        .root()
        .get_attr("xml:id")
        .unwrap_or_default()
        .to_string();

    Ok(RenderResult {
        output_path: args.out.clone(),
        document_id,
        language,
        stats: document.stats(),
        duration: start.elapsed(),
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<InspectResult> {
    let snapshot = open_snapshot(&args.snapshot)?;
    let sources = snapshot
        .sources
        .iter()
        .map(|source| (source.clone(), source_status(source)))
        .collect();
    Ok(InspectResult {
        snapshot_path: args.snapshot.clone(),
        snapshot,
        sources,
    })
}

pub fn run_normalize_ids(ids: &[String]) -> Vec<NormalizedId> {
    ids.iter()
        .map(|input| NormalizedId {
            input: input.clone(),
            result: normalize_id(input),
        })
        .collect()
}

fn fingerprint_sources(args: &PrepareArgs) -> Result<Vec<SourceFingerprint>> {
    [
        ("text", &args.text),
        ("meta", &args.meta),
        ("speakers", &args.speakers),
        ("parties", &args.parties),
    ]
    .into_iter()
    .map(|(role, path)| {
        SourceFingerprint::compute(role, path)
            .with_context(|| format!("fingerprint {role} file {}", path.display()))
    })
    .collect()
}

fn open_snapshot(path: &Path) -> Result<DatasetSnapshot> {
    load_snapshot(path).map_err(|error| {
        with_suggestion(error, "load snapshot")
            .context(format!("snapshot {}", path.display()))
    })
}

/// Attach the persistence layer's remediation hint, if any.
fn with_suggestion(error: PersistenceError, operation: &str) -> anyhow::Error {
    match error.suggestion() {
        Some(hint) => anyhow!(error).context(format!("{operation} (hint: {hint})")),
        None => anyhow!(error).context(operation.to_string()),
    }
}

fn source_status(source: &SourceFingerprint) -> SourceStatus {
    match source.verify() {
        Ok(()) => SourceStatus::Unchanged,
        Err(PersistenceError::SourceFileChanged { .. }) => SourceStatus::Changed,
        Err(PersistenceError::SourceFileMissing { .. }) => SourceStatus::Missing,
        Err(error) => {
            warn!(path = %source.path, %error, "cannot verify source file");
            SourceStatus::Unreadable(error.to_string())
        }
    }
}

/// Segmentation progress on stderr; hidden when stderr is not a terminal.
fn segmentation_progress() -> ProgressBar {
    if !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(0);
    let style = ProgressStyle::default_bar()
        .template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} utterances ({percent}%) {eta}",
        )
        .or_else(|_| {
            ProgressStyle::default_bar().template("{spinner} [{bar:40}] {pos}/{len} ({percent}%)")
        })
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress
}
