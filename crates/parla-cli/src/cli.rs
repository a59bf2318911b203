//! CLI argument definitions for the ParlaMint converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "parlamint",
    version,
    about = "ParlaMint converter - tabular parliamentary transcripts to TEI/XML",
    long_about = "Convert tabular parliamentary transcripts to ParlaMint TEI/XML.\n\n\
                  `prepare` merges the session text with its metadata and the speaker\n\
                  and party rosters, segments every utterance into sentences and saves\n\
                  a snapshot. `render` turns a snapshot into one TEI document per session."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge and segment one session and save the result as a snapshot.
    Prepare(PrepareArgs),

    /// Render a snapshot as a TEI/XML document.
    Render(RenderArgs),

    /// Show snapshot metadata, source fingerprints and column kinds.
    Inspect(InspectArgs),

    /// Print normalized utterance identifiers.
    NormalizeId(NormalizeIdArgs),
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Session text: one utterance per line, ID then text.
    #[arg(long = "text", value_name = "FILE")]
    pub text: PathBuf,

    /// Tab-separated session metadata with an ID column.
    #[arg(long = "meta", value_name = "FILE")]
    pub meta: PathBuf,

    /// Speaker roster (xlsx, xls, ods, csv or tsv).
    #[arg(long = "speakers", value_name = "FILE")]
    pub speakers: PathBuf,

    /// Party roster (xlsx, xls, ods, csv or tsv).
    #[arg(long = "parties", value_name = "FILE")]
    pub parties: PathBuf,

    /// Snapshot file to write.
    #[arg(long = "out", value_name = "FILE")]
    pub out: PathBuf,

    /// Language of the transcripts (hr, sr, bs, ...).
    #[arg(long = "language", default_value = "hr")]
    pub language: String,

    /// Segmenter processors, comma-separated.
    #[arg(long = "processors", default_value = "tokenize")]
    pub processors: String,

    /// Directory holding segmenter resources (installed on first use).
    ///
    /// Without this flag the lexicons bundled with the binary are used.
    #[arg(long = "resource-dir", value_name = "DIR")]
    pub resource_dir: Option<PathBuf>,

    /// Zero-pad term and session numbers in utterance IDs.
    #[arg(long = "normalize-ids")]
    pub normalize_ids: bool,
}

#[derive(Parser)]
pub struct RenderArgs {
    /// Snapshot written by `prepare`.
    #[arg(long = "snapshot", value_name = "FILE")]
    pub snapshot: PathBuf,

    /// TEI/XML file to write.
    #[arg(long = "out", value_name = "FILE")]
    pub out: PathBuf,

    /// Parliamentary term number.
    #[arg(long = "term")]
    pub term: u32,

    /// Session number within the term.
    #[arg(long = "session")]
    pub session: u32,

    /// Header language (default: the language the snapshot was prepared with).
    #[arg(long = "language")]
    pub language: Option<String>,

    /// Fail if a source file changed since the snapshot was written.
    #[arg(long = "verify-sources")]
    pub verify_sources: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Snapshot written by `prepare`.
    #[arg(long = "snapshot", value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Print a JSON report instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct NormalizeIdArgs {
    /// Utterance identifiers, e.g. ParlaMint-RS_T4.S2.u2565.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
