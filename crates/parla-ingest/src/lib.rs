//! Tabular readers for the ParlaMint converter.
//!
//! Three source kinds are supported:
//!
//! - **Session text**: one utterance per line, `ID` followed by free text
//! - **Session metadata**: tab-separated file with a header row
//! - **Rosters**: speaker and party tables as spreadsheets (XLSX/XLS/ODS) or CSV/TSV
//!
//! Every reader returns a [`parla_model::Table`] whose cells are canonical
//! text, so join keys compare equal regardless of the source format.

mod delimited;
mod error;
mod paths;
mod roster;
mod text_file;
mod values;

pub use delimited::{dataframe_to_table, read_delimited, read_meta_file};
pub use error::{IngestError, Result};
pub use paths::{ensure_file, require_columns};
pub use roster::{RosterFormat, read_roster};
pub use text_file::read_text_file;
pub use values::{any_to_string, any_to_string_non_empty, format_numeric};
