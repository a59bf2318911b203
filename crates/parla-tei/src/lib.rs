//! TEI/XML rendering of merged ParlaMint sessions.
//!
//! The document is built as an in-memory [`Element`] tree: a `teiHeader`
//! from a per-country [`HeaderProfile`], then one `u` per utterance with one
//! `seg` per sentence. Header statistics (tag usage, speech and word counts)
//! are filled in afterwards by re-scanning the finished tree, and the result
//! is serialized with tab indentation.

mod attribution;
mod error;
mod header;
mod numbers;
mod render;
mod tree;
mod writer;

pub use attribution::{SpeakerRef, drop_punctuation, role_ana, speaker_ref};
pub use error::{RenderError, Result};
pub use header::{HeaderContext, HeaderProfile, build_header, profile_for};
pub use numbers::group_thousands;
pub use render::{RenderOptions, RenderStats, RenderedDocument, render, session_date_range};
pub use tree::{Element, Node};
pub use writer::{to_xml_string, write_document};

/// TEI namespace URI.
pub const TEI_NS: &str = "http://www.tei-c.org/ns/1.0";
