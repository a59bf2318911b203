//! Merge pipeline of the ParlaMint converter.
//!
//! - [`join`]: composite-key relational joins over [`parla_model::Table`]
//! - [`merge`]: text ⨝ session metadata ⟕ speakers ⟕ parties, then sentence segmentation
//! - [`categorize`]: dictionary-encode the fixed list of low-cardinality columns

pub mod categorize;
pub mod error;
pub mod join;
pub mod merge;

pub use categorize::{CategorizeReport, categorize, categorize_default};
pub use error::{Result, TransformError};
pub use join::{JoinKind, JoinOutcome, join};
pub use merge::{MergeInputs, MergeOptions, MergeOutcome, MergeStats, merge};
