//! Sentence segmentation for utterance text.
//!
//! A [`Segmenter`] owns at most one tokenizer for a fixed language and
//! processor configuration. The tokenizer is built on first use through a
//! [`TokenizerFactory`]; when construction reports missing resources the
//! factory installs them once and construction is retried.
//!
//! The built-in factory ([`LexiconFactory`]) splits on Unicode sentence
//! boundaries and consults a per-language abbreviation lexicon so that
//! "dr. Horvat" or a date such as "1. 2. 2020." stay in one sentence.

mod config;
mod error;
mod lexicon;
mod segmenter;
mod tokenizer;

pub use config::SegmenterConfig;
pub use error::{Result, SegmentError};
pub use lexicon::{Lexicon, bundled_lexicon, primary_subtag};
pub use segmenter::Segmenter;
pub use tokenizer::{LexiconFactory, LexiconTokenizer, SentenceTokenizer, TokenizerFactory};
