//! Tokenizer seams and the built-in lexicon tokenizer.

use tracing::{debug, info};
use unicode_segmentation::UnicodeSegmentation;

use crate::config::SegmenterConfig;
use crate::error::{Result, SegmentError};
use crate::lexicon::{Lexicon, bundled_lexicon};

/// Splits text into sentences.
pub trait SentenceTokenizer {
    /// Sentences of `text` in document order, trimmed, never empty strings.
    fn sentences(&self, text: &str) -> Result<Vec<String>>;
}

/// Builds tokenizers and installs the resources they need.
pub trait TokenizerFactory {
    /// Construct a tokenizer; fails with [`SegmentError::ResourcesMissing`]
    /// when [`TokenizerFactory::install_resources`] may help.
    fn build(&self, config: &SegmenterConfig) -> Result<Box<dyn SentenceTokenizer>>;

    fn install_resources(&self, config: &SegmenterConfig) -> Result<()>;
}

/// Unicode sentence boundaries with abbreviation and numeric date suppression.
#[derive(Debug, Clone, Default)]
pub struct LexiconTokenizer {
    lexicon: Lexicon,
}

impl LexiconTokenizer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Whether a boundary after `sentence` must be suppressed.
    ///
    /// True when the sentence ends in `{abbreviation}.`, or in a one- or
    /// two-digit day or month such as `1.` and `next` continues the date.
    fn continues(&self, sentence: &str, next: Option<&str>) -> bool {
        let Some(word) = last_dotted_word(sentence) else {
            return false;
        };
        if is_day_or_month(word) {
            return next.is_some_and(|next| {
                next.trim_start()
                    .starts_with(|c: char| c.is_ascii_digit())
            });
        }
        self.lexicon.contains(word)
    }
}

/// Last word of `sentence` when it ends in a period, without the period.
fn last_dotted_word(sentence: &str) -> Option<&str> {
    let stripped = sentence.strip_suffix('.')?;
    let word = stripped.split_whitespace().next_back()?;
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    (!word.is_empty()).then_some(word)
}

fn is_day_or_month(word: &str) -> bool {
    word.len() <= 2 && word.chars().all(|c| c.is_ascii_digit())
}

impl SentenceTokenizer for LexiconTokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences = Vec::new();
        let mut pending = String::new();
        let mut pieces = text.split_sentence_bounds().peekable();
        while let Some(piece) = pieces.next() {
            pending.push_str(piece);
            if self.continues(pending.trim_end(), pieces.peek().copied()) {
                continue;
            }
            flush(&mut pending, &mut sentences);
        }
        flush(&mut pending, &mut sentences);
        Ok(sentences)
    }
}

fn flush(pending: &mut String, sentences: &mut Vec<String>) {
    let sentence = pending.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
    pending.clear();
}

/// Factory for [`LexiconTokenizer`].
///
/// With a resource directory the lexicon is read from
/// `{resource_dir}/{language}.abbrev`, and installing writes the bundled
/// lexicon there. Without one the bundled lexicon is used directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconFactory;

impl TokenizerFactory for LexiconFactory {
    fn build(&self, config: &SegmenterConfig) -> Result<Box<dyn SentenceTokenizer>> {
        if !config.has_processor("tokenize") {
            return Err(SegmentError::UnsupportedProcessors {
                processors: config.processors().to_string(),
            });
        }
        let lexicon = match config.lexicon_path() {
            Some(path) => {
                if !path.is_file() {
                    return Err(SegmentError::ResourcesMissing {
                        language: config.language().to_string(),
                        path,
                    });
                }
                Lexicon::load(&path)?
            }
            None => Lexicon::parse(bundled_source(config.language())?),
        };
        debug!(
            language = config.language(),
            abbreviations = lexicon.len(),
            "built lexicon tokenizer"
        );
        Ok(Box::new(LexiconTokenizer::new(lexicon)))
    }

    fn install_resources(&self, config: &SegmenterConfig) -> Result<()> {
        let Some(path) = config.lexicon_path() else {
            return Ok(());
        };
        let source = bundled_source(config.language())?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SegmentError::Io {
                operation: "create resource directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, source).map_err(|source| SegmentError::Io {
            operation: "write lexicon",
            path: path.clone(),
            source,
        })?;
        info!(language = config.language(), path = %path.display(), "installed tokenizer resources");
        Ok(())
    }
}

fn bundled_source(language: &str) -> Result<&'static str> {
    bundled_lexicon(language).ok_or_else(|| SegmentError::UnsupportedLanguage {
        language: language.to_string(),
    })
}
