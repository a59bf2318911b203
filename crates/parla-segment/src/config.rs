use std::path::{Path, PathBuf};

use crate::lexicon::primary_subtag;

/// Language and processor configuration of a [`crate::Segmenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    language: String,
    processors: String,
    resource_dir: Option<PathBuf>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            language: "hr".to_string(),
            processors: "tokenize".to_string(),
            resource_dir: None,
        }
    }
}

impl SegmenterConfig {
    pub fn new(language: impl AsRef<str>) -> Self {
        Self::default().with_language(language)
    }

    /// Language code; stored case-folded.
    pub fn with_language(mut self, language: impl AsRef<str>) -> Self {
        self.language = language.as_ref().trim().to_lowercase();
        self
    }

    pub fn with_processors(mut self, processors: impl Into<String>) -> Self {
        self.processors = processors.into();
        self
    }

    /// Directory holding `{primary subtag}.abbrev` lexicons. Without one the
    /// bundled lexicons are used directly.
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.resource_dir = Some(dir.into());
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn processors(&self) -> &str {
        &self.processors
    }

    pub fn resource_dir(&self) -> Option<&Path> {
        self.resource_dir.as_deref()
    }

    pub fn has_processor(&self, name: &str) -> bool {
        self.processors
            .split(',')
            .any(|processor| processor.trim().eq_ignore_ascii_case(name))
    }

    /// Language the lexicon is keyed by; `sr-latn` shares the `sr` lexicon.
    pub fn lexicon_language(&self) -> &str {
        primary_subtag(&self.language)
    }

    /// Location of this language's lexicon inside the resource directory.
    pub fn lexicon_path(&self) -> Option<PathBuf> {
        self.resource_dir
            .as_ref()
            .map(|dir| dir.join(format!("{}.abbrev", self.lexicon_language())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_croatian_tokenize() {
        let config = SegmenterConfig::default();
        assert_eq!(config.language(), "hr");
        assert!(config.has_processor("tokenize"));
        assert!(config.lexicon_path().is_none());
    }

    #[test]
    fn language_is_case_folded() {
        let config = SegmenterConfig::new(" SR ").with_resource_dir("/tmp/lex");
        assert_eq!(config.language(), "sr");
        assert_eq!(
            config.lexicon_path(),
            Some(PathBuf::from("/tmp/lex/sr.abbrev"))
        );
    }

    #[test]
    fn script_subtag_shares_the_primary_lexicon_file() {
        let config = SegmenterConfig::new("sr-Latn").with_resource_dir("/tmp/lex");
        assert_eq!(config.language(), "sr-latn");
        assert_eq!(config.lexicon_language(), "sr");
        assert_eq!(
            config.lexicon_path(),
            Some(PathBuf::from("/tmp/lex/sr.abbrev"))
        );
    }

    #[test]
    fn processors_are_comma_separated() {
        let config = SegmenterConfig::default().with_processors("tokenize, pos");
        assert!(config.has_processor("pos"));
        assert!(!config.has_processor("lemma"));
    }
}
