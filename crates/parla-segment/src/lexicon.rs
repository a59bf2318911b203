//! Abbreviation lexicons.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, SegmentError};

const HR: &str = include_str!("../resources/hr.abbrev");
const SR: &str = include_str!("../resources/sr.abbrev");
const BS: &str = include_str!("../resources/bs.abbrev");
const SL: &str = include_str!("../resources/sl.abbrev");
const EN: &str = include_str!("../resources/en.abbrev");

/// Primary subtag of a language tag: `sr-latn` and `sr_Latn` give `sr`.
pub fn primary_subtag(language: &str) -> &str {
    language
        .split(['-', '_'])
        .next()
        .unwrap_or(language)
}

/// Bundled lexicon source for a (case-folded) language tag.
pub fn bundled_lexicon(language: &str) -> Option<&'static str> {
    match primary_subtag(language) {
        "hr" => Some(HR),
        "sr" => Some(SR),
        "bs" => Some(BS),
        "sl" => Some(SL),
        "en" => Some(EN),
        _ => None,
    }
}

/// Set of lowercase abbreviations, stored without their final period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashSet<String>,
}

impl Lexicon {
    /// Parse lexicon source: one entry per line, `#` starts a comment line.
    pub fn parse(source: &str) -> Self {
        let entries = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.trim_end_matches('.').to_lowercase())
            .collect();
        Self { entries }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| SegmentError::Io {
            operation: "read lexicon",
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&source))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
