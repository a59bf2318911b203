//! Initialization chain of the segmenter, driven by stub factories.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use parla_segment::{
    Result, SegmentError, Segmenter, SegmenterConfig, SentenceTokenizer, TokenizerFactory,
};

#[derive(Default)]
struct Counters {
    builds: Cell<usize>,
    installs: Cell<usize>,
    calls: Rc<Cell<usize>>,
}

/// Splits on `|`; fails every call once `fail_after` calls were made.
struct PipeTokenizer {
    calls: Rc<Cell<usize>>,
    fail_after: Option<usize>,
}

impl SentenceTokenizer for PipeTokenizer {
    fn sentences(&self, text: &str) -> Result<Vec<String>> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if self.fail_after.is_some_and(|limit| call >= limit) {
            return Err(SegmentError::Tokenizer {
                message: "worn out".to_string(),
            });
        }
        Ok(text
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}

struct StubFactory {
    counters: Rc<Counters>,
    installed: Cell<bool>,
    needs_install: bool,
    install_fixes: bool,
    fail_after: Option<usize>,
}

impl StubFactory {
    fn new(counters: &Rc<Counters>) -> Self {
        Self {
            counters: Rc::clone(counters),
            installed: Cell::new(false),
            needs_install: false,
            install_fixes: true,
            fail_after: None,
        }
    }
}

impl TokenizerFactory for StubFactory {
    fn build(&self, config: &SegmenterConfig) -> Result<Box<dyn SentenceTokenizer>> {
        self.counters.builds.set(self.counters.builds.get() + 1);
        if self.needs_install && !self.installed.get() {
            return Err(SegmentError::ResourcesMissing {
                language: config.language().to_string(),
                path: PathBuf::from("/stub"),
            });
        }
        Ok(Box::new(PipeTokenizer {
            calls: Rc::clone(&self.counters.calls),
            fail_after: self.fail_after,
        }))
    }

    fn install_resources(&self, _config: &SegmenterConfig) -> Result<()> {
        self.counters.installs.set(self.counters.installs.get() + 1);
        self.installed.set(self.install_fixes);
        Ok(())
    }
}

#[test]
fn builds_once_and_reuses_the_tokenizer() {
    let counters = Rc::new(Counters::default());
    let mut segmenter =
        Segmenter::with_factory(SegmenterConfig::default(), Box::new(StubFactory::new(&counters)));

    assert!(!segmenter.is_initialized());
    assert_eq!(segmenter.segment("a|b").unwrap(), vec!["a", "b"]);
    assert_eq!(segmenter.segment("c").unwrap(), vec!["c"]);
    assert!(segmenter.is_initialized());
    assert_eq!(counters.builds.get(), 1);
    assert_eq!(counters.installs.get(), 0);
}

#[test]
fn blank_text_does_not_initialize() {
    let counters = Rc::new(Counters::default());
    let mut segmenter =
        Segmenter::with_factory(SegmenterConfig::default(), Box::new(StubFactory::new(&counters)));

    assert!(segmenter.segment("   ").unwrap().is_empty());
    assert_eq!(counters.builds.get(), 0);
}

#[test]
fn installs_resources_and_retries_exactly_once() {
    let counters = Rc::new(Counters::default());
    let mut factory = StubFactory::new(&counters);
    factory.needs_install = true;
    let mut segmenter = Segmenter::with_factory(SegmenterConfig::default(), Box::new(factory));

    assert_eq!(segmenter.segment("x|y").unwrap(), vec!["x", "y"]);
    assert_eq!(counters.installs.get(), 1);
    assert_eq!(counters.builds.get(), 2);
}

#[test]
fn failed_install_surfaces_as_unavailable() {
    let counters = Rc::new(Counters::default());
    let mut factory = StubFactory::new(&counters);
    factory.needs_install = true;
    factory.install_fixes = false;
    let mut segmenter = Segmenter::with_factory(SegmenterConfig::new("bs"), Box::new(factory));

    let error = segmenter.segment("x").unwrap_err();
    assert!(matches!(error, SegmentError::Unavailable { ref language, .. } if language == "bs"));
    assert_eq!(counters.installs.get(), 1);
    assert_eq!(counters.builds.get(), 2);
    assert!(!segmenter.is_initialized());
}

#[test]
fn failing_tokenizer_is_rebuilt_and_final_error_propagates() {
    let counters = Rc::new(Counters::default());
    let mut factory = StubFactory::new(&counters);
    factory.fail_after = Some(1);
    let mut segmenter = Segmenter::with_factory(SegmenterConfig::default(), Box::new(factory));

    assert_eq!(segmenter.segment("first").unwrap(), vec!["first"]);
    let error = segmenter.segment("second").unwrap_err();
    assert!(matches!(error, SegmentError::Tokenizer { .. }));
    assert_eq!(counters.builds.get(), 2);
}

#[test]
fn builtin_segmenter_installs_lexicon_into_resource_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = SegmenterConfig::new("hr").with_resource_dir(dir.path());
    let mut segmenter = Segmenter::new(config);

    let sentences = segmenter
        .segment("Otvaram sjednicu. Riječ ima prof. Kovač.")
        .unwrap();
    assert_eq!(sentences, vec!["Otvaram sjednicu.", "Riječ ima prof. Kovač."]);
    assert!(dir.path().join("hr.abbrev").is_file());
}

#[test]
fn script_tagged_language_uses_the_primary_lexicon() {
    let mut segmenter = Segmenter::new(SegmenterConfig::new("sr-Latn"));
    let sentences = segmenter.segment("Dobar dan. Govori g. Petrović.").unwrap();
    assert_eq!(sentences, vec!["Dobar dan.", "Govori g. Petrović."]);

    let dir = tempfile::tempdir().unwrap();
    let config = SegmenterConfig::new("sr-Latn").with_resource_dir(dir.path());
    let mut installed = Segmenter::new(config);
    assert_eq!(installed.segment("Hvala. Izvolite.").unwrap().len(), 2);
    assert!(dir.path().join("sr.abbrev").is_file());
}
