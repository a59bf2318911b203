use std::time::Instant;

use tracing::{info, warn};

use crate::config::SegmenterConfig;
use crate::error::{Result, SegmentError};
use crate::tokenizer::{LexiconFactory, SentenceTokenizer, TokenizerFactory};

/// Lazily initialized sentence segmenter.
///
/// Holds at most one tokenizer, built on the first call to
/// [`Segmenter::segment`] and reused for the rest of the run. Initialization
/// follows a fixed chain:
///
/// 1. call the existing tokenizer, if any, and return on success;
/// 2. otherwise build a new tokenizer through the factory;
/// 3. if building reports missing resources, install them once and build again;
/// 4. call the (possibly still missing) tokenizer and propagate its error.
pub struct Segmenter {
    config: SegmenterConfig,
    factory: Box<dyn TokenizerFactory>,
    tokenizer: Option<Box<dyn SentenceTokenizer>>,
    last_build_error: Option<String>,
}

impl Segmenter {
    /// Segmenter backed by the built-in [`LexiconFactory`].
    pub fn new(config: SegmenterConfig) -> Self {
        Self::with_factory(config, Box::new(LexiconFactory))
    }

    pub fn with_factory(config: SegmenterConfig, factory: Box<dyn TokenizerFactory>) -> Self {
        Self {
            config,
            factory,
            tokenizer: None,
            last_build_error: None,
        }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.tokenizer.is_some()
    }

    /// Split `text` into sentences. Blank text yields no sentences and never
    /// triggers initialization.
    pub fn segment(&mut self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        if let Some(tokenizer) = &self.tokenizer {
            match tokenizer.sentences(text) {
                Ok(sentences) => return Ok(sentences),
                Err(error) => {
                    warn!(%error, "tokenizer failed, rebuilding");
                    self.tokenizer = None;
                }
            }
        }

        self.initialize();

        match &self.tokenizer {
            Some(tokenizer) => tokenizer.sentences(text),
            None => Err(SegmentError::Unavailable {
                language: self.config.language().to_string(),
                reason: self
                    .last_build_error
                    .clone()
                    .unwrap_or_else(|| "tokenizer was never built".to_string()),
            }),
        }
    }

    fn initialize(&mut self) {
        let start = Instant::now();
        let built = match self.factory.build(&self.config) {
            Err(SegmentError::ResourcesMissing { language, path }) => {
                info!(
                    language = %language,
                    path = %path.display(),
                    "tokenizer resources missing, installing"
                );
                self.factory
                    .install_resources(&self.config)
                    .and_then(|()| self.factory.build(&self.config))
            }
            other => other,
        };
        match built {
            Ok(tokenizer) => {
                info!(
                    language = self.config.language(),
                    processors = self.config.processors(),
                    duration_ms = start.elapsed().as_millis(),
                    "sentence tokenizer ready"
                );
                self.tokenizer = Some(tokenizer);
                self.last_build_error = None;
            }
            Err(error) => {
                warn!(language = self.config.language(), %error, "failed to build sentence tokenizer");
                self.last_build_error = Some(error.to_string());
            }
        }
    }
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
