use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use crate::core::ModelOptions;
use crate::models::{Lexicon, PatternAnalyzer, VaderAnalyzer};
use crate::pipelines::sentiment_analysis_pipeline::{SentimentAnalysisModel, SentimentResult};

/// Options for [`LexiconSentimentModel`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexiconOptions {
    /// Replaces the bundled polarity lexicon. Token scoring always uses VADER.
    pub lexicon_file: Option<PathBuf>,
}

impl ModelOptions for LexiconOptions {
    fn cache_key(&self) -> String {
        match &self.lexicon_file {
            Some(path) => format!("lexicon-{}", path.display()),
            None => "lexicon-bundled".to_string(),
        }
    }
}

/// Pattern-style averaging for the document, VADER compound scores for tokens.
#[derive(Debug, Clone)]
pub struct LexiconSentimentModel {
    pattern: PatternAnalyzer,
    vader: VaderAnalyzer,
}

impl LexiconSentimentModel {
    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        Self {
            pattern: PatternAnalyzer::new(Arc::new(lexicon)),
            vader: VaderAnalyzer::new(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.pattern.lexicon()
    }
}

impl SentimentAnalysisModel for LexiconSentimentModel {
    type Options = LexiconOptions;

    fn new(options: Self::Options) -> anyhow::Result<Self> {
        let lexicon = match &options.lexicon_file {
            Some(path) => Lexicon::from_file(path)
                .with_context(|| format!("loading lexicon from {}", path.display()))?,
            None => Lexicon::bundled().context("loading bundled lexicon")?,
        };
        Ok(Self::from_lexicon(lexicon))
    }

    fn score_document(&self, text: &str) -> anyhow::Result<SentimentResult> {
        Ok(self.pattern.analyze(text))
    }

    fn score_token(&self, token: &str) -> anyhow::Result<f64> {
        Ok(self.vader.compound(token)?)
    }
}
