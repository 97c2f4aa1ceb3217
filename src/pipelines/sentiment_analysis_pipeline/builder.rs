use std::path::PathBuf;

use super::model::SentimentAnalysisModel;
use super::pipeline::SentimentAnalysisPipeline;
use crate::core::{global_cache, ModelOptions};
use crate::models::{LexiconOptions, LexiconSentimentModel};

pub struct SentimentAnalysisPipelineBuilder<M: SentimentAnalysisModel> {
    options: M::Options,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipelineBuilder<M> {
    pub fn new(options: M::Options) -> Self {
        Self { options }
    }

    /// Build the pipeline, reusing a cached model when one exists for the same options.
    pub fn build(self) -> anyhow::Result<SentimentAnalysisPipeline<M>>
    where
        M: Clone + Send + Sync + 'static,
        M::Options: ModelOptions,
    {
        let key = self.options.cache_key();
        let options = self.options;
        let model = global_cache().get_or_create(&key, || M::new(options))?;
        Ok(SentimentAnalysisPipeline { model })
    }
}

impl SentimentAnalysisPipelineBuilder<LexiconSentimentModel> {
    /// Bundled English lexicon for documents, VADER for tokens.
    pub fn lexicon() -> Self {
        Self::new(LexiconOptions::default())
    }

    /// Load the document lexicon from a JSON file instead of the bundled one.
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.lexicon_file = Some(path.into());
        self
    }
}
