use super::pipeline::SentimentResult;

/// The scoring capability behind a [`SentimentAnalysisPipeline`](super::SentimentAnalysisPipeline).
///
/// A model answers two questions: how positive and how subjective a whole
/// document is, and how positive a single token is. Classification and
/// rendering only ever go through this trait, so the scoring engines can be
/// swapped without touching them.
pub trait SentimentAnalysisModel {
    type Options: std::fmt::Debug + Clone;

    fn new(options: Self::Options) -> anyhow::Result<Self>
    where
        Self: Sized;

    /// Document-level polarity and subjectivity.
    fn score_document(&self, text: &str) -> anyhow::Result<SentimentResult>;

    /// Compound score in [-1, 1] for one whitespace-delimited token.
    fn score_token(&self, token: &str) -> anyhow::Result<f64>;
}
