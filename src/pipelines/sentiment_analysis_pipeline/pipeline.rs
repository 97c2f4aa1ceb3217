use serde::{Deserialize, Serialize};

use super::classifier::{classify_tokens_with, SentimentCounts, TokenClassification};
use super::model::SentimentAnalysisModel;
use super::tabulation::{tabulate, ResultRow, SentimentLabel};

/// Document-level polarity in [-1, 1] and subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentResult {
    /// The score of a text with no sentiment-bearing words.
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_polarity(self.polarity)
    }
}

impl std::fmt::Display for SentimentResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sentiment(polarity={}, subjectivity={})",
            format_float(self.polarity),
            format_float(self.subjectivity)
        )
    }
}

/// Shortest round-trip form, with a trailing `.0` for whole numbers.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Everything produced for one submitted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment: SentimentResult,
    pub label: SentimentLabel,
    pub rows: Vec<ResultRow>,
    pub tokens: TokenClassification,
    pub counts: SentimentCounts,
}

/// Pipeline for document and token sentiment.
///
/// Use [`SentimentAnalysisPipelineBuilder`](super::SentimentAnalysisPipelineBuilder) to construct,
/// or [`SentimentAnalysisPipeline::new`] to wrap a model directly.
///
/// ```rust,no_run
/// use sentiment_nlp::pipelines::sentiment_analysis_pipeline::*;
///
/// # fn main() -> anyhow::Result<()> {
/// let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;
/// let analysis = pipeline.analyze("I love this product!")?;
/// println!("{} {}", analysis.sentiment, analysis.label.emoji());
/// # Ok(())
/// # }
/// ```
pub struct SentimentAnalysisPipeline<M: SentimentAnalysisModel> {
    pub(crate) model: M,
}

impl<M: SentimentAnalysisModel> SentimentAnalysisPipeline<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Polarity and subjectivity of the whole text, exactly as the model reports them.
    pub fn score(&self, text: &str) -> anyhow::Result<SentimentResult> {
        self.model.score_document(text)
    }

    /// Bucket every whitespace token into positives, negatives or neutral.
    pub fn classify_tokens(&self, text: &str) -> anyhow::Result<TokenClassification> {
        classify_tokens_with(text, |token| self.model.score_token(token))
    }

    /// Score the document, classify its tokens and tabulate the result.
    ///
    /// Any scorer failure fails the whole analysis; no partial result is returned.
    pub fn analyze(&self, text: &str) -> anyhow::Result<SentimentAnalysis> {
        let sentiment = self.score(text)?;
        let tokens = self.classify_tokens(text)?;
        let counts = tokens.counts();

        tracing::debug!(
            polarity = sentiment.polarity,
            subjectivity = sentiment.subjectivity,
            positive = counts.positive,
            negative = counts.negative,
            neutral = counts.neutral,
            "analyzed text"
        );

        Ok(SentimentAnalysis {
            sentiment,
            label: sentiment.label(),
            rows: tabulate(&sentiment),
            tokens,
            counts,
        })
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
