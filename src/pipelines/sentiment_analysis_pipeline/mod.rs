//! Sentiment analysis pipeline for scoring text and its individual tokens.
//!
//! A pipeline runs two scorers over the same text: a document scorer that
//! reports polarity and subjectivity, and a token scorer that gives each
//! whitespace-delimited token a compound score. Tokens are then bucketed into
//! positives (score > 0.1), negatives (score <= -0.1) and neutral.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - High-level interface for scoring and classification
//! - [`SentimentAnalysisPipelineBuilder`] - Builder pattern for pipeline configuration
//! - [`SentimentAnalysisModel`] - Trait for scorer implementations
//! - [`SentimentAnalysis`] - Full result for one text, ready for rendering
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_nlp::pipelines::sentiment_analysis_pipeline::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let pipeline = SentimentAnalysisPipelineBuilder::lexicon().build()?;
//!
//! let result = pipeline.score("This movie was fantastic!")?;
//! println!("{result}");
//!
//! let tokens = pipeline.classify_tokens("good day, bad night")?;
//! println!("{} positive, {} negative", tokens.positives.len(), tokens.negatives.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod classifier;
pub mod model;
pub mod pipeline;
pub mod tabulation;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use classifier::{
    classify_tokens_with, ScoredToken, SentimentCounts, TokenClassification, TokenGroup,
    NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD,
};
pub use model::SentimentAnalysisModel;
pub use pipeline::{SentimentAnalysis, SentimentAnalysisPipeline, SentimentResult};
pub use tabulation::{tabulate, ResultRow, SentimentLabel};

pub use crate::models::{LexiconOptions, LexiconSentimentModel};

pub use anyhow::Result;
