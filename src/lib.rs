pub mod core;
pub mod models;
pub mod pipelines;
pub mod render;

// Re-export core types
pub use core::{global_cache, SentimentError};

// Re-export the pipeline surface for easier access
pub use pipelines::sentiment_analysis_pipeline::{
    SentimentAnalysis, SentimentAnalysisModel, SentimentAnalysisPipeline,
    SentimentAnalysisPipelineBuilder, SentimentLabel, SentimentResult, TokenClassification,
};
