use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading scorer resources, scoring text or rendering a report.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The lexicon file could not be read from disk.
    #[error("failed to read lexicon file {}", path.display())]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The lexicon document is not valid JSON or does not match the expected layout.
    #[error("malformed lexicon: {0}")]
    LexiconFormat(#[from] serde_json::Error),

    /// A lexicon entry carries a polarity or subjectivity outside of its range.
    #[error("lexicon entry `{word}` has {field} {value} outside of [{min}, {max}]")]
    LexiconRange {
        word: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Intensity multiplies neighbouring scores and is inverted under negation, so it must be > 0.
    #[error("lexicon entry `{word}` has non-positive intensity {value}")]
    LexiconIntensity { word: String, value: f64 },

    /// The token scorer produced no compound value.
    #[error("token scorer returned no compound score for `{0}`")]
    MissingCompound(String),

    #[error("report rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    #[error("failed to serialize analysis: {0}")]
    Serialize(#[source] serde_json::Error),
}
