use crate::core::SentimentError;

/// Per-token compound scorer backed by the VADER lexicon.
///
/// The VADER lexicon is parsed once per process by `vader_sentiment`, so
/// constructing an analyzer per call is cheap.
#[derive(Debug, Clone)]
pub struct VaderAnalyzer {
    span: tracing::Span,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        let span = tracing::span!(tracing::Level::TRACE, "vader");
        Self { span }
    }

    /// Normalized compound score in [-1, 1].
    ///
    /// `!` and `?` only amplify sentiment that is already there: text whose
    /// words score exactly zero on their own is neutral however much
    /// punctuation follows it.
    pub fn compound(&self, text: &str) -> Result<f64, SentimentError> {
        let _enter = self.span.enter();
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();

        let bare: String = text.chars().filter(|c| !matches!(c, '!' | '?')).collect();
        if bare.len() != text.len() {
            let words = if bare.trim().is_empty() {
                0.0
            } else {
                compound_of(&analyzer, &bare, text)?
            };
            if words == 0.0 {
                tracing::trace!(token = text, "punctuation without sentiment");
                return Ok(0.0);
            }
        }

        compound_of(&analyzer, text, text)
    }
}

fn compound_of(
    analyzer: &vader_sentiment::SentimentIntensityAnalyzer,
    text: &str,
    original: &str,
) -> Result<f64, SentimentError> {
    analyzer
        .polarity_scores(text)
        .get("compound")
        .copied()
        .ok_or_else(|| SentimentError::MissingCompound(original.to_string()))
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
