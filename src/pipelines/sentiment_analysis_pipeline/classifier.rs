use serde::{Deserialize, Serialize};

/// Tokens scoring strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Tokens scoring at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Which bucket a token score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenGroup {
    Positive,
    Negative,
    Neutral,
}

impl TokenGroup {
    /// `> 0.1` is positive, `<= -0.1` is negative, everything in between
    /// (including exactly 0.1) is neutral.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            TokenGroup::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            TokenGroup::Negative
        } else {
            TokenGroup::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredToken {
    pub token: String,
    pub score: f64,
}

/// Whitespace tokens of one text split into three groups, each in input order.
///
/// Neutral tokens keep no score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenClassification {
    pub positives: Vec<ScoredToken>,
    pub negatives: Vec<ScoredToken>,
    pub neutral: Vec<String>,
}

impl TokenClassification {
    pub fn push(&mut self, token: &str, score: f64) {
        match TokenGroup::from_score(score) {
            TokenGroup::Positive => self.positives.push(ScoredToken {
                token: token.to_string(),
                score,
            }),
            TokenGroup::Negative => self.negatives.push(ScoredToken {
                token: token.to_string(),
                score,
            }),
            TokenGroup::Neutral => self.neutral.push(token.to_string()),
        }
    }

    pub fn token_count(&self) -> usize {
        self.positives.len() + self.negatives.len() + self.neutral.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    pub fn counts(&self) -> SentimentCounts {
        SentimentCounts::from_classification(self)
    }
}

/// Group sizes, counted in tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn from_classification(classification: &TokenClassification) -> Self {
        Self {
            positive: classification.positives.len(),
            negative: classification.negatives.len(),
            neutral: classification.neutral.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Split `text` on whitespace and bucket each token by the score `score_token` gives it.
///
/// The first scoring error aborts the whole classification.
pub fn classify_tokens_with<F>(
    text: &str,
    mut score_token: F,
) -> anyhow::Result<TokenClassification>
where
    F: FnMut(&str) -> anyhow::Result<f64>,
{
    let mut classification = TokenClassification::default();
    for token in text.split_whitespace() {
        let score = score_token(token)?;
        tracing::trace!(token, score, "scored token");
        classification.push(token, score);
    }
    Ok(classification)
}
