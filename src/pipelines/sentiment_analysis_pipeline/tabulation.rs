use serde::{Deserialize, Serialize};

use super::pipeline::SentimentResult;

/// One metric of a [`SentimentResult`] in table form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub metric: String,
    pub value: f64,
}

impl ResultRow {
    fn new(metric: &str, value: f64) -> Self {
        Self {
            metric: metric.to_string(),
            value,
        }
    }
}

/// Reshape a result into `[polarity, subjectivity]` rows, always in that order.
pub fn tabulate(result: &SentimentResult) -> Vec<ResultRow> {
    vec![
        ResultRow::new("polarity", result.polarity),
        ResultRow::new("subjectivity", result.subjectivity),
    ]
}

/// Overall sentiment derived from the sign of the polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "😃",
            SentimentLabel::Negative => "😠",
            SentimentLabel::Neutral => "😐",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabulate_keeps_fixed_order() {
        let rows = tabulate(&SentimentResult {
            polarity: 0.5,
            subjectivity: 0.8,
        });
        let pairs: Vec<(&str, f64)> = rows.iter().map(|r| (r.metric.as_str(), r.value)).collect();
        assert_eq!(pairs, vec![("polarity", 0.5), ("subjectivity", 0.8)]);
    }

    #[test]
    fn label_follows_sign() {
        assert_eq!(SentimentLabel::from_polarity(0.01), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_polarity(-0.01), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_polarity(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_polarity(-0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }
}
