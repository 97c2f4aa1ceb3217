//! Lexicon-averaging polarity and subjectivity scorer.
//!
//! Every known word (or emoticon) in the text becomes one assessment. An
//! intensifier folds the next known word into its own assessment and scales
//! it, a negation halves and flips the polarity of the next known word, and an
//! exclamation mark boosts the polarity of the previous assessment. The
//! document score is the mean over all assessments, or `(0.0, 0.0)` when the
//! text contains no known word.

use std::sync::Arc;

use super::lexicon::Lexicon;
use crate::pipelines::sentiment_analysis_pipeline::SentimentResult;

const EXCLAMATION_BOOST: f64 = 1.25;
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    lexicon: Arc<Lexicon>,
    span: tracing::Span,
}

impl PatternAnalyzer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        let span = tracing::span!(tracing::Level::TRACE, "pattern");
        Self { lexicon, span }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyze(&self, text: &str) -> SentimentResult {
        let _enter = self.span.enter();
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return SentimentResult::neutral();
        }

        let n = assessments.len() as f64;
        let (polarity, subjectivity) = assessments.iter().fold((0.0, 0.0), |(p, s), a| {
            let polarity = if a.negated {
                a.polarity * NEGATION_FACTOR
            } else {
                a.polarity
            };
            (p + polarity, s + a.subjectivity)
        });

        SentimentResult {
            polarity: polarity / n,
            subjectivity: subjectivity / n,
        }
    }

    fn assess(&self, text: &str) -> Vec<Assessment> {
        let mut assessments: Vec<Assessment> = Vec::new();
        // Whether the previous known word was an intensifier.
        let mut modifier = false;
        let mut negation = false;

        for token in tokenize(text, &self.lexicon) {
            let word = token.to_lowercase();

            if let Some(entry) = self.lexicon.get(&word) {
                match assessments.last_mut() {
                    Some(last) if modifier => {
                        last.polarity = clamp(entry.polarity * last.intensity, -1.0, 1.0);
                        last.subjectivity = clamp(entry.subjectivity * last.intensity, 0.0, 1.0);
                        last.intensity = entry.intensity;
                    }
                    _ => assessments.push(Assessment {
                        polarity: entry.polarity,
                        subjectivity: entry.subjectivity,
                        intensity: entry.intensity,
                        negated: false,
                    }),
                }
                if negation {
                    if let Some(last) = assessments.last_mut() {
                        last.intensity = 1.0 / last.intensity;
                        last.negated = true;
                    }
                }
                modifier = entry.intensifier;
                negation = self.lexicon.is_negation(&word);
                continue;
            }

            if self.lexicon.is_negation(&word) {
                negation = true;
            } else if negation && word.trim_matches('\'').chars().count() > 1 {
                // Negation survives short filler words ("not a good").
                negation = false;
            }

            if negation && modifier {
                // "really not good": the negation attaches to the pending modifier.
                if let Some(last) = assessments.last_mut() {
                    last.negated = true;
                }
                negation = false;
            } else if modifier && word.chars().count() > 2 {
                // Modifier survives short filler words ("really a good").
                modifier = false;
            }

            if word == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = clamp(last.polarity * EXCLAMATION_BOOST, -1.0, 1.0);
                }
            }

            if let Some(polarity) = self.lexicon.emoticon(&word) {
                assessments.push(Assessment {
                    polarity,
                    subjectivity: 1.0,
                    intensity: 1.0,
                    negated: false,
                });
            }
        }

        assessments
    }
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Split text into words and single punctuation marks.
///
/// Whitespace-delimited chunks that are known emoticons are kept whole.
/// Apostrophes stay inside words so contractions such as "don't" survive.
fn tokenize<'a>(text: &'a str, lexicon: &Lexicon) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        if lexicon.emoticon(&chunk.to_lowercase()).is_some() {
            tokens.push(chunk);
            continue;
        }

        let mut start = None;
        for (idx, ch) in chunk.char_indices() {
            if ch.is_alphanumeric() || ch == '\'' || ch == '\u{2019}' {
                start.get_or_insert(idx);
            } else {
                if let Some(s) = start.take() {
                    tokens.push(&chunk[s..idx]);
                }
                tokens.push(&chunk[idx..idx + ch.len_utf8()]);
            }
        }
        if let Some(s) = start {
            tokens.push(&chunk[s..]);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> PatternAnalyzer {
        PatternAnalyzer::new(Arc::new(Lexicon::bundled().unwrap()))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tokenize_splits_punctuation() {
        let lexicon = Lexicon::bundled().unwrap();
        assert_eq!(
            tokenize("Good, isn't it!", &lexicon),
            vec!["Good", ",", "isn't", "it", "!"]
        );
        assert_eq!(tokenize("nice :) day", &lexicon), vec!["nice", ":)", "day"]);
        assert!(tokenize("   ", &lexicon).is_empty());
    }

    #[test]
    fn empty_text_is_neutral() {
        let result = analyzer().analyze("");
        assert_eq!(result, SentimentResult::neutral());
        let result = analyzer().analyze("  \n\t ");
        assert_eq!(result, SentimentResult::neutral());
    }

    #[test]
    fn unknown_words_are_ignored() {
        let result = analyzer().analyze("the cat sat on the mat");
        assert_eq!(result, SentimentResult::neutral());
    }

    #[test]
    fn single_word() {
        let result = analyzer().analyze("This is good");
        assert!(close(result.polarity, 0.7));
        assert!(close(result.subjectivity, 0.6));
    }

    #[test]
    fn intensifier_scales_next_word() {
        let result = analyzer().analyze("very good");
        assert!(close(result.polarity, 0.7 * 1.3));
        assert!(close(result.subjectivity, 0.6 * 1.3));
    }

    #[test]
    fn negation_flips_and_halves() {
        let result = analyzer().analyze("not good");
        assert!(close(result.polarity, -0.35));
        assert!(close(result.subjectivity, 0.6));

        let result = analyzer().analyze("not a good idea");
        assert!(close(result.polarity, -0.35));
    }

    #[test]
    fn exclamation_boosts_previous() {
        let result = analyzer().analyze("good!");
        assert!(close(result.polarity, 0.875));

        let result = analyzer().analyze("excellent!!!");
        assert!(close(result.polarity, 1.0));
    }

    #[test]
    fn averages_over_assessments() {
        let result = analyzer().analyze("good food, bad service");
        assert!(close(result.polarity, 0.0));
        assert!(close(result.subjectivity, (0.6 + 0.6666666666666666) / 2.0));
    }

    #[test]
    fn emoticons_count_as_assessments() {
        let result = analyzer().analyze("see you :(");
        assert!(close(result.polarity, -0.75));
        assert!(close(result.subjectivity, 1.0));
    }

    #[test]
    fn scores_stay_in_range() {
        let result = analyzer().analyze("extremely extremely excellent!!! awful :'(");
        assert!((-1.0..=1.0).contains(&result.polarity));
        assert!((0.0..=1.0).contains(&result.subjectivity));
    }
}
