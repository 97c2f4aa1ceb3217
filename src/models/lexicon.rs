//! Word-level polarity lexicon used by the document scorer.
//!
//! A lexicon document is JSON with three sections:
//!
//! ```json
//! {
//!   "negations": ["not", "never"],
//!   "emoticons": { ":)": 0.5 },
//!   "entries": [
//!     { "word": "good", "polarity": 0.7, "subjectivity": 0.6 },
//!     { "word": "very", "polarity": 0.2, "subjectivity": 0.3, "intensity": 1.3, "intensifier": true }
//!   ]
//! }
//! ```
//!
//! Words and emoticons are matched case-insensitively.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::core::SentimentError;

const BUNDLED_LEXICON: &str = include_str!("../../assets/en-sentiment.json");

fn default_intensity() -> f64 {
    1.0
}

/// Scores attached to one lexicon word.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    /// Multiplier applied to the next sentiment word when `intensifier` is set.
    #[serde(default = "default_intensity")]
    pub intensity: f64,
    /// Adverbs such as "very" modify the word that follows them.
    #[serde(default)]
    pub intensifier: bool,
}

#[derive(Deserialize)]
struct RawEntry {
    word: String,
    #[serde(flatten)]
    entry: LexiconEntry,
}

#[derive(Deserialize)]
struct LexiconDocument {
    #[serde(default)]
    negations: Vec<String>,
    #[serde(default)]
    emoticons: HashMap<String, f64>,
    entries: Vec<RawEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, LexiconEntry>,
    negations: HashSet<String>,
    emoticons: HashMap<String, f64>,
}

impl Lexicon {
    /// The English lexicon shipped with the crate.
    pub fn bundled() -> Result<Self, SentimentError> {
        Self::from_json(BUNDLED_LEXICON)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SentimentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SentimentError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    pub fn from_json(raw: &str) -> Result<Self, SentimentError> {
        let doc: LexiconDocument = serde_json::from_str(raw)?;

        let mut words = HashMap::with_capacity(doc.entries.len());
        for RawEntry { word, entry } in doc.entries {
            check_range(&word, "polarity", entry.polarity, -1.0, 1.0)?;
            check_range(&word, "subjectivity", entry.subjectivity, 0.0, 1.0)?;
            if !(entry.intensity > 0.0) {
                return Err(SentimentError::LexiconIntensity {
                    word,
                    value: entry.intensity,
                });
            }
            // Later duplicates win.
            words.insert(word.to_lowercase(), entry);
        }

        let mut emoticons = HashMap::with_capacity(doc.emoticons.len());
        for (emoticon, polarity) in doc.emoticons {
            check_range(&emoticon, "polarity", polarity, -1.0, 1.0)?;
            emoticons.insert(emoticon.to_lowercase(), polarity);
        }

        Ok(Self {
            words,
            negations: doc.negations.iter().map(|w| w.to_lowercase()).collect(),
            emoticons,
        })
    }

    /// Look up a lowercase word.
    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.words.get(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Polarity of a lowercase emoticon such as `:)`.
    pub fn emoticon(&self, token: &str) -> Option<f64> {
        self.emoticons.get(token).copied()
    }

    /// Number of scored words, not counting negations or emoticons.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn check_range(
    word: &str,
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), SentimentError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SentimentError::LexiconRange {
            word: word.to_string(),
            field,
            value,
            min,
            max,
        })
    }
}
