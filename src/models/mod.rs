pub mod implementations;
pub mod lexicon;
pub mod pattern;
pub mod vader;

pub use implementations::{LexiconOptions, LexiconSentimentModel};
pub use lexicon::{Lexicon, LexiconEntry};
pub use pattern::PatternAnalyzer;
pub use vader::VaderAnalyzer;
