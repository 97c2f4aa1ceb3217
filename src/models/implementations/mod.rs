pub mod lexicon;

pub use lexicon::{LexiconOptions, LexiconSentimentModel};
