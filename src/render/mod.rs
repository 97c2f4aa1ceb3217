//! Rendering boundary between an analysis and whatever displays it.
//!
//! Renderers take a finished [`SentimentAnalysis`](crate::pipelines::SentimentAnalysis)
//! and produce a string; they never score anything themselves.

pub mod charts;
pub mod report;

pub use charts::{bar_chart, pie_chart, pie_slices, PieSlice};
pub use report::{render_json, render_text};

pub const TITLE: &str = "Sentiment Analysis NLP App";

pub const ABOUT: &str = "\
Welcome to the Sentiment Analysis NLP App!

Analyze the sentiment of a text: the report shows the polarity (-1 to 1) and
subjectivity (0 to 1) of the whole text, plus the sentiment of every individual
token grouped into positives, negatives and neutral.

Pass text as an argument, with --file, or on stdin to see the results.";
