pub mod cache;
pub mod error;

pub use cache::{global_cache, ModelCache, ModelOptions};
pub use error::SentimentError;
