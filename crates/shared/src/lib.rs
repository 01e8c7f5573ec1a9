// Public modules
pub mod aggregate;
pub mod capability;
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod score;

// Re-export commonly used types
pub use aggregate::{aggregate_daily, save_aggregates};
pub use capability::{
    LanguageClassifier, LexiconScorer, PolarityScorer, StopwordLanguageClassifier, StopwordSet,
};
pub use checkpoint::{load_records, save_records};
pub use config::RunConfig;
pub use error::{ClassificationError, PipelineError, ScoringError};
pub use extract::extract_messages;
pub use models::{DailyAggregate, MessageText, RawMessage, Record, ScoredRecord, Sentiment};
pub use normalize::Normalizer;
pub use score::SentimentScorer;
