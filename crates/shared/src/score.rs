use indicatif::ProgressBar;
use log::{info, warn};

use crate::capability::PolarityScorer;
use crate::models::{Record, ScoredRecord, Sentiment};

/// Attaches polarity and a categorical label to each record.
///
/// The provider is loaded once at construction and shared, read-only, across
/// every scoring call for the lifetime of the run.
pub struct SentimentScorer {
    provider: Box<dyn PolarityScorer>,
}

impl SentimentScorer {
    pub fn new(provider: Box<dyn PolarityScorer>) -> Self {
        Self { provider }
    }

    /// Score records sequentially.
    ///
    /// A scoring failure is isolated to its record: the record keeps flowing
    /// with no polarity and no label, and still counts in the daily totals.
    pub fn score(&self, records: Vec<Record>) -> Vec<ScoredRecord> {
        info!("scoring {} records", records.len());
        let bar = ProgressBar::new(records.len() as u64);

        let scored = records
            .into_iter()
            .map(|record| {
                bar.inc(1);
                let (polarity, sentiment) = match self.provider.polarity(&record.text) {
                    Ok(polarity) => (Some(polarity), Some(Sentiment::from_polarity(polarity))),
                    Err(err) => {
                        warn!("scoring failed for message from {}: {err}", record.date);
                        (None, None)
                    }
                };
                ScoredRecord {
                    text: record.text,
                    date: record.date,
                    polarity,
                    sentiment,
                }
            })
            .collect();

        bar.finish_and_clear();
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoringError;
    use crate::models::Record;
    use chrono::NaiveDate;

    struct FixedScorer(f64);

    impl PolarityScorer for FixedScorer {
        fn polarity(&self, _text: &str) -> Result<f64, ScoringError> {
            Ok(self.0)
        }
    }

    struct BrokenScorer;

    impl PolarityScorer for BrokenScorer {
        fn polarity(&self, _text: &str) -> Result<f64, ScoringError> {
            Err(ScoringError::new("model unavailable"))
        }
    }

    fn record(text: &str) -> Record {
        Record::new(text, NaiveDate::from_ymd_opt(2021, 5, 1).unwrap())
    }

    #[test]
    fn test_score_attaches_polarity_and_label() {
        let scorer = SentimentScorer::new(Box::new(FixedScorer(0.6)));
        let scored = scorer.score(vec![record("i to the")]);

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].polarity, Some(0.6));
        assert_eq!(scored[0].sentiment, Some(Sentiment::Positive));
    }

    #[test]
    fn test_zero_polarity_is_neutral() {
        let scorer = SentimentScorer::new(Box::new(FixedScorer(0.0)));
        let scored = scorer.score(vec![record("is on the")]);
        assert_eq!(scored[0].sentiment, Some(Sentiment::Neutral));
    }

    #[test]
    fn test_scoring_failure_keeps_record_without_label() {
        let scorer = SentimentScorer::new(Box::new(BrokenScorer));
        let scored = scorer.score(vec![record("i to the"), record("is on the")]);

        assert_eq!(scored.len(), 2);
        assert!(scored.iter().all(|r| r.polarity.is_none()));
        assert!(scored.iter().all(|r| r.sentiment.is_none()));
    }

    #[test]
    fn test_score_empty_input() {
        let scorer = SentimentScorer::new(Box::new(FixedScorer(0.5)));
        assert!(scorer.score(Vec::new()).is_empty());
    }
}
