use std::collections::HashSet;

use crate::error::{ClassificationError, ScoringError};

/// Language detection over a single message body.
///
/// Implementations are loaded once per run and invoked one record at a time;
/// they are not assumed to be reentrant.
pub trait LanguageClassifier {
    /// ISO 639-1 code of the detected language.
    fn classify(&self, text: &str) -> Result<String, ClassificationError>;
}

/// Continuous sentiment score over a single message body.
pub trait PolarityScorer {
    /// Polarity in `[-1.0, 1.0]`: negative, zero, or positive sentiment.
    fn polarity(&self, text: &str) -> Result<f64, ScoringError>;
}

/// English stopword lexicon, loaded once per run.
pub struct StopwordSet {
    words: HashSet<&'static str>,
}

impl StopwordSet {
    pub fn english() -> Self {
        Self {
            words: ENGLISH_STOPWORDS.iter().copied().collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Classifies text as English when enough of its alphabetic tokens are
/// common English function words.
pub struct StopwordLanguageClassifier {
    stopwords: StopwordSet,
    min_ratio: f64,
}

impl StopwordLanguageClassifier {
    pub fn new() -> Self {
        Self {
            stopwords: StopwordSet::english(),
            min_ratio: 0.2,
        }
    }
}

impl Default for StopwordLanguageClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageClassifier for StopwordLanguageClassifier {
    fn classify(&self, text: &str) -> Result<String, ClassificationError> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                token
                    .trim_matches(|c: char| !c.is_alphabetic())
                    .to_lowercase()
            })
            .filter(|token| !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();

        if tokens.is_empty() {
            return Err(ClassificationError::new("no alphabetic tokens"));
        }

        let hits = tokens
            .iter()
            .filter(|token| self.stopwords.contains(token.as_str()))
            .count();

        let ratio = hits as f64 / tokens.len() as f64;
        if ratio >= self.min_ratio {
            Ok("en".to_string())
        } else {
            Ok("und".to_string())
        }
    }
}

/// Lexicon-backed polarity scorer.
///
/// Score is the hit count difference between the positive and negative word
/// lists, normalized by token count and clamped to `[-1.0, 1.0]`.
pub struct LexiconScorer {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> Result<f64, ScoringError> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|token| {
                token
                    .trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return Ok(0.0);
        }

        let mut positive = 0i64;
        let mut negative = 0i64;
        for token in &tokens {
            if self.positive.contains(token.as_str()) {
                positive += 1;
            } else if self.negative.contains(token.as_str()) {
                negative += 1;
            }
        }

        let score = (positive - negative) as f64 / tokens.len() as f64;
        Ok(score.clamp(-1.0, 1.0))
    }
}

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "else",
    "even", "ever", "every", "few", "for", "from", "further", "get", "go", "got", "had", "has",
    "have", "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "itself", "just", "let", "like", "many", "may", "me",
    "might", "more", "most", "much", "must", "my", "myself", "never", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "really", "same", "she", "should", "so", "some", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "upon", "us", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "best", "bull", "bullish", "buy", "cheap", "excellent", "fantastic",
    "gain", "gains", "gem", "good", "great", "happy", "hodl", "hold", "hope", "huge", "lambo",
    "love", "lucky", "moon", "mooning", "nice", "profit", "pump", "pumping", "rich", "rise",
    "rising", "rocket", "solid", "strong", "sweet", "up", "win", "winner", "winning", "wow",
];

const NEGATIVE_WORDS: &[&str] = &[
    "awful", "bad", "bear", "bearish", "bleed", "bleeding", "crash", "crashing", "down", "drop",
    "dropping", "dump", "dumping", "fall", "falling", "fear", "fud", "hate", "loser", "loss",
    "losses", "lost", "panic", "poor", "red", "rekt", "rug", "rugpull", "sad", "scam", "scammer",
    "sell", "selling", "short", "terrible", "ugly", "weak", "worse", "worst", "worthless",
];

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Classifier Tests ====================

    #[test]
    fn test_classifier_detects_english() {
        let classifier = StopwordLanguageClassifier::new();
        let code = classifier
            .classify("I think this is going to the moon")
            .unwrap();
        assert_eq!(code, "en");
    }

    #[test]
    fn test_classifier_rejects_non_english() {
        let classifier = StopwordLanguageClassifier::new();
        let code = classifier
            .classify("precio sube mucho hoy compra ahora")
            .unwrap();
        assert_eq!(code, "und");
    }

    #[test]
    fn test_classifier_fails_without_alphabetic_tokens() {
        let classifier = StopwordLanguageClassifier::new();
        assert!(classifier.classify("123 456 !!!").is_err());
        assert!(classifier.classify("").is_err());
    }

    // ==================== Stopword Tests ====================

    #[test]
    fn test_stopword_set_lookup() {
        let stopwords = StopwordSet::english();
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("to"));
        assert!(!stopwords.contains("doge"));
    }

    // ==================== Scorer Tests ====================

    #[test]
    fn test_scorer_positive_text() {
        let scorer = LexiconScorer::new();
        let score = scorer.polarity("doge is great love it").unwrap();
        assert!(score > 0.0);
    }

    #[test]
    fn test_scorer_negative_text() {
        let scorer = LexiconScorer::new();
        let score = scorer.polarity("total scam dump everything").unwrap();
        assert!(score < 0.0);
    }

    #[test]
    fn test_scorer_neutral_text() {
        let scorer = LexiconScorer::new();
        let score = scorer.polarity("doge shib transfer wallet").unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_scorer_empty_text_is_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity("").unwrap(), 0.0);
    }

    #[test]
    fn test_scorer_stays_in_range() {
        let scorer = LexiconScorer::new();
        let score = scorer.polarity("moon moon moon moon").unwrap();
        assert!((-1.0..=1.0).contains(&score));
        assert_eq!(score, 1.0);
    }
}
