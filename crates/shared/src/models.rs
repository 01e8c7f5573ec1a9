use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

/// A single message as it appears in the exported chat JSON.
///
/// Export files carry many more fields per message; everything except the
/// date and the text body is ignored on deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    pub date: String,
    #[serde(default)]
    pub text: MessageText,
}

/// The `text` field of an exported message.
///
/// Exports are not uniform: plain messages carry a string, formatted messages
/// carry a list of string fragments and entity mappings, and a few carry a
/// single entity mapping. Each variant has exactly one flattening rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MessageText {
    Plain(String),
    Fragments(Vec<Fragment>),
    Entity(TextEntity),
    /// Anything else the export produces (numbers, nulls, unknown objects).
    Other(serde_json::Value),
}

impl Default for MessageText {
    fn default() -> Self {
        MessageText::Plain(String::new())
    }
}

/// One element of a fragmented message body.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Fragment {
    Plain(String),
    Entity(TextEntity),
    Other(serde_json::Value),
}

/// An entity mapping inside a message body (mention, link, hashtag, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct TextEntity {
    pub text: String,
}

impl MessageText {
    /// Flatten the message body to a single scalar string.
    ///
    /// Fragments contribute their whitespace tokens joined by single spaces;
    /// unknown shapes are skipped and contribute nothing.
    pub fn flatten(&self) -> String {
        match self {
            MessageText::Plain(text) => text.clone(),
            MessageText::Entity(entity) => entity.text.clone(),
            MessageText::Fragments(fragments) => {
                let mut tokens: Vec<&str> = Vec::new();
                for fragment in fragments {
                    match fragment {
                        Fragment::Plain(text) => tokens.extend(text.split_whitespace()),
                        Fragment::Entity(entity) => tokens.extend(entity.text.split_whitespace()),
                        Fragment::Other(value) => {
                            warn!("skipped message fragment {value}");
                        }
                    }
                }
                tokens.join(" ")
            }
            MessageText::Other(value) => {
                warn!("skipped message body {value}");
                String::new()
            }
        }
    }
}

/// The working unit flowing through the normalization chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub text: String,
    pub date: NaiveDate,
    pub txt_len: usize,
}

impl Record {
    pub fn new(text: impl Into<String>, date: NaiveDate) -> Self {
        let text = text.into();
        let txt_len = text.split_whitespace().count();
        Self {
            text,
            date,
            txt_len,
        }
    }
}

/// A record with its polarity attached.
///
/// `None` marks a record whose scoring failed; it still counts towards the
/// daily message totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub text: String,
    pub date: NaiveDate,
    pub polarity: Option<f64>,
    pub sentiment: Option<Sentiment>,
}

/// Categorical sentiment, derived from polarity by the sign rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    /// Pure mapping from polarity to label: negative below zero, neutral at
    /// exactly zero, positive above.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity < 0.0 {
            Sentiment::Negative
        } else if polarity > 0.0 {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }
}

/// One day of aggregated sentiment, immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub num_msgs_per_day: usize,
    pub avg_sentiment: f64,
}
