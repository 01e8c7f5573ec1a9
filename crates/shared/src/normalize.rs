use indicatif::ProgressBar;
use log::{info, warn};

use crate::capability::{LanguageClassifier, StopwordSet};
use crate::extract::parse_message_date;
use crate::models::{RawMessage, Record};

/// Minimum surviving token count for the length filters.
pub const MIN_TOKENS: usize = 3;

/// Records must mention one of these to survive the topic filter.
pub const TOPIC_KEYWORDS: &[&str] = &["shib", "doge"];

const TARGET_LANGUAGE: &str = "en";

/// The ordered normalization chain.
///
/// Stage order is fixed: the first length filter runs before language
/// classification, the topic filter sees lowercased text, and the final
/// length filter sees stopword-reduced, punctuation-free text.
pub struct Normalizer {
    classifier: Box<dyn LanguageClassifier>,
    stopwords: StopwordSet,
}

impl Normalizer {
    pub fn new(classifier: Box<dyn LanguageClassifier>, stopwords: StopwordSet) -> Self {
        Self {
            classifier,
            stopwords,
        }
    }

    /// Run every stage in order and return the surviving records.
    ///
    /// Per-record failures (unparsable date, classification error) drop the
    /// record and never abort the run.
    pub fn normalize(&self, messages: Vec<RawMessage>) -> Vec<Record> {
        info!("converting {} messages to records", messages.len());
        let records = flatten_messages(messages);

        info!("removing emoji tokens");
        let records = strip_emoji_tokens(records);

        info!("dropping records under {MIN_TOKENS} tokens");
        let records = filter_by_token_count(records);

        info!("dropping non-english records");
        let records = self.filter_english(records);

        info!("lowercasing text");
        let records = lowercase_text(records);

        info!("keeping records matching {TOPIC_KEYWORDS:?}");
        let records = filter_by_topic(records);

        info!("reducing text to stopword tokens");
        let records = self.retain_stopword_tokens(records);

        info!("stripping punctuation");
        let records = strip_punctuation(records);

        info!("dropping records under {MIN_TOKENS} tokens");
        let records = filter_by_token_count(records);

        info!("{} records survived normalization", records.len());
        records
    }

    fn filter_english(&self, records: Vec<Record>) -> Vec<Record> {
        let bar = ProgressBar::new(records.len() as u64);
        let records = records
            .into_iter()
            .filter(|record| {
                bar.inc(1);
                match self.classifier.classify(&record.text) {
                    Ok(code) => code == TARGET_LANGUAGE,
                    Err(err) => {
                        warn!("dropping message from {}: {err}", record.date);
                        false
                    }
                }
            })
            .collect();
        bar.finish_and_clear();
        records
    }

    fn retain_stopword_tokens(&self, records: Vec<Record>) -> Vec<Record> {
        records
            .into_iter()
            .map(|mut record| {
                record.text = record
                    .text
                    .split_whitespace()
                    .filter(|token| self.stopwords.contains(token))
                    .collect::<Vec<_>>()
                    .join(" ");
                record
            })
            .collect()
    }
}

fn flatten_messages(messages: Vec<RawMessage>) -> Vec<Record> {
    messages
        .into_iter()
        .filter_map(|message| match parse_message_date(&message.date) {
            Ok(date) => Some(Record::new(message.text.flatten(), date)),
            Err(err) => {
                warn!("dropping message: {err}");
                None
            }
        })
        .collect()
}

fn strip_emoji_tokens(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut record| {
            record.text = record
                .text
                .split_whitespace()
                .filter(|token| !is_emoji_token(token))
                .collect::<Vec<_>>()
                .join(" ");
            record
        })
        .collect()
}

fn is_emoji_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_emoji_char)
}

fn is_emoji_char(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}'   // emoticons, pictographs, flags, extended symbols
        | '\u{2600}'..='\u{27BF}'   // misc symbols, dingbats
        | '\u{2B00}'..='\u{2BFF}'   // arrows, stars
        | '\u{FE0F}'                // variation selector
        | '\u{200D}'                // zero-width joiner
    )
}

fn filter_by_token_count(mut records: Vec<Record>) -> Vec<Record> {
    for record in &mut records {
        record.txt_len = record.text.split_whitespace().count();
    }
    records.retain(|record| record.txt_len >= MIN_TOKENS);
    records
}

fn lowercase_text(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut record| {
            record.text = record.text.to_lowercase();
            record
        })
        .collect()
}

fn filter_by_topic(mut records: Vec<Record>) -> Vec<Record> {
    records.retain(|record| {
        TOPIC_KEYWORDS
            .iter()
            .any(|keyword| record.text.contains(keyword))
    });
    records
}

fn strip_punctuation(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|mut record| {
            record.text.retain(|c| !c.is_ascii_punctuation());
            record
        })
        .collect()
}
