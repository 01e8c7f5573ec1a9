use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use serde::Deserialize;

use crate::error::PipelineError;
use crate::models::RawMessage;

/// Date layout of the export's `date` field, after truncation to the
/// date-only prefix.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct ChatExport {
    messages: Vec<RawMessage>,
}

/// Read an exported chat JSON document and return its messages.
///
/// An unreadable file is an `Io` error; a document without the expected
/// `messages` collection is a `Format` error. Both are fatal.
pub fn extract_messages(path: &Path) -> Result<Vec<RawMessage>, PipelineError> {
    let raw = fs::read_to_string(path).map_err(|source| PipelineError::io(path, source))?;

    let export: ChatExport = serde_json::from_str(&raw).map_err(|err| {
        PipelineError::Format(format!("{} is not a chat export: {err}", path.display()))
    })?;

    info!("extracted {} messages from {}", export.messages.len(), path.display());
    Ok(export.messages)
}

/// Parse the date of a single message.
///
/// The export writes full timestamps (`2021-05-01T12:34:56`); only the
/// date-only prefix is kept.
pub fn parse_message_date(raw: &str) -> Result<NaiveDate, PipelineError> {
    let normalized = raw.replace('T', " ");
    let day = normalized.split_whitespace().next().unwrap_or("");
    NaiveDate::parse_from_str(day, DATE_FORMAT)
        .map_err(|err| PipelineError::Format(format!("bad message date {raw:?}: {err}")))
}
