use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use log::info;

use crate::error::PipelineError;
use crate::models::{DailyAggregate, ScoredRecord};

/// Group scored records by day.
///
/// Days appear in insertion order of their first record, not chronologically.
/// Every record counts towards its day's total; the mean polarity is taken
/// over the records that scored, rounded to three decimals, and 0.0 when none
/// of a day's records scored.
pub fn aggregate_daily(records: &[ScoredRecord]) -> Vec<DailyAggregate> {
    let mut order: Vec<NaiveDate> = Vec::new();
    let mut groups: HashMap<NaiveDate, (usize, Vec<f64>)> = HashMap::new();

    for record in records {
        let entry = groups.entry(record.date).or_insert_with(|| {
            order.push(record.date);
            (0, Vec::new())
        });
        entry.0 += 1;
        if let Some(polarity) = record.polarity {
            entry.1.push(polarity);
        }
    }

    let aggregates: Vec<DailyAggregate> = order
        .into_iter()
        .map(|date| {
            let (count, polarities) = &groups[&date];
            let avg = if polarities.is_empty() {
                0.0
            } else {
                polarities.iter().sum::<f64>() / polarities.len() as f64
            };
            DailyAggregate {
                date,
                num_msgs_per_day: *count,
                avg_sentiment: round3(avg),
            }
        })
        .collect();

    info!("aggregated {} records into {} days", records.len(), aggregates.len());
    aggregates
}

/// Write the daily aggregates as a flat CSV snapshot, columns
/// `date,num_msgs_per_day,avg_sentiment`.
pub fn save_aggregates(aggregates: &[DailyAggregate], path: &Path) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| from_csv(path, err))?;
    for aggregate in aggregates {
        writer
            .serialize(aggregate)
            .map_err(|err| from_csv(path, err))?;
    }
    writer.flush().map_err(|source| PipelineError::io(path, source))?;

    info!("saved {} daily aggregates to {}", aggregates.len(), path.display());
    Ok(())
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn from_csv(path: &Path, err: csv::Error) -> PipelineError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PipelineError::io(path, source),
        _ => PipelineError::Format(format!("{}: {message}", path.display())),
    }
}
