use std::path::Path;

use log::info;

use crate::error::PipelineError;
use crate::models::Record;

/// Write the normalized table as a flat CSV snapshot.
///
/// Columns are `text,date,txt_len`; the in-memory table is left untouched so
/// the pipeline continues on the same records it saved.
pub fn save_records(records: &[Record], path: &Path) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_path(path).map_err(|err| from_csv(path, err))?;
    for record in records {
        writer.serialize(record).map_err(|err| from_csv(path, err))?;
    }
    writer.flush().map_err(|source| PipelineError::io(path, source))?;

    info!("saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Load a previously saved snapshot, resuming the run at scoring.
pub fn load_records(path: &Path) -> Result<Vec<Record>, PipelineError> {
    let mut reader = csv::Reader::from_path(path).map_err(|err| from_csv(path, err))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row.map_err(|err| from_csv(path, err))?;
        records.push(record);
    }

    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn from_csv(path: &Path, err: csv::Error) -> PipelineError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PipelineError::io(path, source),
        _ => PipelineError::Format(format!("{}: {message}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_round_trip_preserves_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transformed_data.csv");

        let records = vec![
            Record::new("i to the", date("2021-05-01")),
            Record::new("is on the again", date("2021-05-02")),
        ];

        save_records(&records, &path).unwrap();
        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_round_trip_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transformed_data.csv");

        save_records(&[], &path).unwrap();
        let loaded = load_records(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_records(Path::new("/nonexistent/transformed_data.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }

    #[test]
    fn test_load_rejects_wrong_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transformed_data.csv");
        std::fs::write(&path, "a,b\n1,2\n").unwrap();

        let err = load_records(&path).unwrap_err();
        assert!(matches!(err, PipelineError::Format(_)));
    }
}
