//! Noise reading table loading.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use tracing::info;

use crate::domain::{NoiseReading, StationId};

use super::IngestError;

/// Raw measurement row. The source spreads the timestamp over separate
/// year/month/day columns plus an hour label like `"01:00"` or
/// `"01:00 h"`.
#[derive(Debug, Deserialize)]
struct ReadingRecord {
    #[serde(rename = "Id_Instal")]
    id: u32,
    #[serde(rename = "Any")]
    year: i32,
    #[serde(rename = "Mes")]
    month: u32,
    #[serde(rename = "Dia")]
    day: u32,
    #[serde(rename = "Hora")]
    hour: String,
    #[serde(rename = "Nivell_LAeq_1h")]
    level_db: f64,
}

/// Load the hourly measurement table.
///
/// # Errors
///
/// Fails on unreadable/malformed CSV, an hour label that doesn't start
/// with a valid hour, a date that doesn't exist, or a non-finite level.
pub fn load_readings(path: impl AsRef<Path>) -> Result<Vec<NoiseReading>, IngestError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let mut readings = Vec::new();
    for row in reader.deserialize::<ReadingRecord>() {
        let record = row?;
        let timestamp = assemble_timestamp(&record)?;
        let reading = NoiseReading::new(StationId::new(record.id), timestamp, record.level_db)
            .map_err(|source| IngestError::InvalidReading {
                id: record.id,
                source,
            })?;
        readings.push(reading);
    }

    info!(
        path = %path.as_ref().display(),
        readings = readings.len(),
        "loaded reading table"
    );
    Ok(readings)
}

fn assemble_timestamp(record: &ReadingRecord) -> Result<NaiveDateTime, IngestError> {
    let invalid = || IngestError::InvalidTimestamp {
        id: record.id,
        year: record.year,
        month: record.month,
        day: record.day,
        hour: record.hour.clone(),
    };

    let hour = parse_hour_label(&record.hour).ok_or_else(invalid)?;
    NaiveDate::from_ymd_opt(record.year, record.month, record.day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .ok_or_else(invalid)
}

/// Extract the hour from an hour label: the digits before the first `:`,
/// or the whole label when there is no colon. Minutes are always zero in
/// the source data.
fn parse_hour_label(label: &str) -> Option<u32> {
    let head = label.trim().split(':').next()?;
    let hour: u32 = head.trim().parse().ok()?;
    (hour < 24).then_some(hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn parse_hour_labels() {
        assert_eq!(parse_hour_label("01:00"), Some(1));
        assert_eq!(parse_hour_label("23:00 h"), Some(23));
        assert_eq!(parse_hour_label(" 7:00"), Some(7));
        assert_eq!(parse_hour_label("0:00"), Some(0));
        assert_eq!(parse_hour_label("14"), Some(14));
    }

    #[test]
    fn parse_hour_label_rejects_garbage() {
        assert_eq!(parse_hour_label("24:00"), None);
        assert_eq!(parse_hour_label("late"), None);
        assert_eq!(parse_hour_label(""), None);
        assert_eq!(parse_hour_label("-1:00"), None);
    }

    #[test]
    fn loads_reading_rows() {
        let file = write_csv(
            "Id_Instal,Any,Mes,Dia,Hora,Nivell_LAeq_1h\n\
             1,2024,3,15,01:00,58.3\n\
             1,2024,3,15,02:00,55.1\n\
             2,2024,3,15,01:00,63.9\n",
        );

        let readings = load_readings(file.path()).unwrap();
        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].station(), StationId::new(1));
        assert_eq!(readings[0].timestamp(), ts(2024, 3, 15, 1));
        assert_eq!(readings[0].level_db(), 58.3);
        assert_eq!(readings[2].station(), StationId::new(2));
    }

    #[test]
    fn rejects_nonexistent_date() {
        let file = write_csv(
            "Id_Instal,Any,Mes,Dia,Hora,Nivell_LAeq_1h\n\
             5,2023,2,30,01:00,60.0\n",
        );

        assert!(matches!(
            load_readings(file.path()),
            Err(IngestError::InvalidTimestamp { id: 5, day: 30, .. })
        ));
    }

    #[test]
    fn rejects_bad_hour_label() {
        let file = write_csv(
            "Id_Instal,Any,Mes,Dia,Hora,Nivell_LAeq_1h\n\
             5,2023,2,10,nit,60.0\n",
        );

        assert!(matches!(
            load_readings(file.path()),
            Err(IngestError::InvalidTimestamp { id: 5, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_level() {
        let file = write_csv(
            "Id_Instal,Any,Mes,Dia,Hora,Nivell_LAeq_1h\n\
             5,2023,2,10,01:00,loud\n",
        );

        assert!(matches!(load_readings(file.path()), Err(IngestError::Csv(_))));
    }
}
