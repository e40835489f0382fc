//! Station table loading.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{GeoPoint, Station, StationId};

use super::IngestError;

/// Raw station row as published by the open-data portal. Extra columns
/// in the file are ignored.
#[derive(Debug, Deserialize)]
struct StationRecord {
    #[serde(rename = "Id_Instal")]
    id: u32,
    #[serde(rename = "Latitud")]
    latitude: f64,
    #[serde(rename = "Longitud")]
    longitude: f64,
    #[serde(rename = "Nom_Barri")]
    neighborhood: String,
    #[serde(rename = "Nom_Districte")]
    district: String,
}

/// Load the sensor installation table.
///
/// Row order is preserved; the caller gets one `Station` per row.
///
/// # Errors
///
/// Fails on unreadable/malformed CSV or on a row whose coordinates are
/// not a valid geographic position.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, IngestError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;

    let mut stations = Vec::new();
    for row in reader.deserialize::<StationRecord>() {
        let record = row?;
        let position =
            GeoPoint::new(record.longitude, record.latitude).map_err(|source| {
                IngestError::InvalidStation {
                    id: record.id,
                    source,
                }
            })?;
        stations.push(Station::new(
            StationId::new(record.id),
            position,
            record.neighborhood,
            record.district,
        ));
    }

    info!(
        path = %path.as_ref().display(),
        stations = stations.len(),
        "loaded station table"
    );
    Ok(stations)
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

    #[test]
    fn loads_station_rows() {
        let file = write_csv(
            "Id_Instal,Latitud,Longitud,Nom_Barri,Nom_Districte\n\
             1,41.4036,2.1744,la Sagrada Família,Eixample\n\
             2,41.3874,2.1699,el Gòtic,Ciutat Vella\n",
        );

        let stations = load_stations(file.path()).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id(), StationId::new(1));
        assert_eq!(stations[0].position().lon(), 2.1744);
        assert_eq!(stations[0].position().lat(), 41.4036);
        assert_eq!(stations[0].neighborhood(), "la Sagrada Família");
        assert_eq!(stations[1].district(), "Ciutat Vella");
    }

    #[test]
    fn ignores_extra_columns() {
        let file = write_csv(
            "Id_Instal,Codi_Barri,Latitud,Longitud,Nom_Barri,Nom_Districte,Font\n\
             3,7,41.40,2.15,el Guinardó,Horta-Guinardó,ajuntament\n",
        );

        let stations = load_stations(file.path()).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id(), StationId::new(3));
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let file = write_csv(
            "Id_Instal,Latitud,Longitud,Nom_Barri,Nom_Districte\n\
             9,141.40,2.15,x,y\n",
        );

        assert!(matches!(
            load_stations(file.path()),
            Err(IngestError::InvalidStation { id: 9, .. })
        ));
    }

    #[test]
    fn rejects_missing_column() {
        let file = write_csv("Id_Instal,Latitud\n1,41.4\n");
        assert!(matches!(load_stations(file.path()), Err(IngestError::Csv(_))));
    }

    #[test]
    fn rejects_missing_file() {
        assert!(matches!(
            load_stations("/nonexistent/stations.csv"),
            Err(IngestError::Csv(_))
        ));
    }

    #[test]
    fn empty_table_loads_as_empty() {
        let file = write_csv("Id_Instal,Latitud,Longitud,Nom_Barri,Nom_Districte\n");
        assert!(load_stations(file.path()).unwrap().is_empty());
    }
}
