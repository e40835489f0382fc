//! Ingestion error types.

use crate::domain::DomainError;

/// Errors while loading the station or reading tables.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The CSV could not be opened or parsed
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    /// A station row carries an invalid location
    #[error("station {id}: {source}")]
    InvalidStation {
        id: u32,
        #[source]
        source: DomainError,
    },

    /// A reading row carries an invalid noise level
    #[error("reading for station {id}: {source}")]
    InvalidReading {
        id: u32,
        #[source]
        source: DomainError,
    },

    /// A reading row's date/hour columns do not form a valid timestamp
    #[error("reading for station {id} has an invalid timestamp: {year}-{month}-{day} {hour:?}")]
    InvalidTimestamp {
        id: u32,
        year: i32,
        month: u32,
        day: u32,
        hour: String,
    },
}
