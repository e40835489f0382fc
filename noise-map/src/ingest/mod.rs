//! CSV ingestion of the two source tables.
//!
//! The open-data portal publishes one CSV of sensor installations and one
//! of hourly LAeq measurements, keyed by `Id_Instal`. Raw rows are
//! deserialized into private record structs and converted to validated
//! domain types; a bad row fails the load with a message naming the
//! offending station.

mod error;
mod readings;
mod stations;

pub use error::IngestError;
pub use readings::load_readings;
pub use stations::load_stations;
