//! Station identity and reference record.

use std::fmt;

use super::{DomainError, GeoPoint};

/// Identifier of a sensor installation.
///
/// The open-data source keys every table by a numeric `Id_Instal` column;
/// this newtype keeps those ids from being mixed up with other integers.
///
/// # Examples
///
/// ```
/// use noise_map::domain::StationId;
///
/// let id = StationId::parse("42").unwrap();
/// assert_eq!(id, StationId::new(42));
/// assert_eq!(id.to_string(), "42");
///
/// assert!(StationId::parse("not-a-number").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(u32);

impl StationId {
    /// Construct from a raw installation number.
    pub fn new(id: u32) -> Self {
        StationId(id)
    }

    /// Parse an id from its decimal string form.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<u32>()
            .map(StationId)
            .map_err(|_| DomainError::InvalidStationId(s.to_string()))
    }

    /// The raw installation number.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable noise-sensor station record.
///
/// Loaded once from the station table and treated as read-only reference
/// data for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    position: GeoPoint,
    neighborhood: String,
    district: String,
}

impl Station {
    /// Construct a station record.
    pub fn new(
        id: StationId,
        position: GeoPoint,
        neighborhood: impl Into<String>,
        district: impl Into<String>,
    ) -> Self {
        Station {
            id,
            position,
            neighborhood: neighborhood.into(),
            district: district.into(),
        }
    }

    /// The station's unique id.
    pub fn id(&self) -> StationId {
        self.id
    }

    /// The station's geographic position.
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Name of the neighborhood the station stands in.
    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    /// Name of the district the station stands in.
    pub fn district(&self) -> &str {
        &self.district
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_id() {
        assert_eq!(StationId::parse("7").unwrap(), StationId::new(7));
        assert_eq!(StationId::parse(" 358 ").unwrap(), StationId::new(358));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse("abc").is_err());
        assert!(StationId::parse("-3").is_err());
        assert!(StationId::parse("3.5").is_err());
    }

    #[test]
    fn id_display() {
        assert_eq!(StationId::new(358).to_string(), "358");
    }

    #[test]
    fn id_hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::new(42));
        assert!(set.contains(&StationId::new(42)));
        assert!(!set.contains(&StationId::new(43)));
    }

    #[test]
    fn station_accessors() {
        let position = GeoPoint::new(2.1744, 41.4036).unwrap();
        let station = Station::new(StationId::new(1), position, "el Guinardó", "Horta-Guinardó");

        assert_eq!(station.id(), StationId::new(1));
        assert_eq!(station.position(), position);
        assert_eq!(station.neighborhood(), "el Guinardó");
        assert_eq!(station.district(), "Horta-Guinardó");
    }
}
