use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::position::Position;
use super::validation::{ValidationError, validate_city_name};

/// A visited city, as persisted by the city store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub city_name: String,
    pub country: String,
    pub emoji: String,
    pub date: NaiveDate,
    pub notes: String,
    pub position: Position,
}

impl Trip {
    /// Creates a new trip, validating the city name.
    ///
    /// The city name is stored trimmed. Generates `id` as
    /// `"trip-{YYYYMMDD-HHMMSS.mmm}"` from the current UTC time.
    pub fn new(
        city_name: String,
        country: String,
        emoji: String,
        date: NaiveDate,
        notes: String,
        position: Position,
    ) -> Result<Self, ValidationError> {
        validate_city_name(&city_name)?;
        let id = format!("trip-{}", Utc::now().format("%Y%m%d-%H%M%S%.3f"));
        Ok(Self {
            id,
            city_name: city_name.trim().to_string(),
            country,
            emoji,
            date,
            notes,
            position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lisbon() -> Position {
        Position::new(38.72, -9.14).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 16).unwrap()
    }

    #[test]
    fn valid_trip() {
        let trip = Trip::new(
            "Lisbon".to_string(),
            "Portugal".to_string(),
            "\u{1F1F5}\u{1F1F9}".to_string(),
            date(),
            "pasteis de nata".to_string(),
            lisbon(),
        )
        .unwrap();
        assert_eq!(trip.city_name, "Lisbon");
        assert_eq!(trip.country, "Portugal");
        assert_eq!(trip.date, date());
        assert_eq!(trip.notes, "pasteis de nata");
        assert_eq!(trip.position, lisbon());
        assert!(trip.id.starts_with("trip-"));
    }

    #[test]
    fn city_name_trimmed() {
        let trip = Trip::new(
            "  Porto ".to_string(),
            String::new(),
            String::new(),
            date(),
            String::new(),
            lisbon(),
        )
        .unwrap();
        assert_eq!(trip.city_name, "Porto");
    }

    #[test]
    fn empty_city_rejected() {
        let result = Trip::new(
            String::new(),
            "Portugal".to_string(),
            String::new(),
            date(),
            String::new(),
            lisbon(),
        );
        assert_eq!(result, Err(ValidationError::EmptyCityName));
    }

    #[test]
    fn serializes_camel_case() {
        let mut trip = Trip::new(
            "Lisbon".to_string(),
            "Portugal".to_string(),
            String::new(),
            date(),
            String::new(),
            lisbon(),
        )
        .unwrap();
        trip.id = "t1".to_string();
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["cityName"], "Lisbon");
        assert_eq!(json["date"], "2026-02-16");
        assert_eq!(json["position"]["lat"], 38.72);
    }

    #[test]
    fn serde_round_trip() {
        let trip = Trip::new(
            "Lisbon".to_string(),
            "Portugal".to_string(),
            "\u{1F1F5}\u{1F1F9}".to_string(),
            date(),
            "notes".to_string(),
            lisbon(),
        )
        .unwrap();
        let json = serde_json::to_string(&trip).unwrap();
        let deserialized: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(trip, deserialized);
    }
}
