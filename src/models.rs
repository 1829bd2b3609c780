use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LocationError {
    #[error("Latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Opaque identity of a logged catch, generated once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatchId(Uuid);

impl CatchId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for CatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a catch was made. Owned by exactly one [`Catch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishingLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FishingLocation {
    pub fn new(
        latitude: f64,
        longitude: f64,
        name: Option<String>,
    ) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
            name,
        })
    }
}

/// A single logged fish capture. Immutable once created; a catch is only
/// ever replaced by deleting it and logging a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catch {
    pub id: CatchId,
    pub species: String,
    /// Weight in pounds.
    pub weight: f64,
    /// Length in inches.
    pub length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<Vec<u8>>,
    pub location: FishingLocation,
    pub timestamp: DateTime<Utc>,
    /// Classifier confidence in [0, 1].
    pub confidence: f64,
}

impl Catch {
    /// Builds a fully populated catch, generating its id and timestamp.
    pub fn log(
        species: String,
        weight: f64,
        length: f64,
        image_data: Option<Vec<u8>>,
        location: FishingLocation,
        confidence: f64,
    ) -> Self {
        Self {
            id: CatchId::generate(),
            species,
            weight,
            length,
            image_data,
            location,
            timestamp: Utc::now(),
            confidence,
        }
    }

    pub fn display_weight(&self) -> String {
        format!("{:.1} lbs", self.weight)
    }

    pub fn display_length(&self) -> String {
        format!("{:.1}\"", self.length)
    }
}

impl Display for Catch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} \u{2022} {})",
            self.species,
            self.display_weight(),
            self.display_length()
        )
    }
}

/// The angler's account record. Created at authentication and mutated only
/// by external profile flows; never deleted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub total_catches: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biggest_fish: Option<Catch>,
    /// Ids of befriended users.
    pub friends: Vec<String>,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn bass() -> Catch {
        Catch::log(
            "Bass".to_string(),
            5.0,
            18.0,
            Some(vec![0xff, 0xd8, 0xff]),
            FishingLocation::new(44.97, -93.26, Some("Lake Harriet".to_string())).unwrap(),
            1.0,
        )
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(CatchId::generate(), CatchId::generate());
    }

    #[test]
    fn display_helpers_round_to_one_decimal() {
        let catch = bass();
        assert_eq!(catch.display_weight(), "5.0 lbs");
        assert_eq!(catch.display_length(), "18.0\"");
        assert_eq!(catch.to_string(), "Bass (5.0 lbs \u{2022} 18.0\")");
    }

    #[test_case(90.0, 180.0 ; "upper corner")]
    #[test_case(-90.0, -180.0 ; "lower corner")]
    #[test_case(0.0, 0.0 ; "origin")]
    fn location_accepts_valid_coordinates(latitude: f64, longitude: f64) {
        assert!(FishingLocation::new(latitude, longitude, None).is_ok());
    }

    #[test_case(90.5, 0.0, LocationError::LatitudeOutOfRange(90.5) ; "latitude too high")]
    #[test_case(-91.0, 0.0, LocationError::LatitudeOutOfRange(-91.0) ; "latitude too low")]
    #[test_case(0.0, 180.1, LocationError::LongitudeOutOfRange(180.1) ; "longitude too high")]
    #[test_case(0.0, -200.0, LocationError::LongitudeOutOfRange(-200.0) ; "longitude too low")]
    fn location_rejects_out_of_range(latitude: f64, longitude: f64, expected: LocationError) {
        assert_eq!(
            FishingLocation::new(latitude, longitude, None).unwrap_err(),
            expected
        );
    }

    #[test]
    fn catch_serializes_with_app_field_names() {
        let value = serde_json::to_value(bass()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "id",
            "species",
            "weight",
            "length",
            "imageData",
            "location",
            "timestamp",
            "confidence",
        ] {
            assert!(object.contains_key(key), "missing key {key:?}");
        }

        let location = object["location"].as_object().unwrap();
        assert!(location.contains_key("latitude"));
        assert!(location.contains_key("longitude"));
        assert!(location.contains_key("name"));
    }

    #[test]
    fn absent_image_is_omitted() {
        let mut catch = bass();
        catch.image_data = None;

        let value = serde_json::to_value(catch).unwrap();
        assert!(!value.as_object().unwrap().contains_key("imageData"));
    }
}
