use crate::{
    classify::{Classification, UNKNOWN_LABEL},
    models::{Catch, FishingLocation},
};

/// Confidence recorded for a catch the angler confirmed by hand.
const MANUAL_CONFIDENCE: f64 = 1.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    #[error("No photo was captured")]
    MissingPhoto,

    #[error("Could not parse weight {0:?}")]
    UnparseableWeight(String),

    #[error("Weight must be positive, got {0}")]
    NonPositiveWeight(f64),

    #[error("Could not parse length {0:?}")]
    UnparseableLength(String),

    #[error("Length must be positive, got {0}")]
    NonPositiveLength(f64),

    #[error("No location available")]
    LocationUnavailable,
}

/// Form state of the log-catch flow.
///
/// Collects the raw inputs as the angler enters them and validates them all
/// at once in [`CatchDraft::finish`], so the store's `add` only ever sees a
/// fully constructed catch.
#[derive(Debug, Clone, Default)]
pub struct CatchDraft {
    species: String,
    weight: String,
    length: String,
    photo: Option<Vec<u8>>,
}

impl CatchDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_species(&mut self, species: impl Into<String>) {
        self.species = species.into();
    }

    pub fn set_weight(&mut self, raw: impl Into<String>) {
        self.weight = raw.into();
    }

    pub fn set_length(&mut self, raw: impl Into<String>) {
        self.length = raw.into();
    }

    /// Attaches the captured photo (already compressed, opaque here).
    pub fn attach_photo(&mut self, photo: Vec<u8>) {
        self.photo = Some(photo);
    }

    /// Pre-fills the species from a classification, when it is confident
    /// enough. A weak or unknown answer leaves the field untouched.
    pub fn apply_classification(&mut self, classification: &Classification) {
        if let Some(species) = classification.suggested_species() {
            self.species = species.to_string();
        }
    }

    /// Validates the form and builds the immutable catch.
    ///
    /// An empty species field falls back to `"Unknown"`; everything else is
    /// required. `location` is `None` when the provider had no fix, which
    /// rejects the draft rather than logging a catch without a position.
    pub fn finish(self, location: Option<FishingLocation>) -> Result<Catch, Error> {
        let photo = self.photo.ok_or(Error::MissingPhoto)?;
        let weight = parse_measure(
            &self.weight,
            Error::UnparseableWeight,
            Error::NonPositiveWeight,
        )?;
        let length = parse_measure(
            &self.length,
            Error::UnparseableLength,
            Error::NonPositiveLength,
        )?;
        let location = location.ok_or(Error::LocationUnavailable)?;

        let species = if self.species.is_empty() {
            UNKNOWN_LABEL.to_string()
        } else {
            self.species
        };

        Ok(Catch::log(
            species,
            weight,
            length,
            Some(photo),
            location,
            MANUAL_CONFIDENCE,
        ))
    }
}

fn parse_measure(
    raw: &str,
    unparseable: fn(String) -> Error,
    non_positive: fn(f64) -> Error,
) -> Result<f64, Error> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| unparseable(raw.to_string()))?;
    if value <= 0.0 {
        return Err(non_positive(value));
    }
    Ok(value)
}
