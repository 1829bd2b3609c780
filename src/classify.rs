use log::debug;

/// Label reported when no species could be identified.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Suggestions at or below this confidence are not worth pre-filling the
/// log form with.
pub const SPECIES_CONFIDENCE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f64,
}

impl Classification {
    /// The answer every classifier falls back to on any internal failure.
    pub fn unknown() -> Self {
        Self {
            label: UNKNOWN_LABEL.to_string(),
            confidence: 0.0,
        }
    }

    /// The label, when it is confident enough to suggest as a species.
    pub fn suggested_species(&self) -> Option<&str> {
        (self.confidence > SPECIES_CONFIDENCE_THRESHOLD).then(|| self.label.as_str())
    }
}

/// On-device species classifier.
///
/// Implementations never surface a hard error: a missing model, an
/// undecodable image or any other internal failure maps to
/// [`Classification::unknown`].
pub trait Classifier {
    fn classify(&self, image: &[u8]) -> Classification;
}

/// Stand-in used until a trained model ships.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubClassifier;

impl Classifier for StubClassifier {
    fn classify(&self, image: &[u8]) -> Classification {
        debug!("No model loaded, {} byte image unclassified", image.len());
        Classification::unknown()
    }
}
