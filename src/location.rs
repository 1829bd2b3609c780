use crate::models::{FishingLocation, LocationError};

/// Raw fix from the platform location service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<Coordinates> for FishingLocation {
    type Error = LocationError;

    fn try_from(fix: Coordinates) -> Result<Self, Self::Error> {
        FishingLocation::new(fix.latitude, fix.longitude, None)
    }
}

/// Source of the device's current position.
pub trait LocationProvider {
    /// `None` when no fix is available (permission denied, no signal).
    fn current_location(&self) -> Option<Coordinates>;
}

/// Provider pinned to one spot, for tests and previews.
#[derive(Debug, Clone, Copy)]
pub struct FixedProvider(pub Coordinates);

impl LocationProvider for FixedProvider {
    fn current_location(&self) -> Option<Coordinates> {
        Some(self.0)
    }
}

/// Provider that never has a fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableProvider;

impl LocationProvider for UnavailableProvider {
    fn current_location(&self) -> Option<Coordinates> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_provider_reports_its_spot() {
        let fix = Coordinates {
            latitude: 44.97,
            longitude: -93.26,
        };

        let location: FishingLocation = FixedProvider(fix)
            .current_location()
            .unwrap()
            .try_into()
            .unwrap();

        assert_eq!(location.latitude, 44.97);
        assert_eq!(location.longitude, -93.26);
        assert!(location.name.is_none());
    }

    #[test]
    fn unavailable_provider_has_no_fix() {
        assert!(UnavailableProvider.current_location().is_none());
    }
}
