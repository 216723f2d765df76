//! Location resolution for the prayer view.
//!
//! A terminal has no geolocation capability, so coordinates come from the
//! command line. The three failure conditions of the reference behavior are
//! kept distinct because each maps to its own user-facing state, and all of
//! them fall back to the manual city/country form.

use crate::config::Settings;

#[derive(Debug, Clone, PartialEq)]
pub enum LocationStatus {
    Resolved { latitude: f64, longitude: f64 },
    /// Location use explicitly declined.
    Denied,
    /// No coordinates available.
    Unavailable,
    /// Lookup started but did not complete in time.
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationState {
    pub status: LocationStatus,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl LocationState {
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self.status {
            LocationStatus::Resolved {
                latitude,
                longitude,
            } => Some((latitude, longitude)),
            _ => None,
        }
    }

    pub fn needs_manual_entry(&self) -> bool {
        !matches!(self.status, LocationStatus::Resolved { .. })
    }
}

/// Initial location state from startup settings.
pub fn resolve(settings: &Settings) -> LocationState {
    let status = if settings.no_location {
        LocationStatus::Denied
    } else {
        match (settings.latitude, settings.longitude) {
            (Some(latitude), Some(longitude)) => LocationStatus::Resolved {
                latitude,
                longitude,
            },
            _ => LocationStatus::Unavailable,
        }
    };
    LocationState {
        status,
        city: settings.city.clone(),
        country: settings.country.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_resolve() {
        let settings = Settings {
            latitude: Some(30.0),
            longitude: Some(31.2),
            ..Settings::default()
        };
        let state = resolve(&settings);
        assert_eq!(state.coordinates(), Some((30.0, 31.2)));
        assert!(!state.needs_manual_entry());
    }

    #[test]
    fn missing_coordinates_are_unavailable() {
        let state = resolve(&Settings::default());
        assert_eq!(state.status, LocationStatus::Unavailable);
        assert!(state.needs_manual_entry());
    }

    #[test]
    fn declined_location_is_denied() {
        let settings = Settings {
            no_location: true,
            latitude: Some(10.0),
            longitude: Some(10.0),
            ..Settings::default()
        };
        assert_eq!(resolve(&settings).status, LocationStatus::Denied);
    }
}
