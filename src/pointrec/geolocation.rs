//! # Geolocation boundary
//!
//! Looking up the device position is delegated to a [`Geolocator`]. The core
//! only ever receives the resulting coordinate pair, or one of a fixed set of
//! failures whose messages are shown to the user verbatim.
//!
//! The request options (high accuracy, 10 s timeout, 60 s cached-reading
//! tolerance) are handed to the locator untouched; enforcing them is the
//! locator's job. There is no cancellation of an in-flight lookup.

use crate::model::Coordinates;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Geolocation is not supported by this device")]
    Unsupported,

    #[error("Location access denied by user")]
    PermissionDenied,

    #[error("Location information is unavailable")]
    PositionUnavailable,

    #[error("Location request timed out")]
    Timeout,

    #[error("Unable to retrieve your location")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeolocationOptions {
    #[serde(default = "default_high_accuracy")]
    pub high_accuracy: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_maximum_age_secs")]
    pub maximum_age_secs: u64,
}

fn default_high_accuracy() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_maximum_age_secs() -> u64 {
    60
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: default_high_accuracy(),
            timeout_secs: default_timeout_secs(),
            maximum_age_secs: default_maximum_age_secs(),
        }
    }
}

impl GeolocationOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn maximum_age(&self) -> Duration {
        Duration::from_secs(self.maximum_age_secs)
    }
}

/// A source of single position readings.
pub trait Geolocator {
    fn locate(
        &mut self,
        options: &GeolocationOptions,
    ) -> std::result::Result<Coordinates, GeolocationError>;
}

/// Answers every request with a preconfigured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    position: Coordinates,
}

impl FixedLocator {
    pub fn new(position: Coordinates) -> Self {
        Self { position }
    }
}

impl Geolocator for FixedLocator {
    fn locate(
        &mut self,
        _options: &GeolocationOptions,
    ) -> std::result::Result<Coordinates, GeolocationError> {
        Ok(self.position)
    }
}

/// Used when no position source is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocator;

impl Geolocator for NoLocator {
    fn locate(
        &mut self,
        _options: &GeolocationOptions,
    ) -> std::result::Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}

impl<G: Geolocator + ?Sized> Geolocator for Box<G> {
    fn locate(
        &mut self,
        options: &GeolocationOptions,
    ) -> std::result::Result<Coordinates, GeolocationError> {
        (**self).locate(options)
    }
}
