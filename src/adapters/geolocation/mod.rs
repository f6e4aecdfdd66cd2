//! Geolocation adapters.
//!
//! The real device capability lives in the host shell; these adapters
//! cover tests and headless environments.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{Coordinates, Geolocator, LocationError};

/// Geolocator that always reports a fixed position.
#[derive(Debug, Clone)]
pub struct FixedGeolocator {
    position: Coordinates,
    delay: Duration,
}

impl FixedGeolocator {
    /// Creates a geolocator that resolves to `position` immediately.
    pub fn new(position: Coordinates) -> Self {
        Self {
            position,
            delay: Duration::ZERO,
        }
    }

    /// Adds simulated acquisition latency.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Ok(self.position)
    }
}

/// Geolocator that always fails with the configured error.
#[derive(Debug, Clone)]
pub struct UnavailableGeolocator {
    error: LocationError,
}

impl UnavailableGeolocator {
    /// Creates a geolocator that reports permission denial.
    pub fn denied() -> Self {
        Self {
            error: LocationError::Denied,
        }
    }

    /// Creates a geolocator that fails with the given error.
    pub fn failing_with(error: LocationError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl Geolocator for UnavailableGeolocator {
    async fn current_position(&self) -> Result<Coordinates, LocationError> {
        Err(self.error.clone())
    }
}
