//! Geolocator Port - boundary to the device's location capability.
//!
//! Location is advisory only: every failure mode degrades to "resources
//! shown without location", so implementations must resolve rather than
//! hang.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Device coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Port for acquiring the device position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    /// Attempts to acquire the current position.
    ///
    /// Must resolve with either coordinates or a `LocationError`; callers
    /// additionally wrap the call in their own timeout.
    async fn current_position(&self) -> Result<Coordinates, LocationError>;
}

/// Failures at the geolocation boundary.
///
/// None of these are errors for flow purposes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location permission denied")]
    Denied,

    #[error("location acquisition timed out")]
    Timeout,

    #[error("location unavailable: {0}")]
    Unavailable(String),
}
