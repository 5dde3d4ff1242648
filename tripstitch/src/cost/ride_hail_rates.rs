use serde::{Deserialize, Serialize};

/// the ride hail fare schedule. legs are metered by time and distance on
/// top of a flat base amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RideHailRates {
    pub base: f64,
    pub per_minute: f64,
    pub per_kilometer: f64,
}

impl Default for RideHailRates {
    fn default() -> Self {
        RideHailRates {
            base: 0.0,
            per_minute: 0.5,
            per_kilometer: 1.0,
        }
    }
}

impl RideHailRates {
    /// fare for one leg, metering duration in seconds and distance in meters
    pub fn fare(&self, duration_seconds: f64, distance_meters: f64) -> f64 {
        self.base
            + (duration_seconds / 60.0) * self.per_minute
            + (distance_meters / 1000.0) * self.per_kilometer
    }
}
