use std::time::Duration;

use thiserror::Error;

use crate::model::Coordinate;

/// Geolocation failure, using the conventional geolocation error codes.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("position error {code}: {message}")]
pub struct PositionError {
    pub code: i32,
    pub message: String,
}

impl PositionError {
    pub const PERMISSION_DENIED: i32 = 1;
    pub const POSITION_UNAVAILABLE: i32 = 2;
    pub const TIMEOUT: i32 = 3;

    pub fn timeout() -> PositionError {
        PositionError {
            code: PositionError::TIMEOUT,
            message: "position request timed out".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for PositionOptions {
    fn default() -> PositionOptions {
        PositionOptions {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Seam over the platform location services: a fine-location permission
/// prompt and a one-shot position fix.
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    /// Requests fine-location permission. Returns whether it was granted.
    async fn request_permission(&self) -> bool;

    /// Requests a single position fix. The caller enforces
    /// `options.timeout` on top of whatever the platform does.
    async fn current_position(&self, options: PositionOptions) -> Result<Coordinate, PositionError>;
}

/// Provider that always reports a preset coordinate, permission granted.
/// Backs the CLI and tests, where no device GPS exists.
#[derive(Clone, Copy, Debug)]
pub struct FixedPosition {
    coordinate: Coordinate,
}

impl FixedPosition {
    pub fn new(coordinate: Coordinate) -> FixedPosition {
        FixedPosition { coordinate }
    }
}

impl LocationProvider for FixedPosition {
    async fn request_permission(&self) -> bool {
        true
    }

    async fn current_position(
        &self,
        _options: PositionOptions,
    ) -> Result<Coordinate, PositionError> {
        Ok(self.coordinate)
    }
}
