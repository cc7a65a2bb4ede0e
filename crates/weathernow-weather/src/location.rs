use async_trait::async_trait;

use crate::error::LocationError;
use crate::types::Coordinates;

/// Where "use my location" gets its position from.
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// Location fixed in configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    enabled: bool,
    coordinates: Option<Coordinates>,
}

impl ConfiguredLocation {
    pub fn new(enabled: bool, coordinates: Option<Coordinates>) -> Self {
        Self {
            enabled,
            coordinates,
        }
    }
}

#[async_trait]
impl LocationSource for ConfiguredLocation {
    async fn current_location(&self) -> Result<Coordinates, LocationError> {
        if !self.enabled {
            return Err(LocationError::PermissionDenied);
        }
        self.coordinates.ok_or(LocationError::Unsupported)
    }
}
