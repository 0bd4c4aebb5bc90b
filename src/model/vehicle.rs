use std::fmt::{Debug, Display};

use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct VehicleId(pub String);

impl Debug for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl Display for VehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Last known position of a collection vehicle, resampled each cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub latitude: f64,
    pub longitude: f64,
}

impl Vehicle {
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
