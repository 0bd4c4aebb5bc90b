pub mod synthetic;

use crate::model::{bin::BinReading, vehicle::Vehicle};

/// Supplies one bin-telemetry snapshot per refresh cycle. Production
/// would back this with a real ingestion feed; here it is a random
/// generator, and tests use [`FixedBins`] with literal readings.
pub trait BinSource {
    fn sample(&mut self) -> Vec<BinReading>;
}

/// Supplies one vehicle-location snapshot per refresh cycle.
pub trait VehicleSource {
    fn sample(&mut self) -> Vec<Vehicle>;
}

pub struct FixedBins(pub Vec<BinReading>);

impl BinSource for FixedBins {
    fn sample(&mut self) -> Vec<BinReading> {
        self.0.clone()
    }
}

pub struct FixedFleet(pub Vec<Vehicle>);

impl VehicleSource for FixedFleet {
    fn sample(&mut self) -> Vec<Vehicle> {
        self.0.clone()
    }
}
