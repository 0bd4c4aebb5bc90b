use chrono::Local;
use rand::{rngs::SmallRng, Rng};

use crate::model::{
    bin::{BinId, BinReading},
    vehicle::{Vehicle, VehicleId},
};

use super::{BinSource, VehicleSource};

// service-area bounding box (Delhi MCD pilot zone)
pub const LAT_RANGE: std::ops::Range<f64> = 28.5..28.9;
pub const LON_RANGE: std::ops::Range<f64> = 77.0..77.5;

pub const DEFAULT_BIN_COUNT: usize = 10;
pub const DEFAULT_FLEET_SIZE: usize = 4;

/// Random stand-in for a live sensor feed. Every sample is a fresh
/// snapshot, there is no continuity between cycles.
pub struct SyntheticBins<RNG = SmallRng> {
    rng: RNG,
    count: usize,
}

impl<RNG: Rng> SyntheticBins<RNG> {
    pub fn new(rng: RNG) -> Self {
        Self::with_count(rng, DEFAULT_BIN_COUNT)
    }

    pub fn with_count(rng: RNG, count: usize) -> Self {
        Self { rng, count }
    }
}

impl<RNG: Rng> BinSource for SyntheticBins<RNG> {
    fn sample(&mut self) -> Vec<BinReading> {
        let recorded_at = Local::now().naive_local();
        (0..self.count)
            .map(|i| BinReading {
                id: BinId(format!("Bin-{}", i + 1)),
                latitude: self.rng.random_range(LAT_RANGE),
                longitude: self.rng.random_range(LON_RANGE),
                fill_level: self.rng.random_range(20..=100) as f64,
                temperature: self.rng.random_range(20.0..40.0),
                humidity: self.rng.random_range(30.0..80.0),
                tilted: self.rng.random_bool(0.5),
                recorded_at,
            })
            .collect()
    }
}

pub struct SyntheticFleet<RNG = SmallRng> {
    rng: RNG,
    count: usize,
}

impl<RNG: Rng> SyntheticFleet<RNG> {
    pub fn new(rng: RNG) -> Self {
        Self::with_count(rng, DEFAULT_FLEET_SIZE)
    }

    pub fn with_count(rng: RNG, count: usize) -> Self {
        Self { rng, count }
    }
}

impl<RNG: Rng> VehicleSource for SyntheticFleet<RNG> {
    fn sample(&mut self) -> Vec<Vehicle> {
        (0..self.count)
            .map(|i| Vehicle {
                id: VehicleId(format!("Van-{}", i + 1)),
                latitude: self.rng.random_range(LAT_RANGE),
                longitude: self.rng.random_range(LON_RANGE),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;

    use super::*;

    #[test]
    fn bin_snapshot_respects_sensor_ranges() {
        let mut source = SyntheticBins::new(SmallRng::seed_from_u64(727));
        let snapshot = source.sample();
        assert_eq!(snapshot.len(), DEFAULT_BIN_COUNT);
        for reading in &snapshot {
            assert!(LAT_RANGE.contains(&reading.latitude));
            assert!(LON_RANGE.contains(&reading.longitude));
            assert!((20.0..=100.0).contains(&reading.fill_level));
            assert!((20.0..40.0).contains(&reading.temperature));
            assert!((30.0..80.0).contains(&reading.humidity));
        }
    }

    #[test]
    fn bin_ids_are_unique_within_a_snapshot() {
        let mut source = SyntheticBins::new(SmallRng::seed_from_u64(727));
        let snapshot = source.sample();
        let ids: HashSet<_> = snapshot.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), snapshot.len());
    }

    #[test]
    fn fleet_snapshot_has_the_requested_size() {
        let mut source = SyntheticFleet::with_count(SmallRng::seed_from_u64(727), 7);
        assert_eq!(source.sample().len(), 7);
    }
}
