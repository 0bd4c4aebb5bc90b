use thiserror::Error;
use tracing::debug;

use crate::{
    model::{
        bin::{BinId, BinReading},
        vehicle::{Vehicle, VehicleId},
    },
    MapType,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("no vehicles available to service {bins} bin(s)")]
    NoVehiclesAvailable { bins: usize },
}

// straight-line on raw lat/lon, not geodesic
fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// Greedy per-bin assignment to the geometrically nearest vehicle.
///
/// No capacity limits and no routing order: one vehicle may receive any
/// number of bins. Exact distance ties favor the vehicle earliest in the
/// input slice (strict `<` never replaces an equal minimum).
pub fn assign_vehicles(
    bins: &[BinReading],
    vehicles: &[Vehicle],
) -> Result<MapType<BinId, VehicleId>, AssignError> {
    if bins.is_empty() {
        return Ok(MapType::new());
    }
    if vehicles.is_empty() {
        return Err(AssignError::NoVehiclesAvailable { bins: bins.len() });
    }

    let mut assignments = MapType::new();
    for bin in bins {
        let mut nearest = &vehicles[0];
        let mut nearest_distance = euclidean(bin.position(), nearest.position());
        for vehicle in &vehicles[1..] {
            let distance = euclidean(bin.position(), vehicle.position());
            if distance < nearest_distance {
                nearest = vehicle;
                nearest_distance = distance;
            }
        }
        debug!(bin = %bin.id, vehicle = %nearest.id, distance = nearest_distance, "assigned bin");
        assignments.insert(bin.id.clone(), nearest.id.clone());
    }
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn bin(id: &str, lat: f64, lon: f64) -> BinReading {
        BinReading {
            id: BinId(id.to_string()),
            latitude: lat,
            longitude: lon,
            fill_level: 50.0,
            temperature: 25.0,
            humidity: 40.0,
            tilted: false,
            recorded_at: NaiveDateTime::default(),
        }
    }

    fn vehicle(id: &str, lat: f64, lon: f64) -> Vehicle {
        Vehicle {
            id: VehicleId(id.to_string()),
            latitude: lat,
            longitude: lon,
        }
    }

    #[test]
    fn colocated_vehicle_wins() {
        let bins = [bin("B1", 28.60, 77.10)];
        let vehicles = [vehicle("V1", 28.60, 77.10), vehicle("V2", 29.0, 78.0)];
        let assignments = assign_vehicles(&bins, &vehicles).unwrap();
        assert_eq!(
            assignments.get(&BinId("B1".to_string())),
            Some(&VehicleId("V1".to_string()))
        );
    }

    #[test]
    fn single_vehicle_receives_every_bin() {
        let bins = [
            bin("B1", 28.5, 77.0),
            bin("B2", 28.6, 77.2),
            bin("B3", 28.9, 77.5),
        ];
        let vehicles = [vehicle("V1", 28.7, 77.3)];
        let assignments = assign_vehicles(&bins, &vehicles).unwrap();
        assert_eq!(assignments.len(), 3);
        assert!(assignments
            .values()
            .all(|v| v == &VehicleId("V1".to_string())));
    }

    #[test]
    fn empty_fleet_is_an_error() {
        let bins = [bin("B1", 28.6, 77.1)];
        assert_eq!(
            assign_vehicles(&bins, &[]),
            Err(AssignError::NoVehiclesAvailable { bins: 1 })
        );
    }

    #[test]
    fn no_bins_means_nothing_to_assign() {
        assert!(assign_vehicles(&[], &[]).unwrap().is_empty());
        assert!(assign_vehicles(&[], &[vehicle("V1", 28.7, 77.3)])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn exact_ties_favor_the_lower_vehicle_index() {
        let bins = [bin("B1", 28.5, 77.25)];
        // V1 and V2 mirror the bin at exactly representable offsets, so
        // their distances are bit-for-bit equal
        let vehicles = [
            vehicle("V1", 28.75, 77.25),
            vehicle("V2", 28.25, 77.25),
            vehicle("V3", 29.0, 78.0),
        ];
        let assignments = assign_vehicles(&bins, &vehicles).unwrap();
        assert_eq!(
            assignments.get(&BinId("B1".to_string())),
            Some(&VehicleId("V1".to_string()))
        );
    }

    #[test]
    fn assignment_is_deterministic() {
        let bins = [
            bin("B1", 28.52, 77.04),
            bin("B2", 28.63, 77.21),
            bin("B3", 28.88, 77.47),
        ];
        let vehicles = [
            vehicle("V1", 28.55, 77.10),
            vehicle("V2", 28.70, 77.30),
            vehicle("V3", 28.85, 77.45),
        ];
        let first = assign_vehicles(&bins, &vehicles).unwrap();
        let second = assign_vehicles(&bins, &vehicles).unwrap();
        assert_eq!(first, second);
    }
}
