use std::time::Instant;

use anyhow::anyhow;
use chrono::{Local, NaiveDateTime};
use humantime::format_duration;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    dispatch::{assign_vehicles, compute_priorities, PrioritizedBin},
    integrations::{
        routing::RoutingClient,
        sms::{NotificationError, SmsClient},
    },
    model::{
        bin::{BinId, BinReading},
        vehicle::{Vehicle, VehicleId},
        worker::{WorkerId, WorkerMap},
    },
    telemetry::{BinSource, VehicleSource},
    MapType,
};

pub mod callback;

use callback::RefreshCallback;

/// Raw input to one refresh cycle, before scoring and assignment.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshSnapshot {
    pub bins: Vec<BinReading>,
    pub vehicles: Vec<Vehicle>,
    pub generated_at: NaiveDateTime,
}

/// Everything one refresh cycle produces. Discarded when the next cycle
/// starts, nothing carries over.
#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    pub bins: Vec<PrioritizedBin>,
    pub vehicles: Vec<Vehicle>,
    pub assignments: MapType<BinId, VehicleId>,
    pub routes: MapType<VehicleId, Vec<(f64, f64)>>,
    pub generated_at: NaiveDateTime,
}

pub struct Dashboard {
    bins: Box<dyn BinSource>,
    fleet: Box<dyn VehicleSource>,
    workers: WorkerMap,
    routing: Option<RoutingClient>,
    sms: Option<SmsClient>,
    callbacks: Vec<Box<dyn RefreshCallback>>,
}

impl Dashboard {
    pub fn new(
        bins: Box<dyn BinSource>,
        fleet: Box<dyn VehicleSource>,
        workers: WorkerMap,
        callbacks: Vec<Box<dyn RefreshCallback>>,
    ) -> Self {
        Self {
            bins,
            fleet,
            workers,
            routing: None,
            sms: None,
            callbacks,
        }
    }

    pub fn with_routing(mut self, routing: RoutingClient) -> Self {
        self.routing = Some(routing);
        self
    }

    pub fn with_sms(mut self, sms: SmsClient) -> Self {
        self.sms = Some(sms);
        self
    }

    /// Runs one full cycle: sample telemetry, score and order the bins,
    /// assign vehicles, then fetch a driving route per vehicle if a
    /// routing client is configured. Routing failures are per-vehicle
    /// and never abort the refresh.
    pub fn refresh(&mut self) -> anyhow::Result<RefreshOutcome> {
        let started = Instant::now();
        let snapshot = RefreshSnapshot {
            bins: self.bins.sample(),
            vehicles: self.fleet.sample(),
            generated_at: Local::now().naive_local(),
        };
        self.callbacks
            .iter_mut()
            .for_each(|cb| cb.visit_snapshot(&snapshot));

        let assignments = assign_vehicles(&snapshot.bins, &snapshot.vehicles)?;
        let ordered = compute_priorities(snapshot.bins);
        let routes = self.fetch_routes(&ordered, &snapshot.vehicles, &assignments);

        let outcome = RefreshOutcome {
            bins: ordered,
            vehicles: snapshot.vehicles,
            assignments,
            routes,
            generated_at: snapshot.generated_at,
        };
        self.callbacks
            .iter_mut()
            .for_each(|cb| cb.visit_outcome(&outcome));
        info!(
            bins = outcome.bins.len(),
            vehicles = outcome.vehicles.len(),
            "dashboard refreshed in {}",
            format_duration(started.elapsed())
        );
        Ok(outcome)
    }

    // stops are visited in priority order, the urgent bins first
    fn fetch_routes(
        &self,
        ordered: &[PrioritizedBin],
        vehicles: &[Vehicle],
        assignments: &MapType<BinId, VehicleId>,
    ) -> MapType<VehicleId, Vec<(f64, f64)>> {
        let mut routes = MapType::new();
        let Some(routing) = &self.routing else {
            return routes;
        };
        for vehicle in vehicles {
            let stops: Vec<(f64, f64)> = ordered
                .iter()
                .filter(|bin| assignments.get(&bin.reading.id) == Some(&vehicle.id))
                .map(|bin| bin.reading.position())
                .collect();
            if stops.is_empty() {
                continue;
            }
            match routing.directions(vehicle.position(), &stops) {
                Ok(path) => {
                    routes.insert(vehicle.id.clone(), path);
                }
                Err(err) => warn!(vehicle = %vehicle.id, "unable to fetch route: {err}"),
            }
        }
        routes
    }

    /// Delivers the task message for a bin to a field worker's phone.
    pub fn notify_worker(&self, worker_id: &WorkerId, bin_id: &BinId) -> anyhow::Result<()> {
        let worker = self
            .workers
            .get(worker_id)
            .ok_or_else(|| anyhow!("unknown worker {worker_id}"))?;
        let sms = self.sms.as_ref().ok_or(NotificationError::NotConfigured)?;
        let message = format!(
            "Bin {bin_id} has been assigned to you. Please collect the waste promptly."
        );
        sms.send(&worker.phone, &message)?;
        info!(worker = %worker_id, bin = %bin_id, "task assigned");
        Ok(())
    }

    pub fn workers(&self) -> &WorkerMap {
        &self.workers
    }
}
