use anyhow::Context as _;
use rand::{rngs::SmallRng, SeedableRng};
use smartbin_rust::{
    callbacks::log_refresh::LogRefreshCallback,
    dashboard::Dashboard,
    integrations::{routing::RoutingClient, sms::SmsClient},
    model::worker::Worker,
    telemetry::synthetic::{SyntheticBins, SyntheticFleet},
};
use tracing::warn;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let mut rng = SmallRng::seed_from_u64(727);
    let workers = Worker::load_std().context("unable to load worker roster")?;
    let mut dashboard = Dashboard::new(
        Box::new(SyntheticBins::new(SmallRng::from_rng(&mut rng))),
        Box::new(SyntheticFleet::new(SmallRng::from_rng(&mut rng))),
        workers,
        vec![Box::new(LogRefreshCallback::new("refresh".to_string()))],
    );
    if let Some(routing) = RoutingClient::from_env() {
        dashboard = dashboard.with_routing(routing);
    }
    let mut sms_enabled = false;
    match SmsClient::from_env() {
        Ok(sms) => {
            dashboard = dashboard.with_sms(sms);
            sms_enabled = true;
        }
        Err(err) => warn!("notifications disabled: {err}"),
    }

    let outcome = dashboard.refresh().context("refresh failed")?;

    // ping the first rostered worker about the most urgent bin
    if sms_enabled {
        if let (Some(top), Some(worker_id)) = (
            outcome.bins.first(),
            dashboard.workers().keys().next().cloned(),
        ) {
            if let Err(err) = dashboard.notify_worker(&worker_id, &top.reading.id) {
                warn!("unable to notify worker: {err}");
            }
        }
    }

    println!(
        "{:<8} {:>9} {:>10} {:>8} {:>5} {:>9}  {}",
        "Bin", "Fill (%)", "Temp (C)", "Hum (%)", "Tilt", "Priority", "Assigned"
    );
    for bin in &outcome.bins {
        let assigned = outcome
            .assignments
            .get(&bin.reading.id)
            .map(|v| v.to_string())
            .unwrap_or_default();
        println!(
            "{:<8} {:>9.2} {:>10.2} {:>8.2} {:>5} {:>9.2}  {}",
            bin.reading.id.to_string(),
            bin.reading.fill_level,
            bin.reading.temperature,
            bin.reading.humidity,
            if bin.reading.tilted { 1 } else { 0 },
            bin.priority,
            assigned
        );
    }
    Ok(())
}
