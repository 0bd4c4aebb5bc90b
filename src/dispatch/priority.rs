use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::model::bin::BinReading;

/// Composite urgency score for a single reading, higher = collect sooner.
///
/// Weighted linear combination: a tipped-over bin dominates everything
/// else, fill level is the next most significant term, temperature and
/// humidity are minor modifiers. Pure function of the reading.
pub fn priority(reading: &BinReading) -> f64 {
    (reading.fill_level / 100.0) * 2.0
        + if reading.tilted { 3.0 } else { 0.0 }
        + reading.temperature / 50.0
        + reading.humidity / 100.0
}

#[derive(Debug, Clone, Serialize)]
pub struct PrioritizedBin {
    #[serde(flatten)]
    pub reading: BinReading,
    pub priority: f64,
}

/// Scores every reading and orders the snapshot by descending urgency.
/// The sort is stable, so readings with equal scores keep their input
/// order (downstream display order depends on this).
pub fn compute_priorities(readings: Vec<BinReading>) -> Vec<PrioritizedBin> {
    let mut bins: Vec<PrioritizedBin> = readings
        .into_iter()
        .map(|reading| {
            let priority = priority(&reading);
            PrioritizedBin { reading, priority }
        })
        .collect();
    bins.sort_by_key(|bin| Reverse(OrderedFloat(bin.priority)));
    bins
}
