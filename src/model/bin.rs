use std::fmt::{Debug, Display};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BinId(pub String);

impl Debug for BinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl Display for BinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One sensor snapshot for a single bin. Regenerated from scratch on
/// every refresh cycle, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinReading {
    pub id: BinId,
    pub latitude: f64,
    pub longitude: f64,
    // percentage, 0..=100
    pub fill_level: f64,
    // ambient degrees Celsius
    pub temperature: f64,
    // percentage, 0..=100
    pub humidity: f64,
    pub tilted: bool,
    pub recorded_at: NaiveDateTime,
}

impl BinReading {
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
