use std::{
    fmt::{Debug, Display},
    path::Path,
};

use serde::Deserialize;

use crate::define_map;

use super::read_csv;

#[derive(Clone, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkerId(pub i32);

impl Debug for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&self.0, f)
    }
}

impl Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Worker {
    pub worker_id: WorkerId,
    pub name: String,
    pub zone: String,
    // E.164, passed straight to the SMS collaborator
    pub phone: String,
}

impl Worker {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<WorkerMap> {
        Ok(read_csv::<Worker>(path)?
            .into_iter()
            .map(|w| (w.worker_id.clone(), w))
            .collect::<crate::MapType<_, _>>()
            .into())
    }

    pub fn load_std() -> anyhow::Result<WorkerMap> {
        Self::load("data/workers.csv")
    }
}

#[test]
fn test_read_worker_roster() {
    let workers = Worker::load_std().unwrap();
    assert!(!workers.is_empty());
    assert!(workers.values().all(|w| w.phone.starts_with('+')));
}

define_map!(WorkerId, Worker, WorkerMap);
