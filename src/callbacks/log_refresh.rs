use std::path::PathBuf;

use crate::{
    callbacks::dump_json,
    dashboard::{callback::RefreshCallback, RefreshOutcome, RefreshSnapshot},
};

/// Dumps the raw snapshot and the computed outcome of every refresh as
/// pretty JSON under `logs/<name>/<iteration>/`.
pub struct LogRefreshCallback {
    name: String,
    iteration: usize,
}

impl LogRefreshCallback {
    pub fn new(name: String) -> Self {
        Self { name, iteration: 0 }
    }

    pub fn get_file(&self, filename: &str) -> PathBuf {
        let mut dir = PathBuf::new();
        dir.push("logs");
        dir.push(&self.name);
        dir.push(format!("{}", self.iteration));
        dir.push(filename);
        dir
    }
}

impl Clone for LogRefreshCallback {
    fn clone(&self) -> Self {
        Self {
            name: format!("{}_cloned", self.name),
            iteration: self.iteration,
        }
    }
}

impl RefreshCallback for LogRefreshCallback {
    fn visit_snapshot(&mut self, snapshot: &RefreshSnapshot) {
        if let Err(err) = dump_json(self.get_file("snapshot.json"), snapshot) {
            eprintln!("Failed to write snapshot JSON file: {}", err);
        }
    }

    fn visit_outcome(&mut self, outcome: &RefreshOutcome) {
        if let Err(err) = dump_json(self.get_file("outcome.json"), outcome) {
            eprintln!("Failed to write outcome JSON file: {}", err);
        }
        self.iteration += 1
    }
}
