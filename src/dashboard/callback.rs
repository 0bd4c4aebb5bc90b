use dyn_clone::DynClone;

use super::{RefreshOutcome, RefreshSnapshot};

pub trait RefreshCallback: DynClone {
    fn visit_snapshot(&mut self, _snapshot: &RefreshSnapshot) {}
    fn visit_outcome(&mut self, _outcome: &RefreshOutcome) {}
}

dyn_clone::clone_trait_object!(RefreshCallback);
