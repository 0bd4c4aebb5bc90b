pub mod assign;
pub mod priority;

pub use assign::{assign_vehicles, AssignError};
pub use priority::{compute_priorities, priority, PrioritizedBin};
