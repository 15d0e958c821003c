pub mod engine;
pub mod ladder;

pub use engine::{SchedulerError, SrsEngine};
