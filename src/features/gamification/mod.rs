pub mod engine;
pub mod rules;

pub use engine::{GamificationEngine, GamificationError};
pub use rules::{display_streak, study_completion, CompletionOutcome, POINTS_PER_ACTION};
