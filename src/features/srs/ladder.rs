use crate::data::models::Difficulty;

/// The fixed review ladder. Rung 0 is the first review after a study
/// session; a step past the last rung ends the cycle for that session.
pub const INTERVAL_LADDER: [&str; 4] = ["1d", "7d", "30d", "90d"];

pub fn first_rung() -> &'static str {
    INTERVAL_LADDER[0]
}

pub fn rung_index(token: &str) -> Option<usize> {
    INTERVAL_LADDER.iter().position(|t| *t == token)
}

/// Days encoded in a rung token ("30d" -> 30).
pub fn days(token: &str) -> Option<i64> {
    token.strip_suffix('d')?.parse().ok()
}

/// Next rung index after a review: easy advances, medium repeats, hard
/// retreats with a floor at rung 0. `None` means the ladder is
/// exhausted and no further review is scheduled.
pub fn shifted(index: usize, difficulty: Difficulty) -> Option<usize> {
    let next = match difficulty {
        Difficulty::Easy => index + 1,
        Difficulty::Medium => index,
        Difficulty::Hard => index.saturating_sub(1),
    };
    (next < INTERVAL_LADDER.len()).then_some(next)
}
