use chrono::{NaiveDate, NaiveDateTime};

use crate::data::models::UserProfile;
use crate::utils::dates::{day_gap, start_of_day};

/// Points granted per qualifying study action (finishing a session or
/// completing a review).
pub const POINTS_PER_ACTION: i32 = 10;

/// The profile fields a qualifying action rewrites, persisted in one
/// update.
#[derive(Debug, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub points: i32,
    pub weekly_points: i32,
    pub current_streak: i32,
    pub max_streak: i32,
    pub last_study_date: NaiveDateTime,
}

/// Streak and points transition for one qualifying action. Date
/// comparisons are calendar-day granular: several actions on the same
/// day earn points but never inflate the streak. `last_study_date` is
/// always stored truncated to start of day.
pub fn study_completion(profile: &UserProfile, now: NaiveDateTime) -> CompletionOutcome {
    let today = now.date();
    let current_streak = match profile.last_study_date {
        None => 1,
        Some(last) => match day_gap(last.date(), today) {
            0 => profile.current_streak,
            1 => profile.current_streak + 1,
            // Gap of 2+ days: this action is day one of a new streak.
            _ => 1,
        },
    };

    CompletionOutcome {
        points: profile.points + POINTS_PER_ACTION,
        weekly_points: profile.weekly_points + POINTS_PER_ACTION,
        current_streak,
        max_streak: profile.max_streak.max(current_streak),
        last_study_date: start_of_day(now),
    }
}

/// Read-only streak for rendering: hides a streak already broken by a
/// missed day without writing anything. May disagree with the stored
/// `current_streak` until the next qualifying action recomputes it.
pub fn display_streak(
    last_study_date: Option<NaiveDateTime>,
    stored_streak: i32,
    today: NaiveDate,
) -> i32 {
    match last_study_date {
        None => 0,
        Some(last) if day_gap(last.date(), today) <= 1 => stored_streak,
        Some(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn profile(
        points: i32,
        weekly: i32,
        streak: i32,
        max_streak: i32,
        last: Option<NaiveDateTime>,
    ) -> UserProfile {
        UserProfile {
            id: 1,
            points,
            current_streak: streak,
            last_study_date: last,
            weekly_points: weekly,
            max_streak,
            max_weekly_points: 0,
            selected_avatar: "owl".to_string(),
            display_name: None,
        }
    }

    #[test]
    fn first_action_ever_starts_streak_at_one() {
        // Stored streak is ignored when there is no last study date.
        let p = profile(0, 0, 7, 7, None);
        let out = study_completion(&p, at(2025, 1, 10, 9));

        assert_eq!(out.current_streak, 1);
        assert_eq!(out.points, POINTS_PER_ACTION);
        assert_eq!(out.weekly_points, POINTS_PER_ACTION);
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let p = profile(50, 20, 3, 5, Some(at(2025, 1, 9, 22)));
        let out = study_completion(&p, at(2025, 1, 10, 7));

        assert_eq!(out.current_streak, 4);
        assert_eq!(out.max_streak, 5);
    }

    #[test]
    fn same_day_keeps_streak_but_adds_points() {
        let p = profile(50, 20, 3, 5, Some(at(2025, 1, 10, 8)));
        let first = study_completion(&p, at(2025, 1, 10, 12));
        assert_eq!(first.current_streak, 3);
        assert_eq!(first.points, 60);
        assert_eq!(first.weekly_points, 30);

        let p2 = profile(
            first.points,
            first.weekly_points,
            first.current_streak,
            first.max_streak,
            Some(first.last_study_date),
        );
        let second = study_completion(&p2, at(2025, 1, 10, 18));
        assert_eq!(second.current_streak, 3);
        assert_eq!(second.points, 70);
        assert_eq!(second.weekly_points, 40);
    }

    #[test]
    fn missed_day_resets_streak_to_one() {
        let p = profile(50, 20, 9, 9, Some(at(2025, 1, 7, 10)));
        let out = study_completion(&p, at(2025, 1, 10, 10));

        assert_eq!(out.current_streak, 1);
        // The old peak survives the reset.
        assert_eq!(out.max_streak, 9);
    }

    #[test]
    fn max_streak_rises_with_a_new_peak() {
        let p = profile(0, 0, 5, 5, Some(at(2025, 1, 9, 10)));
        let out = study_completion(&p, at(2025, 1, 10, 10));

        assert_eq!(out.current_streak, 6);
        assert_eq!(out.max_streak, 6);
    }

    #[test]
    fn max_streak_never_decreases_over_a_sequence() {
        let mut p = profile(0, 0, 0, 0, None);
        let days = [
            at(2025, 1, 1, 9),
            at(2025, 1, 2, 9),
            at(2025, 1, 3, 9),
            at(2025, 1, 7, 9), // gap, streak resets
            at(2025, 1, 8, 9),
        ];

        let mut previous_max = 0;
        for now in days {
            let out = study_completion(&p, now);
            assert!(out.max_streak >= previous_max);
            previous_max = out.max_streak;
            p = profile(
                out.points,
                out.weekly_points,
                out.current_streak,
                out.max_streak,
                Some(out.last_study_date),
            );
        }
        assert_eq!(p.max_streak, 3);
        assert_eq!(p.current_streak, 2);
    }

    #[test]
    fn last_study_date_is_stored_at_start_of_day() {
        let p = profile(0, 0, 0, 0, None);
        let out = study_completion(&p, at(2025, 1, 10, 23));
        assert_eq!(out.last_study_date, at(2025, 1, 10, 0));
    }

    #[test]
    fn day_boundary_just_before_midnight_still_counts_as_yesterday() {
        let p = profile(0, 0, 2, 2, Some(at(2025, 1, 9, 23)));
        let out = study_completion(&p, at(2025, 1, 10, 0));
        assert_eq!(out.current_streak, 3);
    }

    #[test]
    fn display_streak_is_zero_without_history() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(display_streak(None, 5, today), 0);
    }

    #[test]
    fn display_streak_shows_stored_value_through_yesterday() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(display_streak(Some(at(2025, 1, 10, 8)), 5, today), 5);
        assert_eq!(display_streak(Some(at(2025, 1, 9, 8)), 5, today), 5);
    }

    #[test]
    fn display_streak_hides_a_broken_streak() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(display_streak(Some(at(2025, 1, 8, 8)), 5, today), 0);
    }
}
