use chrono::NaiveDateTime;
use diesel::SqliteConnection;
use thiserror::Error;

use crate::data::models::UserProfile;
use crate::data::repositories::ProfileRepository;
use crate::features::gamification::rules;

#[derive(Error, Debug)]
pub enum GamificationError {
    /// The caller must ensure the profile exists before applying an
    /// update.
    #[error("profile not found")]
    ProfileMissing,
    #[error("database error")]
    DatabaseError(#[from] diesel::result::Error),
}

pub struct GamificationEngine;

impl GamificationEngine {
    /// Applies one qualifying study action to the user's profile and
    /// returns the refreshed row.
    pub fn apply_study_completion(
        conn: &mut SqliteConnection,
        user_id: i32,
        now: NaiveDateTime,
    ) -> Result<UserProfile, GamificationError> {
        let profile =
            ProfileRepository::find(conn, user_id)?.ok_or(GamificationError::ProfileMissing)?;

        let outcome = rules::study_completion(&profile, now);
        ProfileRepository::apply_completion(conn, user_id, &outcome)?;

        ProfileRepository::find(conn, user_id)?.ok_or(GamificationError::ProfileMissing)
    }

    /// Raises `max_weekly_points` when the current week has passed it.
    /// Only as fresh as its call sites: it is not run on every action.
    pub fn check_and_update_weekly_points_record(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<(), GamificationError> {
        let profile =
            ProfileRepository::find(conn, user_id)?.ok_or(GamificationError::ProfileMissing)?;

        if profile.weekly_points > profile.max_weekly_points {
            ProfileRepository::raise_weekly_record(conn, user_id, profile.weekly_points)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use diesel::connection::SimpleConnection;
    use diesel::prelude::*;

    fn test_conn() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").unwrap();
        conn.batch_execute(include_str!(
            "../../../migrations/2025-06-20-000000_create_core_tables/up.sql"
        ))
        .unwrap();
        conn
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn missing_profile_is_an_error() {
        let mut conn = test_conn();
        let result = GamificationEngine::apply_study_completion(&mut conn, 1, at(2025, 1, 1, 9));
        assert!(matches!(result, Err(GamificationError::ProfileMissing)));
    }

    #[test]
    fn completion_persists_all_fields_in_one_row() {
        let mut conn = test_conn();
        ProfileRepository::ensure_exists(&mut conn, 1).unwrap();

        let updated =
            GamificationEngine::apply_study_completion(&mut conn, 1, at(2025, 1, 1, 9)).unwrap();

        assert_eq!(updated.points, 10);
        assert_eq!(updated.weekly_points, 10);
        assert_eq!(updated.current_streak, 1);
        assert_eq!(updated.max_streak, 1);
        assert_eq!(updated.last_study_date, Some(at(2025, 1, 1, 0)));
    }

    #[test]
    fn ensure_exists_is_idempotent() {
        let mut conn = test_conn();
        ProfileRepository::ensure_exists(&mut conn, 1).unwrap();
        GamificationEngine::apply_study_completion(&mut conn, 1, at(2025, 1, 1, 9)).unwrap();

        // A second ensure must not reset the earned state.
        ProfileRepository::ensure_exists(&mut conn, 1).unwrap();
        let profile = ProfileRepository::find(&mut conn, 1).unwrap().unwrap();
        assert_eq!(profile.points, 10);
    }

    #[test]
    fn weekly_record_updates_only_when_invoked_and_exceeded() {
        let mut conn = test_conn();
        ProfileRepository::ensure_exists(&mut conn, 1).unwrap();
        GamificationEngine::apply_study_completion(&mut conn, 1, at(2025, 1, 1, 9)).unwrap();

        // Not yet checked: record still at its default.
        let before = ProfileRepository::find(&mut conn, 1).unwrap().unwrap();
        assert_eq!(before.max_weekly_points, 0);

        GamificationEngine::check_and_update_weekly_points_record(&mut conn, 1).unwrap();
        let after = ProfileRepository::find(&mut conn, 1).unwrap().unwrap();
        assert_eq!(after.max_weekly_points, 10);

        // A lower current week never lowers the record.
        diesel::update(crate::schema::user_profiles::table.find(1))
            .set(crate::schema::user_profiles::weekly_points.eq(3))
            .execute(&mut conn)
            .unwrap();
        GamificationEngine::check_and_update_weekly_points_record(&mut conn, 1).unwrap();
        let unchanged = ProfileRepository::find(&mut conn, 1).unwrap().unwrap();
        assert_eq!(unchanged.max_weekly_points, 10);
    }
}
