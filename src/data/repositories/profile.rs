use diesel::prelude::*;

use crate::data::models::UserProfile;
use crate::features::gamification::rules::CompletionOutcome;
use crate::schema::user_profiles;

pub struct ProfileRepository;

impl ProfileRepository {
    /// Idempotent lazy creation: a no-op when the row already exists.
    pub fn ensure_exists(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<(), diesel::result::Error> {
        diesel::insert_into(user_profiles::table)
            .values(user_profiles::id.eq(user_id))
            .on_conflict(user_profiles::id)
            .do_nothing()
            .execute(conn)?;
        Ok(())
    }

    pub fn find(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<UserProfile>, diesel::result::Error> {
        user_profiles::table
            .find(user_id)
            .first::<UserProfile>(conn)
            .optional()
    }

    /// Writes the full gamification outcome in one update.
    pub fn apply_completion(
        conn: &mut SqliteConnection,
        user_id: i32,
        outcome: &CompletionOutcome,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(user_profiles::table.find(user_id))
            .set((
                user_profiles::points.eq(outcome.points),
                user_profiles::weekly_points.eq(outcome.weekly_points),
                user_profiles::current_streak.eq(outcome.current_streak),
                user_profiles::max_streak.eq(outcome.max_streak),
                user_profiles::last_study_date.eq(Some(outcome.last_study_date)),
            ))
            .execute(conn)
    }

    pub fn raise_weekly_record(
        conn: &mut SqliteConnection,
        user_id: i32,
        value: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(user_profiles::table.find(user_id))
            .set(user_profiles::max_weekly_points.eq(value))
            .execute(conn)
    }

    pub fn update_avatar(
        conn: &mut SqliteConnection,
        user_id: i32,
        avatar: &str,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(user_profiles::table.find(user_id))
            .set(user_profiles::selected_avatar.eq(avatar))
            .execute(conn)
    }

    pub fn update_display_name(
        conn: &mut SqliteConnection,
        user_id: i32,
        name: &str,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(user_profiles::table.find(user_id))
            .set(user_profiles::display_name.eq(name))
            .execute(conn)
    }

    pub fn display_name_taken(
        conn: &mut SqliteConnection,
        name: &str,
        excluding_user: i32,
    ) -> Result<bool, diesel::result::Error> {
        use diesel::dsl::exists;
        use diesel::select;

        select(exists(
            user_profiles::table
                .filter(user_profiles::display_name.eq(name))
                .filter(user_profiles::id.ne(excluding_user)),
        ))
        .get_result(conn)
    }

    /// Profiles for the given users ordered by weekly points, best first.
    pub fn weekly_ranking(
        conn: &mut SqliteConnection,
        user_ids: Vec<i32>,
    ) -> Result<Vec<UserProfile>, diesel::result::Error> {
        user_profiles::table
            .filter(user_profiles::id.eq_any(user_ids))
            .order_by(user_profiles::weekly_points.desc())
            .load::<UserProfile>(conn)
    }

    pub fn for_users(
        conn: &mut SqliteConnection,
        user_ids: Vec<i32>,
    ) -> Result<Vec<UserProfile>, diesel::result::Error> {
        user_profiles::table
            .filter(user_profiles::id.eq_any(user_ids))
            .load::<UserProfile>(conn)
    }
}
