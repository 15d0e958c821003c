use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{Difficulty, NewReview, Review, ReviewStatus};
use crate::schema::reviews;

pub struct ReviewRepository;

impl ReviewRepository {
    pub fn insert(
        conn: &mut SqliteConnection,
        new_review: &NewReview,
    ) -> Result<Review, diesel::result::Error> {
        diesel::insert_into(reviews::table)
            .values(new_review)
            .execute(conn)?;

        let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
            .get_result::<i32>(conn)?;

        reviews::table.find(id).first::<Review>(conn)
    }

    pub fn find_owned(
        conn: &mut SqliteConnection,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Review>, diesel::result::Error> {
        reviews::table
            .find(id)
            .filter(reviews::user_id.eq(user_id))
            .first::<Review>(conn)
            .optional()
    }

    /// Pending reviews due at or before `now`, soonest first.
    pub fn due_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
        now: NaiveDateTime,
    ) -> Result<Vec<Review>, diesel::result::Error> {
        reviews::table
            .filter(reviews::user_id.eq(user_id))
            .filter(reviews::status.eq(ReviewStatus::Pending.as_str()))
            .filter(reviews::review_date.le(now))
            .order_by(reviews::review_date.asc())
            .load::<Review>(conn)
    }

    /// The single pending -> completed transition, recording the
    /// difficulty the user reported.
    pub fn mark_completed(
        conn: &mut SqliteConnection,
        id: i32,
        difficulty: Difficulty,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(reviews::table.find(id))
            .set((
                reviews::status.eq(ReviewStatus::Completed.as_str()),
                reviews::last_review_difficulty.eq(difficulty.as_str()),
            ))
            .execute(conn)
    }
}
