use chrono::{Duration, NaiveDateTime};
use diesel::SqliteConnection;
use thiserror::Error;

use crate::data::models::{Difficulty, NewReview, Review, ReviewStatus};
use crate::data::repositories::ReviewRepository;
use crate::features::srs::ladder;

#[derive(Error, Debug)]
pub enum SchedulerError {
    /// The stored interval is not on the ladder. A data-integrity
    /// failure, not a user mistake; nothing is persisted.
    #[error("unknown review interval: {0}")]
    UnknownInterval(String),
    #[error("database error")]
    DatabaseError(#[from] diesel::result::Error),
}

/// Decides the next review's interval and due date and persists the
/// resulting record. Marking the previous review completed is the
/// caller's step, done before this engine runs.
pub struct SrsEngine<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> SrsEngine<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        SrsEngine { conn }
    }

    /// First review after a study session: ladder rung 0.
    pub fn schedule_first(
        &mut self,
        user_id: i32,
        session_id: i32,
        subject_id: i32,
        now: NaiveDateTime,
    ) -> Result<Review, SchedulerError> {
        let token = ladder::first_rung();
        self.insert_pending(user_id, session_id, subject_id, token, now)
    }

    /// Next review after completing `previous` with the reported
    /// difficulty. Returns `Ok(None)` when easy advanced past the last
    /// rung: the cycle ends with zero side effects.
    pub fn schedule_next(
        &mut self,
        previous: &Review,
        difficulty: Difficulty,
        now: NaiveDateTime,
    ) -> Result<Option<Review>, SchedulerError> {
        let index = ladder::rung_index(&previous.review_interval)
            .ok_or_else(|| SchedulerError::UnknownInterval(previous.review_interval.clone()))?;

        let Some(next_index) = ladder::shifted(index, difficulty) else {
            return Ok(None);
        };

        let token = ladder::INTERVAL_LADDER[next_index];
        let review = self.insert_pending(
            previous.user_id,
            previous.session_id,
            previous.subject_id,
            token,
            now,
        )?;
        Ok(Some(review))
    }

    fn insert_pending(
        &mut self,
        user_id: i32,
        session_id: i32,
        subject_id: i32,
        token: &str,
        now: NaiveDateTime,
    ) -> Result<Review, SchedulerError> {
        let days = ladder::days(token)
            .ok_or_else(|| SchedulerError::UnknownInterval(token.to_string()))?;

        let review = ReviewRepository::insert(
            self.conn,
            &NewReview {
                user_id,
                session_id,
                subject_id,
                review_date: now + Duration::days(days),
                status: ReviewStatus::Pending.as_str(),
                review_interval: token,
            },
        )?;
        Ok(review)
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

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn seeded_review(conn: &mut SqliteConnection, interval: &str) -> Review {
        ReviewRepository::insert(
            conn,
            &NewReview {
                user_id: 1,
                session_id: 1,
                subject_id: 1,
                review_date: at(2025, 1, 1),
                status: ReviewStatus::Pending.as_str(),
                review_interval: interval,
            },
        )
        .unwrap()
    }

    fn review_count(conn: &mut SqliteConnection) -> i64 {
        use crate::schema::reviews;
        reviews::table.count().get_result(conn).unwrap()
    }

    #[test]
    fn first_review_lands_on_rung_zero() {
        let mut conn = test_conn();
        let review = SrsEngine::new(&mut conn)
            .schedule_first(1, 1, 1, at(2025, 1, 1))
            .unwrap();

        assert_eq!(review.review_interval, "1d");
        assert_eq!(review.review_date, at(2025, 1, 2));
        assert_eq!(review.status, "pending");
    }

    #[test]
    fn easy_advances_one_rung() {
        let mut conn = test_conn();
        let previous = seeded_review(&mut conn, "7d");

        let next = SrsEngine::new(&mut conn)
            .schedule_next(&previous, Difficulty::Easy, at(2025, 1, 1))
            .unwrap()
            .unwrap();

        assert_eq!(next.review_interval, "30d");
        assert_eq!(next.review_date, at(2025, 1, 31));
        assert_eq!(next.user_id, previous.user_id);
        assert_eq!(next.session_id, previous.session_id);
        assert_eq!(next.subject_id, previous.subject_id);
    }

    #[test]
    fn medium_repeats_the_interval() {
        let mut conn = test_conn();
        let previous = seeded_review(&mut conn, "30d");

        let next = SrsEngine::new(&mut conn)
            .schedule_next(&previous, Difficulty::Medium, at(2025, 1, 1))
            .unwrap()
            .unwrap();

        assert_eq!(next.review_interval, "30d");
        assert_eq!(next.review_date, at(2025, 1, 31));
    }

    #[test]
    fn hard_at_first_rung_stays_there() {
        let mut conn = test_conn();
        let previous = seeded_review(&mut conn, "1d");

        let next = SrsEngine::new(&mut conn)
            .schedule_next(&previous, Difficulty::Hard, at(2025, 1, 1))
            .unwrap()
            .unwrap();

        assert_eq!(next.review_interval, "1d");
        assert_eq!(next.review_date, at(2025, 1, 2));
    }

    #[test]
    fn easy_at_last_rung_schedules_nothing() {
        let mut conn = test_conn();
        let previous = seeded_review(&mut conn, "90d");
        let before = review_count(&mut conn);

        let next = SrsEngine::new(&mut conn)
            .schedule_next(&previous, Difficulty::Easy, at(2025, 1, 1))
            .unwrap();

        assert!(next.is_none());
        assert_eq!(review_count(&mut conn), before);
    }

    #[test]
    fn unknown_interval_aborts_without_insert() {
        let mut conn = test_conn();
        let mut previous = seeded_review(&mut conn, "1d");
        previous.review_interval = "13d".to_string();
        let before = review_count(&mut conn);

        let result =
            SrsEngine::new(&mut conn).schedule_next(&previous, Difficulty::Medium, at(2025, 1, 1));

        assert!(matches!(result, Err(SchedulerError::UnknownInterval(t)) if t == "13d"));
        assert_eq!(review_count(&mut conn), before);
    }
}
