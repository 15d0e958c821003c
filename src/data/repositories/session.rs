use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{NewStudySession, StudySession};
use crate::schema::study_sessions;

pub struct SessionRepository;

impl SessionRepository {
    pub fn insert(
        conn: &mut SqliteConnection,
        new_session: &NewStudySession,
    ) -> Result<i32, diesel::result::Error> {
        diesel::insert_into(study_sessions::table)
            .values(new_session)
            .execute(conn)?;

        diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
            .get_result::<i32>(conn)
    }

    pub fn recent_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
        limit: i64,
    ) -> Result<Vec<StudySession>, diesel::result::Error> {
        study_sessions::table
            .filter(study_sessions::user_id.eq(user_id))
            .order_by(study_sessions::start_time.desc())
            .limit(limit)
            .load::<StudySession>(conn)
    }
}
