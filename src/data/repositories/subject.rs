use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{NewSubject, Subject};
use crate::schema::subjects;

pub struct SubjectRepository;

impl SubjectRepository {
    pub fn insert(
        conn: &mut SqliteConnection,
        new_subject: &NewSubject,
    ) -> Result<Subject, diesel::result::Error> {
        diesel::insert_into(subjects::table)
            .values(new_subject)
            .execute(conn)?;

        let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
            .get_result::<i32>(conn)?;

        subjects::table.find(id).first::<Subject>(conn)
    }

    pub fn list_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Vec<Subject>, diesel::result::Error> {
        subjects::table
            .filter(subjects::user_id.eq(user_id))
            .order_by(subjects::name.asc())
            .load::<Subject>(conn)
    }

    pub fn find_owned(
        conn: &mut SqliteConnection,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Subject>, diesel::result::Error> {
        subjects::table
            .find(id)
            .filter(subjects::user_id.eq(user_id))
            .first::<Subject>(conn)
            .optional()
    }

    pub fn delete_owned(
        conn: &mut SqliteConnection,
        id: i32,
        user_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(
            subjects::table
                .find(id)
                .filter(subjects::user_id.eq(user_id)),
        )
        .execute(conn)
    }
}
