use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{Goal, NewGoal};
use crate::schema::goals;

pub struct GoalRepository;

impl GoalRepository {
    pub fn insert(
        conn: &mut SqliteConnection,
        new_goal: &NewGoal,
    ) -> Result<Goal, diesel::result::Error> {
        diesel::insert_into(goals::table)
            .values(new_goal)
            .execute(conn)?;

        let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
            .get_result::<i32>(conn)?;

        goals::table.find(id).first::<Goal>(conn)
    }

    pub fn list_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Vec<Goal>, diesel::result::Error> {
        goals::table
            .filter(goals::user_id.eq(user_id))
            .order_by(goals::end_date.asc())
            .load::<Goal>(conn)
    }

    pub fn mark_completed(
        conn: &mut SqliteConnection,
        id: i32,
        user_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(goals::table.find(id).filter(goals::user_id.eq(user_id)))
            .set(goals::completed.eq(true))
            .execute(conn)
    }

    pub fn delete_owned(
        conn: &mut SqliteConnection,
        id: i32,
        user_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(goals::table.find(id).filter(goals::user_id.eq(user_id))).execute(conn)
    }
}
