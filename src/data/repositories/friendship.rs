use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{Friendship, FriendshipStatus, NewFriendship};
use crate::schema::friendships;

pub struct FriendshipRepository;

impl FriendshipRepository {
    /// The edge between two users in either direction, if any.
    pub fn between(
        conn: &mut SqliteConnection,
        a: i32,
        b: i32,
    ) -> Result<Option<Friendship>, diesel::result::Error> {
        friendships::table
            .filter(
                friendships::user_id_1
                    .eq(a)
                    .and(friendships::user_id_2.eq(b))
                    .or(friendships::user_id_1
                        .eq(b)
                        .and(friendships::user_id_2.eq(a))),
            )
            .first::<Friendship>(conn)
            .optional()
    }

    pub fn create_request(
        conn: &mut SqliteConnection,
        from: i32,
        to: i32,
        now: NaiveDateTime,
    ) -> Result<Friendship, diesel::result::Error> {
        diesel::insert_into(friendships::table)
            .values(&NewFriendship {
                user_id_1: from,
                user_id_2: to,
                status: FriendshipStatus::Pending.as_str(),
                action_user_id: Some(from),
                created_at: now,
                updated_at: now,
            })
            .execute(conn)?;

        let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
            .get_result::<i32>(conn)?;

        friendships::table.find(id).first::<Friendship>(conn)
    }

    /// A pending request addressed to `user_id`.
    pub fn find_pending_for(
        conn: &mut SqliteConnection,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Friendship>, diesel::result::Error> {
        friendships::table
            .find(id)
            .filter(friendships::user_id_2.eq(user_id))
            .filter(friendships::status.eq(FriendshipStatus::Pending.as_str()))
            .first::<Friendship>(conn)
            .optional()
    }

    pub fn set_status(
        conn: &mut SqliteConnection,
        id: i32,
        status: FriendshipStatus,
        action_user_id: i32,
        now: NaiveDateTime,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(friendships::table.find(id))
            .set((
                friendships::status.eq(status.as_str()),
                friendships::action_user_id.eq(Some(action_user_id)),
                friendships::updated_at.eq(now),
            ))
            .execute(conn)
    }

    /// Ids of users with an accepted friendship with `user_id`.
    pub fn accepted_friend_ids(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Vec<i32>, diesel::result::Error> {
        let edges = friendships::table
            .filter(friendships::status.eq(FriendshipStatus::Accepted.as_str()))
            .filter(
                friendships::user_id_1
                    .eq(user_id)
                    .or(friendships::user_id_2.eq(user_id)),
            )
            .select((friendships::user_id_1, friendships::user_id_2))
            .load::<(i32, i32)>(conn)?;

        Ok(edges
            .into_iter()
            .map(|(a, b)| if a == user_id { b } else { a })
            .collect())
    }

    /// Incoming requests still waiting on `user_id`.
    pub fn pending_for_user(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Vec<Friendship>, diesel::result::Error> {
        friendships::table
            .filter(friendships::user_id_2.eq(user_id))
            .filter(friendships::status.eq(FriendshipStatus::Pending.as_str()))
            .order_by(friendships::created_at.desc())
            .load::<Friendship>(conn)
    }
}
