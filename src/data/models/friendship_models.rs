use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable};
use serde::{Deserialize, Serialize};

use crate::schema::friendships;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Declined,
    Blocked,
}

impl FriendshipStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FriendshipStatus::Pending => "pending",
            FriendshipStatus::Accepted => "accepted",
            FriendshipStatus::Declined => "declined",
            FriendshipStatus::Blocked => "blocked",
        }
    }
}

/// A friendship edge between two users. `action_user_id` is whoever
/// last changed the status.
#[derive(Debug, Serialize, Queryable)]
pub struct Friendship {
    pub id: i32,
    pub user_id_1: i32,
    pub user_id_2: i32,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_user_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = friendships)]
pub struct NewFriendship<'a> {
    pub user_id_1: i32,
    pub user_id_2: i32,
    pub status: &'a str,
    pub action_user_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request payload for sending a friend request
#[derive(Debug, Deserialize)]
pub struct FriendRequestForm {
    pub user_id: i32,
}

/// What the addressee does with a pending request
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipAction {
    Accept,
    Decline,
    Block,
}

impl FriendshipAction {
    pub fn resulting_status(&self) -> FriendshipStatus {
        match self {
            FriendshipAction::Accept => FriendshipStatus::Accepted,
            FriendshipAction::Decline => FriendshipStatus::Declined,
            FriendshipAction::Block => FriendshipStatus::Blocked,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RespondForm {
    pub action: FriendshipAction,
}

/// A friend as shown in the friends list
#[derive(Serialize)]
pub struct FriendEntry {
    pub user_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub selected_avatar: String,
    pub points: i32,
    pub current_streak: i32,
}
