use chrono::{NaiveDate, NaiveDateTime};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use studycircle::data::models::FriendshipStatus;
use studycircle::data::repositories::{FriendshipRepository, ProfileRepository};
use studycircle::features::gamification::GamificationEngine;

fn test_conn() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").unwrap();
    conn.batch_execute(include_str!(
        "../migrations/2025-06-20-000000_create_core_tables/up.sql"
    ))
    .unwrap();
    conn
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn accept_between(conn: &mut SqliteConnection, from: i32, to: i32) {
    let request = FriendshipRepository::create_request(conn, from, to, at(2025, 1, 1)).unwrap();
    FriendshipRepository::set_status(
        conn,
        request.id,
        FriendshipStatus::Accepted,
        to,
        at(2025, 1, 2),
    )
    .unwrap();
}

#[test]
fn request_lifecycle_pending_to_accepted() {
    let mut conn = test_conn();

    let request = FriendshipRepository::create_request(&mut conn, 1, 2, at(2025, 1, 1)).unwrap();
    assert_eq!(request.status, "pending");
    assert_eq!(request.action_user_id, Some(1));

    // Addressee sees it; a stranger does not.
    assert!(FriendshipRepository::find_pending_for(&mut conn, request.id, 2)
        .unwrap()
        .is_some());
    assert!(FriendshipRepository::find_pending_for(&mut conn, request.id, 3)
        .unwrap()
        .is_none());

    FriendshipRepository::set_status(
        &mut conn,
        request.id,
        FriendshipStatus::Accepted,
        2,
        at(2025, 1, 2),
    )
    .unwrap();

    let edge = FriendshipRepository::between(&mut conn, 2, 1).unwrap().unwrap();
    assert_eq!(edge.status, "accepted");
    assert_eq!(edge.action_user_id, Some(2));
    assert_eq!(FriendshipRepository::accepted_friend_ids(&mut conn, 1).unwrap(), vec![2]);
    assert_eq!(FriendshipRepository::accepted_friend_ids(&mut conn, 2).unwrap(), vec![1]);
}

#[test]
fn declined_and_blocked_edges_are_not_friends() {
    let mut conn = test_conn();

    let request = FriendshipRepository::create_request(&mut conn, 1, 2, at(2025, 1, 1)).unwrap();
    FriendshipRepository::set_status(
        &mut conn,
        request.id,
        FriendshipStatus::Declined,
        2,
        at(2025, 1, 2),
    )
    .unwrap();

    assert!(FriendshipRepository::accepted_friend_ids(&mut conn, 1)
        .unwrap()
        .is_empty());
    // The edge still exists, so a duplicate request is detectable.
    assert!(FriendshipRepository::between(&mut conn, 1, 2).unwrap().is_some());
}

#[test]
fn weekly_ranking_orders_self_and_friends_by_weekly_points() {
    let mut conn = test_conn();

    // Three profiles with different weekly totals.
    for (user, actions) in [(1, 1u32), (2, 3u32), (3, 2u32)] {
        ProfileRepository::ensure_exists(&mut conn, user).unwrap();
        for day in 1..=actions {
            GamificationEngine::apply_study_completion(&mut conn, user, at(2025, 1, day)).unwrap();
        }
    }
    accept_between(&mut conn, 1, 2);
    accept_between(&mut conn, 3, 1);

    let mut ids = FriendshipRepository::accepted_friend_ids(&mut conn, 1).unwrap();
    ids.push(1);
    let ranking = ProfileRepository::weekly_ranking(&mut conn, ids).unwrap();

    let ordered: Vec<(i32, i32)> = ranking.iter().map(|p| (p.id, p.weekly_points)).collect();
    assert_eq!(ordered, vec![(2, 30), (3, 20), (1, 10)]);
}

#[test]
fn display_names_are_unique_across_profiles() {
    let mut conn = test_conn();
    ProfileRepository::ensure_exists(&mut conn, 1).unwrap();
    ProfileRepository::ensure_exists(&mut conn, 2).unwrap();

    ProfileRepository::update_display_name(&mut conn, 1, "Luna").unwrap();

    assert!(ProfileRepository::display_name_taken(&mut conn, "Luna", 2).unwrap());
    // A user keeps their own name without tripping the check.
    assert!(!ProfileRepository::display_name_taken(&mut conn, "Luna", 1).unwrap());
    assert!(!ProfileRepository::display_name_taken(&mut conn, "Nova", 2).unwrap());
}
