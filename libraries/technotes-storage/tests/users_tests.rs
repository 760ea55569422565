//! Integration tests for the users vertical slice
//!
//! Tests:
//! - Insert defaults (active, id generation)
//! - Exact-match username lookups
//! - Username lookups excluding one user
//! - Full-record saves
//! - Listing without password hashes


use technotes_core::{types::*, UserStore};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_get_user() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = create_test_user(store, "alice", &["Employee", "Manager"]).await;

    assert_eq!(user.username, "alice");
    assert_eq!(user.roles, vec!["Employee".to_string(), "Manager".to_string()]);
    assert!(user.active);
    assert!(!user.id.as_str().is_empty());

    let retrieved = store.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(retrieved, user);
}

#[tokio::test]
async fn test_find_by_username_is_exact_match() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = create_test_user(store, "alice", &["Employee"]).await;

    let found = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    assert!(store.find_by_username("ALICE").await.unwrap().is_none());
    assert!(store.find_by_username("alic").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_other_with_username_skips_excluded_id() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let first = create_test_user(store, "dup", &["Employee"]).await;
    let second = create_test_user(store, "dup", &["Employee"]).await;
    let loner = create_test_user(store, "solo", &["Employee"]).await;

    let other = store
        .find_other_with_username("dup", &second.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(other.id, first.id);

    let other = store
        .find_other_with_username("dup", &first.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(other.id, second.id);

    assert!(store
        .find_other_with_username("solo", &loner.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_find_by_unknown_id() {
    let test_db = TestDb::new().await;

    let missing = test_db
        .store()
        .find_by_id(&UserId::new("does-not-exist"))
        .await
        .unwrap();

    assert!(missing.is_none());
}

#[tokio::test]
async fn test_save_overwrites_fields() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let mut user = create_test_user(store, "alice", &["Employee"]).await;
    user.username = "alicia".to_string();
    user.roles = vec!["Admin".to_string()];
    user.active = false;
    user.password = "$2b$04$new-hash".to_string();

    let saved = store.save(&user).await.unwrap();
    assert_eq!(saved, user);

    let reloaded = store.find_by_id(&user.id).await.unwrap().unwrap();
    assert_eq!(reloaded.username, "alicia");
    assert_eq!(reloaded.roles, vec!["Admin".to_string()]);
    assert!(!reloaded.active);
    assert_eq!(reloaded.password, "$2b$04$new-hash");
}

#[tokio::test]
async fn test_save_unknown_user_is_not_found() {
    let test_db = TestDb::new().await;

    let ghost = User::from_new(
        UserId::new("ghost"),
        NewUser {
            username: "ghost".to_string(),
            password: "hash".to_string(),
            roles: vec!["Employee".to_string()],
        },
    );

    let result = test_db.store().save(&ghost).await;
    assert!(matches!(
        result,
        Err(technotes_core::NotesError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_find_all_in_creation_order() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    create_test_user(store, "zed", &["Employee"]).await;
    create_test_user(store, "amy", &["Manager"]).await;

    let users = store.find_all().await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, vec!["zed", "amy"]);

    let json = serde_json::to_value(&users).unwrap();
    for user in json.as_array().unwrap() {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn test_delete_one() {
    let test_db = TestDb::new().await;
    let store = test_db.store();

    let user = create_test_user(store, "alice", &["Employee"]).await;

    assert!(store.delete_one(&user.id).await.unwrap());
    assert!(store.find_by_id(&user.id).await.unwrap().is_none());
    assert!(!store.delete_one(&user.id).await.unwrap());
}
