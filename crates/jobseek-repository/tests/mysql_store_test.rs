//! Integration tests for the MySQL stores.
//!
//! These run against a real MySQL server started with testcontainers and
//! need Docker: `cargo test -p jobseek-repository -- --ignored`.

mod common;

use common::TestDatabase;
use jobseek_core::{MessageFilter, NewChatMessage, NewNotification, NotificationId, UserId};
use jobseek_repository::{
    MessageStore, MySqlMessageStore, MySqlNotificationStore, MySqlUserDirectory,
    NotificationStore, UserDirectory,
};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_saved_message_round_trips_through_query() {
    let db = TestDatabase::new().await;
    let store = MySqlMessageStore::new(db.pool());

    let saved = store
        .save(NewChatMessage::new(UserId(1), UserId(2), "hi"))
        .await
        .expect("Failed to save message");
    assert!(saved.id.into_inner() > 0);

    let found = store
        .query(MessageFilter::between(UserId(1), UserId(2)))
        .await
        .expect("Query failed");
    assert_eq!(found, vec![saved]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_query_filters_apply_independently() {
    let db = TestDatabase::new().await;
    let store = MySqlMessageStore::new(db.pool());

    store.save(NewChatMessage::new(UserId(1), UserId(2), "a")).await.unwrap();
    store.save(NewChatMessage::new(UserId(1), UserId(3), "b")).await.unwrap();
    store.save(NewChatMessage::new(UserId(4), UserId(2), "c")).await.unwrap();

    let from_one = store
        .query(MessageFilter {
            sender_id: Some(UserId(1)),
            receiver_id: None,
        })
        .await
        .unwrap();
    assert_eq!(
        from_one.iter().map(|m| m.body.as_str()).collect::<Vec<_>>(),
        ["a", "b"]
    );

    let to_two = store
        .query(MessageFilter {
            sender_id: None,
            receiver_id: Some(UserId(2)),
        })
        .await
        .unwrap();
    assert_eq!(
        to_two.iter().map(|m| m.body.as_str()).collect::<Vec<_>>(),
        ["a", "c"]
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_for_user_returns_newest_first() {
    let db = TestDatabase::new().await;
    let store = MySqlMessageStore::new(db.pool());

    store.save(NewChatMessage::new(UserId(1), UserId(2), "first")).await.unwrap();
    store.save(NewChatMessage::new(UserId(2), UserId(1), "second")).await.unwrap();

    let bodies: Vec<String> = store
        .for_user(UserId(2))
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.body)
        .collect();
    assert_eq!(bodies, ["second", "first"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_notification_lifecycle() {
    let db = TestDatabase::new().await;
    let store = MySqlNotificationStore::new(db.pool());

    let created = store
        .create(NewNotification::new(UserId(7), "You received a new message from Ana"))
        .await
        .unwrap();
    assert!(!created.is_read);

    assert!(store.mark_read(UserId(8), created.id).await.unwrap().is_none());
    let read = store.mark_read(UserId(7), created.id).await.unwrap().unwrap();
    assert!(read.is_read);

    store.create(NewNotification::new(UserId(7), "again")).await.unwrap();
    assert_eq!(store.mark_all_read(UserId(7)).await.unwrap(), 1);

    assert!(!store.delete(UserId(7), NotificationId(9999)).await.unwrap());
    assert!(store.delete(UserId(7), created.id).await.unwrap());
    assert_eq!(store.delete_all(UserId(7)).await.unwrap(), 1);
    assert!(store.list_for_user(UserId(7)).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_user_directory_reads_full_name() {
    let db = TestDatabase::new().await;
    let id = db.insert_user("Ana Lestari", "ana@example.com").await;
    let directory = MySqlUserDirectory::new(db.pool());

    assert_eq!(
        directory.display_name(UserId(id)).await.unwrap().as_deref(),
        Some("Ana Lestari")
    );
    assert!(directory.display_name(UserId(id + 100)).await.unwrap().is_none());
}
