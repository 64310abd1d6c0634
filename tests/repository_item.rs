mod common;

use elo_lists::domain::entities::{DEFAULT_RATING, NewItem};
use elo_lists::domain::repositories::ItemRepository;
use elo_lists::infrastructure::persistence::SqliteItemRepository;

#[tokio::test]
async fn test_create_uses_default_rating() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());
    let list_id = common::create_test_list(&database, "Games").await;

    let id = repo
        .create(NewItem {
            title: "Portal".to_string(),
            list_id,
        })
        .await
        .unwrap();

    let item = repo.find(id).await.unwrap().unwrap();
    assert_eq!(item.rating, DEFAULT_RATING);
    assert_eq!(item.rating, 1000);
}

#[tokio::test]
async fn test_create_then_scoped_find_round_trip() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());
    let list_id = common::create_test_list(&database, "Games").await;

    let id = repo
        .create(NewItem {
            title: "Braid".to_string(),
            list_id,
        })
        .await
        .unwrap();

    let item = repo.find_for_list(id, list_id).await.unwrap().unwrap();

    assert_eq!(item.id, id);
    assert_eq!(item.title, "Braid");
    assert_eq!(item.rating, 1000);
    assert_eq!(item.list_id, list_id);
}

#[tokio::test]
async fn test_scoped_find_rejects_other_list() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());
    let games = common::create_test_list(&database, "Games").await;
    let films = common::create_test_list(&database, "Films").await;
    let id = common::create_test_item(&database, "Limbo", games).await;

    assert!(repo.find_for_list(id, films).await.unwrap().is_none());
    assert!(repo.find(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_for_list_returns_only_that_list_in_id_order() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());
    let games = common::create_test_list(&database, "Games").await;
    let films = common::create_test_list(&database, "Films").await;

    let first = common::create_test_item(&database, "Doom", games).await;
    common::create_test_item(&database, "Alien", films).await;
    let second = common::create_test_item(&database, "Quake", games).await;

    let items = repo.for_list(games).await.unwrap();
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();

    assert_eq!(ids, [first, second]);
    assert!(items.iter().all(|i| i.list_id == games));
}

#[tokio::test]
async fn test_delete_is_by_id_only() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());
    let list_id = common::create_test_list(&database, "Games").await;
    let id = common::create_test_item(&database, "Myst", list_id).await;

    repo.delete(id).await.unwrap();

    assert!(repo.find(id).await.unwrap().is_none());
    assert!(repo.delete(id).await.is_ok());
}

#[tokio::test]
async fn test_create_for_missing_list_is_not_rejected_by_store() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());

    let id = repo
        .create(NewItem {
            title: "Stray".to_string(),
            list_id: 4242,
        })
        .await
        .unwrap();

    let orphans = repo.orphans().await.unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id, id);
    assert_eq!(orphans[0].list_id, Some(4242));
}

#[tokio::test]
async fn test_orphans_keep_missing_list_id_as_none() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());

    let id = sqlx::query("INSERT INTO items (title, rating) VALUES ('Loose', 1000)")
        .execute(database.pool().as_ref())
        .await
        .unwrap()
        .last_insert_rowid();

    let orphans = repo.orphans().await.unwrap();

    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].id, id);
    assert_eq!(orphans[0].title, "Loose");
    assert_eq!(orphans[0].list_id, None);
}

#[tokio::test]
async fn test_delete_orphans_keeps_attached_items() {
    let database = common::test_database().await;
    let repo = SqliteItemRepository::new(database.pool());
    let kept_list = common::create_test_list(&database, "Kept").await;
    let kept = common::create_test_item(&database, "Stays", kept_list).await;
    common::create_test_item(&database, "Goes", 777).await;
    common::create_test_item(&database, "Goes too", 778).await;

    let removed = repo.delete_orphans().await.unwrap();

    assert_eq!(removed, 2);
    assert!(repo.find(kept).await.unwrap().is_some());
    assert_eq!(common::count_rows(&database, "items").await, 1);
}
