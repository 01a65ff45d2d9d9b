//! Tests marked `#[ignore]` need a running MongoDB reachable through
//! `DB_HOST`/`DB_PORT`. Run them with `cargo test -- --ignored`.

use bson::{doc, oid::ObjectId, Document};
use files_manager_store::config::{Config, MongoDbConfig, SeedConfig};
use files_manager_store::database::{FILES_COLLECTION, USERS_COLLECTION};
use files_manager_store::{StoreClient, StoreError};

fn scratch_config() -> MongoDbConfig {
    let mut config = Config::from_env().database;
    config.database = format!("files_manager_test_{}", ObjectId::new().to_hex());
    config
}

async fn drop_database(store: &StoreClient) {
    let connection = store.connection().unwrap();
    connection.client().database().drop().await.unwrap();
}

async fn prefill(config: &MongoDbConfig, users: usize, files: usize) {
    let client = mongodb::Client::with_uri_str(config.uri()).await.unwrap();
    let db = client.database(&config.database);

    let user_docs: Vec<Document> = (0..users).map(|i| doc! { "name": format!("existing{}", i) }).collect();
    db.collection::<Document>(USERS_COLLECTION)
        .insert_many(user_docs)
        .await
        .unwrap();

    let file_docs: Vec<Document> = (0..files).map(|i| doc! { "filename": format!("old{}", i) }).collect();
    db.collection::<Document>(FILES_COLLECTION)
        .insert_many(file_docs)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unreachable_server_leaves_client_offline() {
    let config = MongoDbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        connection_timeout_ms: 200,
        ..MongoDbConfig::default()
    };
    let store = StoreClient::new(config, SeedConfig::default());

    assert!(store.connect().await.is_err());
    assert!(!store.is_alive());
    assert!(matches!(store.nb_users().await, Err(StoreError::NotConnected)));
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_fresh_database_is_seeded() {
    let store = StoreClient::new(scratch_config(), SeedConfig::default());
    assert!(!store.is_alive());

    store.connect().await.unwrap();
    assert!(store.is_alive());
    assert_eq!(store.nb_users().await.unwrap(), 4);
    assert_eq!(store.nb_files().await.unwrap(), 30);

    let user = store.get_user(doc! { "name": "User1" }).await.unwrap();
    let user = user.expect("User1 should be seeded");
    assert_eq!(user.name.as_deref(), Some("User1"));
    assert!(user.id.is_some());

    drop_database(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_seeding_only_fills_the_shortfall() {
    let config = scratch_config();
    prefill(&config, 2, 40).await;

    let store = StoreClient::new(config, SeedConfig::default());
    store.connect().await.unwrap();

    assert_eq!(store.nb_users().await.unwrap(), 4);
    assert_eq!(store.nb_files().await.unwrap(), 40);
    assert!(store
        .get_user(doc! { "name": "User2" })
        .await
        .unwrap()
        .is_some());
    assert!(store
        .get_user(doc! { "name": "User3" })
        .await
        .unwrap()
        .is_none());

    drop_database(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_save_file_returns_assigned_id() {
    let store = StoreClient::new(scratch_config(), SeedConfig::default());
    store.connect().await.unwrap();
    let before = store.nb_files().await.unwrap();

    let saved = store.save_file(doc! { "filename": "x" }).await.unwrap();
    assert_eq!(saved.get_str("filename").unwrap(), "x");
    let id = saved.get_object_id("_id").unwrap();
    assert_ne!(id.to_hex(), "");

    assert_eq!(store.nb_files().await.unwrap(), before + 1);

    drop_database(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_user_without_name_is_returned() {
    let config = scratch_config();
    let client = mongodb::Client::with_uri_str(config.uri()).await.unwrap();
    client
        .database(&config.database)
        .collection::<Document>(USERS_COLLECTION)
        .insert_one(doc! { "_id": "abc", "email": "a@b.c", "password": "x" })
        .await
        .unwrap();

    let store = StoreClient::new(config, SeedConfig::default());
    store.connect().await.unwrap();

    let user = store
        .get_user(doc! { "email": "a@b.c" })
        .await
        .unwrap()
        .expect("stored user should be found");
    assert_eq!(user.id, Some(bson::Bson::String("abc".to_string())));
    assert_eq!(user.name, None);
    assert_eq!(user.extra.get_str("password").unwrap(), "x");

    drop_database(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_missing_user_is_absent() {
    let store = StoreClient::new(scratch_config(), SeedConfig::default());
    store.connect().await.unwrap();

    let user = store
        .get_user(doc! { "name": "nobody" })
        .await
        .unwrap();
    assert!(user.is_none());

    drop_database(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_seeding_can_be_disabled_and_rerun() {
    let seed_config = SeedConfig {
        enabled: false,
        ..SeedConfig::default()
    };
    let store = StoreClient::new(scratch_config(), seed_config);
    store.connect().await.unwrap();
    assert_eq!(store.nb_users().await.unwrap(), 0);

    let report = store.seed().await.unwrap();
    assert_eq!(report.users_inserted, 4);
    assert_eq!(report.files_inserted, 30);

    let again = store.seed().await.unwrap();
    assert_eq!(again.users_inserted, 0);
    assert_eq!(again.files_inserted, 0);

    drop_database(&store).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn test_second_connect_is_a_no_op() {
    let store = StoreClient::new(scratch_config(), SeedConfig::default());
    store.connect().await.unwrap();
    store.clone().connect().await.unwrap();

    assert_eq!(store.nb_users().await.unwrap(), 4);

    drop_database(&store).await;
}
