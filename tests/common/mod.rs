#![allow(dead_code)]

use alias_shortener::api::middleware::auth::BasicCredentials;
use alias_shortener::application::services::LinkService;
use alias_shortener::infrastructure::persistence::SqliteMappingStore;
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::AliasGenerator;
use axum_test::TestServer;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// `Authorization` value for `admin:secret`.
pub const AUTH_HEADER: &str = "Basic YWRtaW46c2VjcmV0";

/// `Authorization` value for `admin:wrong`.
pub const WRONG_AUTH_HEADER: &str = "Basic YWRtaW46d3Jvbmc=";

/// Opens a private in-memory database.
///
/// Each SQLite in-memory connection is its own database, so the pool holds
/// exactly one connection for its whole lifetime.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn create_test_store() -> SqliteMappingStore {
    let store = SqliteMappingStore::new(Arc::new(memory_pool().await));
    store.bootstrap().await.unwrap();
    store
}

/// Opens a store over a fresh database file with a multi-connection pool.
///
/// The returned directory owns the file; keep it alive while the store is used.
pub async fn create_file_store(max_connections: u32) -> (TempDir, SqliteMappingStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("storage.db").display());
    let store = SqliteMappingStore::connect(&url, max_connections)
        .await
        .unwrap();

    (dir, store)
}

pub async fn create_test_link(store: &SqliteMappingStore, alias: &str, url: &str) -> i64 {
    use alias_shortener::domain::repositories::UrlSaver;

    store.save_url(url, alias).await.unwrap()
}

pub fn create_test_state(store: SqliteMappingStore) -> AppState {
    let link_service = Arc::new(LinkService::new(
        Arc::new(store),
        AliasGenerator::default(),
        1,
    ));
    let credentials = Arc::new(BasicCredentials::new(TEST_USER, TEST_PASSWORD));

    AppState::new(link_service, credentials)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, Duration::from_secs(5))).unwrap()
}
