mod common;

use alias_shortener::api::dto::health::HealthResponse;

#[tokio::test]
async fn test_health_ok() {
    let server = common::create_test_server(common::create_test_state(
        common::create_test_store().await,
    ));

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.checks.database.status, "ok");
}

#[tokio::test]
async fn test_health_degraded_when_pool_closed() {
    let pool = common::memory_pool().await;
    let store = alias_shortener::infrastructure::persistence::SqliteMappingStore::new(
        std::sync::Arc::new(pool.clone()),
    );
    store.bootstrap().await.unwrap();
    pool.close().await;

    let server = common::create_test_server(common::create_test_state(store));

    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    let body: HealthResponse = response.json();
    assert_eq!(body.status, "degraded");
    assert_eq!(body.checks.database.status, "error");
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let pool = common::memory_pool().await;
    let store = alias_shortener::infrastructure::persistence::SqliteMappingStore::new(
        std::sync::Arc::new(pool.clone()),
    );
    store.bootstrap().await.unwrap();
    pool.close().await;

    let server = common::create_test_server(common::create_test_state(store));

    let response = server.get("/anything").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}
