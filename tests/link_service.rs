mod common;

use alias_shortener::application::services::LinkService;
use alias_shortener::error::StorageError;
use alias_shortener::infrastructure::persistence::SqliteMappingStore;
use alias_shortener::utils::alias_generator::AliasGenerator;
use std::sync::Arc;

async fn create_test_service(alias_length: usize) -> LinkService<SqliteMappingStore> {
    let store = common::create_test_store().await;
    LinkService::new(Arc::new(store), AliasGenerator::new(alias_length), 1)
}

#[tokio::test]
async fn test_generated_alias_resolves() {
    let service = create_test_service(6).await;

    let mapping = service.create("https://example.com", Some("")).await.unwrap();

    assert_eq!(mapping.alias.len(), 6);
    assert!(mapping.alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(
        service.resolve(&mapping.alias).await.unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_second_create_on_alias_conflicts() {
    let service = create_test_service(6).await;

    service.create("https://a.com", Some("shop")).await.unwrap();
    let result = service.create("https://b.com", Some("shop")).await;

    assert!(matches!(result, Err(StorageError::AliasExists { .. })));
    assert_eq!(service.resolve("shop").await.unwrap(), "https://a.com");
}

#[tokio::test]
async fn test_resolve_on_empty_store() {
    let service = create_test_service(6).await;

    let result = service.resolve("nope").await;

    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_twice() {
    let service = create_test_service(6).await;

    service.create("https://c.com", Some("tmp")).await.unwrap();

    assert!(service.delete("tmp").await.is_ok());
    assert!(service.delete("tmp").await.is_err());
}

#[tokio::test]
async fn test_generated_aliases_are_distinct() {
    let service = create_test_service(8).await;

    let first = service.create("https://one.com", None).await.unwrap();
    let second = service.create("https://two.com", None).await.unwrap();

    assert_ne!(first.alias, second.alias);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_single_char_space_exhaustion_is_reported() {
    // With one-character aliases and retries, the 62-symbol space eventually
    // fills up and the conflict must surface instead of looping forever.
    let store = Arc::new(common::create_test_store().await);
    let service = LinkService::new(store, AliasGenerator::new(1), 16);

    let mut conflicts = 0;
    for i in 0..200 {
        match service.create(&format!("https://site{}.com", i), None).await {
            Ok(mapping) => assert_eq!(mapping.alias.len(), 1),
            Err(StorageError::AliasExists { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert!(conflicts >= 200 - 62);
}
