//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::api::middleware::auth::BasicCredentials;
use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteMappingStore;

/// State shared by every request.
///
/// Cloning is cheap: every field is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteMappingStore>>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteMappingStore>>,
        credentials: Arc<BasicCredentials>,
    ) -> Self {
        Self {
            link_service,
            credentials,
        }
    }
}
