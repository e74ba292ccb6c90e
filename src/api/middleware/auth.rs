//! HTTP basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use serde_json::json;

use crate::{error::AppError, state::AppState};

/// The single user allowed to manage mappings.
#[derive(Clone)]
pub struct BasicCredentials {
    user: String,
    password: String,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Returns true if the supplied pair is exactly the configured one.
    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && password == Some(self.password.as_str())
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Authenticates requests using HTTP basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic <base64(user:password)>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - User or password does not match the configured credentials
///
/// The response carries `WWW-Authenticate: Basic` so browsers prompt.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    if !st.credentials.matches(&user, password.as_deref()) {
        tracing::info!(%user, "Rejected basic auth credentials");
        return Err(AppError::unauthorized(
            "Unauthorized",
            json!({"reason": "Invalid credentials"}),
        ));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
