//! Bearer-token extractor for protected routes

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, resolved from the `Authorization: Bearer` header.
///
/// Adding this as a handler argument makes the route require a valid token;
/// a missing or failed credential rejects the request before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Authentication("Not authorized, no token".to_string()))?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Authentication("Not authorized, no token".to_string()))?;
        let claims = state.tokens.verify(token)?;
        Ok(AuthUser(claims.sub))
    }
}
