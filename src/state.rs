//! Shared application state

use std::sync::Arc;

use crate::auth::{CredentialHasher, TokenSigner};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub nats: Option<async_nats::Client>,
    pub tokens: TokenSigner,
    pub hasher: Arc<dyn CredentialHasher>,
}
