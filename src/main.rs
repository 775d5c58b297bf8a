//! Cucumber Commerce - Self-hosted storefront service

use std::sync::Arc;

use anyhow::Result;
use cucumber_commerce::api;
use cucumber_commerce::auth::{Argon2Hasher, TokenSigner};
use cucumber_commerce::state::AppState;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(&std::env::var("DATABASE_URL")?)
        .await?;
    sqlx::migrate!("./migrations").run(&db).await?;

    let nats = match std::env::var("NATS_URL") {
        Ok(url) => async_nats::connect(&url).await.ok(),
        Err(_) => None,
    };

    let state = AppState {
        db,
        nats,
        tokens: TokenSigner::new(&std::env::var("JWT_SECRET")?),
        hasher: Arc::new(Argon2Hasher),
    };
    let app = api::router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    tracing::info!("cucumber-commerce listening on 0.0.0.0:{}", port);
    axum::serve(tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?, app).await?;
    Ok(())
}
