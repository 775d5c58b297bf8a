//! Cucumber Commerce
//!
//! Self-hosted storefront backend: catalog, cart, checkout and orders.
//!
//! ## Features
//! - Product catalog with category / search / featured queries
//! - Client-held cart with durable local persistence
//! - Fixed-point checkout pricing (flat tax, free shipping threshold)
//! - Registration, login and bearer-token auth
//! - Order snapshots with server-side price verification and stock reservation

pub mod api;
pub mod auth;
pub mod domain;
pub mod error;
pub mod session;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
