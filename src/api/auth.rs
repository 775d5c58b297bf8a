//! Registration, login and profile routes

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use sqlx::types::Json as Jsonb;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::domain::user::{Address, User};
use crate::error::{on_conflict, ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[validate]
    pub address: Address,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate]
    pub address: Option<Address>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
}

/// Profile plus a signed bearer credential.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub is_admin: bool,
    pub token: String,
}

impl AuthResponse {
    fn new(user: User, token: String) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address.0,
            is_admin: user.is_admin,
            token,
        }
    }
}

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM users WHERE email = $1")
        .bind(&payload.email)
        .fetch_optional(&state.db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::Conflict("User already exists".to_string()));
    }

    let password_hash = state.hasher.hash(&payload.password)?;
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, name, email, password_hash, phone, address, is_admin, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, FALSE, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&password_hash)
    .bind(&payload.phone)
    .bind(Jsonb(&payload.address))
    .fetch_one(&state.db)
    .await
    .map_err(|e| on_conflict(e, "User already exists"))?;

    let token = state.tokens.issue(user.id)?;
    Ok((StatusCode::CREATED, Json(AuthResponse::new(user, token))))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&payload.email)
        .fetch_optional(&state.db)
        .await?;

    // Unknown email and bad password are indistinguishable to the caller.
    let user = user
        .ok_or_else(|| ApiError::Authentication("Invalid email or password".to_string()))?;
    if !state.hasher.verify(&payload.password, &user.password_hash)? {
        return Err(ApiError::Authentication("Invalid email or password".to_string()));
    }

    let token = state.tokens.issue(user.id)?;
    Ok(Json(AuthResponse::new(user, token)))
}

pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// Partial overwrite: only supplied fields change, and the password is
/// rehashed only when a new one arrives. Returns a fresh credential.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> ApiResult<Json<AuthResponse>> {
    payload.validate()?;

    let user: User = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let name = payload.name.unwrap_or(user.name);
    let email = payload.email.unwrap_or(user.email);
    let phone = payload.phone.unwrap_or(user.phone);
    let address = payload.address.unwrap_or(user.address.0);
    let password_hash = match payload.password {
        Some(plain) => state.hasher.hash(&plain)?,
        None => user.password_hash,
    };

    let updated = sqlx::query_as::<_, User>(
        "UPDATE users SET name = $2, email = $3, phone = $4, address = $5, password_hash = $6, updated_at = NOW() \
         WHERE id = $1 RETURNING *",
    )
    .bind(user_id)
    .bind(&name)
    .bind(&email)
    .bind(&phone)
    .bind(Jsonb(&address))
    .bind(&password_hash)
    .fetch_one(&state.db)
    .await
    .map_err(|e| on_conflict(e, "Email already in use"))?;

    let token = state.tokens.issue(updated.id)?;
    Ok(Json(AuthResponse::new(updated, token)))
}
