//! Order placement and retrieval
//!
//! Submitted totals are never trusted: the server re-prices the lines,
//! checks each unit price against the live catalog, and reserves stock in
//! the same transaction as the insert. A cart whose numbers disagree with
//! the server's is rejected before anything is written.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::types::Json as Jsonb;
use uuid::Uuid;
use validator::Validate;

use crate::auth::AuthUser;
use crate::domain::events::{self, OrderEvent};
use crate::domain::order::{Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
use crate::domain::pricing;
use crate::domain::user::Address;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "No order items"))]
    pub order_items: Vec<OrderItem>,
    #[validate]
    pub shipping_address: Address,
    pub payment_method: PaymentMethod,
    pub items_price: Decimal,
    pub shipping_price: Decimal,
    pub tax_price: Decimal,
    pub total_price: Decimal,
}

pub async fn create_order(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    payload.validate()?;
    for item in &payload.order_items {
        if item.quantity == 0 {
            return Err(ApiError::Validation(format!("Invalid quantity for {}", item.name)));
        }
        if item.name.is_empty() || item.image.is_empty() {
            return Err(ApiError::Validation("Order item is missing required fields".to_string()));
        }
    }

    let quoted = pricing::quote(payload.order_items.iter().map(|i| (i.quantity, i.price)));
    if quoted.items_price != payload.items_price
        || quoted.shipping_price != payload.shipping_price
        || quoted.tax_price != payload.tax_price
        || quoted.total_price != payload.total_price
    {
        return Err(ApiError::Validation(
            "Submitted totals do not match the priced cart".to_string(),
        ));
    }

    let mut tx = state.db.begin().await?;
    for item in &payload.order_items {
        let row: Option<(Decimal, i32)> =
            sqlx::query_as("SELECT price, stock FROM products WHERE id = $1 FOR UPDATE")
                .bind(item.product)
                .fetch_optional(&mut *tx)
                .await?;
        let (price, stock) = row.ok_or_else(|| {
            ApiError::Validation(format!("Product no longer available: {}", item.name))
        })?;
        if price != item.price {
            return Err(ApiError::Validation(format!("Price has changed for {}", item.name)));
        }
        if stock < item.quantity as i32 {
            return Err(ApiError::Validation(format!("Insufficient stock for {}", item.name)));
        }
        sqlx::query("UPDATE products SET stock = stock - $2, updated_at = NOW() WHERE id = $1")
            .bind(item.product)
            .bind(item.quantity as i32)
            .execute(&mut *tx)
            .await?;
    }

    let order = sqlx::query_as::<_, Order>(
        "INSERT INTO orders (id, user_id, order_items, shipping_address, payment_method, payment_status, \
                             items_price, shipping_price, tax_price, total_price, order_status, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, NOW(), NOW()) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(user_id)
    .bind(Jsonb(&payload.order_items))
    .bind(Jsonb(&payload.shipping_address))
    .bind(payload.payment_method)
    .bind(PaymentStatus::default())
    .bind(quoted.items_price)
    .bind(quoted.shipping_price)
    .bind(quoted.tax_price)
    .bind(quoted.total_price)
    .bind(OrderStatus::default())
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    if let Some(nats) = &state.nats {
        let event = OrderEvent::Placed {
            order_id: order.id,
            user_id,
            total: order.total_price,
        };
        events::publish(nats, &event).await;
    }

    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn my_orders(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<Vec<Order>>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(orders))
}

pub async fn get_order(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(&state.db)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))
}
