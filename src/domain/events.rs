//! Domain events

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

pub const ORDERS_SUBJECT: &str = "orders.events";

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderEvent {
    Placed {
        order_id: Uuid,
        user_id: Uuid,
        total: Decimal,
    },
}

/// Best-effort publish; event delivery never fails the request that raised it.
pub async fn publish(client: &async_nats::Client, event: &OrderEvent) {
    let payload = match serde_json::to_vec(event) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("failed to encode domain event: {e}");
            return;
        }
    };
    if let Err(e) = client.publish(ORDERS_SUBJECT.to_string(), payload.into()).await {
        tracing::warn!("failed to publish to {ORDERS_SUBJECT}: {e}");
    }
}
