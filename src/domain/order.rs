//! Order snapshots
//!
//! An order owns copies of the item and address data it was created with, so
//! later catalog edits never rewrite history. Totals are fixed at creation:
//! total = items + shipping + tax.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::user::Address;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_method")]
pub enum PaymentMethod {
    #[serde(rename = "COD")]
    #[sqlx(rename = "COD")]
    Cod,
    Card,
    #[serde(rename = "UPI")]
    #[sqlx(rename = "UPI")]
    Upi,
    #[serde(rename = "Net Banking")]
    #[sqlx(rename = "Net Banking")]
    NetBanking,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// One ordered line, capturing the unit price at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product: Uuid,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub color: String,
    pub image: String,
    pub price: Decimal,
}

impl OrderItem {
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub order_items: Json<Vec<OrderItem>>,
    pub shipping_address: Json<Address>,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub items_price: Decimal,
    pub shipping_price: Decimal,
    pub tax_price: Decimal,
    pub total_price: Decimal,
    pub order_status: OrderStatus,
    pub delivered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod).unwrap(), "\"COD\"");
        assert_eq!(serde_json::to_string(&PaymentMethod::Upi).unwrap(), "\"UPI\"");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::NetBanking).unwrap(),
            "\"Net Banking\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"Card\"").unwrap(),
            PaymentMethod::Card
        );
        assert!(serde_json::from_str::<PaymentMethod>("\"Cheque\"").is_err());
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_order_item_line_total() {
        let item = OrderItem {
            product: Uuid::new_v4(),
            name: "Dress".to_string(),
            quantity: 3,
            size: "M".to_string(),
            color: "Blue".to_string(),
            image: "https://example.test/p.jpg".to_string(),
            price: Decimal::new(500, 0),
        };
        assert_eq!(item.line_total(), Decimal::new(1500, 0));
    }
}
