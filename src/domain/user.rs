//! User accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;
use validator::Validate;

/// Postal address, embedded wherever an address snapshot is owned.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Pincode is required"))]
    pub pincode: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

/// A persisted account. The credential digest never serializes out.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone: String,
    pub address: Json<Address>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "asha@example.test".to_string(),
            password_hash: "$argon2id$v=19$secret".to_string(),
            phone: "9999999999".to_string(),
            address: Json(Address {
                street: "12 MG Road".to_string(),
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "411001".to_string(),
                country: "India".to_string(),
            }),
            is_admin: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_never_serializes() {
        let json = serde_json::to_value(user()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "asha@example.test");
        assert_eq!(json["address"]["city"], "Pune");
    }

    #[test]
    fn test_address_requires_every_field() {
        let mut address = user().address.0;
        assert!(address.validate().is_ok());
        address.pincode.clear();
        assert!(address.validate().is_err());
    }
}
