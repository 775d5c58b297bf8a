//! Product catalog records

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed category set the catalog is organized by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "category")]
pub enum Category {
    Clothing,
    Bags,
    Footwear,
    Jewelry,
    Accessories,
    Beauty,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub image: String,
    pub stock: i32,
    pub rating: f64,
    pub num_reviews: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(serde_json::to_string(&Category::Clothing).unwrap(), "\"Clothing\"");
        assert_eq!(
            serde_json::from_str::<Category>("\"Beauty\"").unwrap(),
            Category::Beauty
        );
        assert!(serde_json::from_str::<Category>("\"Electronics\"").is_err());
    }
}
