//! Client-held shopping cart
//!
//! The cart never touches the server: it lives with the client, keyed by
//! (product, size, color), and is persisted through the [`CartStore`] seam so
//! any durable local storage can back it. Two lines for the same product with
//! different sizes or colors stay distinct.

use std::fs;
use std::io;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::order::OrderItem;
use crate::domain::pricing::{self, PriceBreakdown};
use crate::domain::product::Product;

/// Composite identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineKey {
    pub product_id: Uuid,
    pub size: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: Uuid,
    pub name: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
    pub size: String,
    pub color: String,
}

impl CartLine {
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id,
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Adds a product selection; quantities merge when the key already exists.
    pub fn add(&mut self, product: &Product, quantity: u32, size: &str, color: &str) {
        let key = LineKey {
            product_id: product.id,
            size: size.to_string(),
            color: color.to_string(),
        };
        if let Some(existing) = self.lines.iter_mut().find(|l| l.key() == key) {
            existing.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            quantity,
            size: size.to_string(),
            color: color.to_string(),
        });
    }

    /// Sets a line's quantity; zero removes the line instead.
    pub fn update_quantity(&mut self, key: &LineKey, quantity: u32) {
        if quantity == 0 {
            self.remove(key);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.key() == *key) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, key: &LineKey) {
        self.lines.retain(|l| l.key() != *key);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn items_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The checkout quote for the current contents.
    pub fn quote(&self) -> PriceBreakdown {
        pricing::quote(self.lines.iter().map(|l| (l.quantity, l.price)))
    }

    /// Snapshots the lines into order items for submission.
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|l| OrderItem {
                product: l.product_id,
                name: l.name.clone(),
                quantity: l.quantity,
                size: l.size.clone(),
                color: l.color.clone(),
                image: l.image.clone(),
                price: l.price,
            })
            .collect()
    }
}

#[derive(Error, Debug)]
pub enum CartStoreError {
    #[error("Cart storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Cart storage held malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Durable local persistence for a cart, independent of any storage API.
pub trait CartStore {
    fn load(&self) -> Result<Cart, CartStoreError>;
    fn save(&self, cart: &Cart) -> Result<(), CartStoreError>;
}

/// File-backed store writing the cart as a JSON document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Result<Cart, CartStoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Cart::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, cart: &Cart) -> Result<(), CartStoreError> {
        fs::write(&self.path, serde_json::to_vec(cart)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::Category;
    use chrono::Utc;

    fn product(name: &str, price: i64) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            price: Decimal::new(price, 0),
            category: Category::Clothing,
            sizes: vec!["S".into(), "M".into()],
            colors: vec!["Blue".into()],
            image: "https://example.test/p.jpg".to_string(),
            stock: 10,
            rating: 4.5,
            num_reviews: 3,
            featured: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_same_key_merges_quantity() {
        let p = product("Dress", 500);
        let mut cart = Cart::default();
        cart.add(&p, 1, "M", "Blue");
        cart.add(&p, 2, "M", "Blue");
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_different_size_is_a_distinct_line() {
        let p = product("Dress", 500);
        let mut cart = Cart::default();
        cart.add(&p, 1, "S", "Blue");
        cart.add(&p, 1, "M", "Blue");
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_zero_quantity_removes_the_line() {
        let p = product("Dress", 500);
        let mut cart = Cart::default();
        cart.add(&p, 2, "M", "Blue");
        let key = cart.lines()[0].key();
        cart.update_quantity(&key, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_not_adds() {
        let p = product("Dress", 500);
        let mut cart = Cart::default();
        cart.add(&p, 2, "M", "Blue");
        let key = cart.lines()[0].key();
        cart.update_quantity(&key, 5);
        assert_eq!(cart.lines()[0].quantity, 5);
    }

    #[test]
    fn test_quote_matches_pricing_rules() {
        let mut cart = Cart::default();
        cart.add(&product("Dress", 500), 2, "M", "Blue");
        let q = cart.quote();
        assert_eq!(q.items_price, Decimal::new(1000, 0));
        assert_eq!(q.total_price, Decimal::new(1180, 0));
    }

    #[test]
    fn test_order_items_snapshot_cart_state() {
        let p = product("Dress", 500);
        let mut cart = Cart::default();
        cart.add(&p, 2, "M", "Blue");
        let items = cart.to_order_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product, p.id);
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].price, p.price);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join(format!("cart-{}.json", Uuid::new_v4()));
        let store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_empty());

        let mut cart = Cart::default();
        cart.add(&product("Dress", 500), 1, "M", "Blue");
        store.save(&cart).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.line_count(), 1);
        assert_eq!(reloaded.lines()[0].name, "Dress");
        fs::remove_file(&path).ok();
    }
}
