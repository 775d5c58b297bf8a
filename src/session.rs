//! Client-side session handles
//!
//! A storefront client owns exactly two pieces of state: the cart it is
//! filling and the credential it authenticates with. Both are explicit
//! handles passed to whatever needs them, never ambient globals. The cart
//! session persists through its injected store after every mutation.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::auth::TOKEN_LIFETIME_DAYS;
use crate::domain::cart::{Cart, CartStore, CartStoreError, LineKey};
use crate::domain::pricing::PriceBreakdown;
use crate::domain::product::Product;

pub struct CartSession {
    cart: Cart,
    store: Box<dyn CartStore>,
}

impl CartSession {
    /// Opens the session, restoring whatever the store last saved.
    pub fn open(store: Box<dyn CartStore>) -> Result<Self, CartStoreError> {
        let cart = store.load()?;
        Ok(Self { cart, store })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        size: &str,
        color: &str,
    ) -> Result<(), CartStoreError> {
        self.cart.add(product, quantity, size, color);
        self.store.save(&self.cart)
    }

    pub fn update_quantity(&mut self, key: &LineKey, quantity: u32) -> Result<(), CartStoreError> {
        self.cart.update_quantity(key, quantity);
        self.store.save(&self.cart)
    }

    pub fn remove(&mut self, key: &LineKey) -> Result<(), CartStoreError> {
        self.cart.remove(key);
        self.store.save(&self.cart)
    }

    /// Clears the cart after a successful checkout.
    pub fn clear(&mut self) -> Result<(), CartStoreError> {
        self.cart.clear();
        self.store.save(&self.cart)
    }

    pub fn checkout_quote(&self) -> PriceBreakdown {
        self.cart.quote()
    }
}

/// The authenticated identity a client carries between requests.
#[derive(Debug, Clone)]
pub struct AuthSession {
    user_id: Uuid,
    token: String,
    expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Wraps a freshly issued credential; expiry mirrors the token lifetime.
    pub fn start(user_id: Uuid, token: String) -> Self {
        Self {
            user_id,
            token,
            expires_at: Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS),
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_active(&self) -> bool {
        Utc::now() < self.expires_at
    }

    /// The header value for protected requests.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Replaces the credential after a profile update re-issues one.
    pub fn refresh(&mut self, token: String) {
        self.token = token;
        self.expires_at = Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::JsonFileStore;
    use crate::domain::product::Category;
    use rust_decimal::Decimal;

    fn product(price: i64) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Handbag".to_string(),
            description: String::new(),
            price: Decimal::new(price, 0),
            category: Category::Bags,
            sizes: vec!["Free Size".into()],
            colors: vec!["Black".into()],
            image: "https://example.test/bag.jpg".to_string(),
            stock: 5,
            rating: 4.7,
            num_reviews: 18,
            featured: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_survives_session_reopen() {
        let path = std::env::temp_dir().join(format!("session-{}.json", Uuid::new_v4()));
        let p = product(2499);

        let mut session = CartSession::open(Box::new(JsonFileStore::new(&path))).unwrap();
        session.add(&p, 1, "Free Size", "Black").unwrap();
        drop(session);

        let reopened = CartSession::open(Box::new(JsonFileStore::new(&path))).unwrap();
        assert_eq!(reopened.cart().line_count(), 1);
        assert_eq!(reopened.checkout_quote().items_price, Decimal::new(2499, 0));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let path = std::env::temp_dir().join(format!("session-{}.json", Uuid::new_v4()));
        let p = product(500);

        let mut session = CartSession::open(Box::new(JsonFileStore::new(&path))).unwrap();
        session.add(&p, 2, "Free Size", "Black").unwrap();
        session.clear().unwrap();
        drop(session);

        let reopened = CartSession::open(Box::new(JsonFileStore::new(&path))).unwrap();
        assert!(reopened.cart().is_empty());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_auth_session_lifecycle() {
        let id = Uuid::new_v4();
        let mut session = AuthSession::start(id, "abc.def.ghi".to_string());
        assert!(session.is_active());
        assert_eq!(session.user_id(), id);
        assert_eq!(session.bearer_header(), "Bearer abc.def.ghi");
        session.refresh("jkl.mno.pqr".to_string());
        assert_eq!(session.token(), "jkl.mno.pqr");
    }
}
