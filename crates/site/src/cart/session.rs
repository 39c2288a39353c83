//! Session-backed cart storage.
//!
//! The cart lives in a single session slot keyed `"cart"`, holding the
//! JSON-encoded line array. This is the demo's only persisted state; it
//! survives page reloads for as long as the visitor's session does.

use tower_sessions::Session;

use super::{CartLine, CartRepository, CartStoreError};

/// Session key for the serialized cart slot.
pub const CART_KEY: &str = "cart";

/// Cart repository backed by the visitor's session.
pub struct SessionCartRepository<'a> {
    session: &'a Session,
}

impl<'a> SessionCartRepository<'a> {
    /// Create a repository over a request's session.
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl CartRepository for SessionCartRepository<'_> {
    async fn load(&self) -> Vec<CartLine> {
        match self.session.get::<Vec<CartLine>>(CART_KEY).await {
            Ok(lines) => lines.unwrap_or_default(),
            Err(e) => {
                // Unreadable slot data is treated as an empty cart.
                tracing::warn!(error = %e, "failed to read cart from session");
                Vec::new()
            }
        }
    }

    async fn store(&self, lines: Vec<CartLine>) -> Result<(), CartStoreError> {
        self.session.insert(CART_KEY, lines).await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;

    fn fresh_session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_load_absent_slot_is_empty() {
        let session = fresh_session();
        let repo = SessionCartRepository::new(&session);

        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_store_then_load_roundtrip() {
        let session = fresh_session();
        let repo = SessionCartRepository::new(&session);

        let lines = vec![CartLine {
            product_id: swiftparcel_core::ProductId::parse("bx-s").unwrap(),
            quantity: 2,
        }];
        repo.store(lines.clone()).await.unwrap();

        assert_eq!(repo.load().await, lines);
    }

    #[tokio::test]
    async fn test_load_malformed_slot_fails_open() {
        let session = fresh_session();

        // Something that is not a cart at all.
        session.insert(CART_KEY, "definitely-not-a-cart").await.unwrap();

        let repo = SessionCartRepository::new(&session);
        assert!(repo.load().await.is_empty());
    }
}
