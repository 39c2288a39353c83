//! Cart state and storage.
//!
//! The cart is an ordered list of product/quantity lines with at most one
//! line per product. Mutations are pure functions over owned vectors;
//! persistence goes through the [`CartRepository`] seam so the session slot
//! can be swapped for an in-memory store in tests.
//!
//! Access is single-actor by construction - one visitor, one synchronous
//! read-modify-write per request - so there is no locking at this layer.

pub mod memory;
pub mod session;

use std::future::Future;

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use swiftparcel_core::{CurrencyCode, Money, ProductId};

use crate::catalog::Catalog;

/// One product/quantity pairing in a cart.
///
/// Serializes to the persisted wire format `{"id": ..., "qty": ...}`.
/// Quantity is always at least 1 in storage; lines that reach 0 are removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    #[serde(rename = "id")]
    pub product_id: ProductId,
    /// How many units of the product.
    #[serde(rename = "qty")]
    pub quantity: u32,
}

/// Error writing to the cart store.
#[derive(Debug, Error)]
pub enum CartStoreError {
    /// The underlying session store rejected the write.
    #[error("session store error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

/// Storage seam for the persisted cart slot.
///
/// `load` fails open: missing or malformed stored data yields an empty
/// cart and never an error.
pub trait CartRepository {
    /// Load the persisted cart, or empty if absent or unreadable.
    fn load(&self) -> impl Future<Output = Vec<CartLine>> + Send;

    /// Overwrite the persisted cart.
    fn store(&self, lines: Vec<CartLine>) -> impl Future<Output = Result<(), CartStoreError>> + Send;
}

/// Outcome of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was cleared; `reference` is the generated order reference.
    Completed {
        /// Demo order reference shown to the visitor.
        reference: String,
    },
    /// The cart was already empty; nothing changed.
    EmptyCart,
}

// =============================================================================
// Pure cart operations
// =============================================================================

/// Add one unit of a product: increment an existing line, or append a new
/// line with quantity 1.
#[must_use]
pub fn add_line(mut lines: Vec<CartLine>, product_id: ProductId) -> Vec<CartLine> {
    if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
        line.quantity = line.quantity.saturating_add(1);
    } else {
        lines.push(CartLine {
            product_id,
            quantity: 1,
        });
    }
    lines
}

/// Adjust a line's quantity by `delta`, clamped at zero.
///
/// A line reaching zero is removed rather than stored at quantity 0.
/// Product ids with no line in the cart are left untouched.
#[must_use]
pub fn apply_delta(mut lines: Vec<CartLine>, product_id: &ProductId, delta: i64) -> Vec<CartLine> {
    if let Some(line) = lines.iter_mut().find(|l| l.product_id == *product_id) {
        let adjusted = i64::from(line.quantity).saturating_add(delta).max(0);
        line.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
    }
    lines.retain(|l| l.quantity > 0);
    lines
}

/// Sum of `price * quantity` over the cart.
///
/// Lines whose product is absent from the catalog contribute nothing.
#[must_use]
pub fn subtotal(lines: &[CartLine], catalog: &Catalog) -> Money {
    let amount = lines
        .iter()
        .filter_map(|line| {
            catalog
                .lookup(&line.product_id)
                .map(|product| product.price.amount * Decimal::from(line.quantity))
        })
        .sum();

    Money::new(amount, CurrencyCode::USD)
}

/// Total number of units across all lines.
#[must_use]
pub fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|l| l.quantity).fold(0, u32::saturating_add)
}

// =============================================================================
// Service
// =============================================================================

/// Cart operations over a repository: load, apply a pure mutation, persist.
pub struct CartService<'a, R> {
    repo: &'a R,
}

impl<'a, R: CartRepository> CartService<'a, R> {
    /// Create a service over a repository.
    #[must_use]
    pub const fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    /// The current cart lines.
    pub async fn lines(&self) -> Vec<CartLine> {
        self.repo.load().await
    }

    /// Add one unit of a product and persist.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError` if the persist fails.
    pub async fn add(&self, product_id: ProductId) -> Result<Vec<CartLine>, CartStoreError> {
        let lines = add_line(self.repo.load().await, product_id);
        self.repo.store(lines.clone()).await?;
        Ok(lines)
    }

    /// Adjust a line's quantity by `delta` and persist.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError` if the persist fails.
    pub async fn change_quantity(
        &self,
        product_id: &ProductId,
        delta: i64,
    ) -> Result<Vec<CartLine>, CartStoreError> {
        let lines = apply_delta(self.repo.load().await, product_id, delta);
        self.repo.store(lines.clone()).await?;
        Ok(lines)
    }

    /// Check out: clear a non-empty cart and return an order reference, or
    /// report that there was nothing to check out.
    ///
    /// # Errors
    ///
    /// Returns `CartStoreError` if clearing the cart fails.
    pub async fn checkout(&self) -> Result<CheckoutOutcome, CartStoreError> {
        let lines = self.repo.load().await;
        if lines.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }

        self.repo.store(Vec::new()).await?;
        Ok(CheckoutOutcome::Completed {
            reference: order_reference(),
        })
    }
}

/// Generate a demo order reference like `ORD-7F2K9QXA`.
fn order_reference() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..8)
        .map(|_| char::from(rng.sample(rand::distr::Alphanumeric)).to_ascii_uppercase())
        .collect();
    format!("ORD-{suffix}")
}
