//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in a session slot; handlers load it, apply one
//! mutation through the cart service, and re-render a fragment. Checkout is
//! the exception: it redirects back to the cart page with its outcome in the
//! query string.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use swiftparcel_core::{CurrencyCode, Money, ProductId};

use crate::cart::{self, CartLine, CartService, CheckoutOutcome, session::SessionCartRepository};
use crate::catalog::Catalog;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: "$0.00".to_string(),
            item_count: 0,
        }
    }

    /// Project cart lines against the catalog for display.
    ///
    /// Lines whose product is not in the catalog are not shown (and
    /// contribute nothing to the subtotal).
    #[must_use]
    pub fn from_lines(lines: &[CartLine], catalog: &Catalog) -> Self {
        let items = lines
            .iter()
            .filter_map(|line| {
                catalog.lookup(&line.product_id).map(|product| CartItemView {
                    id: product.id.to_string(),
                    name: product.name.clone(),
                    quantity: line.quantity,
                    unit_price: product.price.display(),
                    line_price: Money::new(
                        product.price.amount * Decimal::from(line.quantity),
                        CurrencyCode::USD,
                    )
                    .display(),
                })
            })
            .collect();

        Self {
            items,
            subtotal: cart::subtotal(lines, catalog).display(),
            item_count: cart::item_count(lines),
        }
    }
}

// =============================================================================
// Form and Query Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub delta: i64,
}

/// Query parameters carrying a checkout outcome back to the cart page.
#[derive(Debug, Deserialize, Default)]
pub struct CheckoutQuery {
    /// Order reference of a completed checkout.
    pub placed: Option<String>,
    /// Set when checkout found nothing to check out.
    pub empty: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    /// Checkout outcome message, if the visitor just checked out.
    pub message: Option<String>,
    pub success: bool,
    /// Seconds before the message auto-clears (cosmetic).
    pub status_secs: u32,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CheckoutQuery>,
) -> impl IntoResponse {
    let repo = SessionCartRepository::new(&session);
    let lines = CartService::new(&repo).lines().await;

    let (message, success) = match (query.placed, query.empty) {
        (Some(reference), _) => (
            Some(format!("Order placed! Your reference is {reference}.")),
            true,
        ),
        (None, Some(_)) => (
            Some("Your cart is empty - nothing to check out.".to_string()),
            false,
        ),
        (None, None) => (None, false),
    };

    CartShowTemplate {
        cart: CartView::from_lines(&lines, state.catalog()),
        message,
        success,
        status_secs: state.config().status_message_secs,
    }
}

/// Add item to cart (HTMX).
///
/// Returns the cart count badge with an HTMX trigger so other fragments
/// refresh. Unknown product ids are ignored: the invariant is that every
/// cart line references a catalog product.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let repo = SessionCartRepository::new(&session);
    let service = CartService::new(&repo);

    let product_id = ProductId::parse(&form.product_id)
        .ok()
        .filter(|id| state.catalog().lookup(id).is_some());

    let result = match product_id {
        Some(id) => service.add(id).await,
        None => {
            tracing::warn!(product_id = %form.product_id, "add to cart for unknown product");
            Ok(service.lines().await)
        }
    };

    match result {
        Ok(lines) => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartCountTemplate {
                count: cart::item_count(&lines),
            },
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to add item to cart: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<span class=\"status-error\">Error adding to cart</span>"),
            )
                .into_response()
        }
    }
}

/// Adjust a cart line's quantity by a delta (HTMX).
///
/// A line reaching quantity 0 disappears from the cart.
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Response {
    let repo = SessionCartRepository::new(&session);
    let service = CartService::new(&repo);

    let Ok(product_id) = ProductId::parse(&form.product_id) else {
        tracing::warn!(product_id = %form.product_id, "cart update for invalid product id");
        let lines = service.lines().await;
        return CartItemsTemplate {
            cart: CartView::from_lines(&lines, state.catalog()),
        }
        .into_response();
    };

    match service.change_quantity(&product_id, form.delta).await {
        Ok(lines) => (
            AppendHeaders([("HX-Trigger", "cart-updated")]),
            CartItemsTemplate {
                cart: CartView::from_lines(&lines, state.catalog()),
            },
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update cart: {e}");
            CartItemsTemplate {
                cart: CartView::empty(),
            }
            .into_response()
        }
    }
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let repo = SessionCartRepository::new(&session);
    let lines = CartService::new(&repo).lines().await;

    CartCountTemplate {
        count: cart::item_count(&lines),
    }
}

/// Simulated checkout.
///
/// Clears a non-empty cart and redirects back to the cart page with the
/// generated order reference; an empty cart redirects with the distinct
/// "nothing to check out" marker instead.
#[instrument(skip(session))]
pub async fn checkout(session: Session) -> Response {
    let repo = SessionCartRepository::new(&session);
    let service = CartService::new(&repo);

    match service.checkout().await {
        Ok(CheckoutOutcome::Completed { reference }) => {
            // References are generated alphanumeric-with-dash, URL-safe as is.
            Redirect::to(&format!("/cart?placed={reference}")).into_response()
        }
        Ok(CheckoutOutcome::EmptyCart) => Redirect::to("/cart?empty=1").into_response(),
        Err(e) => {
            tracing::error!("Failed to check out: {e}");
            Redirect::to("/cart").into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line(id: &str, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::parse(id).unwrap(),
            quantity,
        }
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
    }

    #[test]
    fn test_view_from_lines() {
        let catalog = Catalog::standard();
        let view = CartView::from_lines(&[line("bx-s", 2), line("tap", 1)], &catalog);

        assert_eq!(view.items.len(), 2);
        assert_eq!(view.subtotal, "$6.47");
        assert_eq!(view.item_count, 3);

        let first = view.items.first().unwrap();
        assert_eq!(first.name, "Small Box");
        assert_eq!(first.unit_price, "$1.99");
        assert_eq!(first.line_price, "$3.98");
    }

    #[test]
    fn test_view_skips_unknown_products() {
        let catalog = Catalog::standard();
        let view = CartView::from_lines(&[line("bx-s", 1), line("gone-item", 5)], &catalog);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.subtotal, "$1.99");
    }
}
