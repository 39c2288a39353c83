//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /health                 - Health check
//!
//! # Quotes
//! GET  /quote                  - Quote form
//! POST /quote/estimate         - Price a shipment (fragment)
//! POST /quote/book             - Fake-book a shipment (fragment)
//!
//! # Tracking
//! GET  /track                  - Tracking form
//! POST /track                  - Tracking timeline for a number
//!
//! # Shop
//! GET  /shop                   - Supplies listing
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart (returns count, triggers cart-updated)
//! POST /cart/update            - Adjust quantity by delta (returns cart_items fragment)
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/checkout          - Simulated checkout (redirects with outcome)
//!
//! # Auth (placeholder)
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//! ```

pub mod auth;
pub mod cart;
pub mod home;
pub mod quote;
pub mod shop;
pub mod track;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the quote routes router.
pub fn quote_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(quote::show))
        .route("/estimate", post(quote::estimate))
        .route("/book", post(quote::book))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Quote routes
        .nest("/quote", quote_routes())
        // Tracking
        .route("/track", get(track::show).post(track::lookup))
        // Shop
        .route("/shop", get(shop::index))
        // Cart routes
        .nest("/cart", cart_routes())
        // Auth routes
        .nest("/auth", auth_routes())
}

/// Fallback handler for unmatched paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("page".to_string())
}
