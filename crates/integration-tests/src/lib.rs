//! Integration tests for SwiftParcel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p swiftparcel-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart service flows over the in-memory and session stores
//! - `pricing_properties` - Quote estimator properties and reference values
//! - `tracking_simulation` - Determinism and shape of simulated tracking
