//! SwiftParcel Core - Shared types library.
//!
//! This crate provides common types used across all SwiftParcel components:
//! - `site` - The public courier demo site (quotes, tracking, supplies shop)
//! - `integration-tests` - Cross-module test suite
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP, no session access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes and enums for money, products, delivery
//!   zones, service tiers, tracking numbers, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
