//! Session-related types.
//!
//! Types stored in the session for the placeholder auth flow. The cart
//! slot itself is owned by [`crate::cart::session`].

use serde::{Deserialize, Serialize};

use swiftparcel_core::Email;

/// Session-stored account identity.
///
/// The auth flow is a placeholder: this records which email "signed in",
/// nothing more. No credentials are stored or checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAccount {
    /// The email the visitor signed in or registered with.
    pub email: Email,
}

/// Session keys for auth data.
pub mod keys {
    /// Key for storing the demo signed-in account.
    pub const CURRENT_ACCOUNT: &str = "current_account";
}
