//! Shared model types for the site.

pub mod session;

pub use session::CurrentAccount;
