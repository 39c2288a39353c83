//! In-memory cart storage.
//!
//! Drop-in substitute for the session-backed repository, used by the test
//! suites and anywhere a cart is needed without a request context.

use std::sync::Mutex;

use super::{CartLine, CartRepository, CartStoreError};

/// Cart repository holding lines in memory.
#[derive(Debug, Default)]
pub struct MemoryCartRepository {
    lines: Mutex<Vec<CartLine>>,
}

impl MemoryCartRepository {
    /// Create an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with lines.
    #[must_use]
    pub fn with_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: Mutex::new(lines),
        }
    }
}

impl CartRepository for MemoryCartRepository {
    async fn load(&self) -> Vec<CartLine> {
        // A poisoned lock means a test thread panicked; fail open like the
        // session store does.
        self.lines.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    async fn store(&self, lines: Vec<CartLine>) -> Result<(), CartStoreError> {
        if let Ok(mut guard) = self.lines.lock() {
            *guard = lines;
        }
        Ok(())
    }
}
