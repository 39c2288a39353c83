//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the static product catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::standard(),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_exposes_catalog() {
        let state = AppState::new(SiteConfig::default());
        assert!(!state.catalog().is_empty());
    }

    #[test]
    fn test_state_is_cheaply_cloneable() {
        let state = AppState::new(SiteConfig::default());
        let clone = state.clone();
        assert_eq!(clone.config().port, state.config().port);
    }
}
