//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The state is
//! read-only after startup.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// All fields are cheap to clone across async tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Renders the Prometheus scrape output; `None` when metrics are disabled
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clone_shares_config() {
        let state = AppState::new(AppConfig::default(), None);
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
        assert_eq!(cloned.config().server.port, 8080);
    }
}
