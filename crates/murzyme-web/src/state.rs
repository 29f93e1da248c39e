//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Instant;

use murzyme_common::MurzymeConfig;

/// Shared state injected into every Axum handler.
/// Comparisons are pure, so the state only carries configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: MurzymeConfig,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: MurzymeConfig) -> Self {
        Self { config, started_at: Instant::now() }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MurzymeConfig::default())
    }
}

pub type SharedState = Arc<AppState>;
