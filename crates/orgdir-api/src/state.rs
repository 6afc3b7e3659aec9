//! Application state for the API server

use orgdir_store::OrgStore;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared record store
    pub store: OrgStore,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around a store
    pub fn new(store: OrgStore) -> Self {
        Self {
            store,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(OrgStore::new())
    }
}
