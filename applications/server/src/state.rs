/// Shared application state
use crate::policy::TrackPolicy;
use crate::services::AuthService;
use aceplay_storage::Database;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub auth_service: Arc<AuthService>,
    pub policy: TrackPolicy,
}

impl AppState {
    pub fn new(db: Arc<Database>, auth_service: Arc<AuthService>, policy: TrackPolicy) -> Self {
        Self {
            db,
            auth_service,
            policy,
        }
    }
}
