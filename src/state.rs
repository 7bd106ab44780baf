use std::sync::Arc;

use crate::application::services::VisitService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub visit_service: Arc<VisitService>,
}

impl AppState {
    pub fn new(visit_service: Arc<VisitService>) -> Self {
        Self { visit_service }
    }
}
