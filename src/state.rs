use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<dyn LinkRepository>>) -> Self {
        Self { link_service }
    }
}
