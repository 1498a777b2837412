use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, ResolverService};

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    pub resolver_service: Arc<ResolverService>,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        auth_service: Arc<AuthService>,
        resolver_service: Arc<ResolverService>,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            resolver_service,
        }
    }
}
