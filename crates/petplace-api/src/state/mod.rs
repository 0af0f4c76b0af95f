//! Shared application state
//!
//! Everything a handler needs (repositories, external clients, config)
//! hangs off the service context. Cloning the state is cheap since the
//! heavy parts sit behind `Arc`.

use std::sync::Arc;

use petplace_common::{AppConfig, JwtService};
use petplace_service::ServiceContext;

/// State injected into every route via `with_state`.
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Owned handle for background tasks that outlive a request
    pub fn service_context_handle(&self) -> Arc<ServiceContext> {
        Arc::clone(&self.service_context)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shortcut for the auth extractor.
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Config carries secrets, keep it out of debug output.
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
