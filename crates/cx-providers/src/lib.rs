#![allow(non_snake_case)]

pub mod auth;
pub mod backend;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod session;

pub use backend::{BackendClient, BackendConfig};
pub use config::{Config, ServerConfig};
pub use dashboard::DashboardDefaults;
pub use error::ProviderError;
pub use session::{SessionConfig, SessionStore};

/// Server-side collaborators shared by the REST routes and the Leptos server functions.
#[derive(Clone, Debug)]
pub struct Services {
    pub backend: BackendClient,
    pub sessions: SessionStore,
    pub dashboard: DashboardDefaults,
}

impl Services {
    pub fn new(
        backend: BackendConfig,
        session: SessionConfig,
        dashboard: DashboardDefaults,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            backend: BackendClient::new(backend)?,
            sessions: SessionStore::new(session),
            dashboard,
        })
    }
}
