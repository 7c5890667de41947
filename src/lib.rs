//! NIKONEKTI data-access gateway.
//!
//! A backend-agnostic contract over the rental marketplace's data: a simulated backend
//! with artificial latency over a local persisted store, and a REST backend. The
//! strategy is picked once at startup and injected into [`Gateway`].

pub mod advisor;
pub mod backend;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod session;
pub mod store;

pub use errors::{GatewayError, Result};
pub use gateway::Gateway;

use config::Config;
use session::Session;

/// Open the store, build the configured backend and restore the session.
pub async fn connect(config: &Config) -> Result<Gateway> {
    let store = store::init_store(&config.store_path).await?;
    let backend = backend::from_config(config, store.clone()).await?;
    let session = Session::load(store).await?;
    Ok(Gateway::new(backend, session))
}
