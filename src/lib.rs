pub mod assets;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod session;
pub mod template;

use std::{sync::Arc, time::Duration};

use axum::Router;
use nebjtech_contact::HttpSubmissionClient;
use tower_http::compression::CompressionLayer;

pub use config::Config;
pub use routes::{AppState, router};
pub use session::SessionStore;

impl AppState {
    /// Wires the form endpoint client and the session store from configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = HttpSubmissionClient::new(
            config.contact.endpoint.to_owned(),
            Duration::from_secs(config.contact.timeout_secs),
        )?;

        let sessions = SessionStore::new(Arc::new(client), &config.session);

        Ok(Self { config, sessions })
    }
}

/// Router with the response layers every deployment runs with.
pub fn app(state: AppState) -> Router {
    router(state)
        // No-cache for pages, long-lived cache for embedded assets
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
}
