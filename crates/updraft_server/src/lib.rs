use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use tracing::warn;
use updraft_core::traits::UpdateStore;

mod api;

pub mod params;
pub mod state;

pub use api::{ApiError, ErrorResponse, ProblemDetails};

use state::AppState;

/// The builder for the Updraft Server.
#[derive(Clone, Debug, Default)]
pub struct UpdraftServer {
    config: UpdraftServerConfig,
}

impl UpdraftServer {
    pub fn new(config: UpdraftServerConfig) -> Self {
        Self { config }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UpdraftServerConfig {
    /// Used verbatim as the URL prefix of every asset in a served manifest.
    pub base_url: String,
}

impl UpdraftServer {
    pub fn build<S: UpdateStore>(self, store: S) -> Router {
        if self.config.base_url.is_empty() {
            warn!("No base URL configured. Served asset URLs will be relative!")
        }
        let state = AppState {
            store,
            config: self.config,
        };

        Router::new()
            .route("/health", get(|| async { "OK" }))
            .route("/manifest", get(api::get_manifest))
            .route("/assets", get(api::download_asset))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

pub mod prelude {
    pub use crate::params::*;
    pub use crate::state::*;
    pub use crate::{ApiError, ErrorResponse, ProblemDetails, UpdraftServer, UpdraftServerConfig};
}
