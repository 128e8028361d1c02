//! Deployment overview engine.
//!
//! Builds the service × environment grid from configuration, fetches build
//! information for every cell concurrently, and hands the finished grid to
//! whichever renderer consumes it (HTML page, JSON API, terminal table).
//!
//! Data flow: configuration → [`build_grid`] → empty grid → [`dispatch`]
//! (parallel fetch, one task per cell) → completed grid → renderer.

mod endpoint;
mod fetch;
mod grid;
mod model;
mod render;

pub use endpoint::{AffixResolver, EndpointResolver};
pub use fetch::{dispatch, FetchError, DEFAULT_FETCH_TIMEOUT};
pub use grid::build_grid;
pub use model::{
    BuildInfo, BuildStatus, Cell, CellContent, Environment, Overview, Row, ServiceDefinition,
    ServiceInstance, FAILURE_PLACEHOLDER,
};
pub use render::render_html;

use chrono::Utc;

use crate::config::OverviewConfig;

/// Collects a fresh overview on demand.
///
/// Owns the grid configuration, the endpoint resolution strategy, and a
/// shared HTTP client (connection reuse across cells is whatever the client
/// pool provides).
pub struct OverviewService {
    config: OverviewConfig,
    resolver: Box<dyn EndpointResolver>,
    client: reqwest::Client,
}

impl OverviewService {
    /// Create a service using the configuration's affix strategy.
    pub fn new(config: OverviewConfig) -> Self {
        let resolver = AffixResolver::new(config.mid_fix.clone(), config.post_fix.clone());
        Self {
            config,
            resolver: Box::new(resolver),
            client: reqwest::Client::new(),
        }
    }

    /// Swap in a different endpoint resolution strategy.
    pub fn with_resolver(mut self, resolver: Box<dyn EndpointResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Build the grid, fetch every cell, and return the finished overview.
    ///
    /// Nothing is cached between calls; every invocation polls all endpoints
    /// again and returns a grid whose cells all hold terminal content.
    pub async fn collect(&self) -> Overview {
        let mut overview = build_grid(&self.config);
        dispatch(
            &mut overview,
            self.resolver.as_ref(),
            &self.client,
            self.config.fetch_timeout,
        )
        .await;
        overview.collected_at = Some(Utc::now());
        overview
    }
}
