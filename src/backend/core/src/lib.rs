//! # Vantage Core
//!
//! Polls a grid of (service × environment) HTTP info endpoints concurrently
//! and aggregates version/build metadata into a renderable status matrix.
//!
//! ## Architecture
//!
//! - **Grid Builder**: expands configuration into the service × environment grid
//! - **Endpoint Resolver**: swappable strategy producing each cell's info-endpoint URL
//! - **Fetch Dispatcher**: one bounded-timeout request per cell, joined by a single barrier
//! - **Cell Content Mapper**: total mapping from fetch outcomes to display content
//! - **Renderers**: stateless HTML table, JSON API shape

pub mod api;
pub mod config;
pub mod error;
pub mod observability;
pub mod overview;

pub use error::{Result, VantageError};

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::config::{Config, OverviewConfig};
    pub use crate::error::{Result, VantageError};
    pub use crate::overview::{
        build_grid, dispatch, render_html, AffixResolver, BuildInfo, BuildStatus, Cell,
        CellContent, EndpointResolver, Environment, FetchError, Overview, OverviewService, Row,
        ServiceDefinition, ServiceInstance, DEFAULT_FETCH_TIMEOUT, FAILURE_PLACEHOLDER,
    };
}
