//! Concurrent fetch of build information across the deployment grid.
//!
//! One future per cell, each performing a single GET against the cell's
//! resolved info endpoint with its own request deadline. All futures are
//! joined by a single barrier; the grid is only published once every cell
//! holds terminal content. There is no retry, no rate limiting, and no
//! concurrency cap beyond one task per cell.

use std::time::{Duration, Instant};

use futures::future;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::observability::metrics;

use super::endpoint::EndpointResolver;
use super::model::{BuildStatus, CellContent, Overview};

/// Per-request deadline applied when the configuration does not set one.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(2);

// ═══════════════════════════════════════════════════════════════════════════════
// Failure Taxonomy
// ═══════════════════════════════════════════════════════════════════════════════

/// Classified outcome of a single cell's failed fetch.
///
/// These never propagate past the dispatcher: each is recovered locally into
/// error-flagged content for its own cell.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint URL could not be turned into a request. A malformed base
    /// URL is a configuration problem, but within one cell's fetch it
    /// degrades to a local error instead of aborting the dispatch.
    #[error("invalid info endpoint: {0}")]
    InvalidEndpoint(String),

    /// The request did not complete within the configured deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Any transport failure other than a timeout.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status code.
    #[error("API responded with status {0}")]
    Status(u16),

    /// The response body did not match the expected build-info shape.
    #[error("could not decode build info: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short label used as the metric dimension for failures.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidEndpoint(_) => "invalid_endpoint",
            Self::Timeout(_) => "timeout",
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Dispatcher
// ═══════════════════════════════════════════════════════════════════════════════

/// Fetch build information for every cell of the overview concurrently.
///
/// Blocks until all cells have resolved; the single `join_all` barrier is
/// the only synchronization point. Each future computes the content for
/// exactly one slot, identified by its (row, column) index, so no two tasks
/// ever write the same cell and no locking is needed. One cell's failure
/// never affects any other cell.
pub async fn dispatch(
    overview: &mut Overview,
    resolver: &dyn EndpointResolver,
    client: &reqwest::Client,
    timeout: Duration,
) {
    let mut tasks = Vec::new();
    for (row_index, row) in overview.rows.iter().enumerate() {
        for (column_index, cell) in row.cells.iter().enumerate() {
            let url = resolver.info_endpoint(&cell.instance.environment, &cell.instance.definition);
            let key = cell.instance.key();
            let client = client.clone();

            tasks.push(async move {
                let started = Instant::now();
                let outcome = fetch_build_status(&client, &url, timeout).await;
                match &outcome {
                    Ok(status) => {
                        metrics::record_fetch_success(started.elapsed().as_secs_f64());
                        debug!(
                            instance = %key,
                            version = %status.build.version,
                            "Fetched build info"
                        );
                    }
                    Err(error) => {
                        metrics::record_fetch_failed(error.kind());
                        warn!(
                            instance = %key,
                            url = %url,
                            error = %error,
                            "Fetching build info failed"
                        );
                    }
                }
                (row_index, column_index, outcome)
            });
        }
    }

    let outcomes = future::join_all(tasks).await;

    for (row_index, column_index, outcome) in outcomes {
        let cell = &mut overview.rows[row_index].cells[column_index];
        if let Ok(status) = &outcome {
            cell.instance.status = Some(status.clone());
        }
        cell.content = Some(CellContent::from_result(outcome));
    }

    info!(
        web_services = overview.web_services.len(),
        environments = overview.environments.len(),
        "Loaded service information for all cells"
    );
}

/// Perform the single GET for one cell and classify any failure.
async fn fetch_build_status(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<BuildStatus, FetchError> {
    let request = client
        .get(url)
        .timeout(timeout)
        .build()
        .map_err(|error| FetchError::InvalidEndpoint(error.to_string()))?;

    let response = client
        .execute(request)
        .await
        .map_err(|error| classify_transport(error, timeout))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    response.json::<BuildStatus>().await.map_err(|error| {
        if error.is_decode() {
            FetchError::Decode(error.to_string())
        } else {
            classify_transport(error, timeout)
        }
    })
}

fn classify_transport(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Transport(error.to_string())
    }
}
