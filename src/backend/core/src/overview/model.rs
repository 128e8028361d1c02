//! Data model for the deployment overview grid.
//!
//! The grid is a matrix of web services (rows) against deployment
//! environments (columns). Each cell pairs one service with one environment
//! and, after the fetch phase, carries display-ready content describing the
//! deployed build or the reason it could not be determined.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// Configuration-Owned Identities
// ═══════════════════════════════════════════════════════════════════════════════

/// A named deployment target with a base URL.
///
/// Identity is the name; environments are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: String,
    pub base_url: String,
}

/// A named web service plus the URL path fragment identifying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub name: String,
    pub path_selector: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Remote Build Metadata
// ═══════════════════════════════════════════════════════════════════════════════

/// Build metadata returned by a service's info endpoint.
///
/// Wire shape: `{"build": {"version": "...", "buildTime": "..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStatus {
    pub build: BuildInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    #[serde(rename = "buildTime")]
    pub build_time: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Grid Cells
// ═══════════════════════════════════════════════════════════════════════════════

/// One service deployed to one environment.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInstance {
    pub definition: ServiceDefinition,
    pub environment: Environment,

    /// Populated exactly once, by the fetch phase, when the fetch succeeds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
}

impl ServiceInstance {
    pub fn new(definition: ServiceDefinition, environment: Environment) -> Self {
        Self {
            definition,
            environment,
            status: None,
        }
    }

    /// Identifier used in log output.
    pub fn key(&self) -> String {
        format!("{}_{}", self.environment.name, self.definition.name)
    }
}

/// Placeholder text shown for any failed cell.
pub const FAILURE_PLACEHOLDER: &str = "??";

/// Display-ready representation of one cell's fetch outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellContent {
    /// Cell text: the version on success, the placeholder on failure.
    pub text: String,
    /// Tooltip: the build time on success, the failure description otherwise.
    pub title: String,
    pub is_error: bool,
}

impl CellContent {
    /// Total mapping from a fetch outcome to cell content.
    ///
    /// Every possible outcome has defined content; no unresolved state leaks
    /// out of the dispatch window.
    pub fn from_result<E: std::fmt::Display>(result: Result<BuildStatus, E>) -> Self {
        match result {
            Ok(status) => Self {
                text: status.build.version,
                title: status.build.build_time,
                is_error: false,
            },
            Err(error) => Self {
                text: FAILURE_PLACEHOLDER.to_string(),
                title: error.to_string(),
                is_error: true,
            },
        }
    }
}

/// One grid position.
#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub instance: ServiceInstance,

    /// Write-once; absent only until the dispatch for this cell resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<CellContent>,
}

impl Cell {
    pub fn new(instance: ServiceInstance) -> Self {
        Self {
            instance,
            content: None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rows and the Overview
// ═══════════════════════════════════════════════════════════════════════════════

/// The cells of one web service across all environments, in environment
/// order.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    /// Stripe parity for alternating row shading; even at index 0.
    pub even: bool,
    pub name: String,
    pub cells: Vec<Cell>,
}

/// The finished service × environment matrix.
///
/// The status of the n-th web service in the m-th environment is found at
/// `rows[n].cells[m]`. Row order follows the web service configuration
/// order, column order the environment configuration order.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    /// Columns of the grid.
    pub environments: Vec<Environment>,
    /// Rows of the grid.
    pub web_services: Vec<ServiceDefinition>,

    pub rows: Vec<Row>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
}
