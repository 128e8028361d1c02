//! Endpoint resolution strategies.

use super::model::{Environment, ServiceDefinition};

/// Strategy for turning an (environment, service) pairing into the URL of
/// its info endpoint.
///
/// Pure and deterministic; the dispatcher only ever sees this trait, so
/// alternative construction schemes can be added without touching the fetch
/// path.
pub trait EndpointResolver: Send + Sync {
    fn info_endpoint(&self, environment: &Environment, definition: &ServiceDefinition) -> String;
}

/// Builds the endpoint as `base_url + mid_fix + path_selector + post_fix`.
#[derive(Debug, Clone)]
pub struct AffixResolver {
    mid_fix: String,
    post_fix: String,
}

impl AffixResolver {
    pub fn new(mid_fix: impl Into<String>, post_fix: impl Into<String>) -> Self {
        Self {
            mid_fix: mid_fix.into(),
            post_fix: post_fix.into(),
        }
    }
}

impl EndpointResolver for AffixResolver {
    fn info_endpoint(&self, environment: &Environment, definition: &ServiceDefinition) -> String {
        format!(
            "{}{}{}{}",
            environment.base_url, self.mid_fix, definition.path_selector, self.post_fix
        )
    }
}
