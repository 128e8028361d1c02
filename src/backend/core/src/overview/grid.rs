//! Expands the configuration into the service × environment grid.

use crate::config::OverviewConfig;

use super::model::{Cell, Overview, Row, ServiceInstance};

/// Build an empty overview grid from the configuration.
///
/// One row per web service and one cell per environment, both in
/// configuration order. Row shading parity alternates, starting even at
/// index 0. No I/O and no failure modes: an empty service or environment
/// list yields an empty grid, not an error.
pub fn build_grid(config: &OverviewConfig) -> Overview {
    let mut rows = Vec::with_capacity(config.web_services.len());
    for (index, definition) in config.web_services.iter().enumerate() {
        let cells = config
            .environments
            .iter()
            .map(|environment| {
                Cell::new(ServiceInstance::new(
                    definition.clone(),
                    environment.clone(),
                ))
            })
            .collect();
        rows.push(Row {
            even: index % 2 == 0,
            name: definition.name.clone(),
            cells,
        });
    }

    Overview {
        environments: config.environments.clone(),
        web_services: config.web_services.clone(),
        rows,
        collected_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overview::model::{Environment, ServiceDefinition};

    fn config(environments: &[&str], web_services: &[&str]) -> OverviewConfig {
        OverviewConfig {
            environments: environments
                .iter()
                .map(|name| Environment {
                    name: name.to_string(),
                    base_url: format!("http://{name}"),
                })
                .collect(),
            web_services: web_services
                .iter()
                .map(|name| ServiceDefinition {
                    name: name.to_string(),
                    path_selector: name.to_string(),
                })
                .collect(),
            ..OverviewConfig::default()
        }
    }

    #[test]
    fn dimensions_match_configuration() {
        let overview = build_grid(&config(&["dev", "staging", "prod"], &["billing", "search"]));
        assert_eq!(overview.rows.len(), 2);
        for row in &overview.rows {
            assert_eq!(row.cells.len(), 3);
        }
    }

    #[test]
    fn rows_and_columns_follow_configuration_order() {
        let overview = build_grid(&config(&["dev", "prod"], &["billing", "search"]));
        assert_eq!(overview.rows[0].name, "billing");
        assert_eq!(overview.rows[1].name, "search");
        for row in &overview.rows {
            assert_eq!(row.cells[0].instance.environment.name, "dev");
            assert_eq!(row.cells[1].instance.environment.name, "prod");
        }
    }

    #[test]
    fn row_parity_alternates_starting_even() {
        let overview = build_grid(&config(&["dev"], &["a", "b", "c"]));
        assert!(overview.rows[0].even);
        assert!(!overview.rows[1].even);
        assert!(overview.rows[2].even);
    }

    #[test]
    fn cells_start_without_content_or_status() {
        let overview = build_grid(&config(&["dev"], &["billing"]));
        let cell = &overview.rows[0].cells[0];
        assert!(cell.content.is_none());
        assert!(cell.instance.status.is_none());
    }

    #[test]
    fn empty_configuration_yields_empty_grid() {
        let overview = build_grid(&OverviewConfig::default());
        assert!(overview.rows.is_empty());
        assert!(overview.environments.is_empty());
        assert!(overview.web_services.is_empty());
    }
}
