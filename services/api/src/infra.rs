use metrics_exporter_prometheus::PrometheusHandle;
use showroom::config::RecommendationConfig;
use showroom::recommendation::{CatalogError, RecommendationEngine, VehicleCatalog};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn load_catalog(path: Option<&Path>) -> Result<VehicleCatalog, CatalogError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading vehicle catalog from file");
            VehicleCatalog::from_path(path)
        }
        None => VehicleCatalog::bundled(),
    }
}

/// Loads the catalog once and wraps it for sharing across requests.
pub(crate) fn build_engine(
    config: &RecommendationConfig,
) -> Result<RecommendationEngine, CatalogError> {
    let catalog = load_catalog(config.catalog_path.as_deref())?;
    Ok(RecommendationEngine::new(Arc::new(catalog)).with_limit(config.result_limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_bundled_catalog() {
        let engine = build_engine(&RecommendationConfig::default()).expect("engine builds");
        assert!(!engine.catalog().is_empty());
        assert_eq!(engine.limit(), 3);
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let config = RecommendationConfig {
            catalog_path: Some("./no-such-catalog.csv".into()),
            result_limit: 3,
        };
        assert!(matches!(build_engine(&config), Err(CatalogError::Io(_))));
    }
}
