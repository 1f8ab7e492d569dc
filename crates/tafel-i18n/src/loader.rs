use std::path::Path;
use std::time::Duration;

use tafel_config::assets::AssetsConfig;

use crate::catalog::{Catalog, CatalogError};

const EMBEDDED: &str = include_str!("../data/translations.json");

/// Which source actually produced the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Remote,
    File,
    Embedded,
    /// Nothing was usable; `translate` passes keys through.
    Empty,
}

#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub source: CatalogSource,
}

/// Load the translation catalog. Tries the configured URL, then the
/// configured file, then the embedded asset; never raises. A total
/// failure degrades to an empty catalog rather than a literal fallback
/// table.
pub async fn load(config: &AssetsConfig) -> CatalogLoad {
    if let Some(url) = &config.translations_url {
        match load_from_url(url, config.fetch_timeout_ms).await {
            Ok(catalog) => {
                tracing::info!(url, "loaded translations");
                return CatalogLoad { catalog, source: CatalogSource::Remote };
            }
            Err(e) => tracing::warn!(url, error = %e, "failed to fetch translations"),
        }
    }

    if let Some(path) = &config.translations_path {
        match load_from_file(Path::new(path)) {
            Ok(catalog) => {
                tracing::info!(path, "loaded translations");
                return CatalogLoad { catalog, source: CatalogSource::File };
            }
            Err(e) => tracing::warn!(path, error = %e, "failed to read translations"),
        }
    }

    match Catalog::from_json(EMBEDDED) {
        Ok(catalog) => CatalogLoad { catalog, source: CatalogSource::Embedded },
        Err(e) => {
            tracing::error!(error = %e, "embedded translations unusable, degrading to passthrough");
            CatalogLoad {
                catalog: Catalog::empty(),
                source: CatalogSource::Empty,
            }
        }
    }
}

pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogError> {
    let json = std::fs::read_to_string(path)?;
    Catalog::from_json(&json)
}

pub async fn load_from_url(url: &str, timeout_ms: u64) -> Result<Catalog, CatalogError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .build()?;
    let json = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Catalog::from_json(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tafel_types::Language;

    #[tokio::test]
    async fn embedded_catalog_covers_all_languages() {
        let load = load(&AssetsConfig::default()).await;
        assert_eq!(load.source, CatalogSource::Embedded);
        assert_eq!(load.catalog.languages().count(), Language::ALL.len());
        for language in Language::ALL {
            assert_ne!(load.catalog.translate(language, "title"), "title");
        }
    }

    #[tokio::test]
    async fn unreadable_file_override_falls_back_to_embedded() {
        let config = AssetsConfig {
            translations_path: Some("/nonexistent/translations.json".to_string()),
            ..AssetsConfig::default()
        };
        let load = load(&config).await;
        assert_eq!(load.source, CatalogSource::Embedded);
        assert!(!load.catalog.is_empty());
    }
}
