use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use tafel_config::assets::AssetsConfig;
use tafel_core::SpellingTable;

use crate::fallback;

const EMBEDDED: &str = include_str!("../data/din5009.json");

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Table data contains no usable entries")]
    EmptyTable,
}

/// Which source actually produced the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSource {
    Remote,
    File,
    Embedded,
    Builtin,
}

#[derive(Debug, Clone)]
pub struct TableLoad {
    pub table: SpellingTable,
    pub source: TableSource,
}

pub struct Din5009Loader;

impl Din5009Loader {
    /// Parse table data: a flat JSON map from single-character key to
    /// code word.
    pub fn from_json(json: &str) -> Result<SpellingTable, TableError> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let table = SpellingTable::from_entries(raw);
        if table.is_empty() {
            return Err(TableError::EmptyTable);
        }
        Ok(table)
    }

    pub fn load_embedded() -> Result<SpellingTable, TableError> {
        Self::from_json(EMBEDDED)
    }

    pub fn load_from_file(path: &Path) -> Result<SpellingTable, TableError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub async fn load_from_url(url: &str, timeout_ms: u64) -> Result<SpellingTable, TableError> {
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
        Self::from_json(&json)
    }
}

/// Load the spelling table. Tries the configured URL, then the configured
/// file, then the embedded asset, then the built-in fallback; never
/// raises. The returned [`TableSource`] tells callers whether they got
/// loaded data or the fallback.
pub async fn load(config: &AssetsConfig) -> TableLoad {
    if let Some(url) = &config.dictionary_url {
        match Din5009Loader::load_from_url(url, config.fetch_timeout_ms).await {
            Ok(table) => {
                tracing::info!(url, entries = table.len(), "loaded spelling table");
                return TableLoad { table, source: TableSource::Remote };
            }
            Err(e) => tracing::warn!(url, error = %e, "failed to fetch spelling table"),
        }
    }

    if let Some(path) = &config.dictionary_path {
        match Din5009Loader::load_from_file(Path::new(path)) {
            Ok(table) => {
                tracing::info!(path, entries = table.len(), "loaded spelling table");
                return TableLoad { table, source: TableSource::File };
            }
            Err(e) => tracing::warn!(path, error = %e, "failed to read spelling table"),
        }
    }

    match Din5009Loader::load_embedded() {
        Ok(table) => TableLoad { table, source: TableSource::Embedded },
        Err(e) => {
            tracing::error!(error = %e, "embedded spelling table unusable, using built-in fallback");
            TableLoad {
                table: fallback::builtin_table(),
                source: TableSource::Builtin,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_asset_matches_the_builtin_fallback() {
        let embedded = Din5009Loader::load_embedded().unwrap();
        assert_eq!(embedded, fallback::builtin_table());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Din5009Loader::from_json("not json"),
            Err(TableError::Parse(_))
        ));
    }

    #[test]
    fn empty_map_is_rejected() {
        assert!(matches!(
            Din5009Loader::from_json("{}"),
            Err(TableError::EmptyTable)
        ));
    }

    #[tokio::test]
    async fn unreadable_file_override_falls_back_to_embedded() {
        let config = AssetsConfig {
            dictionary_path: Some("/nonexistent/din5009.json".to_string()),
            ..AssetsConfig::default()
        };
        let load = load(&config).await;
        assert_eq!(load.source, TableSource::Embedded);
        assert_eq!(load.table.code_word('a'), Some("Aachen"));
    }

    #[tokio::test]
    async fn default_config_loads_the_embedded_asset() {
        let load = load(&AssetsConfig::default()).await;
        assert_eq!(load.source, TableSource::Embedded);
        for letter in 'a'..='z' {
            assert!(load.table.contains(letter));
        }
    }
}
