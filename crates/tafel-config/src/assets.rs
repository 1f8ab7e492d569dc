use std::env;

use serde::{Deserialize, Serialize};

fn default_fetch_timeout_ms() -> u64 {
    3000
}

/// Where the spelling table and translation catalog come from.
///
/// Both ship embedded; a file path or HTTP URL overrides the embedded
/// copy. Unusable overrides are logged and skipped, never fatal.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AssetsConfig {
    #[serde(default)]
    pub dictionary_url: Option<String>,
    #[serde(default)]
    pub dictionary_path: Option<String>,
    #[serde(default)]
    pub translations_url: Option<String>,
    #[serde(default)]
    pub translations_path: Option<String>,
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

impl AssetsConfig {
    pub fn new() -> Self {
        let fetch_timeout_ms = env::var("TAFEL_FETCH_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_fetch_timeout_ms);

        Self {
            dictionary_url: env::var("TAFEL_DICT_URL").ok(),
            dictionary_path: env::var("TAFEL_DICT_PATH").ok(),
            translations_url: env::var("TAFEL_I18N_URL").ok(),
            translations_path: env::var("TAFEL_I18N_PATH").ok(),
            fetch_timeout_ms,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dictionary_url: None,
            dictionary_path: None,
            translations_url: None,
            translations_path: None,
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}
