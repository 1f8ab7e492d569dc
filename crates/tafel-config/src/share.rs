use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://tafel.app/";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Share-link settings. The base URL is what `word`/`lang` query
/// parameters get attached to.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ShareConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl ShareConfig {
    pub fn new() -> Self {
        let base_url = env::var("TAFEL_SHARE_BASE").unwrap_or_else(|_| default_base_url());

        Self { base_url }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
