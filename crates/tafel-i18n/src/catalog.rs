use std::collections::HashMap;

use tafel_types::Language;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("No supported language in catalog data")]
    NoSupportedLanguage,
}

/// Localized UI strings per supported language.
///
/// `translate` never fails: a key missing in the active language falls
/// back to the default language's value, and to the key itself as last
/// resort. An empty catalog therefore degrades to key passthrough.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// A catalog with no strings; `translate` passes keys through.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse catalog data: a JSON map from language code to key/string
    /// pairs. Unsupported language codes are skipped with a log line;
    /// data without a single supported language is rejected.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;

        let mut tables = HashMap::new();
        for (code, strings) in raw {
            match Language::parse(&code) {
                Some(language) => {
                    tables.insert(language, strings);
                }
                None => tracing::debug!(code, "skipping unsupported catalog language"),
            }
        }

        if tables.is_empty() {
            return Err(CatalogError::NoSupportedLanguage);
        }

        Ok(Self { tables })
    }

    /// Resolve `key` for `language`: active table, then the default
    /// language's table, then the key itself.
    pub fn translate(&self, language: Language, key: &str) -> String {
        if let Some(value) = self.lookup(language, key) {
            return value.to_string();
        }

        if let Some(value) = self.lookup(Language::DEFAULT, key) {
            tracing::debug!(%language, key, "falling back to default-language string");
            return value.to_string();
        }

        tracing::debug!(%language, key, "missing catalog key, passing through");
        key.to_string()
    }

    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        Language::ALL
            .into_iter()
            .filter(|language| self.tables.contains_key(language))
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
