use tafel_types::{Language, SpellingItem};

/// What the terminal is currently showing; rebuilt from app events.
pub struct UiState {
    pub language: Language,
    pub word: String,
    pub rows: Vec<SpellingItem>,
    pub link: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            language: Language::DEFAULT,
            word: String::new(),
            rows: Vec::new(),
            link: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
