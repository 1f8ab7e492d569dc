use serde::{Deserialize, Serialize};

/// Code word shown for characters the spelling table has no entry for.
pub const MISSING_CODE_WORD: &str = "-";

/// UI languages the catalog ships strings for.
///
/// Anything outside this set is rejected at parse time; callers fall back
/// to [`Language::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    Es,
    Fr,
}

impl Language {
    pub const DEFAULT: Language = Language::De;

    pub const ALL: [Language; 4] = [Language::De, Language::En, Language::Es, Language::Fr];

    /// ISO 639-1 code, also the `lang` query parameter value.
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Name shown in the language menu.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::De => "Deutsch",
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    /// Parse an exact language code ("en"). Case-insensitive, no region
    /// suffixes.
    pub fn parse(code: &str) -> Option<Language> {
        match code.trim().to_lowercase().as_str() {
            "de" => Some(Language::De),
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }

    /// Parse a locale tag ("en-US", "pt_BR") by its primary subtag.
    pub fn from_locale_tag(tag: &str) -> Option<Language> {
        let primary = tag.split(['-', '_']).next()?;
        Language::parse(primary)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of a conversion: the input character and its code word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingItem {
    pub letter: char,
    pub code_word: String,
}

/// Where a word entered the session from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Cli,
    Terminal,
    ShareLink,
}

/// Events flowing between the event loop and the presentation adapter.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User typed (or cleared) the word to spell.
    WordInput { text: String, source: InputSource },
    /// User picked a UI language; raw tag, validated by the handler.
    SwitchLanguage(String),
    /// User opened a share link; the session adopts its state.
    OpenLink(String),
    /// User asked for the current share link on the clipboard.
    CopyLink,
    /// User asked to hear a code word (`row`) or the whole spelling.
    Pronounce { row: Option<usize> },
    /// Fresh conversion result for the UI to render.
    ShowSpelling {
        word: String,
        items: Vec<SpellingItem>,
        link: Option<String>,
    },
    /// The active UI language changed (or was confirmed at startup).
    LanguageApplied(Language),
    /// Clipboard outcome; on failure the UI shows the link for manual copy.
    LinkCopied { link: String, ok: bool },
    Shutdown,
}
