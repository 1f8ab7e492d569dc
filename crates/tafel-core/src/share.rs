use tafel_types::Language;
use url::Url;

pub const WORD_PARAM: &str = "word";
pub const LANG_PARAM: &str = "lang";

/// Shareable state parsed back out of a link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareState {
    pub word: Option<String>,
    pub language: Option<Language>,
}

/// Rebuild `current` so its query reflects (word, language).
///
/// `word` is trimmed and set percent-encoded when non-empty, removed
/// otherwise. `lang` is set only when it differs from the default, so the
/// common case keeps a clean URL. Query parameters other than these two
/// are preserved.
pub fn write(current: &Url, word: &str, language: Language) -> Url {
    let retained: Vec<(String, String)> = current
        .query_pairs()
        .filter(|(key, _)| key != WORD_PARAM && key != LANG_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut next = current.clone();
    {
        let mut query = next.query_pairs_mut();
        query.clear();
        for (key, value) in &retained {
            query.append_pair(key, value);
        }
        let word = word.trim();
        if !word.is_empty() {
            query.append_pair(WORD_PARAM, word);
        }
        if language != Language::DEFAULT {
            query.append_pair(LANG_PARAM, language.code());
        }
    }
    if next.query() == Some("") {
        next.set_query(None);
    }
    next
}

/// Parse shareable state back out of a link.
///
/// `word` comes back percent-decoded; `lang` values outside the supported
/// set are treated as absent, to be resolved to the default downstream.
/// First occurrence wins, as in the browser's query accessor.
pub fn read(url: &Url) -> ShareState {
    let mut state = ShareState::default();
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            WORD_PARAM if state.word.is_none() => state.word = Some(value.into_owned()),
            LANG_PARAM if state.language.is_none() => state.language = Language::parse(&value),
            _ => {}
        }
    }
    state
}
