use tafel_types::Language;
use url::Url;

use crate::language;
use crate::share::{self, ShareState};

/// Per-run mutable state: the word being spelled, the active UI language,
/// and the share link mirroring both.
///
/// Owned by the session and mutated only from the event loop; the link is
/// rebuilt in place on every mutation, so there is no history to manage.
/// An explicit language selection sticks for the rest of the run.
#[derive(Debug, Clone)]
pub struct SessionState {
    word: String,
    language: Language,
    explicit_language: bool,
    link: Url,
}

impl SessionState {
    pub fn new(base: Url) -> Self {
        Self {
            word: String::new(),
            language: Language::DEFAULT,
            explicit_language: false,
            link: base,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The current share link. Carries `word`/`lang` query parameters per
    /// the state, default language collapsed into absence.
    pub fn link(&self) -> &Url {
        &self.link
    }

    pub fn set_word(&mut self, word: &str) {
        self.word = word.trim().to_string();
        self.sync_link();
    }

    /// Switch the UI language by user choice. Sticks over anything a later
    /// opened link says.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.explicit_language = true;
        self.sync_link();
    }

    /// Adopt shareable state, resolving the language through the priority
    /// chain. Used at startup and when the user opens a link mid-run.
    pub fn adopt(
        &mut self,
        state: &ShareState,
        explicit: Option<Language>,
        system_locales: &[String],
    ) {
        if let Some(word) = &state.word {
            self.word = word.trim().to_string();
        }
        if explicit.is_some() {
            self.explicit_language = true;
        }
        let sticky = explicit.or(self.explicit_language.then_some(self.language));
        let link_tag = state.language.map(|l| l.code());
        self.language = language::resolve(sticky, link_tag, system_locales);
        self.sync_link();
    }

    fn sync_link(&mut self) {
        self.link = share::write(&self.link, &self.word, self.language);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share;

    fn session() -> SessionState {
        SessionState::new(Url::parse("https://tafel.app/").unwrap())
    }

    #[test]
    fn word_and_language_flow_into_the_link() {
        let mut s = session();
        s.set_word("TEST");
        assert_eq!(s.link().query(), Some("word=TEST"));

        s.set_language(Language::En);
        assert_eq!(s.link().query(), Some("word=TEST&lang=en"));

        s.set_word("");
        assert_eq!(s.link().query(), Some("lang=en"));
    }

    #[test]
    fn adopt_takes_word_and_link_language() {
        let mut s = session();
        let url = Url::parse("https://tafel.app/?word=Berlin&lang=fr").unwrap();
        s.adopt(&share::read(&url), None, &[]);
        assert_eq!(s.word(), "Berlin");
        assert_eq!(s.language(), Language::Fr);
    }

    #[test]
    fn explicit_selection_sticks_over_opened_links() {
        let mut s = session();
        s.set_language(Language::Es);

        let url = Url::parse("https://tafel.app/?word=TEST&lang=en").unwrap();
        s.adopt(&share::read(&url), None, &[]);
        assert_eq!(s.word(), "TEST");
        assert_eq!(s.language(), Language::Es);
    }

    #[test]
    fn adopt_without_link_language_uses_system_locales() {
        let mut s = session();
        let url = Url::parse("https://tafel.app/?word=TEST").unwrap();
        let locales = vec!["pt-BR".to_string(), "fr-FR".to_string()];
        s.adopt(&share::read(&url), None, &locales);
        assert_eq!(s.language(), Language::Fr);
        assert_eq!(s.link().query(), Some("word=TEST&lang=fr"));
    }
}
