use tafel_types::Language;

/// Pick the active UI language. First match wins:
///
/// 1. explicit user selection,
/// 2. `lang` from a share link, if supported,
/// 3. the system locale preferences in order, matched by primary subtag,
/// 4. [`Language::DEFAULT`].
pub fn resolve(
    explicit: Option<Language>,
    link_language: Option<&str>,
    system_locales: &[String],
) -> Language {
    if let Some(language) = explicit {
        return language;
    }

    if let Some(tag) = link_language
        && let Some(language) = Language::parse(tag)
    {
        return language;
    }

    for tag in system_locales {
        if let Some(language) = Language::from_locale_tag(tag) {
            return language;
        }
    }

    Language::DEFAULT
}
