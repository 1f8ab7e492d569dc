use tafel_types::Language;

/// Ordered system locale preferences, most preferred first. The resolver
/// takes the first one whose primary subtag names a supported language.
pub fn system_locales() -> Vec<String> {
    sys_locale::get_locales().collect()
}

/// Convenience for logging: what the preferences would resolve to on
/// their own.
pub fn detected_language(locales: &[String]) -> Option<Language> {
    locales.iter().find_map(|tag| Language::from_locale_tag(tag))
}
