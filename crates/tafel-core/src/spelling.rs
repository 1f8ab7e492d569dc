use std::collections::HashMap;

use tafel_types::{MISSING_CODE_WORD, SpellingItem};
use unicode_normalization::UnicodeNormalization;

/// Character to code-word table.
///
/// Keys are single characters, stored uppercase; lookup uppercases the
/// input, so the table is case-insensitive. Characters whose uppercase
/// form expands to more than one letter (ß) keep their own entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpellingTable {
    entries: HashMap<String, String>,
}

impl SpellingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (character, code word) pairs. Keys are
    /// NFC-normalized and uppercased; pairs with empty code words or
    /// multi-character keys are dropped.
    pub fn from_entries<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = HashMap::new();
        for (key, value) in pairs {
            let key: String = key.as_ref().nfc().collect();
            let Some(letter) = single_char(&key) else {
                tracing::debug!(key, "skipping non-single-character table key");
                continue;
            };
            let code_word = value.into();
            if code_word.is_empty() {
                tracing::debug!(key, "skipping empty code word");
                continue;
            }
            entries.insert(normalize_letter(letter), code_word);
        }
        Self { entries }
    }

    /// Code word for `letter`, case-insensitively.
    pub fn code_word(&self, letter: char) -> Option<&str> {
        self.entries.get(&normalize_letter(letter)).map(String::as_str)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.code_word(letter).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Convert a word into its spelling sequence.
///
/// Input is NFC-normalized and uppercased per character; whitespace is
/// dropped; every other character yields exactly one item, with
/// [`MISSING_CODE_WORD`] when the table has no entry. Pure and total:
/// empty input yields an empty sequence.
pub fn convert(word: &str, table: &SpellingTable) -> Vec<SpellingItem> {
    word.nfc()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            let letter = uppercase_letter(c);
            let code_word = table
                .code_word(letter)
                .unwrap_or(MISSING_CODE_WORD)
                .to_string();
            SpellingItem { letter, code_word }
        })
        .collect()
}

/// Uppercase `c` when the uppercase form is a single character; keep it
/// as-is otherwise, so ß stays ß instead of becoming SS and losing its
/// table entry.
fn uppercase_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn normalize_letter(c: char) -> String {
    uppercase_letter(c).to_string()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SpellingTable {
        SpellingTable::from_entries([
            ("A", "Aachen"),
            ("B", "Berlin"),
            ("T", "Tübingen"),
            ("E", "Essen"),
            ("S", "Salzwedel"),
            ("Ü", "Umlaut Unna"),
            ("ß", "Eszett"),
        ])
    }

    #[test]
    fn one_item_per_non_whitespace_char_in_order() {
        let items = convert("ab ba", &table());
        let letters: Vec<char> = items.iter().map(|i| i.letter).collect();
        assert_eq!(letters, vec!['A', 'B', 'B', 'A']);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let items = convert("b", &table());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].letter, 'B');
        assert_eq!(items[0].code_word, "Berlin");
    }

    #[test]
    fn unmapped_chars_get_the_sentinel() {
        let items = convert("a7!", &table());
        assert_eq!(items[0].code_word, "Aachen");
        assert_eq!(items[1].code_word, "-");
        assert_eq!(items[1].letter, '7');
        assert_eq!(items[2].code_word, "-");
    }

    #[test]
    fn whitespace_is_dropped_not_substituted() {
        assert_eq!(convert(" \t\n", &table()), vec![]);
        assert_eq!(convert("a b", &table()).len(), 2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(convert("", &table()).is_empty());
    }

    #[test]
    fn diacritics_match_after_nfc() {
        // u + combining diaeresis composes to ü before lookup
        let items = convert("u\u{0308}", &table());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].code_word, "Umlaut Unna");
    }

    #[test]
    fn eszett_keeps_its_entry() {
        let items = convert("ß", &table());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].letter, 'ß');
        assert_eq!(items[0].code_word, "Eszett");
    }

    #[test]
    fn length_matches_non_whitespace_count() {
        let word = "Straße 12";
        let expected = word.chars().filter(|c| !c.is_whitespace()).count();
        assert_eq!(convert(word, &table()).len(), expected);
    }
}
