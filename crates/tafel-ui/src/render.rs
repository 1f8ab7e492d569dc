use colored::Colorize;
use tafel_i18n::Catalog;
use tafel_types::{Language, MISSING_CODE_WORD};

use crate::state::UiState;

pub fn header(state: &UiState, catalog: &Catalog) {
    let title = catalog.translate(state.language, "title");
    println!();
    println!("{}", title.bold().cyan());
    println!("{}", catalog.translate(state.language, "helpHint").dimmed());
}

pub fn table(state: &UiState, catalog: &Catalog, row_numbers: bool) {
    println!();
    if state.rows.is_empty() {
        println!("{}", catalog.translate(state.language, "emptyState").dimmed());
        println!("{}", catalog.translate(state.language, "inputPrompt").dimmed());
        return;
    }

    // pad before colorizing, ANSI escapes would throw the widths off
    let letter_header = catalog.translate(state.language, "letterHeader");
    let code_header = catalog.translate(state.language, "codeHeader");
    let indent = if row_numbers { "    " } else { "" };
    println!(
        "{indent}{} {}",
        format!("{letter_header:<10}").dimmed(),
        code_header.dimmed()
    );

    for (index, item) in state.rows.iter().enumerate() {
        if row_numbers {
            print!("{} ", format!("{:>3}", index + 1).dimmed());
        }
        let code_word = if item.code_word == MISSING_CODE_WORD {
            item.code_word.dimmed()
        } else {
            item.code_word.normal()
        };
        let letter = format!("{:<10}", item.letter);
        println!("{} {}", letter.bold(), code_word);
    }

    if let Some(link) = &state.link {
        println!();
        println!(
            "{} {}",
            format!("{}:", catalog.translate(state.language, "shareHint")).dimmed(),
            link.underline()
        );
    }
}

pub fn copy_feedback(state: &UiState, catalog: &Catalog, link: &str, ok: bool) {
    if ok {
        println!("{}", catalog.translate(state.language, "copied").green());
    } else {
        println!(
            "{}: {}",
            catalog.translate(state.language, "copyFailed").yellow(),
            link
        );
    }
}

pub fn language_menu(state: &UiState, catalog: &Catalog) {
    println!("{}:", catalog.translate(state.language, "languageLabel"));
    for language in Language::ALL {
        let marker = if language == state.language { "*" } else { " " };
        println!("  {marker} {}  {}", language.code(), language.native_name());
    }
}

pub fn help(state: &UiState, catalog: &Catalog) {
    for key in ["helpWord", "helpLang", "helpCopy", "helpSay", "helpOpen", "helpQuit"] {
        println!("  {}", catalog.translate(state.language, key));
    }
}

pub fn unknown_command(state: &UiState, catalog: &Catalog, line: &str) {
    println!(
        "{}: {}",
        catalog.translate(state.language, "unknownCommand").yellow(),
        line
    );
}

pub fn goodbye(state: &UiState, catalog: &Catalog) {
    println!("{}", catalog.translate(state.language, "goodbye"));
}
