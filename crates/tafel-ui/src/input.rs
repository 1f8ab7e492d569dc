/// One line of terminal input, parsed. Plain text is a word to spell;
/// slash commands drive everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    Word(String),
    Lang(String),
    /// `/lang` with no argument: show the language menu.
    LangMenu,
    Copy,
    /// 0-based row to pronounce; `None` speaks the whole spelling.
    Say(Option<usize>),
    Open(String),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> UiCommand {
    let line = line.trim();

    let Some(command) = line.strip_prefix('/') else {
        // includes the empty line, which clears the word
        return UiCommand::Word(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("lang", Some(code)) => UiCommand::Lang(code.to_string()),
        ("lang", None) => UiCommand::LangMenu,
        ("copy", None) => UiCommand::Copy,
        ("say", None) => UiCommand::Say(None),
        ("say", Some(row)) => match row.parse::<usize>() {
            Ok(n) if n > 0 => UiCommand::Say(Some(n - 1)),
            _ => UiCommand::Unknown(line.to_string()),
        },
        ("open", Some(link)) => UiCommand::Open(link.to_string()),
        ("help", None) => UiCommand::Help,
        ("quit" | "q" | "exit", None) => UiCommand::Quit,
        _ => UiCommand::Unknown(line.to_string()),
    }
}
