use todo_core::{Msg, TodoId};

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(TodoId),
    Remove(TodoId),
    ToggleTheme,
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map(|(word, rest)| (word, rest.trim()))
        .unwrap_or((line, ""));

    match word.to_ascii_lowercase().as_str() {
        "add" | "a" => Command::Add(rest.to_string()),
        "toggle" | "t" => parse_id(rest).map_or_else(|| unknown(line), Command::Toggle),
        "rm" | "delete" | "del" => parse_id(rest).map_or_else(|| unknown(line), Command::Remove),
        "theme" => Command::ToggleTheme,
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => unknown(line),
    }
}

fn parse_id(raw: &str) -> Option<TodoId> {
    raw.trim_start_matches('#').parse().ok()
}

fn unknown(line: &str) -> Command {
    Command::Unknown(line.to_string())
}

impl Command {
    /// Messages this command sends to the state machine; empty for
    /// presentation-only commands.
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            Command::Add(title) => vec![Msg::InputChanged(title), Msg::AddSubmitted],
            Command::Toggle(id) => vec![Msg::TodoToggled { id }],
            Command::Remove(id) => vec![Msg::TodoRemoved { id }],
            Command::ToggleTheme => vec![Msg::ThemeToggled],
            Command::List
            | Command::Help
            | Command::Quit
            | Command::Empty
            | Command::Unknown(_) => Vec::new(),
        }
    }
}
