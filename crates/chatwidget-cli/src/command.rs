//! Parsing of chat input lines.

/// One line typed by the visitor.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Empty,
    Send(String),
    End,
    Restart,
    Quit,
}

impl Command {
    /// Slash commands are matched case-insensitively; anything else,
    /// including unknown slash words, is sent to the agent verbatim.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "/end" => Command::End,
            "/restart" => Command::Restart,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Send(trimmed.to_string()),
        }
    }
}
