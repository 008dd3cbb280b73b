use coldleads_core::Msg;

use super::constants::{CMD_COMPOSE, CMD_COPY, CMD_HELP, CMD_QUIT};

/// One line typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Anything that is not a `:command` is the URL to submit, blank included.
    Submit(String),
    Copy,
    Compose,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> ConsoleCommand {
    let trimmed = line.trim();
    if !trimmed.starts_with(':') {
        return ConsoleCommand::Submit(line.trim_end_matches(['\r', '\n']).to_string());
    }
    match trimmed.to_ascii_lowercase().as_str() {
        CMD_COPY | ":c" => ConsoleCommand::Copy,
        CMD_COMPOSE | ":m" => ConsoleCommand::Compose,
        CMD_HELP | ":h" | ":?" => ConsoleCommand::Help,
        CMD_QUIT | ":q" | ":exit" => ConsoleCommand::Quit,
        _ => ConsoleCommand::Unknown(trimmed.to_string()),
    }
}

/// Messages a command feeds into `update`, in order.
pub fn messages_for(command: &ConsoleCommand) -> Vec<Msg> {
    match command {
        ConsoleCommand::Submit(text) => vec![Msg::InputChanged(text.clone()), Msg::SubmitClicked],
        ConsoleCommand::Copy => vec![Msg::CopyClicked],
        ConsoleCommand::Compose => vec![Msg::ComposeClicked],
        ConsoleCommand::Help | ConsoleCommand::Quit | ConsoleCommand::Unknown(_) => Vec::new(),
    }
}
