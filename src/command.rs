use std::sync::LazyLock;

use regex::Regex;

/// ASCII classes only: `bot pr lïst` asks for the subcommand `l`.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^bot\s+pr\s+(\w+)").expect("command pattern is valid")
});

/// A `bot pr <subcommand>` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Help,
    List,
    Unknown(String),
}

impl Command {
    /// Returns `None` for anything that isn't addressed to the bot.
    pub(crate) fn parse(text: &str) -> Option<Self> {
        let subcommand = PATTERN.captures(text)?.get(1)?.as_str();
        Some(match subcommand {
            "help" => Command::Help,
            "list" => Command::List,
            other => Command::Unknown(other.to_owned()),
        })
    }
}
