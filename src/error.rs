use thiserror::Error;

use crate::slack::SlackError;

#[derive(Debug, Error)]
pub(crate) enum BotError {
    #[error("repository owner and name must both be set, got {owner:?}/{name:?}")]
    Configuration { owner: String, name: String },

    #[error("GitHub listing failed: {}", describe_github_error(.0))]
    Fetch(#[from] octocrab::Error),

    #[error("posting to Slack failed: {0}")]
    Post(#[from] SlackError),

    #[error("GitHub record #{number} is missing {field}")]
    MalformedRecord { number: u64, field: &'static str },

    #[error("Invalid credentials")]
    InvalidAuth,

    #[error("Slack connection manager stopped")]
    ConnectionClosed,
}

impl BotError {
    /// Whether the bot has to stop after this error.
    /// A malformed record only spoils the command that fetched it.
    pub(crate) fn is_fatal(&self) -> bool {
        !matches!(self, BotError::MalformedRecord { .. })
    }
}

/// octocrab only displays the variant name; dig out the status and message.
pub(crate) fn describe_github_error(error: &octocrab::Error) -> String {
    if let octocrab::Error::GitHub { source, .. } = error {
        return format!("{}: {}", source.status_code, source.message);
    }
    let mut description = error.to_string();
    let mut cause = std::error::Error::source(error);
    while let Some(inner) = cause {
        description.push_str(": ");
        description.push_str(&inner.to_string());
        cause = inner.source();
    }
    description
}
