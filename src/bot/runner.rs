use futures::{channel::mpsc::Receiver, StreamExt};
use tracing::Instrument;

use crate::cli::Source;
use crate::command::Command;
use crate::error::BotError;
use crate::event::{Event, MessageEvent};
use crate::fetch::{fetch_open_issues, fetch_open_pull_requests};
use crate::github::{GitHubApi, RepositoryRef};
use crate::reply;
use crate::slack::{Attachment, Chat};

/// Handles events one at a time, in arrival order.
pub(crate) struct Runner<C, G> {
    chat: C,
    github: G,
    repo: RepositoryRef,
    source: Source,
}

impl<C: Chat, G: GitHubApi> Runner<C, G> {
    pub(crate) fn new(chat: C, github: G, repo: RepositoryRef, source: Source) -> Self {
        Self {
            chat,
            github,
            repo,
            source,
        }
    }

    /// Only returns on a fatal error, including the event stream ending.
    pub(crate) async fn run(&self, mut receiver: Receiver<Event>) -> Result<(), BotError> {
        while let Some(event) = receiver.next().await {
            match self
                .handle_event(event)
                .instrument(tracing::info_span!("handle_event"))
                .await
            {
                Ok(()) => {}
                Err(error) if !error.is_fatal() => tracing::error!("Dropping command: {error}"),
                Err(error) => {
                    tracing::error!("{error}");
                    return Err(error);
                }
            }
        }
        tracing::error!("{}", BotError::ConnectionClosed);
        Err(BotError::ConnectionClosed)
    }

    async fn handle_event(&self, event: Event) -> Result<(), BotError> {
        match event {
            Event::Connected => {
                tracing::info!("Connected!");
                Ok(())
            }
            Event::InvalidAuth => Err(BotError::InvalidAuth),
            Event::Message(MessageEvent { channel, text }) => match Command::parse(&text) {
                Some(command) => self.handle_command(&channel, command).await,
                None => Ok(()),
            },
        }
    }

    async fn handle_command(&self, channel: &str, command: Command) -> Result<(), BotError> {
        tracing::info!("{command:?} requested in {channel}");
        let attachments = match command {
            Command::Help => vec![reply::usage()],
            Command::List => self.list().await?,
            Command::Unknown(name) => vec![reply::unknown_command(&name)],
        };
        self.chat
            .post_message(&reply::message(channel, attachments))
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Attachment>, BotError> {
        let attachments = match self.source {
            Source::Pulls => {
                reply::pull_requests(&fetch_open_pull_requests(&self.github, &self.repo).await?)
            }
            Source::Issues => reply::issues(&fetch_open_issues(&self.github, &self.repo).await?),
        };
        if attachments.is_empty() {
            Ok(vec![reply::nothing_open(&self.repo)])
        } else {
            Ok(attachments)
        }
    }
}
