mod client;
mod message;
pub(crate) mod rtm;

pub(crate) use client::{SlackClient, SlackError};
pub(crate) use message::{Attachment, AttachmentField, PostMessage};

/// Where replies go.
pub(crate) trait Chat {
    async fn post_message(&self, message: &PostMessage) -> Result<(), SlackError>;
}
