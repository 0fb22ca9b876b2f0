use serde::Deserialize;

use super::{Event, MessageEvent};

/// The RTM frames the bot cares about. Everything else with a `type` is [`RtmFrame::Other`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RtmFrame {
    Hello,
    Message(RtmMessage),
    /// The server is about to close the socket.
    Goodbye,
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct RtmMessage {
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl RtmFrame {
    /// The event to forward, if any. Edits, deletions and other message
    /// subtypes without a top-level text are dropped here.
    pub(crate) fn into_event(self) -> Option<Event> {
        match self {
            RtmFrame::Hello => Some(Event::Connected),
            RtmFrame::Message(RtmMessage {
                channel: Some(channel),
                text: Some(text),
            }) => Some(Event::Message(MessageEvent::new(channel, text))),
            RtmFrame::Message(_) | RtmFrame::Goodbye | RtmFrame::Other => None,
        }
    }
}
