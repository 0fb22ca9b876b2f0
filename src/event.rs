mod rtm;

pub(crate) use rtm::RtmFrame;

/// What the connection manager hands to the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Event {
    /// The RTM session said hello.
    Connected,
    Message(MessageEvent),
    /// Slack refused the token.
    InvalidAuth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MessageEvent {
    pub channel: String,
    pub text: String,
}

impl MessageEvent {
    pub(crate) fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
        }
    }
}
