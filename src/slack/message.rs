use serde::Serialize;

/// Body of a `chat.postMessage` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct PostMessage {
    pub channel: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    pub username: String,
    pub icon_emoji: String,
    pub mrkdwn: bool,
    pub attachments: Vec<Attachment>,
}

/// A legacy message attachment (see <https://api.slack.com/reference/messaging/attachments>).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub(crate) struct Attachment {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fallback: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author_icon: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub author_link: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}
