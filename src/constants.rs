/// Attachment color for open pull requests.
pub(crate) const STATE_OPEN: &str = "#67C63D";
pub(crate) const DANGER: &str = "danger";

/// Attachment parts Slack should render as markdown.
pub(crate) const MARKDOWN_IN: [&str; 4] = ["title", "text", "fields", "fallback"];

/// How the bot presents itself in every message it posts.
pub(crate) struct Persona {
    pub username: &'static str,
    pub icon_emoji: &'static str,
    pub markdown: bool,
}

pub(crate) const PERSONA: Persona = Persona {
    username: "pr-bot",
    icon_emoji: ":octocat:",
    markdown: true,
};
