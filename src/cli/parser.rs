use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// GitHub user or organization owning the repository
    #[arg(long, env = "PR_BOT_USER")]
    pub(crate) user: String,
    /// GitHub repository name
    #[arg(long, env = "PR_BOT_REPO")]
    pub(crate) repo: String,
    /// Which GitHub listing `bot pr list` reports on
    #[arg(long, env = "PR_BOT_SOURCE", value_enum, default_value_t)]
    pub(crate) source: Source,
    /// Slack bot token (falls back to the `slack_token` systemd credential)
    #[arg(long, env = "SLACK_TOKEN", hide_env_values = true)]
    pub(crate) slack_token: Option<String>,
    /// GitHub access token (falls back to the `github_token` systemd credential)
    #[arg(long, env = "GITHUB_ACCESS_TOKEN", hide_env_values = true)]
    pub(crate) github_token: Option<String>,
    /// Slack Web API base URL
    #[arg(long, env, default_value = "https://slack.com/api", hide = true)]
    pub(crate) slack_api_base: String,
    /// GitHub REST API base URI
    #[arg(long, env, hide = true)]
    pub(crate) github_api_base: Option<String>,
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Source {
    /// Open pull requests with their latest commit status
    #[default]
    Pulls,
    /// Open issues that are linked to a pull request, with their labels
    Issues,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Pulls => f.write_str("pulls"),
            Source::Issues => f.write_str("issues"),
        }
    }
}
