//! GitHub payloads as they come off the wire, and the validated records built from them.

use serde::{de::IgnoredAny, Deserialize};

use crate::error::BotError;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    login: Option<String>,
    avatar_url: Option<String>,
    html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiHead {
    sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub number: u64,
    title: Option<String>,
    html_url: Option<String>,
    user: Option<ApiUser>,
    head: Option<ApiHead>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLabel {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiIssue {
    pub number: u64,
    title: Option<String>,
    html_url: Option<String>,
    user: Option<ApiUser>,
    #[serde(default)]
    labels: Vec<ApiLabel>,
    /// Only present on issues that are really pull requests
    pull_request: Option<IgnoredAny>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Author {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestRecord {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub author: Author,
    pub head_sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IssueRecord {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub author: Author,
    pub labels: Vec<String>,
    pub is_pull_request: bool,
}

/// A commit status. GitHub lists the most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct StatusRecord {
    pub id: u64,
    pub state: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
}

impl ApiIssue {
    pub(crate) fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

fn required(value: Option<String>, number: u64, field: &'static str) -> Result<String, BotError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(BotError::MalformedRecord { number, field })
}

fn author(user: Option<ApiUser>, number: u64) -> Result<Author, BotError> {
    let user = user.ok_or(BotError::MalformedRecord {
        number,
        field: "user",
    })?;
    Ok(Author {
        login: required(user.login, number, "user.login")?,
        avatar_url: required(user.avatar_url, number, "user.avatar_url")?,
        html_url: required(user.html_url, number, "user.html_url")?,
    })
}

impl TryFrom<ApiPullRequest> for PullRequestRecord {
    type Error = BotError;

    fn try_from(pr: ApiPullRequest) -> Result<Self, Self::Error> {
        let number = pr.number;
        Ok(Self {
            number,
            title: required(pr.title, number, "title")?,
            html_url: required(pr.html_url, number, "html_url")?,
            author: author(pr.user, number)?,
            head_sha: required(pr.head.and_then(|h| h.sha), number, "head.sha")?,
        })
    }
}

impl TryFrom<ApiIssue> for IssueRecord {
    type Error = BotError;

    fn try_from(issue: ApiIssue) -> Result<Self, Self::Error> {
        let number = issue.number;
        Ok(Self {
            number,
            title: required(issue.title, number, "title")?,
            html_url: required(issue.html_url, number, "html_url")?,
            author: author(issue.user, number)?,
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
            is_pull_request: issue.pull_request.is_some(),
        })
    }
}
