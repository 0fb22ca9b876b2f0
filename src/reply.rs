//! Builds the attachments the bot posts. Everything here is pure.

use crate::constants::{DANGER, MARKDOWN_IN, PERSONA, STATE_OPEN};
use crate::fetch::{PullRequestReport, StatusLookup};
use crate::github::{Author, IssueRecord, RepositoryRef};
use crate::slack::{Attachment, AttachmentField, PostMessage};

const STATUS_UNAVAILABLE: &str = "status unavailable";

pub(crate) fn message(channel: &str, attachments: Vec<Attachment>) -> PostMessage {
    PostMessage {
        channel: channel.to_owned(),
        text: String::new(),
        username: PERSONA.username.to_owned(),
        icon_emoji: PERSONA.icon_emoji.to_owned(),
        mrkdwn: PERSONA.markdown,
        attachments,
    }
}

pub(crate) fn usage() -> Attachment {
    Attachment {
        title: "Usage:".to_owned(),
        fields: vec![AttachmentField {
            title: ":small_red_triangle_down: pr list".to_owned(),
            value: "List all opened P-Rs".to_owned(),
            short: false,
        }],
        ..Attachment::default()
    }
}

pub(crate) fn unknown_command(name: &str) -> Attachment {
    Attachment {
        title: "Error".to_owned(),
        text: format!("{name}: no such command"),
        color: DANGER.to_owned(),
        ..Attachment::default()
    }
}

/// Posted instead of an empty list, which Slack would reject.
pub(crate) fn nothing_open(repo: &RepositoryRef) -> Attachment {
    Attachment {
        fallback: format!("No open pull requests in {repo}"),
        title: format!("No open pull requests in {repo}"),
        color: STATE_OPEN.to_owned(),
        ..Attachment::default()
    }
}

fn item(number: u64, title: &str, html_url: &str, author: &Author, text: String) -> Attachment {
    Attachment {
        fallback: format!("{number} - {title}"),
        title: format!("<{html_url}|#{number}> {title}"),
        text,
        color: STATE_OPEN.to_owned(),
        author_name: format!("@{}", author.login),
        author_icon: author.avatar_url.clone(),
        author_link: author.html_url.clone(),
        mrkdwn_in: MARKDOWN_IN.iter().map(|&part| part.to_owned()).collect(),
        fields: vec![],
    }
}

pub(crate) fn pull_requests(reports: &[PullRequestReport]) -> Vec<Attachment> {
    reports
        .iter()
        .map(|report| {
            let pr = &report.pull_request;
            let status = match &report.statuses {
                StatusLookup::Listed(statuses) => statuses
                    .first()
                    .map(|status| status.state.clone())
                    .unwrap_or_default(),
                StatusLookup::Unavailable => STATUS_UNAVAILABLE.to_owned(),
            };
            item(pr.number, &pr.title, &pr.html_url, &pr.author, status)
        })
        .collect()
}

/// Only issues that are pull requests make it through.
pub(crate) fn issues(issues: &[IssueRecord]) -> Vec<Attachment> {
    issues
        .iter()
        .filter(|issue| issue.is_pull_request)
        .map(|issue| {
            let labels = issue
                .labels
                .iter()
                .map(|label| format!("`{label}`"))
                .collect::<Vec<_>>()
                .join(", ");
            item(
                issue.number,
                &issue.title,
                &issue.html_url,
                &issue.author,
                labels,
            )
        })
        .collect()
}
