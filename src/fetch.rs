use std::future::Future;

use crate::error::{describe_github_error, BotError};
use crate::github::{
    ApiIssue, GitHubApi, IssueRecord, Listing, PullRequestRecord, RepositoryRef, StatusRecord,
};

const FIRST_PAGE: u32 = 1;

/// Outcome of the per-PR commit status lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusLookup {
    Listed(Vec<StatusRecord>),
    /// The lookup failed. Reported as such rather than as "no status".
    Unavailable,
}

impl StatusLookup {
    pub(crate) fn latest(&self) -> Option<&StatusRecord> {
        match self {
            StatusLookup::Listed(statuses) => statuses.first(),
            StatusLookup::Unavailable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestReport {
    pub pull_request: PullRequestRecord,
    pub statuses: StatusLookup,
}

fn check(repo: &RepositoryRef) -> Result<(), BotError> {
    if repo.is_complete() {
        Ok(())
    } else {
        Err(BotError::Configuration {
            owner: repo.owner.clone(),
            name: repo.name.clone(),
        })
    }
}

/// Walk the listing from the first page until the API reports no next page.
/// An error on any page drops everything gathered so far.
async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, BotError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = octocrab::Result<Listing<T>>>,
{
    let mut items = Vec::new();
    let mut page = FIRST_PAGE;
    loop {
        let listing = fetch_page(page).await?;
        items.extend(listing.items);
        if listing.next_page == 0 {
            break;
        }
        page = listing.next_page;
    }
    Ok(items)
}

pub(crate) async fn fetch_open_pull_requests<G: GitHubApi>(
    api: &G,
    repo: &RepositoryRef,
) -> Result<Vec<PullRequestReport>, BotError> {
    check(repo)?;
    let pulls = collect_pages(move |page| api.list_open_pull_requests(repo, page))
        .await?
        .into_iter()
        .map(PullRequestRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Fetched {} open pull requests from {repo}", pulls.len());

    let mut reports = Vec::with_capacity(pulls.len());
    for pull_request in pulls {
        let statuses = match api.list_statuses(repo, &pull_request.head_sha).await {
            Ok(statuses) => StatusLookup::Listed(statuses),
            Err(error) => {
                tracing::warn!(
                    "Listing statuses of #{} ({}) failed: {}",
                    pull_request.number,
                    pull_request.head_sha,
                    describe_github_error(&error)
                );
                StatusLookup::Unavailable
            }
        };
        if let Some(status) = statuses.latest() {
            tracing::debug!(
                "#{} latest status {} is {} ({})",
                pull_request.number,
                status.id,
                status.state,
                status.description.as_deref().unwrap_or(&status.url)
            );
        }
        reports.push(PullRequestReport {
            pull_request,
            statuses,
        });
    }
    Ok(reports)
}

pub(crate) async fn fetch_open_issues<G: GitHubApi>(
    api: &G,
    repo: &RepositoryRef,
) -> Result<Vec<IssueRecord>, BotError> {
    check(repo)?;
    // Plain issues are never shown, so they are not validated either
    let issues = collect_pages(move |page| api.list_open_issues(repo, page))
        .await?
        .into_iter()
        .filter(ApiIssue::is_pull_request)
        .map(IssueRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Fetched {} open issues linked to pull requests from {repo}", issues.len());
    Ok(issues)
}
