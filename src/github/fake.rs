use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::{ApiIssue, ApiPullRequest, GitHubApi, Listing, RepositoryRef, StatusRecord};
use crate::fixtures::{pull_request_json, status_json};

/// In-memory [`GitHubApi`] serving canned pages and recording every request.
#[derive(Default)]
pub(crate) struct FakeGitHub {
    pull_pages: Vec<Listing<ApiPullRequest>>,
    issue_pages: Vec<Listing<ApiIssue>>,
    statuses: HashMap<String, Vec<StatusRecord>>,
    requests: Mutex<Vec<String>>,
}

fn listing<T: serde::de::DeserializeOwned>(items: Vec<Value>, next_page: u32) -> Listing<T> {
    Listing {
        items: items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap())
            .collect(),
        next_page,
    }
}

impl FakeGitHub {
    /// Appends a page of pull requests. Page numbers are 1-based in request order.
    pub(crate) fn with_pull_page(mut self, items: Vec<Value>, next_page: u32) -> Self {
        self.pull_pages.push(listing(items, next_page));
        self
    }

    /// Appends `count` numbered pull requests as one page.
    pub(crate) fn with_numbered_pull_page(self, first: u64, count: u64, next_page: u32) -> Self {
        let items = (first..first + count)
            .map(|n| pull_request_json(n, &format!("PR {n}"), "alice"))
            .collect();
        self.with_pull_page(items, next_page)
    }

    pub(crate) fn with_issue_page(mut self, items: Vec<Value>, next_page: u32) -> Self {
        self.issue_pages.push(listing(items, next_page));
        self
    }

    /// Statuses for `sha`, most recent first.
    pub(crate) fn with_statuses(mut self, sha: &str, states: &[&str]) -> Self {
        let statuses = states
            .iter()
            .zip(1..)
            .map(|(state, id)| serde_json::from_value(status_json(id, state)).unwrap())
            .collect();
        self.statuses.insert(sha.to_owned(), statuses);
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

fn page_of<T: Clone>(pages: &[Listing<T>], page: u32) -> Listing<T> {
    pages
        .get(page as usize - 1)
        .cloned()
        .unwrap_or(Listing {
            items: vec![],
            next_page: 0,
        })
}

impl GitHubApi for FakeGitHub {
    async fn list_open_pull_requests(
        &self,
        repo: &RepositoryRef,
        page: u32,
    ) -> octocrab::Result<Listing<ApiPullRequest>> {
        self.record(format!("{repo} pulls page {page}"));
        Ok(page_of(&self.pull_pages, page))
    }

    async fn list_open_issues(
        &self,
        repo: &RepositoryRef,
        page: u32,
    ) -> octocrab::Result<Listing<ApiIssue>> {
        self.record(format!("{repo} issues page {page}"));
        Ok(page_of(&self.issue_pages, page))
    }

    async fn list_statuses(
        &self,
        repo: &RepositoryRef,
        sha: &str,
    ) -> octocrab::Result<Vec<StatusRecord>> {
        self.record(format!("{repo} statuses {sha}"));
        Ok(self.statuses.get(sha).cloned().unwrap_or_default())
    }
}
