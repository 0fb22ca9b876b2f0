use std::fmt::Display;

use octocrab::{Octocrab, Page};

#[cfg(test)]
pub(crate) mod fake;
mod octocrab_utils;
mod records;

pub(crate) use records::{
    ApiIssue, ApiPullRequest, Author, IssueRecord, PullRequestRecord, StatusRecord,
};

use octocrab_utils::PageExt;

pub(crate) const PER_PAGE: u8 = 100;

/// The repository the bot reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub(crate) fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub(crate) fn is_complete(&self) -> bool {
        !self.owner.is_empty() && !self.name.is_empty()
    }
}

impl Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One page of a listing; `next_page` is 0 when there is nothing after it.
#[derive(Debug, Clone)]
pub(crate) struct Listing<T> {
    pub items: Vec<T>,
    pub next_page: u32,
}

pub(crate) trait GitHubApi {
    async fn list_open_pull_requests(
        &self,
        repo: &RepositoryRef,
        page: u32,
    ) -> octocrab::Result<Listing<ApiPullRequest>>;

    async fn list_open_issues(
        &self,
        repo: &RepositoryRef,
        page: u32,
    ) -> octocrab::Result<Listing<ApiIssue>>;

    async fn list_statuses(
        &self,
        repo: &RepositoryRef,
        sha: &str,
    ) -> octocrab::Result<Vec<StatusRecord>>;
}

pub(crate) struct OctocrabGitHub {
    client: Octocrab,
}

impl OctocrabGitHub {
    pub(crate) fn new(client: Octocrab) -> Self {
        Self { client }
    }

    async fn list_open<T>(&self, route: String, page: u32) -> octocrab::Result<Listing<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let page = page.to_string();
        let per_page = PER_PAGE.to_string();
        let params = [
            ("state", "open"),
            ("per_page", per_page.as_str()),
            ("page", page.as_str()),
        ];
        tracing::debug!("GET {route} page {page}");
        let result: Page<T> = self.client.get(route, Some(&params)).await?;
        let next_page = result.next_page();
        Ok(Listing {
            items: result.items,
            next_page,
        })
    }
}

impl GitHubApi for OctocrabGitHub {
    async fn list_open_pull_requests(
        &self,
        repo: &RepositoryRef,
        page: u32,
    ) -> octocrab::Result<Listing<ApiPullRequest>> {
        let route = format!("/repos/{}/{}/pulls", repo.owner, repo.name);
        self.list_open(route, page).await
    }

    async fn list_open_issues(
        &self,
        repo: &RepositoryRef,
        page: u32,
    ) -> octocrab::Result<Listing<ApiIssue>> {
        let route = format!("/repos/{}/{}/issues", repo.owner, repo.name);
        self.list_open(route, page).await
    }

    async fn list_statuses(
        &self,
        repo: &RepositoryRef,
        sha: &str,
    ) -> octocrab::Result<Vec<StatusRecord>> {
        let route = format!("/repos/{}/{}/commits/{sha}/statuses", repo.owner, repo.name);
        self.client.get(route, None::<&()>).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::cli::build_octocrab;
    use crate::fixtures::{pull_request_json, status_json};

    async fn github(mock_server: &MockServer) -> OctocrabGitHub {
        OctocrabGitHub::new(
            build_octocrab(&"ghp_test".to_owned().into(), Some(&mock_server.uri())).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_list_pulls_follows_link_header() {
        let mock_server = MockServer::start().await;
        let next = format!(
            "<{}/repos/acme/widgets/pulls?state=open&per_page=100&page=2>; rel=\"next\"",
            mock_server.uri()
        );
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/pulls"))
            .and(query_param("state", "open"))
            .and(query_param("per_page", "100"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Link", next.as_str())
                    .set_body_json(json!([pull_request_json(1, "First", "alice")])),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/pulls"))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([pull_request_json(2, "Second", "bob")])),
            )
            .mount(&mock_server)
            .await;

        let api = github(&mock_server).await;
        let repo = RepositoryRef::new("acme", "widgets");

        let first = api.list_open_pull_requests(&repo, 1).await.unwrap();
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].number, 1);
        assert_eq!(first.next_page, 2);

        let second = api.list_open_pull_requests(&repo, 2).await.unwrap();
        assert_eq!(second.items[0].number, 2);
        assert_eq!(second.next_page, 0);
    }

    #[tokio::test]
    async fn test_list_statuses() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/commits/abc123/statuses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                status_json(2, "success"),
                status_json(1, "pending"),
            ])))
            .mount(&mock_server)
            .await;

        let api = github(&mock_server).await;
        let statuses = api
            .list_statuses(&RepositoryRef::new("acme", "widgets"), "abc123")
            .await
            .unwrap();
        let states: Vec<_> = statuses.iter().map(|s| s.state.as_str()).collect();
        assert_eq!(states, ["success", "pending"]);
    }

    #[tokio::test]
    async fn test_listing_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/widgets/issues"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "documentation_url": "",
                "message": "Server Error",
            })))
            .mount(&mock_server)
            .await;

        let api = github(&mock_server).await;
        let result = api
            .list_open_issues(&RepositoryRef::new("acme", "widgets"), 1)
            .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_repository_ref() {
        assert!(RepositoryRef::new("acme", "widgets").is_complete());
        assert!(!RepositoryRef::new("", "widgets").is_complete());
        assert!(!RepositoryRef::new("acme", "").is_complete());
        assert_eq!(RepositoryRef::new("acme", "widgets").to_string(), "acme/widgets");
    }
}
