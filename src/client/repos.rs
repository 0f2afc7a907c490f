use crate::{
    client::{Client, ListOptions, Response, Result},
    Repository, State, Status,
};
use serde::Serialize;

/// Body of a commit status creation call.
///
/// GitHub API docs: https://developer.github.com/v3/repos/statuses/#create-a-status
#[derive(Debug, Serialize)]
pub struct CreateStatusRequest {
    pub state: State,
    pub target_url: Option<String>,
    pub description: Option<String>,
    pub context: String,
}

/// `RepositoryClient` handles communication with the repository related
/// methods of the API.
///
/// GitHub API docs: https://developer.github.com/v3/repos/
pub struct RepositoryClient<'a> {
    inner: &'a Client,
}

impl<'a> RepositoryClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get a single repository.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/#get
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Response<Repository>> {
        let url = format!("repos/{}/{}", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// List commit statuses for the specified reference.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/statuses/#list-statuses-for-a-specific-ref
    pub async fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        ref_name: &str,
        options: ListOptions,
    ) -> Result<Response<Vec<Status>>> {
        let url = format!("repos/{}/{}/commits/{}/statuses", owner, repo, ref_name);
        let response = self.inner.get(&url).query(&options).send().await?;

        self.inner.json(response).await
    }

    /// Create a status for the specified commit.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/statuses/#create-a-status
    pub async fn create_status(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        request: &CreateStatusRequest,
    ) -> Result<Response<Status>> {
        let url = format!("repos/{}/{}/statuses/{}", owner, repo, sha);
        let response = self.inner.post(&url).json(request).send().await?;

        self.inner.json(response).await
    }
}
