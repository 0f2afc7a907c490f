use crate::{
    client::{
        Client, ListOptions, Response, Result, MEDIA_TYPE_DEPLOYMENT_STATUS_PREVIEW,
        MEDIA_TYPE_EXPAND_DEPLOYMENT_STATUS_PREVIEW,
    },
    Deployment, DeploymentStatus, State,
};
use serde::Serialize;

/// Body of a deployment creation call.
///
/// GitHub API docs: https://developer.github.com/v3/repos/deployments/#create-a-deployment
#[derive(Debug, Default, Serialize)]
pub struct CreateDeploymentRequest {
    /// The ref to deploy. Can be a branch, tag, or SHA.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// Specifies a task to execute, e.g. `deploy` or `deploy:migrations`.
    pub task: Option<String>,
    pub auto_merge: Option<bool>,
    /// Status contexts to verify against commit status checks. Pass an
    /// empty vector to skip checking entirely.
    pub required_contexts: Option<Vec<String>>,
    pub payload: Option<serde_json::Value>,
    pub environment: Option<String>,
    pub description: Option<String>,
    pub transient_environment: Option<bool>,
    pub production_environment: Option<bool>,
}

/// Body of a deployment status creation call.
///
/// GitHub API docs: https://developer.github.com/v3/repos/deployments/#create-a-deployment-status
#[derive(Debug, Serialize)]
pub struct CreateDeploymentStatusRequest {
    pub state: State,
    pub target_url: Option<String>,
    pub log_url: Option<String>,
    pub description: Option<String>,
    pub environment: Option<String>,
    pub environment_url: Option<String>,
    /// Mark prior non-transient, non-production statuses of the same
    /// environment `inactive`.
    pub auto_inactive: Option<bool>,
}

/// `DeploymentClient` handles communication with the deployment related
/// methods of the API.
///
/// GitHub API docs: https://developer.github.com/v3/repos/deployments/
pub struct DeploymentClient<'a> {
    inner: &'a Client,
}

impl<'a> DeploymentClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Get a single deployment.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/deployments/#get-a-single-deployment
    pub async fn get(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response<Deployment>> {
        let url = format!("repos/{}/{}/deployments/{}", owner, repo, deployment_id);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }

    /// List deployments for a repository.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/deployments/#list-deployments
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        options: ListOptions,
    ) -> Result<Response<Vec<Deployment>>> {
        let url = format!("repos/{}/{}/deployments", owner, repo);
        let response = self.inner.get(&url).query(&options).send().await?;

        self.inner.json(response).await
    }

    /// Create a deployment, marking a ref as ready to release to an
    /// environment.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/deployments/#create-a-deployment
    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateDeploymentRequest,
    ) -> Result<Response<Deployment>> {
        let url = format!("repos/{}/{}/deployments", owner, repo);
        let response = self.inner.post(&url).json(request).send().await?;

        self.inner.json(response).await
    }

    /// Delete a deployment. The provider only allows deleting inactive
    /// deployments.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/deployments/#delete-a-deployment
    pub async fn delete(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
    ) -> Result<Response<()>> {
        let url = format!("repos/{}/{}/deployments/{}", owner, repo, deployment_id);
        let response = self.inner.delete(&url).send().await?;

        self.inner.empty(response).await
    }

    /// Get a single deployment status.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/deployments/#get-a-single-deployment-status
    pub async fn get_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        status_id: u64,
    ) -> Result<Response<DeploymentStatus>> {
        let url = format!(
            "repos/{}/{}/deployments/{}/statuses/{}",
            owner, repo, deployment_id, status_id
        );
        let response = self
            .inner
            .get(&url)
            // For the 'in_progress'/'queued' states and the 'log_url' and
            // 'environment_url' fields
            .header(reqwest::header::ACCEPT, MEDIA_TYPE_DEPLOYMENT_STATUS_PREVIEW)
            .header(
                reqwest::header::ACCEPT,
                MEDIA_TYPE_EXPAND_DEPLOYMENT_STATUS_PREVIEW,
            )
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// List statuses attached to a deployment, most recent first.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/deployments/#list-deployment-statuses
    pub async fn list_statuses(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        options: ListOptions,
    ) -> Result<Response<Vec<DeploymentStatus>>> {
        let url = format!(
            "repos/{}/{}/deployments/{}/statuses",
            owner, repo, deployment_id
        );
        let response = self
            .inner
            .get(&url)
            .header(reqwest::header::ACCEPT, MEDIA_TYPE_DEPLOYMENT_STATUS_PREVIEW)
            .header(
                reqwest::header::ACCEPT,
                MEDIA_TYPE_EXPAND_DEPLOYMENT_STATUS_PREVIEW,
            )
            .query(&options)
            .send()
            .await?;

        self.inner.json(response).await
    }

    /// Create a new status for a deployment.
    ///
    /// GitHub API docs: https://developer.github.com/v3/repos/deployments/#create-a-deployment-status
    pub async fn create_status(
        &self,
        owner: &str,
        repo: &str,
        deployment_id: u64,
        request: &CreateDeploymentStatusRequest,
    ) -> Result<Response<DeploymentStatus>> {
        let url = format!(
            "repos/{}/{}/deployments/{}/statuses",
            owner, repo, deployment_id
        );
        let response = self
            .inner
            .post(&url)
            .header(reqwest::header::ACCEPT, MEDIA_TYPE_DEPLOYMENT_STATUS_PREVIEW)
            .header(
                reqwest::header::ACCEPT,
                MEDIA_TYPE_EXPAND_DEPLOYMENT_STATUS_PREVIEW,
            )
            .json(request)
            .send()
            .await?;

        self.inner.json(response).await
    }
}
