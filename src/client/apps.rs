use crate::{
    client::{Client, Response, Result},
    Installation,
};

/// `AppClient` handles communication with the app installation related
/// methods of the API.
///
/// GitHub API docs: https://developer.github.com/v3/apps/
pub struct AppClient<'a> {
    inner: &'a Client,
}

impl<'a> AppClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// Look up the app installation covering a repository. The request
    /// must be authenticated as the app to succeed.
    ///
    /// GitHub API docs: https://developer.github.com/v3/apps/#get-a-repository-installation
    pub async fn get_repository_installation(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Response<Installation>> {
        let url = format!("repos/{}/{}/installation", owner, repo);
        let response = self.inner.get(&url).send().await?;

        self.inner.json(response).await
    }
}
