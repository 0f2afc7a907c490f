use super::{DateTime, State, User};
use serde::Deserialize;

/// A recorded release of a ref to a named environment.
///
/// GitHub API docs: https://developer.github.com/v3/repos/deployments/
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Deployment {
    pub id: u64,
    #[serde(rename = "url")]
    pub link: String,
    #[serde(rename = "statuses_url")]
    pub statuses_link: String,

    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub task: String,
    pub environment: String,
    #[serde(default)]
    pub original_environment: Option<String>,
    pub description: Option<String>,

    /// Environment is expected to be torn down after the deployment
    /// completes.
    #[serde(default)]
    pub transient_environment: bool,
    #[serde(default)]
    pub production_environment: bool,

    pub creator: Option<User>,
    #[serde(rename = "created_at")]
    pub created: DateTime,
    #[serde(rename = "updated_at")]
    pub updated: DateTime,
}

/// A timestamped state update attached to a deployment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DeploymentStatus {
    pub id: u64,
    #[serde(rename = "url")]
    pub link: String,
    #[serde(rename = "deployment_url")]
    pub deployment_link: String,

    pub state: State,
    pub description: Option<String>,
    #[serde(default)]
    pub environment: String,
    #[serde(rename = "environment_url", default)]
    pub environment_link: Option<String>,
    #[serde(rename = "target_url")]
    pub target_link: Option<String>,
    #[serde(rename = "log_url", default)]
    pub log_link: Option<String>,

    pub creator: Option<User>,
    #[serde(rename = "created_at")]
    pub created: DateTime,
    #[serde(rename = "updated_at")]
    pub updated: DateTime,
}
