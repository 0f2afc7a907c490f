use super::{DateTime, State, User};
use serde::Deserialize;

/// A hosted repository.
///
/// GitHub API docs: https://developer.github.com/v3/repos/
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub owner: User,
    pub name: String,
    pub full_name: String,

    pub private: bool,
    #[serde(default)]
    pub archived: bool,
    pub description: Option<String>,
    pub default_branch: String,

    #[serde(rename = "html_url")]
    pub link: String,
    #[serde(rename = "clone_url")]
    pub clone_http: String,
    #[serde(rename = "ssh_url")]
    pub clone_ssh: String,

    #[serde(rename = "created_at")]
    pub created: DateTime,
    #[serde(rename = "updated_at")]
    pub updated: DateTime,
}

/// A commit status attached to a specific ref.
///
/// GitHub API docs: https://developer.github.com/v3/repos/statuses/
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Status {
    pub id: u64,
    pub state: State,
    /// Label differentiating this status from the statuses of other
    /// systems, e.g. `continuous-integration/jenkins`.
    pub context: String,
    pub description: Option<String>,
    #[serde(rename = "target_url")]
    pub target_link: Option<String>,

    pub creator: Option<User>,
    #[serde(rename = "created_at")]
    pub created: DateTime,
    #[serde(rename = "updated_at")]
    pub updated: DateTime,
}
