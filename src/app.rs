use super::{DateTime, User};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Which of the target's repositories an app installation covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositorySelection {
    All,
    Selected,
    #[serde(other)]
    Unknown,
}

/// Binding of an app's credentials and permissions to an account or
/// repository.
///
/// GitHub API docs: https://developer.github.com/v3/apps/
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Installation {
    pub id: u64,
    pub app_id: u64,
    #[serde(default)]
    pub app_slug: String,

    pub target_id: u64,
    pub target_type: String,
    pub account: User,

    pub repository_selection: RepositorySelection,
    /// Permission level granted per API surface, e.g. `contents: read`.
    #[serde(default)]
    pub permissions: BTreeMap<String, String>,
    #[serde(default)]
    pub events: Vec<String>,

    #[serde(rename = "access_tokens_url")]
    pub access_tokens_link: String,
    #[serde(rename = "repositories_url")]
    pub repositories_link: String,
    #[serde(rename = "html_url")]
    pub link: String,

    #[serde(rename = "created_at")]
    pub created: DateTime,
    #[serde(rename = "updated_at")]
    pub updated: DateTime,
}
