use serde::{Deserialize, Serialize};

/// A source repository registered with the backend.
///
/// Created by import, deleted explicitly, and otherwise immutable on the
/// client side except for `status`, which only the backend advances.
/// Exactly one of `github_username` / `github_org` identifies the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub id: i64,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub github_org: Option<String>,
    pub repo_name: String,
    pub repo_url: String,
    pub default_branch: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stars: u32,
    pub status: String,
}

impl Repository {
    /// The GitHub account the repository was imported from.
    pub fn origin(&self) -> &str {
        self.github_username
            .as_deref()
            .or(self.github_org.as_deref())
            .unwrap_or("-")
    }
}
