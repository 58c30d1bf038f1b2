use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub repo_name: String,
    #[serde(default)]
    pub repo_description: String,
}

/// A user's GitHub account: profile fields plus public repositories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubProfile {
    #[serde(default = "default_platform")]
    pub platform: String,
    pub user_id: String,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub repos: Vec<GitHubRepository>,
    /// Contents of the special `<username>/<username>` README, if any.
    #[serde(default)]
    pub user_named_repo_readme: Option<String>,
}

fn default_platform() -> String {
    "github".to_string()
}

impl GitHubProfile {
    pub fn profile_url(&self) -> String {
        format!("https://github.com/{}", self.username.trim())
    }
}
