use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedInSkill {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInEducation {
    #[serde(default)]
    pub school_name: Option<String>,
    #[serde(default)]
    pub degree_name: Option<String>,
    #[serde(default)]
    pub field_of_study: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkedInProject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInPosition {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A LinkedIn profile as delivered by the scraping collaborator.
/// Field names follow the scraper's camelCase payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedInProfile {
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub skills: Vec<LinkedInSkill>,
    #[serde(default)]
    pub education: Vec<LinkedInEducation>,
    #[serde(default)]
    pub projects: Vec<LinkedInProject>,
    #[serde(default)]
    pub positions: Vec<LinkedInPosition>,
    /// Untouched scraper payload, kept for traceability.
    #[serde(default, rename = "raw_data")]
    pub raw_data: Option<Value>,
}

fn default_platform() -> String {
    "linkedin".to_string()
}

impl Default for LinkedInProfile {
    fn default() -> Self {
        Self {
            platform: default_platform(),
            full_name: None,
            headline: None,
            summary: None,
            location: None,
            profile_url: None,
            profile_picture: None,
            skills: Vec::new(),
            education: Vec::new(),
            projects: Vec::new(),
            positions: Vec::new(),
            raw_data: None,
        }
    }
}
