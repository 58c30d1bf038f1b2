use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::source::SourceKind;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnifiedContactInfo {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnifiedWorkExperience {
    pub job_title: String,
    pub company_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Projects keep their origin; the same name from two platforms stays two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnifiedProject {
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source: SourceKind,
}

/// The golden record: one coherent profile merged from every supplied source.
///
/// Decoding doubles as validation of enhancer output, and the output schema
/// handed to the model is derived from this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UnifiedProfile {
    /// Assigned once per run. Returned unchanged by the enhancer.
    pub profile_id: String,
    pub contact_info: UnifiedContactInfo,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Lowercase after unification; the enhancer may restore conventional casing.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_experience: Vec<UnifiedWorkExperience>,
    #[serde(default)]
    pub projects: Vec<UnifiedProject>,
    /// Raw serialized source records keyed by `SourceKind::data_key`.
    #[serde(default)]
    pub source_data: BTreeMap<String, Value>,
}

impl UnifiedProfile {
    /// A profile with no data beyond its identifier.
    pub fn empty(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            contact_info: UnifiedContactInfo::default(),
            full_name: None,
            summary: None,
            location: None,
            skills: Vec::new(),
            work_experience: Vec::new(),
            projects: Vec::new(),
            source_data: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_profile_decodes_with_defaults() {
        let value = json!({"profile_id": "p1", "contact_info": {}});
        let profile: UnifiedProfile = serde_json::from_value(value).unwrap();
        assert_eq!(profile, UnifiedProfile::empty("p1"));
    }

    #[test]
    fn test_contact_info_is_required() {
        let value = json!({"profile_id": "p1"});
        assert!(serde_json::from_value::<UnifiedProfile>(value).is_err());
    }

    #[test]
    fn test_project_requires_known_source_tag() {
        let value = json!({
            "profile_id": "p1",
            "contact_info": {},
            "projects": [{"project_name": "x", "source": "Twitter"}]
        });
        assert!(serde_json::from_value::<UnifiedProfile>(value).is_err());
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let value = json!({
            "profile_id": "p1",
            "contact_info": {},
            "skills": "rust, python"
        });
        assert!(serde_json::from_value::<UnifiedProfile>(value).is_err());
    }

    #[test]
    fn test_serialized_field_names() {
        let mut profile = UnifiedProfile::empty("p1");
        profile.projects.push(UnifiedProject {
            project_name: "x".to_string(),
            description: Some("d".to_string()),
            source: SourceKind::GitHub,
        });
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value["projects"][0],
            json!({"project_name": "x", "description": "d", "source": "GitHub"})
        );
        assert!(value["contact_info"].get("github_url").is_some());
        assert!(value.get("source_data").is_some());
    }
}
