use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::cv::ExtractedCv;
use crate::models::github::GitHubProfile;
use crate::models::linkedin::LinkedInProfile;

/// The platform a record came from.
///
/// Serializes as the project origin tag (`"CV"`, `"GitHub"`, `"LinkedIn"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SourceKind {
    #[serde(rename = "CV")]
    Cv,
    #[serde(rename = "GitHub")]
    GitHub,
    #[serde(rename = "LinkedIn")]
    LinkedIn,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Cv, SourceKind::GitHub, SourceKind::LinkedIn];

    /// Key under which the raw record is kept in `source_data`.
    pub fn data_key(&self) -> &'static str {
        match self {
            SourceKind::Cv => "cv",
            SourceKind::GitHub => "github",
            SourceKind::LinkedIn => "linkedin",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            SourceKind::Cv => "CV",
            SourceKind::GitHub => "GitHub",
            SourceKind::LinkedIn => "LinkedIn",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.data_key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown source kind '{s}' (expected cv, github or linkedin)"))
    }
}

/// One already-extracted source record. Read-only once produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceProfile {
    Cv(ExtractedCv),
    GitHub(GitHubProfile),
    LinkedIn(LinkedInProfile),
}

impl SourceProfile {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceProfile::Cv(_) => SourceKind::Cv,
            SourceProfile::GitHub(_) => SourceKind::GitHub,
            SourceProfile::LinkedIn(_) => SourceKind::LinkedIn,
        }
    }

    /// Decodes a single record of the given kind from its JSON form.
    pub fn from_json(kind: SourceKind, text: &str) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SourceKind::Cv => SourceProfile::Cv(serde_json::from_str(text)?),
            SourceKind::GitHub => SourceProfile::GitHub(serde_json::from_str(text)?),
            SourceKind::LinkedIn => SourceProfile::LinkedIn(serde_json::from_str(text)?),
        })
    }

    /// The record's own serialized form, without any wrapping tag.
    pub fn to_raw(&self) -> Result<Value, serde_json::Error> {
        match self {
            SourceProfile::Cv(cv) => serde_json::to_value(cv),
            SourceProfile::GitHub(github) => serde_json::to_value(github),
            SourceProfile::LinkedIn(linkedin) => serde_json::to_value(linkedin),
        }
    }
}

impl From<ExtractedCv> for SourceProfile {
    fn from(cv: ExtractedCv) -> Self {
        SourceProfile::Cv(cv)
    }
}

impl From<GitHubProfile> for SourceProfile {
    fn from(github: GitHubProfile) -> Self {
        SourceProfile::GitHub(github)
    }
}

impl From<LinkedInProfile> for SourceProfile {
    fn from(linkedin: LinkedInProfile) -> Self {
        SourceProfile::LinkedIn(linkedin)
    }
}
