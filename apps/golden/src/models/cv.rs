use serde::{Deserialize, Serialize};

/// Exact text from the document that justifies an extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub text_snippet: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvSkill {
    /// Normalized skill name as produced by the skill tagger.
    pub name: String,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvWorkExperience {
    pub job_title: String,
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inferred_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CvProject {
    pub project_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub inferred_skills: Vec<String>,
}

/// Everything the CV extractor pulled out of one uploaded resume document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedCv {
    pub full_text: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub skills: Vec<CvSkill>,
    #[serde(default)]
    pub work_experience: Vec<CvWorkExperience>,
    #[serde(default)]
    pub projects: Vec<CvProject>,
}
