use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::UnifiedProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftType {
    NewSkill,
    NewWorkExperience,
    NewProject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftWarning {
    pub drift_type: DriftType,
    pub description: String,
}

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Compares enhancer output with its input and reports content that looks
/// added rather than edited. Advisory only: callers log these, they never
/// reject the enhanced profile.
///
/// Skills, (company, title) pairs and project names are matched
/// case-insensitively, so recasing is not drift but a swapped entry is.
pub fn detect_drift(original: &UnifiedProfile, enhanced: &UnifiedProfile) -> Vec<DriftWarning> {
    let mut warnings = Vec::new();

    let known: HashSet<String> = original.skills.iter().map(|s| fold(s)).collect();
    for skill in &enhanced.skills {
        if !known.contains(&fold(skill)) {
            warnings.push(DriftWarning {
                drift_type: DriftType::NewSkill,
                description: format!("Skill '{skill}' does not appear in the unified profile"),
            });
        }
    }

    let known: HashSet<(String, String)> = original
        .work_experience
        .iter()
        .map(|e| (fold(&e.company_name), fold(&e.job_title)))
        .collect();
    for exp in &enhanced.work_experience {
        if !known.contains(&(fold(&exp.company_name), fold(&exp.job_title))) {
            warnings.push(DriftWarning {
                drift_type: DriftType::NewWorkExperience,
                description: format!(
                    "Work experience '{}' at '{}' does not appear in the unified profile",
                    exp.job_title, exp.company_name
                ),
            });
        }
    }

    let known: HashSet<String> = original.projects.iter().map(|p| fold(&p.project_name)).collect();
    for project in &enhanced.projects {
        if !known.contains(&fold(&project.project_name)) {
            warnings.push(DriftWarning {
                drift_type: DriftType::NewProject,
                description: format!(
                    "Project '{}' does not appear in the unified profile",
                    project.project_name
                ),
            });
        }
    }

    warnings
}
