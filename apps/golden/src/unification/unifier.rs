use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::{debug, info};

use crate::models::cv::ExtractedCv;
use crate::models::github::GitHubProfile;
use crate::models::linkedin::LinkedInProfile;
use crate::models::{
    SourceKind, SourceProfile, UnifiedContactInfo, UnifiedProfile, UnifiedProject,
    UnifiedWorkExperience,
};
use crate::unification::dedup::dedup_work_experience;
use crate::unification::validation::{non_blank, normalize_skill, require};
use crate::unification::UnifyError;

/// Merges source records into a single unified profile.
///
/// Sources are folded in the order given. Field precedence:
/// - LinkedIn overwrites name, summary and location whenever it has a value,
///   and always sets `linkedin_url`.
/// - CV fills summary only if still absent.
/// - GitHub fills name, summary (bio) and location only if still absent, and
///   always sets `github_url`, `website` and `email`.
///
/// Skills are unioned and emitted sorted. Work experience is deduplicated on
/// (company, title), last writer wins. Projects are never deduplicated.
pub fn unify(
    profile_id: impl Into<String>,
    sources: &[SourceProfile],
) -> Result<UnifiedProfile, UnifyError> {
    let profile_id = profile_id.into();
    let merged = sources
        .iter()
        .try_fold(Accumulator::default(), |acc, source| acc.absorb(source))?;

    let profile = merged.finish(profile_id);
    info!(
        "Unified profile {} from {} sources: {} skills, {} experiences, {} projects",
        profile.profile_id,
        sources.len(),
        profile.skills.len(),
        profile.work_experience.len(),
        profile.projects.len()
    );
    Ok(profile)
}

#[derive(Debug, Default)]
struct Accumulator {
    full_name: Option<String>,
    summary: Option<String>,
    location: Option<String>,
    contact_info: UnifiedContactInfo,
    skills: BTreeSet<String>,
    work_experience: Vec<UnifiedWorkExperience>,
    projects: Vec<UnifiedProject>,
    source_data: BTreeMap<String, Value>,
}

impl Accumulator {
    fn absorb(mut self, source: &SourceProfile) -> Result<Self, UnifyError> {
        let kind = source.kind();
        debug!("Merging {kind} record");

        let raw = source
            .to_raw()
            .map_err(|error| UnifyError::Serialize { origin: kind, error })?;
        self.source_data.insert(kind.data_key().to_string(), raw);

        match source {
            SourceProfile::LinkedIn(linkedin) => self.absorb_linkedin(linkedin)?,
            SourceProfile::Cv(cv) => self.absorb_cv(cv),
            SourceProfile::GitHub(github) => self.absorb_github(github),
        }
        Ok(self)
    }

    fn absorb_linkedin(&mut self, linkedin: &LinkedInProfile) -> Result<(), UnifyError> {
        let kind = SourceKind::LinkedIn;

        overwrite_if_present(&mut self.full_name, linkedin.full_name.as_deref());
        overwrite_if_present(&mut self.summary, linkedin.summary.as_deref());
        overwrite_if_present(&mut self.location, linkedin.location.as_deref());
        self.contact_info.linkedin_url = non_blank(linkedin.profile_url.as_deref());

        // The scraper routinely returns nameless skill stubs.
        for skill in &linkedin.skills {
            if let Some(name) = skill.name.as_deref() {
                self.add_skill(name, kind);
            }
        }

        for (i, position) in linkedin.positions.iter().enumerate() {
            self.work_experience.push(UnifiedWorkExperience {
                job_title: require(position.title.as_deref(), kind, format!("positions[{i}].title"))?,
                company_name: require(
                    position.company_name.as_deref(),
                    kind,
                    format!("positions[{i}].companyName"),
                )?,
                description: non_blank(position.description.as_deref()),
            });
        }

        for (i, project) in linkedin.projects.iter().enumerate() {
            self.projects.push(UnifiedProject {
                project_name: require(project.title.as_deref(), kind, format!("projects[{i}].title"))?,
                description: non_blank(project.description.as_deref()),
                source: kind,
            });
        }

        Ok(())
    }

    fn absorb_cv(&mut self, cv: &ExtractedCv) {
        let kind = SourceKind::Cv;

        fill_if_absent(&mut self.summary, cv.summary.as_deref());

        for skill in &cv.skills {
            self.add_skill(&skill.name, kind);
        }

        for exp in &cv.work_experience {
            self.work_experience.push(UnifiedWorkExperience {
                job_title: exp.job_title.clone(),
                company_name: exp.company.clone(),
                description: non_blank(exp.description.as_deref()),
            });
        }

        for project in &cv.projects {
            self.projects.push(UnifiedProject {
                project_name: project.project_name.clone(),
                description: non_blank(project.description.as_deref()),
                source: kind,
            });
        }
    }

    fn absorb_github(&mut self, github: &GitHubProfile) {
        let kind = SourceKind::GitHub;

        fill_if_absent(&mut self.full_name, github.name.as_deref());
        fill_if_absent(&mut self.summary, github.bio.as_deref());
        fill_if_absent(&mut self.location, github.location.as_deref());

        // Contact fields are overwritten even when GitHub has nothing for them.
        self.contact_info.github_url = Some(github.profile_url());
        self.contact_info.website = non_blank(github.website.as_deref());
        self.contact_info.email = non_blank(github.email.as_deref());

        for repo in &github.repos {
            self.projects.push(UnifiedProject {
                project_name: repo.repo_name.clone(),
                description: non_blank(Some(repo.repo_description.as_str())),
                source: kind,
            });
        }
    }

    fn add_skill(&mut self, name: &str, origin: SourceKind) {
        if let Some(skill) = normalize_skill(name, origin) {
            self.skills.insert(skill);
        }
    }

    fn finish(self, profile_id: String) -> UnifiedProfile {
        UnifiedProfile {
            profile_id,
            contact_info: self.contact_info,
            full_name: self.full_name,
            summary: self.summary,
            location: self.location,
            skills: self.skills.into_iter().collect(),
            work_experience: dedup_work_experience(self.work_experience),
            projects: self.projects,
            source_data: self.source_data,
        }
    }
}

fn overwrite_if_present(slot: &mut Option<String>, value: Option<&str>) {
    if let Some(value) = non_blank(value) {
        *slot = Some(value);
    }
}

fn fill_if_absent(slot: &mut Option<String>, value: Option<&str>) {
    if slot.is_none() {
        *slot = non_blank(value);
    }
}
