//! Profile Enhancer: one best-effort LLM rewrite of a unified profile.
//!
//! Flow: serialize profile → build prompt + schema → one generator call →
//!       decode into `UnifiedProfile` (schema validation) → identity check.
//!
//! Any failure along the way returns the input profile untouched. On success
//! the decoded profile replaces the input wholesale; there is no field merge.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::enhancement::drift::detect_drift;
use crate::enhancement::prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM};
use crate::enhancement::schema::unified_profile_schema;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_INVENTION_INSTRUCTION};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::UnifiedProfile;

#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("Failed to serialize profile for enhancement: {0}")]
    Serialize(serde_json::Error),

    #[error("Generation failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Enhanced profile failed schema validation: {0}")]
    Schema(serde_json::Error),

    #[error("Enhanced profile changed profile_id from '{expected}' to '{actual}'")]
    IdentityChanged { expected: String, actual: String },
}

#[derive(Clone)]
pub struct Enhancer {
    generator: Arc<dyn TextGenerator>,
}

impl Enhancer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Returns the enhanced profile, or `profile` itself if enhancement fails
    /// for any reason. Never retried.
    pub async fn enhance(&self, profile: UnifiedProfile) -> UnifiedProfile {
        match self.try_enhance(&profile).await {
            Ok(enhanced) => enhanced,
            Err(e) => {
                error!(
                    "Enhancement of profile {} failed, keeping unified profile: {e}",
                    profile.profile_id
                );
                profile
            }
        }
    }

    /// Runs the enhancement and reports why it failed instead of falling back.
    pub async fn try_enhance(&self, profile: &UnifiedProfile) -> Result<UnifiedProfile, EnhanceError> {
        let schema = unified_profile_schema().map_err(EnhanceError::Serialize)?;
        let prompt = build_enhance_prompt(profile, &schema)?;
        let system = format!("{ENHANCE_SYSTEM} {JSON_ONLY_SYSTEM}");

        info!(
            "Enhancing profile {} with model {}",
            profile.profile_id,
            self.generator.model()
        );
        let value = self.generator.generate(&system, &prompt, &schema).await?;

        let enhanced: UnifiedProfile = serde_json::from_value(value).map_err(EnhanceError::Schema)?;

        if enhanced.profile_id != profile.profile_id {
            return Err(EnhanceError::IdentityChanged {
                expected: profile.profile_id.clone(),
                actual: enhanced.profile_id,
            });
        }

        for warning in detect_drift(profile, &enhanced) {
            warn!(
                "Enhancement drift on profile {} ({:?}): {}",
                profile.profile_id, warning.drift_type, warning.description
            );
        }

        info!("Profile {} enhanced", profile.profile_id);
        Ok(enhanced)
    }
}

/// Fills the enhancement template with the profile and its output schema.
fn build_enhance_prompt(profile: &UnifiedProfile, schema: &Value) -> Result<String, EnhanceError> {
    let profile_json = serde_json::to_string_pretty(profile).map_err(EnhanceError::Serialize)?;
    let schema_json = serde_json::to_string_pretty(schema).map_err(EnhanceError::Serialize)?;

    Ok(ENHANCE_PROMPT_TEMPLATE
        .replace("{no_invention_instruction}", NO_INVENTION_INSTRUCTION)
        .replace("{schema_json}", &schema_json)
        .replace("{profile_json}", &profile_json))
}
