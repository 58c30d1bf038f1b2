//! Pipeline driver: typed source records → unify → enhance.
//!
//! Stages run strictly in sequence for one invocation. The driver owns the
//! only I/O in the crate besides the LLM adapters: reading source files.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::info;
use uuid::Uuid;

use crate::enhancement::Enhancer;
use crate::errors::AppError;
use crate::models::{SourceKind, SourceProfile, UnifiedProfile};
use crate::unification::unify;

/// A `<kind>=<path>` pair naming one source record on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSpec {
    pub kind: SourceKind,
    pub path: PathBuf,
}

impl FromStr for SourceSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected <kind>=<path>, got '{s}'"))?;
        let path = path.trim();
        if path.is_empty() {
            return Err(format!("missing path in '{s}'"));
        }
        Ok(SourceSpec {
            kind: kind.parse()?,
            path: PathBuf::from(path),
        })
    }
}

/// Reads and decodes one source record.
pub async fn load_source_file(kind: SourceKind, path: &Path) -> Result<SourceProfile, AppError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| AppError::Io {
            path: path.to_path_buf(),
            error,
        })?;

    SourceProfile::from_json(kind, &text).map_err(|error| AppError::SourceFormat {
        kind,
        path: path.to_path_buf(),
        error,
    })
}

pub async fn load_sources(specs: &[SourceSpec]) -> Result<Vec<SourceProfile>, AppError> {
    let mut sources = Vec::with_capacity(specs.len());
    for spec in specs {
        sources.push(load_source_file(spec.kind, &spec.path).await?);
    }
    Ok(sources)
}

#[derive(Clone, Default)]
pub struct Pipeline {
    enhancer: Option<Enhancer>,
}

impl Pipeline {
    /// Without an enhancer the unified profile is returned as-is.
    pub fn new(enhancer: Option<Enhancer>) -> Self {
        Self { enhancer }
    }

    /// Runs the pipeline under a freshly generated profile id.
    pub async fn run(&self, sources: &[SourceProfile]) -> Result<UnifiedProfile, AppError> {
        self.run_with_id(Uuid::new_v4().to_string(), sources).await
    }

    /// Steps:
    /// 1. unify() → UnifiedProfile (fails only on upstream contract violations)
    /// 2. enhance() → UnifiedProfile (falls back to step 1's output on failure)
    pub async fn run_with_id(
        &self,
        profile_id: impl Into<String>,
        sources: &[SourceProfile],
    ) -> Result<UnifiedProfile, AppError> {
        let profile_id = profile_id.into();
        info!("Running pipeline {} over {} sources", profile_id, sources.len());

        let unified = unify(profile_id, sources)?;

        let profile = match &self.enhancer {
            Some(enhancer) => enhancer.enhance(unified).await,
            None => {
                info!("Enhancement disabled, returning unified profile");
                unified
            }
        };

        Ok(profile)
    }
}
