use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::SourceKind;
use crate::unification::UnifyError;

/// Pipeline-driver error type. The core reports only `UnifyError`; enhancement
/// failures never surface here because the enhancer falls back instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read source file {}: {}", .path.display(), .error)]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Invalid {kind} record in {}: {}", .path.display(), .error)]
    SourceFormat {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        error: serde_json::Error,
    },

    #[error("Unification failed: {0}")]
    Unify(#[from] UnifyError),

    #[error("LLM client setup failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Failed to serialize unified profile: {0}")]
    Output(#[source] serde_json::Error),
}
