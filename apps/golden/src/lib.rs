//! Golden: merges CV, GitHub and LinkedIn records into one unified profile,
//! then has an LLM polish its prose without adding facts.

pub mod config;
pub mod enhancement;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod pipeline;
pub mod unification;

pub use enhancement::{EnhanceError, Enhancer};
pub use errors::AppError;
pub use models::{SourceKind, SourceProfile, UnifiedProfile};
pub use pipeline::Pipeline;
pub use unification::{unify, UnifyError};
