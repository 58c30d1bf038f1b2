//! Unification: merges typed source records into one golden record.
//!
//! Pure and synchronous: no I/O, nothing shared between calls.

pub mod dedup;
pub mod unifier;
pub mod validation;

use thiserror::Error;

use crate::models::SourceKind;

pub use unifier::unify;

#[derive(Debug, Error)]
pub enum UnifyError {
    /// An extractor delivered a record without a field it always promises.
    #[error("{origin} record is missing required field '{field}'")]
    MissingField { origin: SourceKind, field: String },

    #[error("Failed to serialize {origin} record: {error}")]
    Serialize {
        origin: SourceKind,
        #[source]
        error: serde_json::Error,
    },
}
