// Profile enhancement: one LLM rewrite pass over a unified profile.
// All LLM calls go through llm_client::TextGenerator.

pub mod drift;
pub mod enhancer;
pub mod prompts;
pub mod schema;

pub use enhancer::{EnhanceError, Enhancer};
