//! JSON Schema for `UnifiedProfile`, handed to the generation service so it
//! knows the exact shape to return. Derived from the model types.

use schemars::schema_for;
use serde_json::Value;

use crate::models::UnifiedProfile;

pub fn unified_profile_schema() -> Result<Value, serde_json::Error> {
    serde_json::to_value(schema_for!(UnifiedProfile))
}
