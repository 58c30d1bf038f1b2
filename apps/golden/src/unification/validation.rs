//! Input policy applied while merging.
//!
//! - Blank optional text counts as absent.
//! - Skill names are trimmed and lowercased; blank names are dropped.
//! - Absent required identity strings are upstream contract violations.
//!   A present but blank one is kept verbatim.

use tracing::debug;

use crate::models::SourceKind;
use crate::unification::UnifyError;

/// Returns the trimmed value, or `None` when it is missing or whitespace-only.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Canonical skill key: trimmed and lowercase. Blank names yield `None`.
pub fn normalize_skill(name: &str, origin: SourceKind) -> Option<String> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        debug!("Dropping blank skill name from {origin} record");
        return None;
    }
    Some(normalized)
}

/// Fetches a field the producing extractor is contracted to always populate.
/// Only a missing value is an error; the text itself is passed through as-is.
pub fn require(
    value: Option<&str>,
    origin: SourceKind,
    field: impl Into<String>,
) -> Result<String, UnifyError> {
    value.map(String::from).ok_or_else(|| UnifyError::MissingField {
        origin,
        field: field.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank_trims() {
        assert_eq!(non_blank(Some("  Berlin ")), Some("Berlin".to_string()));
    }

    #[test]
    fn test_non_blank_rejects_whitespace_only() {
        assert_eq!(non_blank(Some("   \n\t")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_normalize_skill_lowercases() {
        assert_eq!(
            normalize_skill(" TypeScript ", SourceKind::Cv),
            Some("typescript".to_string())
        );
    }

    #[test]
    fn test_normalize_skill_drops_blank() {
        assert_eq!(normalize_skill("  ", SourceKind::LinkedIn), None);
    }

    #[test]
    fn test_require_reports_source_and_field() {
        let err = require(None, SourceKind::LinkedIn, "positions[0].title").unwrap_err();
        match err {
            UnifyError::MissingField { origin, field } => {
                assert_eq!(origin, SourceKind::LinkedIn);
                assert_eq!(field, "positions[0].title");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_require_passes_present_values_through() {
        assert_eq!(
            require(Some(""), SourceKind::LinkedIn, "projects[0].title").unwrap(),
            ""
        );
        assert_eq!(
            require(Some(" Engineer "), SourceKind::LinkedIn, "positions[0].title").unwrap(),
            " Engineer "
        );
    }
}
