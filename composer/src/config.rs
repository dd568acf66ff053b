use serde::Deserialize;

use crate::constants::{KEY_DRAFT, KEY_SIGNATURES, KEY_TEMPLATES, SIGNATURE_DEFAULT};

/// Storage keys and first-run behaviour of a composer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub draft_key: String,
    pub templates_key: String,
    pub signatures_key: String,
    /// Signature seeded into the body when there is no draft to restore.
    pub seed_signature: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            draft_key: KEY_DRAFT.to_string(),
            templates_key: KEY_TEMPLATES.to_string(),
            signatures_key: KEY_SIGNATURES.to_string(),
            seed_signature: Some(SIGNATURE_DEFAULT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"draft_key":"other"}"#).unwrap();
        assert_eq!(settings.draft_key, "other");
        assert_eq!(settings.templates_key, KEY_TEMPLATES);
        assert_eq!(settings.seed_signature.as_deref(), Some(SIGNATURE_DEFAULT));
    }

    #[test]
    fn test_seeding_can_be_disabled() {
        let settings: Settings = serde_json::from_str(r#"{"seed_signature":null}"#).unwrap();
        assert_eq!(settings.seed_signature, None);
    }
}
