//! Interaction tracking types and input validation.
//!
//! An interaction is an append-only record of a tracked user action
//! (viewing, previewing, or downloading a layout). Records are never
//! mutated or deleted after creation.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Kinds of tracked user actions.
///
/// Serialized lowercase (`"view"`, `"download"`, `"preview"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    View,
    Download,
    Preview,
}

/// Valid wire values for [`InteractionType`], for validation messages.
pub const VALID_INTERACTION_TYPES: &[&str] = &["view", "download", "preview"];

impl InteractionType {
    /// Parse a wire value; returns `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "view" => Some(InteractionType::View),
            "download" => Some(InteractionType::Download),
            "preview" => Some(InteractionType::Preview),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionType::View => "view",
            InteractionType::Download => "download",
            InteractionType::Preview => "preview",
        }
    }
}

/// A stored interaction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: DbId,
    /// `None` for layout-independent events.
    pub layout_id: Option<DbId>,
    pub interaction_type: InteractionType,
    /// Server-assigned at creation, immutable.
    pub timestamp: Timestamp,
    pub user_agent: Option<String>,
    pub session_id: Option<String>,
}

/// Raw interaction payload as received from clients, before validation.
///
/// `interaction_type` is kept as loose text here so an unrecognized or
/// missing value surfaces as a field-level violation rather than an opaque
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInteraction {
    pub layout_id: Option<DbId>,
    pub interaction_type: Option<String>,
    pub user_agent: Option<String>,
    pub session_id: Option<String>,
}

/// A validated interaction input, ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewInteraction {
    pub layout_id: Option<DbId>,
    pub interaction_type: InteractionType,
    pub user_agent: Option<String>,
    pub session_id: Option<String>,
}

/// A single field-level validation violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl CreateInteraction {
    /// Validate the payload into a [`NewInteraction`].
    ///
    /// Rejects a missing, empty, or unrecognized `interactionType`. No
    /// storage write may happen before this succeeds.
    pub fn validate(self) -> Result<NewInteraction, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let interaction_type = match self.interaction_type.as_deref() {
            None | Some("") => {
                violations.push(FieldViolation {
                    field: "interactionType".into(),
                    message: "interactionType is required".into(),
                });
                None
            }
            Some(raw) => {
                let parsed = InteractionType::parse(raw);
                if parsed.is_none() {
                    violations.push(FieldViolation {
                        field: "interactionType".into(),
                        message: format!(
                            "Invalid interactionType '{raw}'. Must be one of: {}",
                            VALID_INTERACTION_TYPES.join(", ")
                        ),
                    });
                }
                parsed
            }
        };

        match interaction_type {
            Some(interaction_type) if violations.is_empty() => Ok(NewInteraction {
                layout_id: self.layout_id,
                interaction_type,
                user_agent: self.user_agent,
                session_id: self.session_id,
            }),
            _ => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(interaction_type: Option<&str>) -> CreateInteraction {
        CreateInteraction {
            layout_id: Some(1),
            interaction_type: interaction_type.map(String::from),
            user_agent: Some("test-agent".into()),
            session_id: None,
        }
    }

    #[test]
    fn valid_types_parse() {
        for raw in ["view", "download", "preview"] {
            let new = input(Some(raw)).validate().expect("should validate");
            assert_eq!(new.interaction_type.as_str(), raw);
        }
    }

    #[test]
    fn missing_type_is_rejected() {
        let violations = input(None).validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "interactionType");
    }

    #[test]
    fn empty_type_is_rejected() {
        let violations = input(Some("")).validate().unwrap_err();
        assert_eq!(violations[0].field, "interactionType");
    }

    #[test]
    fn unrecognized_type_is_rejected() {
        let violations = input(Some("click")).validate().unwrap_err();
        assert!(violations[0].message.contains("click"));
    }

    #[test]
    fn type_matching_is_case_sensitive() {
        assert!(input(Some("Download")).validate().is_err());
    }

    #[test]
    fn optional_fields_pass_through() {
        let new = CreateInteraction {
            layout_id: None,
            interaction_type: Some("view".into()),
            user_agent: None,
            session_id: Some("abc123".into()),
        }
        .validate()
        .expect("should validate");

        assert!(new.layout_id.is_none());
        assert!(new.user_agent.is_none());
        assert_eq!(new.session_id.as_deref(), Some("abc123"));
    }
}
