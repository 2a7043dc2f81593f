//! Envelope validation and version dispatch
//!
//! The outer wrapper of every import document is a single `zabbix_export`
//! object whose `version` field selects the full schema. The envelope is
//! validated with a minimal open-world schema first, so arbitrary nested
//! content is deferred to the version-specific rules.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::{validate, Result, SchemaNode, ValidationContext, ValidationError};
use serde_json::Value as JsonValue;

use crate::registry::VersionRegistry;

/// Name of the envelope wrapper tag.
pub const ROOT_TAG: &str = "zabbix_export";

/// Field retired in 5.4: screens were converted to dashboards. Documents
/// from these versions still carry the tag on input; it is dropped before
/// the version schema runs.
const OBSOLETE_SCREENS_TAG: &str = "screens";
const SCREENS_COMPAT_VERSIONS: &[&str] = &[
    "1.8", "2.0", "3.0", "3.2", "3.4", "4.0", "4.2", "4.4", "5.0", "5.2",
];

/// Validates the document envelope, resolves the version and delegates the
/// export body to the matching schema tree.
pub struct EnvelopeValidator {
    registry: VersionRegistry,
}

impl EnvelopeValidator {
    /// Validator over the shipped version definitions.
    pub fn new() -> Self {
        Self {
            registry: VersionRegistry::default(),
        }
    }

    /// Validator over a caller-assembled registry.
    pub fn with_registry(registry: VersionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &VersionRegistry {
        &self.registry
    }

    /// Validate a whole import document, returning it normalized with the
    /// export body nested back under the envelope tag.
    pub fn validate(
        &self,
        document: JsonValue,
        path: &str,
        ctx: &ValidationContext,
    ) -> Result<JsonValue> {
        let normalized = validate(&envelope_schema(), document, None, path, ctx)?;
        let JsonValue::Object(mut document) = normalized else {
            return Err(ValidationError::TypeMismatch {
                path: path.to_string(),
                expected: "an array is expected".to_string(),
            });
        };

        let body_path = format!("{}/{}", path, ROOT_TAG);
        let JsonValue::Object(mut body) = document
            .shift_remove(ROOT_TAG)
            .unwrap_or(JsonValue::Null)
        else {
            return Err(ValidationError::TypeMismatch {
                path: body_path,
                expected: "an array is expected".to_string(),
            });
        };

        let version_path = format!("{}/version", body_path);
        let version = body
            .get("version")
            .and_then(JsonValue::as_str)
            .map(str::to_string)
            .ok_or(ValidationError::MissingRequiredTag {
                path: version_path.clone(),
            })?;

        let schema = self.registry.resolve(&version, &version_path)?;

        if SCREENS_COMPAT_VERSIONS.contains(&version.as_str()) {
            body.shift_remove(OBSOLETE_SCREENS_TAG);
        }

        log::debug!(
            "validating import document version {} ({} format, strict={})",
            version,
            ctx.source_format.as_str(),
            ctx.strict
        );

        let validated = validate(&schema, JsonValue::Object(body), None, &body_path, ctx)?;
        document.insert(ROOT_TAG.to_string(), validated);
        Ok(JsonValue::Object(document))
    }
}

impl Default for EnvelopeValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal fixed envelope: one required wrapper object with a required
/// `version` scalar; everything else is deferred to the version schema.
fn envelope_schema() -> SchemaNode {
    SchemaNode::object([(
        "zabbix_export",
        SchemaNode::object([("version", SchemaNode::scalar().required())])
            .allow_unknown_tags()
            .required(),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use confimport_core::SourceFormat;
    use serde_json::json;

    #[test]
    fn test_envelope_requires_wrapper_tag() {
        let validator = EnvelopeValidator::new();
        let ctx = ValidationContext::new(SourceFormat::Xml);
        let err = validator.validate(json!({}), "", &ctx).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingRequiredTag {
                path: "/zabbix_export".to_string(),
            }
        );
    }

    #[test]
    fn test_envelope_rejects_sibling_tags() {
        let validator = EnvelopeValidator::new();
        let ctx = ValidationContext::new(SourceFormat::Xml);
        let document = json!({"zabbix_export": {"version": "6.0"}, "other": "1"});
        let err = validator.validate(document, "", &ctx).unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedTag { ref path, .. } if path == "/other"));
    }
}
