//! Envelope dispatch tests
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::{SourceFormat, ValidationContext, ValidationError};
use confimport_schemas::EnvelopeValidator;
use serde_json::json;

fn ctx() -> ValidationContext {
    ValidationContext::new(SourceFormat::Xml)
}

#[test]
fn test_unknown_version_is_rejected_with_its_path() {
    let validator = EnvelopeValidator::new();
    let document = json!({"zabbix_export": {"version": "9.9"}});

    let err = validator.validate(document, "", &ctx()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnsupportedVersion {
            path: "/zabbix_export/version".to_string(),
            version: "9.9".to_string(),
        }
    );
}

#[test]
fn test_missing_version_tag() {
    let validator = EnvelopeValidator::new();
    let document = json!({"zabbix_export": {"date": "2024-03-09T12:30:55Z"}});

    let err = validator.validate(document, "", &ctx()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MissingRequiredTag {
            path: "/zabbix_export/version".to_string(),
        }
    );
}

#[test]
fn test_body_is_delegated_to_the_version_schema() {
    let validator = EnvelopeValidator::new();
    let document = json!({
        "zabbix_export": {
            "version": "6.0",
            "date": "2024-03-09T12:30:55Z",
            "groups": {
                "group": {"uuid": "a1b2", "name": "Databases"}
            }
        }
    });

    let normalized = validator.validate(document, "", &ctx()).unwrap();
    let body = &normalized["zabbix_export"];
    assert_eq!(body["version"], json!("6.0"));
    assert_eq!(
        body["groups"],
        json!({"group": {"uuid": "a1b2", "name": "Databases"}})
    );
}

#[test]
fn test_body_errors_carry_the_envelope_prefix() {
    let validator = EnvelopeValidator::new();
    let document = json!({
        "zabbix_export": {
            "version": "6.0",
            "date": "not a date"
        }
    });

    let err = validator.validate(document, "", &ctx()).unwrap_err();
    assert_eq!(err.path(), "/zabbix_export/date");
}

#[test]
fn test_screens_are_dropped_for_pre_dashboard_versions() {
    let validator = EnvelopeValidator::new();
    let document = json!({
        "zabbix_export": {
            "version": "5.2",
            "screens": {"screen": {"name": "Overview"}}
        }
    });

    let normalized = validator.validate(document, "", &ctx()).unwrap();
    assert!(normalized["zabbix_export"].get("screens").is_none());
}

#[test]
fn test_screens_are_not_tolerated_past_their_removal() {
    let validator = EnvelopeValidator::new();
    let document = json!({
        "zabbix_export": {
            "version": "6.0",
            "screens": {"screen": {"name": "Overview"}}
        }
    });

    let err = validator.validate(document, "", &ctx()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::UnexpectedTag { ref path, ref tag }
            if path == "/zabbix_export/screens" && tag == "screens"
    ));
}
