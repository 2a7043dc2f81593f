//! Tests for the 6.0 schema tree
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::{validate_root, SourceFormat, ValidationContext, ValidationError};
use confimport_schemas::versions::v60;
use serde_json::json;

fn ctx() -> ValidationContext {
    ValidationContext::new(SourceFormat::Xml)
}

fn sample_document() -> serde_json::Value {
    json!({
        "version": "6.0",
        "date": "2024-03-09T12:30:55Z",
        "groups": {
            "group": {"uuid": "f00d", "name": "Web servers"}
        },
        "hosts": {
            "host": {
                "host": "web-1",
                "groups": {"group": {"name": "Web servers"}},
                "interfaces": {
                    "interface": {
                        "type": "SNMP",
                        "details": {"version": "SNMPV3", "securitylevel": "AUTHPRIV"},
                        "interface_ref": "if1"
                    }
                },
                "items": {
                    "item": {
                        "uuid": "beef",
                        "name": "CPU load",
                        "key": "system.cpu.load",
                        "preprocessing": {
                            "step": {
                                "type": "REGEX",
                                "parameters": {"parameter": "(.+)"}
                            }
                        },
                        "tags": ""
                    }
                }
            }
        },
        "triggers": {
            "trigger": {
                "uuid": "cafe",
                "expression": "last(/web-1/system.cpu.load)>5",
                "name": "High CPU load"
            }
        }
    })
}

#[test]
fn test_representative_document_normalizes_and_is_idempotent() {
    let normalized = validate_root(&v60::schema(), sample_document(), &ctx()).unwrap();

    let item = &normalized["hosts"]["host"]["items"]["item"];
    assert_eq!(item["tags"], json!([]));
    assert_eq!(
        item["preprocessing"]["step"]["error_handler"],
        json!("ORIGINAL_ERROR")
    );

    let again = validate_root(&v60::schema(), normalized.clone(), &ctx()).unwrap();
    assert_eq!(again, normalized);
}

#[test]
fn test_invalid_date_is_reported_at_its_path() {
    let mut document = sample_document();
    document["date"] = json!("09.03.2024");

    let err = validate_root(&v60::schema(), document, &ctx()).unwrap_err();
    assert_eq!(err.path(), "/date");
    assert!(matches!(err, ValidationError::Custom { .. }));
}

#[test]
fn test_authtype_constants_depend_on_item_type() {
    let mut document = sample_document();
    let item = &mut document["hosts"]["host"]["items"]["item"];
    item["type"] = json!("HTTP_AGENT");
    item["authtype"] = json!("NTLM");
    assert!(validate_root(&v60::schema(), document.clone(), &ctx()).is_ok());

    let item = &mut document["hosts"]["host"]["items"]["item"];
    item["type"] = json!("SSH");
    let err = validate_root(&v60::schema(), document, &ctx()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::UnexpectedConstant { ref path, .. }
            if path == "/hosts/host(1)/items/item(1)/authtype"
    ));
}

#[test]
fn test_dependent_item_requires_master_reference() {
    let mut document = sample_document();
    let item = &mut document["hosts"]["host"]["items"]["item"];
    item["type"] = json!("DEPENDENT");

    let err = validate_root(&v60::schema(), document.clone(), &ctx()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingRequiredTag { ref path } if path.ends_with("/master_item")
    ));

    let item = &mut document["hosts"]["host"]["items"]["item"];
    item["master_item"] = json!({"key": "system.cpu.util"});
    assert!(validate_root(&v60::schema(), document, &ctx()).is_ok());
}

#[test]
fn test_check_not_supported_step_backfills_discard_value() {
    let mut document = sample_document();
    let step = &mut document["hosts"]["host"]["items"]["item"]["preprocessing"]["step"];
    step["type"] = json!("CHECK_NOT_SUPPORTED");

    let normalized = validate_root(&v60::schema(), document, &ctx()).unwrap();
    let step = &normalized["hosts"]["host"]["items"]["item"]["preprocessing"]["step"];
    assert_eq!(step["error_handler"], json!("DISCARD_VALUE"));
}

#[test]
fn test_check_not_supported_step_rejects_original_error() {
    let mut document = sample_document();
    let step = &mut document["hosts"]["host"]["items"]["item"]["preprocessing"]["step"];
    step["type"] = json!("CHECK_NOT_SUPPORTED");
    step["error_handler"] = json!("ORIGINAL_ERROR");

    let err = validate_root(&v60::schema(), document, &ctx()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Custom { ref path, .. } if path.ends_with("/error_handler")
    ));
}

#[test]
fn test_preview_leaves_error_handler_untouched() {
    let preview_ctx = ctx().with_preview(true);
    let normalized = validate_root(&v60::schema(), sample_document(), &preview_ctx).unwrap();
    let step = &normalized["hosts"]["host"]["items"]["item"]["preprocessing"]["step"];
    assert!(step.get("error_handler").is_none());
}

#[test]
fn test_item_axis_needs_a_host_key_reference() {
    let schema = v60::schema();
    let graphs = json!({
        "version": "6.0",
        "graphs": {
            "graph": {
                "uuid": "0g01",
                "name": "CPU",
                "ymin_type_1": "ITEM",
                "ymin_item_1": {"host": "web-1", "key": "system.cpu.load"},
                "graph_items": {
                    "graph_item": {"item": {"host": "web-1", "key": "system.cpu.load"}}
                }
            }
        }
    });
    assert!(validate_root(&schema, graphs.clone(), &ctx()).is_ok());

    let mut missing_key = graphs.clone();
    missing_key["graphs"]["graph"]["ymin_item_1"] = json!({"host": "web-1"});
    let err = validate_root(&schema, missing_key, &ctx()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingRequiredTag { ref path } if path.ends_with("/ymin_item_1/key")
    ));
}

#[test]
fn test_calculated_axis_accepts_the_zero_sentinel() {
    let schema = v60::schema();
    let graphs = json!({
        "version": "6.0",
        "graphs": {
            "graph": {
                "uuid": "0g02",
                "name": "Memory",
                "ymax_item_1": "0",
                "graph_items": {
                    "graph_item": {"item": {"host": "web-1", "key": "vm.memory.size"}}
                }
            }
        }
    });

    let normalized = validate_root(&schema, graphs, &ctx()).unwrap();
    assert_eq!(normalized["graphs"]["graph"]["ymax_item_1"], json!({}));
}

#[test]
fn test_strict_mode_checks_repeated_tag_shapes() {
    let strict_ctx = ctx().with_strict(true);
    let mut document = sample_document();
    document["hosts"] = json!({
        "host": {"host": "a", "groups": {"group": {"name": "G"}}},
        "host2": {"host": "b", "groups": {"group": {"name": "G"}}}
    });
    assert!(validate_root(&v60::schema(), document.clone(), &strict_ctx).is_ok());

    document["hosts"] = json!({
        "host": {"host": "a", "groups": {"group": {"name": "G"}}},
        "server": {"host": "b", "groups": {"group": {"name": "G"}}}
    });
    let err = validate_root(&v60::schema(), document, &strict_ctx).unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidKeyShape {
            path: "/hosts/server".to_string(),
            key: "server".to_string(),
        }
    );
}
