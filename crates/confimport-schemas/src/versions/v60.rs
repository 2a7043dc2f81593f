//! Validation schema for 6.0 import documents
//!
//! Representative of the current schema generation: UUID-tagged template
//! objects, SNMP interface details, item preprocessing with error-handler
//! backfill, dependent-item master references and item-driven graph axes.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::{
    validate, Result, SchemaNode, SiblingMap, ValidationContext, ValidationError,
};
use serde_json::{json, Map, Value};

use crate::constants;
use crate::versions::{name_ref, tag_list, validate_date_time};

/// Root schema for version 6.0.
pub fn schema() -> SchemaNode {
    SchemaNode::object([
        ("version", SchemaNode::scalar().required()),
        ("date", SchemaNode::scalar().custom_validate(validate_date_time)),
        (
            "groups",
            SchemaNode::list(
                "group",
                SchemaNode::object([
                    ("uuid", SchemaNode::scalar().required()),
                    ("name", SchemaNode::scalar().required()),
                ]),
            ),
        ),
        ("hosts", SchemaNode::list("host", host_schema())),
        ("triggers", SchemaNode::list("trigger", trigger_schema())),
        ("graphs", SchemaNode::list("graph", graph_schema())),
    ])
}

fn host_schema() -> SchemaNode {
    SchemaNode::object([
        ("host", SchemaNode::scalar().required()),
        ("name", SchemaNode::scalar().default_value("")),
        ("description", SchemaNode::scalar().default_value("")),
        ("proxy", name_ref()),
        (
            "status",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::status()),
        ),
        (
            "ipmi_authtype",
            SchemaNode::scalar()
                .default_value("-1")
                .one_of(constants::ipmi_authtype()),
        ),
        (
            "ipmi_privilege",
            SchemaNode::scalar()
                .default_value("2")
                .one_of(constants::ipmi_privilege()),
        ),
        ("ipmi_username", SchemaNode::scalar().default_value("")),
        ("ipmi_password", SchemaNode::scalar().default_value("")),
        ("templates", SchemaNode::list("template", name_ref())),
        ("groups", SchemaNode::list("group", name_ref()).required()),
        (
            "interfaces",
            SchemaNode::list("interface", interface_schema()),
        ),
        ("items", SchemaNode::list("item", item_schema())),
        (
            "inventory_mode",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::inventory_mode()),
        ),
        ("tags", tag_list()),
        ("valuemaps", SchemaNode::list("valuemap", valuemap_schema())),
    ])
}

fn interface_schema() -> SchemaNode {
    SchemaNode::object([
        (
            "default",
            SchemaNode::scalar()
                .default_value("1")
                .one_of(constants::yes_no()),
        ),
        (
            "type",
            SchemaNode::scalar()
                .default_value("1")
                .one_of(constants::interface_type()),
        ),
        (
            "useip",
            SchemaNode::scalar()
                .default_value("1")
                .one_of(constants::yes_no()),
        ),
        ("ip", SchemaNode::scalar().default_value("127.0.0.1")),
        ("dns", SchemaNode::scalar().default_value("")),
        ("port", SchemaNode::scalar().default_value("10050")),
        ("details", snmp_details_schema()),
        ("interface_ref", SchemaNode::scalar().required()),
    ])
}

fn snmp_details_schema() -> SchemaNode {
    SchemaNode::object([
        (
            "version",
            SchemaNode::scalar()
                .default_value("2")
                .one_of(constants::snmp_version()),
        ),
        ("community", SchemaNode::scalar().default_value("")),
        ("contextname", SchemaNode::scalar().default_value("")),
        ("securityname", SchemaNode::scalar().default_value("")),
        (
            "securitylevel",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::snmp_security_level()),
        ),
        (
            "authprotocol",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::snmp_auth_protocol()),
        ),
        ("authpassphrase", SchemaNode::scalar().default_value("")),
        (
            "privprotocol",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::snmp_priv_protocol()),
        ),
        ("privpassphrase", SchemaNode::scalar().default_value("")),
        (
            "bulk",
            SchemaNode::scalar()
                .default_value("1")
                .one_of(constants::yes_no()),
        ),
    ])
}

fn item_schema() -> SchemaNode {
    SchemaNode::object([
        ("uuid", SchemaNode::scalar().required()),
        ("name", SchemaNode::scalar().required()),
        (
            "type",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::item_type()),
        ),
        ("snmp_oid", SchemaNode::scalar().default_value("")),
        ("key", SchemaNode::scalar().required()),
        ("delay", SchemaNode::scalar().default_value("1m")),
        ("history", SchemaNode::scalar().default_value("90d")),
        ("trends", SchemaNode::scalar().default_value("365d")),
        (
            "status",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::status()),
        ),
        (
            "value_type",
            SchemaNode::scalar()
                .default_value("3")
                .one_of(constants::value_type()),
        ),
        ("units", SchemaNode::scalar().default_value("")),
        ("params", SchemaNode::scalar().default_value("")),
        (
            "authtype",
            SchemaNode::scalar()
                .default_value("0")
                .dynamic_rules(auth_type_rules)
                .custom_validate(validate_auth_type),
        ),
        ("username", SchemaNode::scalar().default_value("")),
        ("password", SchemaNode::scalar().default_value("")),
        ("description", SchemaNode::scalar().default_value("")),
        ("valuemap", name_ref()),
        (
            "preprocessing",
            SchemaNode::list("step", preprocessing_step_schema()),
        ),
        (
            "master_item",
            SchemaNode::object([("key", SchemaNode::scalar().required())])
                .custom_required(master_item_required),
        ),
        ("interface_ref", SchemaNode::scalar()),
        ("tags", tag_list()),
    ])
}

fn preprocessing_step_schema() -> SchemaNode {
    SchemaNode::object([
        (
            "type",
            SchemaNode::scalar()
                .required()
                .one_of(constants::preprocessing_step_type()),
        ),
        (
            "parameters",
            SchemaNode::list("parameter", SchemaNode::scalar().default_value("")).required(),
        ),
        (
            "error_handler",
            SchemaNode::scalar()
                .one_of(constants::preprocessing_error_handler())
                .import_transform(default_error_handler)
                .custom_validate(validate_error_handler),
        ),
        ("error_handler_params", SchemaNode::scalar().default_value("")),
    ])
}

fn valuemap_schema() -> SchemaNode {
    SchemaNode::object([
        ("uuid", SchemaNode::scalar().required()),
        ("name", SchemaNode::scalar().required()),
        (
            "mappings",
            SchemaNode::list(
                "mapping",
                SchemaNode::object([
                    ("value", SchemaNode::scalar().required()),
                    ("newvalue", SchemaNode::scalar().required()),
                ]),
            )
            .required(),
        ),
    ])
}

fn trigger_schema() -> SchemaNode {
    SchemaNode::object([
        ("uuid", SchemaNode::scalar().required()),
        ("expression", SchemaNode::scalar().required()),
        (
            "recovery_mode",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::trigger_recovery_mode()),
        ),
        ("recovery_expression", SchemaNode::scalar().default_value("")),
        ("name", SchemaNode::scalar().required()),
        ("event_name", SchemaNode::scalar().default_value("")),
        (
            "priority",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::trigger_priority()),
        ),
        ("description", SchemaNode::scalar().default_value("")),
        (
            "status",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::status()),
        ),
        (
            "manual_close",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::yes_no()),
        ),
        ("tags", tag_list()),
    ])
}

fn graph_schema() -> SchemaNode {
    SchemaNode::object([
        ("uuid", SchemaNode::scalar().required()),
        ("name", SchemaNode::scalar().required()),
        ("width", SchemaNode::scalar().default_value("900")),
        ("height", SchemaNode::scalar().default_value("200")),
        ("yaxismin", SchemaNode::scalar().default_value("0")),
        ("yaxismax", SchemaNode::scalar().default_value("100")),
        (
            "show_work_period",
            SchemaNode::scalar()
                .default_value("1")
                .one_of(constants::yes_no()),
        ),
        (
            "show_triggers",
            SchemaNode::scalar()
                .default_value("1")
                .one_of(constants::yes_no()),
        ),
        (
            "type",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::graph_type()),
        ),
        (
            "ymin_type_1",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::graph_y_type()),
        ),
        (
            "ymax_type_1",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::graph_y_type()),
        ),
        (
            "ymin_item_1",
            SchemaNode::any()
                .default_value("0")
                .preprocess(zero_to_empty_object)
                .dynamic_rules(ymin_item_rules)
                .custom_validate(validate_ymin_item)
                .export(axis_item_export),
        ),
        (
            "ymax_item_1",
            SchemaNode::any()
                .default_value("0")
                .preprocess(zero_to_empty_object)
                .dynamic_rules(ymax_item_rules)
                .custom_validate(validate_ymax_item)
                .export(axis_item_export),
        ),
        (
            "graph_items",
            SchemaNode::list("graph_item", graph_item_schema()).required(),
        ),
    ])
}

fn graph_item_schema() -> SchemaNode {
    SchemaNode::object([
        ("sortorder", SchemaNode::scalar().default_value("0")),
        (
            "drawtype",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::graph_draw_type()),
        ),
        ("color", SchemaNode::scalar().default_value("009600")),
        (
            "yaxisside",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::graph_yaxis_side()),
        ),
        (
            "calc_fnc",
            SchemaNode::scalar()
                .default_value("2")
                .one_of(constants::graph_calc_fnc()),
        ),
        (
            "type",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::graph_item_type()),
        ),
        (
            "item",
            SchemaNode::object([
                ("host", SchemaNode::scalar().required()),
                ("key", SchemaNode::scalar().required()),
            ])
            .required(),
        ),
    ])
}

// Hook functions referenced by the nodes above.

/// `authtype` is only meaningful for SSH/Telnet and HTTP agent items, and
/// each family has its own constant set.
fn auth_type_rules(parent: Option<&SiblingMap>) -> SchemaNode {
    let item_type = parent
        .and_then(|p| p.get("type"))
        .and_then(Value::as_str);
    if item_type == Some("HTTP_AGENT") {
        SchemaNode::scalar().one_of(constants::http_authtype())
    } else {
        SchemaNode::scalar().one_of(constants::ssh_authtype())
    }
}

fn validate_auth_type(
    value: Value,
    parent: Option<&SiblingMap>,
    path: &str,
    ctx: &ValidationContext,
) -> Result<Value> {
    validate(&auth_type_rules(parent), value, parent, path, ctx)
}

/// Master item references are mandatory on dependent items only.
fn master_item_required(parent: &SiblingMap) -> bool {
    parent.get("type").and_then(Value::as_str) == Some("DEPENDENT")
}

/// Error-handler backfill: explicit input wins; absent handlers default
/// per step type, since "check for not supported value" steps cannot keep
/// the original error.
fn default_error_handler(parent: &SiblingMap) -> Value {
    if let Some(explicit) = parent.get("error_handler") {
        return explicit.clone();
    }
    if parent.get("type").and_then(Value::as_str) == Some("CHECK_NOT_SUPPORTED") {
        json!("DISCARD_VALUE")
    } else {
        json!("ORIGINAL_ERROR")
    }
}

fn validate_error_handler(
    value: Value,
    parent: Option<&SiblingMap>,
    path: &str,
    _ctx: &ValidationContext,
) -> Result<Value> {
    let step_type = parent
        .and_then(|p| p.get("type"))
        .and_then(Value::as_str);
    if step_type == Some("CHECK_NOT_SUPPORTED") && value == json!("ORIGINAL_ERROR") {
        return Err(ValidationError::custom(
            path,
            "value \"ORIGINAL_ERROR\" is not allowed for \"CHECK_NOT_SUPPORTED\" steps",
        ));
    }
    Ok(value)
}

/// Unset graph axis items are exported as the scalar sentinel "0".
fn zero_to_empty_object(value: Value, _path: &str) -> Result<Value> {
    if value == json!("0") {
        Ok(Value::Object(Map::new()))
    } else {
        Ok(value)
    }
}

/// Axis item rules depend on the sibling axis type: an ITEM axis needs a
/// host/key reference, anything else allows only the empty placeholder.
/// The axis type may still carry its stored form when the parent has not
/// been normalized yet, so both spellings are accepted.
fn axis_item_rules(parent: Option<&SiblingMap>, type_tag: &str) -> SchemaNode {
    let axis_type = parent
        .and_then(|p| p.get(type_tag))
        .and_then(Value::as_str);
    if axis_type == Some("ITEM") || axis_type == Some("2") {
        SchemaNode::object([
            ("host", SchemaNode::scalar().required()),
            ("key", SchemaNode::scalar().required()),
        ])
    } else {
        SchemaNode::object([])
    }
}

fn ymin_item_rules(parent: Option<&SiblingMap>) -> SchemaNode {
    axis_item_rules(parent, "ymin_type_1")
}

fn ymax_item_rules(parent: Option<&SiblingMap>) -> SchemaNode {
    axis_item_rules(parent, "ymax_type_1")
}

fn validate_ymin_item(
    value: Value,
    parent: Option<&SiblingMap>,
    path: &str,
    ctx: &ValidationContext,
) -> Result<Value> {
    validate(&ymin_item_rules(parent), value, parent, path, ctx)
}

fn validate_ymax_item(
    value: Value,
    parent: Option<&SiblingMap>,
    path: &str,
    ctx: &ValidationContext,
) -> Result<Value> {
    validate(&ymax_item_rules(parent), value, parent, path, ctx)
}

/// Export-side counterpart of [`zero_to_empty_object`].
fn axis_item_export(value: Value) -> Value {
    match value {
        Value::Object(map) if map.is_empty() => json!("0"),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confimport_core::SourceFormat;
    use serde_json::json;

    fn ctx() -> ValidationContext {
        ValidationContext::new(SourceFormat::Xml)
    }

    #[test]
    fn test_auth_type_rules_follow_item_type() {
        let mut parent = Map::new();
        parent.insert("type".to_string(), json!("HTTP_AGENT"));
        let ok = validate_auth_type(json!("NTLM"), Some(&parent), "/authtype", &ctx());
        assert!(ok.is_ok());

        parent.insert("type".to_string(), json!("SSH"));
        let err = validate_auth_type(json!("NTLM"), Some(&parent), "/authtype", &ctx()).unwrap_err();
        assert!(matches!(err, ValidationError::UnexpectedConstant { .. }));
        assert!(validate_auth_type(json!("PUBLIC_KEY"), Some(&parent), "/authtype", &ctx()).is_ok());
    }

    #[test]
    fn test_default_error_handler_preserves_explicit_input() {
        let mut parent = Map::new();
        parent.insert("type".to_string(), json!("CHECK_NOT_SUPPORTED"));
        assert_eq!(default_error_handler(&parent), json!("DISCARD_VALUE"));

        parent.insert("error_handler".to_string(), json!("CUSTOM_ERROR"));
        assert_eq!(default_error_handler(&parent), json!("CUSTOM_ERROR"));

        let mut parent = Map::new();
        parent.insert("type".to_string(), json!("REGEX"));
        assert_eq!(default_error_handler(&parent), json!("ORIGINAL_ERROR"));
    }

    #[test]
    fn test_axis_item_export_restores_sentinel() {
        assert_eq!(axis_item_export(json!({})), json!("0"));
        let reference = json!({"host": "web", "key": "cpu.load"});
        assert_eq!(axis_item_export(reference.clone()), reference);
    }
}
