//! Validation schema for 5.2 import documents
//!
//! Last pre-UUID generation: objects are matched by name on import, items
//! still group into applications and templates export under `hosts`.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::SchemaNode;

use crate::constants;
use crate::versions::{name_ref, validate_date_time};

/// Root schema for version 5.2.
pub fn schema() -> SchemaNode {
    SchemaNode::object([
        ("version", SchemaNode::scalar().required()),
        ("date", SchemaNode::scalar().custom_validate(validate_date_time)),
        ("groups", SchemaNode::list("group", name_ref())),
        ("hosts", SchemaNode::list("host", host_schema())),
        ("triggers", SchemaNode::list("trigger", trigger_schema())),
    ])
}

fn host_schema() -> SchemaNode {
    SchemaNode::object([
        ("host", SchemaNode::scalar().required()),
        ("name", SchemaNode::scalar().default_value("")),
        ("description", SchemaNode::scalar().default_value("")),
        (
            "status",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::status()),
        ),
        ("groups", SchemaNode::list("group", name_ref()).required()),
        (
            "interfaces",
            SchemaNode::list("interface", interface_schema()),
        ),
        ("items", SchemaNode::list("item", item_schema())),
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
        ("interface_ref", SchemaNode::scalar().required()),
    ])
}

fn item_schema() -> SchemaNode {
    SchemaNode::object([
        ("name", SchemaNode::scalar().required()),
        (
            "type",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::item_type()),
        ),
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
        ("applications", SchemaNode::list("application", name_ref())),
        ("interface_ref", SchemaNode::scalar()),
    ])
}

fn trigger_schema() -> SchemaNode {
    SchemaNode::object([
        ("expression", SchemaNode::scalar().required()),
        ("name", SchemaNode::scalar().required()),
        (
            "priority",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::trigger_priority()),
        ),
        (
            "status",
            SchemaNode::scalar()
                .default_value("0")
                .one_of(constants::status()),
        ),
        ("description", SchemaNode::scalar().default_value("")),
    ])
}
