//! Per-version schema definitions
//!
//! One module per supported document version, each exposing a `schema()`
//! builder registered in the [`crate::registry::VersionRegistry`]. Versions
//! share sub-trees and hook functions by plain composition; there is no
//! per-version inheritance.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::{Result, SchemaNode, SiblingMap, ValidationContext, ValidationError};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

pub mod v52;
pub mod v60;

/// `date` tag hook: the export timestamp must be `YYYY-MM-DDThh:mm:ssZ`.
pub(crate) fn validate_date_time(
    value: Value,
    _parent: Option<&SiblingMap>,
    path: &str,
    _ctx: &ValidationContext,
) -> Result<Value> {
    static DATE_TIME: OnceLock<Regex> = OnceLock::new();
    let re = DATE_TIME.get_or_init(|| {
        Regex::new(
            r"^20[0-9]{2}-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[01])T(2[0-3]|[01][0-9]):[0-5][0-9]:[0-5][0-9]Z$",
        )
        .expect("valid date-time pattern")
    });

    let valid = value.as_str().is_some_and(|s| re.is_match(s));
    if valid {
        Ok(value)
    } else {
        Err(ValidationError::custom(
            path,
            "\"YYYY-MM-DDThh:mm:ssZ\" is expected",
        ))
    }
}

/// `{ name }` references to named objects (groups, templates, valuemaps).
pub(crate) fn name_ref() -> SchemaNode {
    SchemaNode::object([("name", SchemaNode::scalar().required())])
}

/// Repeated `tag`/`value` pairs shared by hosts, items and triggers.
pub(crate) fn tag_list() -> SchemaNode {
    SchemaNode::list(
        "tag",
        SchemaNode::object([
            ("tag", SchemaNode::scalar().required()),
            ("value", SchemaNode::scalar().default_value("")),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use confimport_core::SourceFormat;
    use serde_json::json;

    #[test]
    fn test_date_time_hook() {
        let ctx = ValidationContext::new(SourceFormat::Xml);
        assert!(validate_date_time(json!("2024-03-09T12:30:55Z"), None, "/date", &ctx).is_ok());

        for bad in ["2024-13-09T12:30:55Z", "2024-03-09 12:30:55", "yesterday"] {
            let err = validate_date_time(json!(bad), None, "/date", &ctx).unwrap_err();
            assert_eq!(err.path(), "/date");
        }
    }
}
