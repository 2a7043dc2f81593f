//! Recursive-descent interpreter walking a schema tree against a data tree
//!
//! The engine is stateless: all per-call settings travel in a
//! [`ValidationContext`] reference and the error path is threaded as a
//! plain string parameter. Schema trees are read-only and may be shared
//! across concurrent validations. Recursion depth is bounded by the static
//! nesting depth of the schema, not by data size.
//!
//! For every node, regardless of shape, execution order is:
//!
//! 1. `preprocess` hook (replaces the raw value);
//! 2. structural checks for the node's shape;
//! 3. `custom_validate` hook (its return value supersedes everything and
//!    may change the value's effective shape).
//!
//! Validation is fail-fast: the first violation anywhere aborts the whole
//! call with a single [`ValidationError`] carrying the detection path.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use crate::context::{SourceFormat, ValidationContext};
use crate::error::{Result, ValidationError};
use crate::node::{Enumeration, ExtraField, SchemaKind, SchemaNode, SiblingMap};
use serde_json::{Map, Value};

/// Validate `data` against `node`, returning the normalized tree.
///
/// `parent` is the sibling map of `data` (for hook dispatch), `path` the
/// slash-delimited location used in error reporting. Top-level callers
/// pass `None` and an empty path; see [`validate_root`].
pub fn validate(
    node: &SchemaNode,
    data: Value,
    parent: Option<&SiblingMap>,
    path: &str,
    ctx: &ValidationContext,
) -> Result<Value> {
    let mut data = data;

    if let Some(pre) = node.preprocess {
        data = pre(data, path)?;
    }

    data = match &node.kind {
        SchemaKind::Scalar { enumeration } => {
            validate_scalar(data, enumeration.as_ref(), path)?
        }
        SchemaKind::Object {
            children,
            check_unexpected_tags,
        } => validate_object(children, *check_unexpected_tags, data, path, ctx)?,
        SchemaKind::List {
            item,
            repeat_tag,
            extra,
        } => validate_list(item, repeat_tag, extra.as_ref(), data, path, ctx)?,
        SchemaKind::Any => data,
    };

    if let Some(custom) = node.custom_validate {
        data = custom(data, parent, path, ctx)?;
    }

    Ok(data)
}

/// Validate a whole document against a schema root.
pub fn validate_root(node: &SchemaNode, data: Value, ctx: &ValidationContext) -> Result<Value> {
    validate(node, data, None, "", ctx)
}

fn child_path(path: &str, name: &str) -> String {
    format!("{}/{}", path, name)
}

fn item_path(path: &str, repeat_tag: &str, index: usize) -> String {
    format!("{}/{}({})", path, repeat_tag, index)
}

fn validate_scalar(data: Value, enumeration: Option<&Enumeration>, path: &str) -> Result<Value> {
    let s = match data {
        Value::String(s) => s,
        _ => {
            return Err(ValidationError::TypeMismatch {
                path: path.to_string(),
                expected: "a character string is expected".to_string(),
            });
        }
    };

    if let Some(enumeration) = enumeration {
        if !enumeration.contains(&s) {
            return Err(ValidationError::UnexpectedConstant {
                path: path.to_string(),
                value: s,
                allowed: enumeration.allowed(),
            });
        }
    }

    Ok(Value::String(s))
}

fn validate_object(
    children: &[(String, SchemaNode)],
    check_unexpected_tags: bool,
    data: Value,
    path: &str,
    ctx: &ValidationContext,
) -> Result<Value> {
    // An empty XML tag decodes to "" and means an empty container.
    let mut map = match data {
        Value::String(s) if s.is_empty() => Map::new(),
        Value::Object(map) => map,
        _ => {
            return Err(ValidationError::TypeMismatch {
                path: path.to_string(),
                expected: "an array is expected".to_string(),
            });
        }
    };

    if check_unexpected_tags {
        // First undeclared key in data order wins.
        for key in map.keys() {
            if !children.iter().any(|(name, _)| name == key) {
                return Err(ValidationError::UnexpectedTag {
                    path: child_path(path, key),
                    tag: key.clone(),
                });
            }
        }
    }

    for (name, child) in children {
        if let Some(transform) = child.import_transform {
            if !ctx.preview {
                let injected = transform(&map);
                map.insert(name.clone(), injected);
            }
        }

        match map.get(name.as_str()).cloned() {
            Some(value) => {
                let normalized = validate(child, value, Some(&map), &child_path(path, name), ctx)?;
                map.insert(name.clone(), normalized);
            }
            None => {
                let required =
                    child.required || child.custom_required.is_some_and(|hook| hook(&map));
                if required {
                    return Err(ValidationError::MissingRequiredTag {
                        path: child_path(path, name),
                    });
                }
            }
        }
    }

    Ok(Value::Object(map))
}

fn validate_list(
    item: &SchemaNode,
    repeat_tag: &str,
    extra: Option<&ExtraField>,
    data: Value,
    path: &str,
    ctx: &ValidationContext,
) -> Result<Value> {
    match data {
        Value::String(s) if s.is_empty() => {
            if let Some(extra) = extra {
                if extra.required {
                    return Err(ValidationError::MissingRequiredTag {
                        path: child_path(path, &extra.name),
                    });
                }
            }
            Ok(Value::Array(Vec::new()))
        }
        Value::Array(items) => {
            // Positional containers come from the JSON/YAML decoders; an
            // extra-tag entry can only exist in a keyed container.
            if let Some(extra) = extra {
                if extra.required {
                    return Err(ValidationError::MissingRequiredTag {
                        path: child_path(path, &extra.name),
                    });
                }
            }
            let mut normalized = Vec::with_capacity(items.len());
            for (i, value) in items.into_iter().enumerate() {
                normalized.push(validate(
                    item,
                    value,
                    None,
                    &item_path(path, repeat_tag, i + 1),
                    ctx,
                )?);
            }
            Ok(Value::Array(normalized))
        }
        Value::Object(map) => {
            validate_keyed_list(item, repeat_tag, extra, map, path, ctx).map(Value::Object)
        }
        _ => Err(ValidationError::TypeMismatch {
            path: path.to_string(),
            expected: "an array is expected".to_string(),
        }),
    }
}

fn validate_keyed_list(
    item: &SchemaNode,
    repeat_tag: &str,
    extra: Option<&ExtraField>,
    mut map: Map<String, Value>,
    path: &str,
    ctx: &ValidationContext,
) -> Result<Map<String, Value>> {
    if let Some(extra) = extra {
        if extra.required && !map.contains_key(&extra.name) {
            return Err(ValidationError::MissingRequiredTag {
                path: child_path(path, &extra.name),
            });
        }
    }

    let keys: Vec<String> = map.keys().cloned().collect();
    let mut index = 0usize;
    let mut saw_extra = false;

    for key in keys {
        if let Some(extra) = extra {
            if key == extra.name {
                let value = map
                    .get(&key)
                    .cloned()
                    .unwrap_or(Value::Null);
                let normalized =
                    validate(&extra.node, value, Some(&map), &child_path(path, &key), ctx)?;
                map.insert(key, normalized);
                saw_extra = true;
                continue;
            }
        }

        index += 1;
        if ctx.strict {
            check_list_key(&key, repeat_tag, index, ctx.source_format, path)?;
        }

        let value = map.get(&key).cloned().unwrap_or(Value::Null);
        let normalized = validate(item, value, Some(&map), &item_path(path, repeat_tag, index), ctx)?;
        map.insert(key, normalized);
    }

    // Legacy containers may interleave the extra tag with repeated items;
    // normalized output always orders it after them.
    if saw_extra {
        if let Some(extra) = extra {
            if let Some(value) = map.shift_remove(&extra.name) {
                map.insert(extra.name.clone(), value);
            }
        }
    }

    Ok(map)
}

fn check_list_key(
    key: &str,
    repeat_tag: &str,
    index: usize,
    format: SourceFormat,
    path: &str,
) -> Result<()> {
    let valid = match format {
        SourceFormat::Xml => {
            key == repeat_tag
                || (index > 1 && key == format!("{}{}", repeat_tag, index))
                || key == index.to_string()
        }
        SourceFormat::Yaml | SourceFormat::Json => {
            !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
        }
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidKeyShape {
            path: child_path(path, key),
            key: key.to_string(),
        })
    }
}
