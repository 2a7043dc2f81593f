//! Schema node model: the declarative description of expected document shape
//!
//! A schema is a tree of [`SchemaNode`] values built once per supported
//! document version and shared read-only across validations. Nodes carry no
//! behavior of their own; the engine in [`crate::engine`] interprets them,
//! and the optional hooks extend the engine at well-defined points.
//!
//! Hooks are plain `fn` pointers rather than boxed closures: every hook in
//! practice is a named function of a version module, and `fn` keeps schema
//! trees `Clone + Send + Sync` for free.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use crate::context::ValidationContext;
use crate::error::Result;
use serde_json::{Map, Value};

/// Sibling map of the value under validation, as seen by hooks.
pub type SiblingMap = Map<String, Value>;

/// Applied before structural checks; replaces the raw value
/// (e.g. sentinel coercion). Receives the node path for error reporting.
pub type PreprocessFn = fn(Value, &str) -> Result<Value>;

/// Applied after structural checks for every node shape. The return value
/// supersedes everything computed so far and may change the value's
/// effective shape, typically by re-entering the engine against a
/// dynamically chosen sub-schema.
pub type CustomValidateFn =
    fn(Value, Option<&SiblingMap>, &str, &ValidationContext) -> Result<Value>;

/// Picks a sub-schema based on sibling field values. Consulted by
/// [`CustomValidateFn`] implementations and by the export pipeline; the
/// engine itself never calls it.
pub type DynamicRulesFn = fn(Option<&SiblingMap>) -> SchemaNode;

/// Conditional requiredness based on sibling fields of the *parent's* data.
pub type CustomRequiredFn = fn(&SiblingMap) -> bool;

/// Computes a field's value before validation runs (backward-compatible
/// default structures). The engine overwrites the field with the returned
/// value outside preview mode; a hook that must preserve explicit input
/// reads it from the sibling map.
pub type ImportTransformFn = fn(&SiblingMap) -> Value;

/// Symmetric counterpart of [`CustomValidateFn`], invoked by the export
/// pipeline when serializing normalized objects back to a document.
/// Metadata only as far as validation is concerned.
pub type ExportFn = fn(Value) -> Value;

/// Closed set of permitted wire values for a scalar field.
///
/// Stored as ordered `(value, name)` pairs mirroring the platform's
/// constant tables: `value` is the numeric form persisted downstream,
/// `name` is the canonical wire string validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    pairs: Vec<(&'static str, &'static str)>,
}

impl Enumeration {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Whether `name` is one of the canonical wire values.
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(_, n)| *n == name)
    }

    /// Stored value for a canonical wire name, if any. Validation only
    /// checks membership; the downstream import pipeline uses this to map
    /// accepted names to their persisted form.
    pub fn value_of(&self, name: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(v, _)| *v)
    }

    /// Canonical wire values joined for error messages.
    pub fn allowed(&self) -> String {
        self.pairs
            .iter()
            .map(|(_, n)| format!("\"{}\"", n))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The singular sibling field legacy formats colocate inside a repeated
/// collection container.
#[derive(Debug, Clone)]
pub struct ExtraField {
    pub name: String,
    pub required: bool,
    pub node: Box<SchemaNode>,
}

/// Structural shape of a schema node.
#[derive(Debug, Clone)]
pub enum SchemaKind {
    /// A string leaf, optionally restricted to a closed enumeration.
    Scalar { enumeration: Option<Enumeration> },
    /// A closed mapping from field name to child schema. Children keep
    /// declaration order. `check_unexpected_tags` defaults to true:
    /// any data key absent from the children is an error.
    Object {
        children: Vec<(String, SchemaNode)>,
        check_unexpected_tags: bool,
    },
    /// A repeated collection: one `item` schema applied to every element.
    /// `repeat_tag` names the repeated element for strict key checks and
    /// path construction.
    List {
        item: Box<SchemaNode>,
        repeat_tag: String,
        extra: Option<ExtraField>,
    },
    /// No structural check; the attached hooks carry the whole contract.
    /// Needed for fields whose effective shape is decided at validation
    /// time (sentinel scalars that preprocess into containers).
    Any,
}

/// One node of a validation schema tree.
///
/// Constructed fluently and immutable thereafter:
///
/// ```
/// use confimport_core::SchemaNode;
///
/// let host = SchemaNode::object([
///     ("host", SchemaNode::scalar().required()),
///     ("name", SchemaNode::scalar().default_value("")),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct SchemaNode {
    pub kind: SchemaKind,
    pub required: bool,
    /// Import-pipeline metadata; never read by the validation engine.
    pub default: Option<String>,
    pub preprocess: Option<PreprocessFn>,
    pub custom_validate: Option<CustomValidateFn>,
    pub dynamic_rules: Option<DynamicRulesFn>,
    pub custom_required: Option<CustomRequiredFn>,
    pub import_transform: Option<ImportTransformFn>,
    pub export: Option<ExportFn>,
}

impl SchemaNode {
    fn with_kind(kind: SchemaKind) -> Self {
        Self {
            kind,
            required: false,
            default: None,
            preprocess: None,
            custom_validate: None,
            dynamic_rules: None,
            custom_required: None,
            import_transform: None,
            export: None,
        }
    }

    /// A string leaf.
    pub fn scalar() -> Self {
        Self::with_kind(SchemaKind::Scalar { enumeration: None })
    }

    /// A closed object with the given children, in declaration order.
    pub fn object<I>(children: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, SchemaNode)>,
    {
        Self::with_kind(SchemaKind::Object {
            children: children
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
            check_unexpected_tags: true,
        })
    }

    /// A repeated collection of `item` elements named `repeat_tag`.
    pub fn list(repeat_tag: &str, item: SchemaNode) -> Self {
        Self::with_kind(SchemaKind::List {
            item: Box::new(item),
            repeat_tag: repeat_tag.to_string(),
            extra: None,
        })
    }

    /// A node with no structural check of its own.
    pub fn any() -> Self {
        Self::with_kind(SchemaKind::Any)
    }

    /// Mark the node required in its parent.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict a scalar to a closed enumeration.
    ///
    /// Only meaningful on scalar nodes; the builder keeps the shapes
    /// separate so a misuse is a programming error, not a data error.
    pub fn one_of(mut self, enumeration: Enumeration) -> Self {
        match &mut self.kind {
            SchemaKind::Scalar { enumeration: slot } => *slot = Some(enumeration),
            _ => panic!("one_of() is only valid on scalar nodes"),
        }
        self
    }

    /// Attach pass-through default metadata.
    pub fn default_value(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    /// Accept data keys beyond the declared children (open-world object).
    pub fn allow_unknown_tags(mut self) -> Self {
        match &mut self.kind {
            SchemaKind::Object {
                check_unexpected_tags,
                ..
            } => *check_unexpected_tags = false,
            _ => panic!("allow_unknown_tags() is only valid on object nodes"),
        }
        self
    }

    /// Declare the colocated singular field of a list container.
    pub fn with_extra(mut self, name: &str, required: bool, node: SchemaNode) -> Self {
        match &mut self.kind {
            SchemaKind::List { extra, .. } => {
                *extra = Some(ExtraField {
                    name: name.to_string(),
                    required,
                    node: Box::new(node),
                });
            }
            _ => panic!("with_extra() is only valid on list nodes"),
        }
        self
    }

    pub fn preprocess(mut self, hook: PreprocessFn) -> Self {
        self.preprocess = Some(hook);
        self
    }

    pub fn custom_validate(mut self, hook: CustomValidateFn) -> Self {
        self.custom_validate = Some(hook);
        self
    }

    pub fn dynamic_rules(mut self, hook: DynamicRulesFn) -> Self {
        self.dynamic_rules = Some(hook);
        self
    }

    pub fn custom_required(mut self, hook: CustomRequiredFn) -> Self {
        self.custom_required = Some(hook);
        self
    }

    pub fn import_transform(mut self, hook: ImportTransformFn) -> Self {
        self.import_transform = Some(hook);
        self
    }

    pub fn export(mut self, hook: ExportFn) -> Self {
        self.export = Some(hook);
        self
    }
}
