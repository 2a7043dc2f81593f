//! Confimport Core - declarative validation engine for configuration import
//!
//! This crate is the schema-interpretation core of the import pipeline: it
//! walks a version-specific schema tree against a document that an external
//! parser has already decoded into nested maps and lists
//! (`serde_json::Value`), and returns the normalized tree or the first
//! violation found.
//!
//! # Main Components
//!
//! - **Schema Node Model**: data-only recursive shape descriptions
//!   ([`SchemaNode`], [`SchemaKind`], [`Enumeration`])
//! - **Validator Engine**: the stateless recursive interpreter
//!   ([`validate`], [`validate_root`])
//! - **Validation Context**: per-call strict/preview/format settings
//!   ([`ValidationContext`], [`SourceFormat`])
//! - **Error Taxonomy**: fail-fast, path-addressed failures
//!   ([`ValidationError`])
//!
//! # Example
//!
//! ```
//! use confimport_core::{validate_root, SchemaNode, ValidationContext, SourceFormat};
//! use serde_json::json;
//!
//! let schema = SchemaNode::object([
//!     ("name", SchemaNode::scalar().required()),
//!     ("tags", SchemaNode::list("tag", SchemaNode::object([
//!         ("tag", SchemaNode::scalar().required()),
//!         ("value", SchemaNode::scalar().default_value("")),
//!     ]))),
//! ]);
//!
//! let ctx = ValidationContext::new(SourceFormat::Xml);
//! let normalized = validate_root(&schema, json!({"name": "x", "tags": ""}), &ctx)?;
//! assert_eq!(normalized, json!({"name": "x", "tags": []}));
//! # Ok::<(), confimport_core::ValidationError>(())
//! ```
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

pub mod context;
pub mod engine;
pub mod error;
pub mod node;

// Re-export main types for convenience
pub use context::{SourceFormat, ValidationContext};
pub use engine::{validate, validate_root};
pub use error::{Result, ValidationError};
pub use node::{
    CustomRequiredFn, CustomValidateFn, DynamicRulesFn, Enumeration, ExportFn, ExtraField,
    ImportTransformFn, PreprocessFn, SchemaKind, SchemaNode, SiblingMap,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
