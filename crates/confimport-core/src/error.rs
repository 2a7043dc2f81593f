//! Validation error types for import document validation
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure raised while walking a document against a schema tree.
///
/// Every variant that points into the document carries the slash-delimited
/// `path` at which the violation was detected, so callers can present a
/// field-addressable message. Validation is fail-fast: the first error
/// anywhere in the tree aborts the whole call and propagates unmodified.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// The value is not the scalar/container kind the schema expects.
    #[error("Invalid tag \"{path}\": {expected}")]
    TypeMismatch {
        path: String,
        /// Human-readable expectation, e.g. "a character string is expected".
        expected: String,
    },

    /// A closed object received a key absent from its declared children.
    #[error("Invalid tag \"{path}\": unexpected tag \"{tag}\"")]
    UnexpectedTag { path: String, tag: String },

    /// A required child is absent from the data.
    #[error("Invalid tag \"{path}\": the tag is missing")]
    MissingRequiredTag { path: String },

    /// A strict-mode list key failed the format-specific shape check.
    #[error("Invalid tag \"{path}\": unexpected subtag \"{key}\"")]
    InvalidKeyShape { path: String, key: String },

    /// A scalar value fell outside its closed enumeration.
    #[error("Invalid tag \"{path}\": value \"{value}\" must be one of {allowed}")]
    UnexpectedConstant {
        path: String,
        value: String,
        /// Comma-separated canonical values, for the error message only.
        allowed: String,
    },

    /// The envelope's version token was never registered.
    #[error("Invalid tag \"{path}\": unsupported version number \"{version}\"")]
    UnsupportedVersion { path: String, version: String },

    /// Raised directly by a hook implementation (malformed date string,
    /// cross-field constraint violation and the like).
    #[error("Invalid tag \"{path}\": {message}")]
    Custom { path: String, message: String },
}

impl ValidationError {
    /// Path at which the error was detected.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::TypeMismatch { path, .. }
            | ValidationError::UnexpectedTag { path, .. }
            | ValidationError::MissingRequiredTag { path }
            | ValidationError::InvalidKeyShape { path, .. }
            | ValidationError::UnexpectedConstant { path, .. }
            | ValidationError::UnsupportedVersion { path, .. }
            | ValidationError::Custom { path, .. } => path,
        }
    }

    /// Shorthand for hook implementations raising a custom failure.
    pub fn custom<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        ValidationError::Custom {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
