//! Validation context threaded through the schema recursion
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};

/// Serialization format the document was decoded from.
///
/// List containers are keyed differently per format, so strict-mode key
/// checks need to know where the tree came from. Decoding itself happens
/// upstream; this is only a dispatch token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Xml,
    Yaml,
    Json,
}

impl SourceFormat {
    /// Wire name of the format, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Xml => "xml",
            SourceFormat::Yaml => "yaml",
            SourceFormat::Json => "json",
        }
    }
}

/// Per-call validation settings.
///
/// Created fresh for each top-level validation and passed by reference
/// through the recursion. Nothing here is mutated; a context can be shared
/// across concurrent validations of the same document batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// Enforce format-specific key-shape rules on list containers.
    pub strict: bool,
    /// Suppress import-only coercions so the output matches what a
    /// corresponding export pass would produce.
    pub preview: bool,
    /// Format the document was decoded from.
    pub source_format: SourceFormat,
}

impl ValidationContext {
    /// Create a non-strict, non-preview context for the given format.
    pub fn new(source_format: SourceFormat) -> Self {
        Self {
            strict: false,
            preview: false,
            source_format,
        }
    }

    /// Toggle strict key-shape checking.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Toggle preview mode.
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new(SourceFormat::Xml)
    }
}
