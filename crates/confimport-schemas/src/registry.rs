//! Registry mapping version tokens to lazily-built schema trees
//!
//! Each supported document version is a plain builder function composing a
//! [`SchemaNode`] tree; no per-version subclassing. Builders run at most
//! once, the first time their version is resolved, and the built tree is
//! shared behind an `Arc` across all subsequent validations.
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

use confimport_core::{Result, SchemaNode, ValidationError};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::versions;

/// Builds the root schema node for one document version.
pub type SchemaBuilder = fn() -> SchemaNode;

struct VersionEntry {
    builder: SchemaBuilder,
    schema: OnceLock<Arc<SchemaNode>>,
}

/// Version token -> schema definition lookup with per-entry memoization.
pub struct VersionRegistry {
    entries: HashMap<String, VersionEntry>,
}

impl VersionRegistry {
    /// A registry with no versions registered.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a builder for a version token. A later registration for
    /// the same token replaces the earlier one.
    pub fn register(&mut self, token: &str, builder: SchemaBuilder) {
        self.entries.insert(
            token.to_string(),
            VersionEntry {
                builder,
                schema: OnceLock::new(),
            },
        );
    }

    /// Resolve a version token to its schema tree, building it on first
    /// use. `path` locates the version field for error reporting.
    pub fn resolve(&self, token: &str, path: &str) -> Result<Arc<SchemaNode>> {
        let entry = self
            .entries
            .get(token)
            .ok_or_else(|| ValidationError::UnsupportedVersion {
                path: path.to_string(),
                version: token.to_string(),
            })?;

        let schema = entry.schema.get_or_init(|| {
            log::debug!("building validation schema for version {}", token);
            Arc::new((entry.builder)())
        });
        Ok(schema.clone())
    }

    /// Whether a version token has a registered builder.
    pub fn is_supported(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Registered version tokens, sorted.
    pub fn supported_versions(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        tokens
    }
}

impl Default for VersionRegistry {
    /// Registry wired with the shipped version definitions.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("5.2", versions::v52::schema);
        registry.register("6.0", versions::v60::schema);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static BUILD_COUNT: AtomicUsize = AtomicUsize::new(0);

    fn counting_builder() -> SchemaNode {
        BUILD_COUNT.fetch_add(1, Ordering::SeqCst);
        SchemaNode::object([("version", SchemaNode::scalar().required())])
    }

    #[test]
    fn test_unregistered_token_is_unsupported() {
        let registry = VersionRegistry::default();
        let err = registry.resolve("9.9", "/zabbix_export/version").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnsupportedVersion {
                path: "/zabbix_export/version".to_string(),
                version: "9.9".to_string(),
            }
        );
    }

    #[test]
    fn test_builder_runs_once_and_result_is_shared() {
        let mut registry = VersionRegistry::empty();
        registry.register("1.0", counting_builder);

        let first = registry.resolve("1.0", "").unwrap();
        let second = registry.resolve("1.0", "").unwrap();

        assert_eq!(BUILD_COUNT.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_default_registry_versions() {
        let registry = VersionRegistry::default();
        assert_eq!(registry.supported_versions(), ["5.2", "6.0"]);
        assert!(registry.is_supported("6.0"));
        assert!(!registry.is_supported("6.2"));
    }
}
