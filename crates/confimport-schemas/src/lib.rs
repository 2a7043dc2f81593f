//! Version-specific import document schemas
//!
//! Built on top of `confimport-core`, this crate ships the concrete
//! validation trees for supported export versions, the enumeration tables
//! they reference, a lazily-memoizing version registry and the envelope
//! validator that dispatches whole documents.
//!
//! ```
//! use confimport_core::{SourceFormat, ValidationContext};
//! use confimport_schemas::EnvelopeValidator;
//! use serde_json::json;
//!
//! let validator = EnvelopeValidator::new();
//! let ctx = ValidationContext::new(SourceFormat::Xml);
//! let document = json!({
//!     "zabbix_export": {
//!         "version": "6.0",
//!         "groups": {
//!             "group": {"uuid": "c0de", "name": "Web servers"}
//!         }
//!     }
//! });
//!
//! let normalized = validator.validate(document, "", &ctx).unwrap();
//! assert_eq!(normalized["zabbix_export"]["groups"]["group"]["name"], "Web servers");
//! ```
//!
//! Copyright (c) 2025 Confimport Team
//! Licensed under the Apache-2.0 license

pub mod constants;
pub mod envelope;
pub mod registry;
pub mod versions;

pub use envelope::{EnvelopeValidator, ROOT_TAG};
pub use registry::{SchemaBuilder, VersionRegistry};
