//! Autodep package records
//!
//! Metadata for one package as tracked by the dependency automation
//! pipeline: names, version, type, source, requirements, plugin
//! configuration and autoload rules, plus the mapping to and from the
//! flat lock records persisted by the lock file layer.
//!
//! # Example
//!
//! ```
//! use autodep_package::PackageRecord;
//! use serde_json::json;
//!
//! let data = json!({ "version": "1.2.0", "type": "library", "is-dev": true });
//! let record = PackageRecord::create_from_lock("Vendor/Pkg", data.as_object().unwrap()).unwrap();
//!
//! assert_eq!(record.name(), "vendor/pkg");
//! assert_eq!(record.package_type(), Some("library"));
//! assert!(record.is_dev());
//! ```

pub mod config;
pub mod error;
pub mod lock;
pub mod record;
pub mod registry;

pub use config::{RecordConfig, TimestampConfig, TimestampPrecision};
pub use error::{PackageError, Result, UnexpectedValue};
pub use lock::LockKey;
pub use record::PackageRecord;
pub use registry::LockRegistry;
