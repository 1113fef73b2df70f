//! Lock record keys and their mapping onto [`PackageRecord`] setters

use crate::error::UnexpectedValue;
use crate::record::PackageRecord;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Key holding the display name in a lock record
pub const PRETTY_NAME_KEY: &str = "pretty-name";
/// Key holding the pretty version in a lock record
pub const VERSION_KEY: &str = "version";

/// Lock record keys that populate a record after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockKey {
    Parent,
    IsDev,
    Url,
    Operation,
    Type,
    Requires,
    AutomaticExtra,
    Autoload,
    Created,
}

impl LockKey {
    /// All keys, in serialization order
    pub const ALL: [LockKey; 9] = [
        LockKey::Parent,
        LockKey::IsDev,
        LockKey::Url,
        LockKey::Operation,
        LockKey::Type,
        LockKey::Requires,
        LockKey::AutomaticExtra,
        LockKey::Autoload,
        LockKey::Created,
    ];

    /// Look up a key by its lock record name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "parent" => Some(LockKey::Parent),
            "is-dev" => Some(LockKey::IsDev),
            "url" => Some(LockKey::Url),
            "operation" => Some(LockKey::Operation),
            "type" => Some(LockKey::Type),
            "requires" => Some(LockKey::Requires),
            "automatic-extra" => Some(LockKey::AutomaticExtra),
            "autoload" => Some(LockKey::Autoload),
            "created" => Some(LockKey::Created),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LockKey::Parent => "parent",
            LockKey::IsDev => "is-dev",
            LockKey::Url => "url",
            LockKey::Operation => "operation",
            LockKey::Type => "type",
            LockKey::Requires => "requires",
            LockKey::AutomaticExtra => "automatic-extra",
            LockKey::Autoload => "autoload",
            LockKey::Created => "created",
        }
    }

    /// Apply a non-null lock value to the record through the matching setter
    pub fn apply(self, record: &mut PackageRecord, value: &Value) -> Result<(), UnexpectedValue> {
        match self {
            LockKey::Parent => {
                record.set_parent_name(Some(self.string(value)?));
            }
            LockKey::IsDev => {
                let is_dev = value
                    .as_bool()
                    .ok_or_else(|| UnexpectedValue::shape(self.as_str(), "a boolean", value))?;
                record.set_is_dev(is_dev);
            }
            LockKey::Url => {
                record.set_url(Some(self.string(value)?));
            }
            LockKey::Operation => {
                record.set_operation(Some(self.string(value)?));
            }
            LockKey::Type => {
                record.set_type(Some(self.string(value)?));
            }
            LockKey::Requires => {
                record.set_requires(self.requires(value)?);
            }
            LockKey::AutomaticExtra => {
                record.set_config(self.object(value)?);
            }
            LockKey::Autoload => {
                record.set_autoload(self.object(value)?);
            }
            LockKey::Created => {
                record.set_time(self.string(value)?);
            }
        }
        Ok(())
    }

    fn string(self, value: &Value) -> Result<String, UnexpectedValue> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| UnexpectedValue::shape(self.as_str(), "a string", value))
    }

    fn object(self, value: &Value) -> Result<Map<String, Value>, UnexpectedValue> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| UnexpectedValue::shape(self.as_str(), "an object", value))
    }

    fn requires(self, value: &Value) -> Result<HashMap<String, String>, UnexpectedValue> {
        let entries = value
            .as_object()
            .ok_or_else(|| UnexpectedValue::shape(self.as_str(), "an object", value))?;

        entries
            .iter()
            .map(|(name, constraint)| match constraint.as_str() {
                Some(constraint) => Ok((name.clone(), constraint.to_string())),
                None => Err(UnexpectedValue::shape(
                    &format!("{}.{}", self, name),
                    "a string",
                    constraint,
                )),
            })
            .collect()
    }
}

impl std::fmt::Display for LockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
