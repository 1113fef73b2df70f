//! In-memory registry of lock records

use crate::error::UnexpectedValue;
use crate::lock::PRETTY_NAME_KEY;
use crate::record::PackageRecord;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Package records keyed by their lower-cased pretty name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LockRegistry {
    packages: BTreeMap<String, PackageRecord>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from lock JSON text.
    ///
    /// The root is an object mapping package names to lock records. Each
    /// record is rebuilt with its `pretty-name`, falling back to the key.
    pub fn from_json(content: &str) -> crate::Result<Self> {
        let root: Value = serde_json::from_str(content)?;
        let entries = root
            .as_object()
            .ok_or_else(|| UnexpectedValue::new("lock registry root must be an object"))?;

        let mut registry = Self::new();
        for (key, entry) in entries {
            let data = entry.as_object().ok_or_else(|| {
                UnexpectedValue::shape(key, "a lock record object", entry)
            })?;
            let pretty_name = match data.get(PRETTY_NAME_KEY) {
                None | Some(Value::Null) => key.as_str(),
                Some(Value::String(name)) => name.as_str(),
                Some(other) => {
                    return Err(UnexpectedValue::shape(
                        &format!("{}.{}", key, PRETTY_NAME_KEY),
                        "a string",
                        other,
                    )
                    .into());
                }
            };
            registry.insert(PackageRecord::create_from_lock(pretty_name, data)?);
        }

        debug!("Loaded {} packages from lock registry", registry.len());
        Ok(registry)
    }

    /// Serialize to pretty JSON, sorted by package name
    pub fn to_json(&self) -> crate::Result<String> {
        let root: Map<String, Value> = self
            .packages
            .iter()
            .map(|(name, record)| (name.clone(), Value::Object(record.to_lock_map())))
            .collect();

        debug!("Serializing {} packages to lock registry", root.len());
        Ok(serde_json::to_string_pretty(&Value::Object(root))?)
    }

    /// Add or replace a record, returning the one it replaced.
    ///
    /// The key is derived from the pretty name, the only name a lock
    /// record carries, so entries survive a JSON round trip even after
    /// `set_name`.
    pub fn insert(&mut self, record: PackageRecord) -> Option<PackageRecord> {
        let key = record.pretty_name().to_lowercase();
        let replaced = self.packages.insert(key, record);
        if let Some(ref old) = replaced {
            warn!("Replaced lock entry for {}", old.pretty_name());
        }
        replaced
    }

    /// Case-insensitive lookup by pretty name
    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.packages.get(&name.to_lowercase())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PackageRecord> {
        self.packages.get_mut(&name.to_lowercase())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.packages.remove(&name.to_lowercase()).is_some()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Records ordered by name
    pub fn iter(&self) -> impl Iterator<Item = &PackageRecord> {
        self.packages.values()
    }

    pub fn dev_packages(&self) -> impl Iterator<Item = &PackageRecord> {
        self.iter().filter(|record| record.is_dev())
    }

    /// Records pulled in by `parent`
    pub fn children_of<'a>(&'a self, parent: &'a str) -> impl Iterator<Item = &'a PackageRecord> {
        self.iter().filter(move |record| {
            record
                .parent_name()
                .is_some_and(|name| name.eq_ignore_ascii_case(parent))
        })
    }
}
