//! Package metadata record

use crate::config::RecordConfig;
use crate::lock::{LockKey, PRETTY_NAME_KEY, VERSION_KEY};
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Known state of one package in the automation pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRecord {
    name: String,
    pretty_name: String,
    parent_name: Option<String>,
    pretty_version: Option<String>,
    package_type: Option<String>,
    url: Option<String>,
    operation: Option<String>,
    requires: HashMap<String, String>,
    configs: Map<String, Value>,
    autoload: Map<String, Value>,
    is_dev: bool,
    created: String,
}

impl PackageRecord {
    /// Create a record stamped with the current time
    pub fn new(name: impl Into<String>, pretty_version: Option<&str>) -> Self {
        Self::with_record_config(name, pretty_version, &RecordConfig::default())
    }

    /// Create a record whose creation time is formatted per `config`
    pub fn with_record_config(
        name: impl Into<String>,
        pretty_version: Option<&str>,
        config: &RecordConfig,
    ) -> Self {
        let pretty_name = name.into();

        Self {
            name: pretty_name.to_lowercase(),
            pretty_name,
            parent_name: None,
            pretty_version: pretty_version.map(str::to_string),
            package_type: None,
            url: None,
            operation: None,
            requires: HashMap::new(),
            configs: Map::new(),
            autoload: Map::new(),
            is_dev: false,
            created: config.now(),
        }
    }

    /// Rebuild a record from a persisted lock record.
    ///
    /// `data["version"]` becomes the pretty version. Every other
    /// recognised key is routed to its setter; null values are skipped so
    /// the field keeps its default, and unknown keys are ignored.
    pub fn create_from_lock(name: &str, data: &Map<String, Value>) -> crate::Result<Self> {
        let version = match data.get(VERSION_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(version)) => Some(version.as_str()),
            Some(other) => {
                return Err(crate::UnexpectedValue::shape(VERSION_KEY, "a string", other).into());
            }
        };

        let mut record = Self::new(name, version);

        for (key, value) in data {
            if value.is_null() {
                continue;
            }
            match LockKey::from_key(key) {
                Some(lock_key) => lock_key.apply(&mut record, value)?,
                None => {
                    if key != VERSION_KEY && key != PRETTY_NAME_KEY {
                        trace!("Ignoring unknown lock key '{}' for {}", key, name);
                    }
                }
            }
        }

        debug!("Restored {} from lock record", record.pretty_name);
        Ok(record)
    }

    /// Flatten into a lock record.
    ///
    /// `name` is not written; it is derived from `pretty-name` on the way back.
    pub fn to_lock_map(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            PRETTY_NAME_KEY.to_string(),
            Value::String(self.pretty_name.clone()),
        );
        data.insert(VERSION_KEY.to_string(), optional(&self.pretty_version));

        for key in LockKey::ALL {
            let value = match key {
                LockKey::Parent => optional(&self.parent_name),
                LockKey::IsDev => Value::Bool(self.is_dev),
                LockKey::Url => optional(&self.url),
                LockKey::Operation => optional(&self.operation),
                LockKey::Type => optional(&self.package_type),
                LockKey::Requires => Value::Object(
                    self.requires
                        .iter()
                        .map(|(name, constraint)| (name.clone(), Value::String(constraint.clone())))
                        .collect(),
                ),
                LockKey::AutomaticExtra => Value::Object(self.configs.clone()),
                LockKey::Autoload => Value::Object(self.autoload.clone()),
                LockKey::Created => Value::String(self.created.clone()),
            };
            data.insert(key.as_str().to_string(), value);
        }

        data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn pretty_name(&self) -> &str {
        &self.pretty_name
    }

    /// Package that pulled this one in transitively
    pub fn parent_name(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    pub fn set_parent_name(&mut self, parent_name: impl Into<Option<String>>) -> &mut Self {
        self.parent_name = parent_name.into();
        self
    }

    pub fn pretty_version(&self) -> Option<&str> {
        self.pretty_version.as_deref()
    }

    /// Package type tag, e.g. "library" or "metapackage"
    pub fn package_type(&self) -> Option<&str> {
        self.package_type.as_deref()
    }

    pub fn set_type(&mut self, package_type: impl Into<Option<String>>) -> &mut Self {
        self.package_type = package_type.into();
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<Option<String>>) -> &mut Self {
        self.url = url.into();
        self
    }

    /// Last lifecycle operation applied, e.g. "install" or "update"
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    pub fn set_operation(&mut self, operation: impl Into<Option<String>>) -> &mut Self {
        self.operation = operation.into();
        self
    }

    pub fn requires(&self) -> &HashMap<String, String> {
        &self.requires
    }

    pub fn set_requires(&mut self, requires: HashMap<String, String>) -> &mut Self {
        self.requires = requires;
        self
    }

    pub fn configs(&self) -> &Map<String, Value> {
        &self.configs
    }

    /// Replace all plugin configuration blocks
    pub fn set_config(&mut self, configs: Map<String, Value>) -> &mut Self {
        self.configs = configs;
        self
    }

    /// Whether `main_key` has a configuration block, and when `name` is
    /// given, whether that block is a map containing `name`.
    pub fn has_config(&self, main_key: &str, name: Option<&str>) -> bool {
        self.get_config(main_key, name).is_some()
    }

    /// Look up a configuration block, or one entry inside it
    pub fn get_config(&self, main_key: &str, name: Option<&str>) -> Option<&Value> {
        let block = self.configs.get(main_key)?;
        match name {
            Some(name) => block.as_object()?.get(name),
            None => Some(block),
        }
    }

    pub fn autoload(&self) -> &Map<String, Value> {
        &self.autoload
    }

    pub fn set_autoload(&mut self, autoload: Map<String, Value>) -> &mut Self {
        self.autoload = autoload;
        self
    }

    pub fn is_dev(&self) -> bool {
        self.is_dev
    }

    /// Mark as a development requirement; `None` means `true`
    pub fn set_is_dev(&mut self, is_dev: impl Into<Option<bool>>) -> &mut Self {
        self.is_dev = is_dev.into().unwrap_or(true);
        self
    }

    /// Creation time as stored (RFC3339)
    pub fn time(&self) -> &str {
        &self.created
    }

    pub fn set_time(&mut self, created: impl Into<String>) -> &mut Self {
        self.created = created.into();
        self
    }

    /// Parsed creation time, if the stored text is valid RFC3339
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created).ok()
    }
}

fn optional(value: &Option<String>) -> Value {
    match value {
        Some(value) => Value::String(value.clone()),
        None => Value::Null,
    }
}
