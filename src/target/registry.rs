//! Target registry for named target lookup.

use heapless::{FnvIndexMap, String};

use crate::config::TargetConfig;
use crate::error::{ConfigError, Error, Result, TargetError};

/// Maximum number of targets in the registry.
pub const MAX_TARGETS: usize = 16;

/// Registry for named targets.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: FnvIndexMap<String<32>, TargetConfig, MAX_TARGETS>,
}

impl TargetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            targets: FnvIndexMap::new(),
        }
    }

    /// Load targets from an ArmConfig.
    pub fn from_config(config: &crate::config::ArmConfig) -> Self {
        let mut registry = Self::new();
        for (name, target) in &config.targets {
            let _ = registry.register(name.as_str(), *target);
        }
        registry
    }

    /// Register a target with a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register(&mut self, name: &str, target: TargetConfig) -> Result<()> {
        let name_str = String::try_from(name).map_err(|_| {
            let mut msg: heapless::String<64> = heapless::String::new();
            let _ = msg.push_str("name too long");
            Error::Target(TargetError::InvalidName(msg))
        })?;

        self.targets
            .insert(name_str, target)
            .map_err(|_| Error::Target(TargetError::RegistryFull))?;

        Ok(())
    }

    /// Get a target by name.
    pub fn get(&self, name: &str) -> Option<&TargetConfig> {
        let name_str = String::try_from(name).ok()?;
        self.targets.get(&name_str)
    }

    /// Get a target by name, with error if not found.
    pub fn get_or_error(&self, name: &str) -> Result<&TargetConfig> {
        self.get(name).ok_or_else(|| {
            let mut missing: String<32> = String::new();
            for c in name.chars() {
                if missing.push(c).is_err() {
                    break;
                }
            }
            Error::Config(ConfigError::TargetNotFound(missing))
        })
    }

    /// Check if a target exists.
    pub fn contains(&self, name: &str) -> bool {
        if let Ok(name_str) = String::try_from(name) {
            self.targets.contains_key(&name_str)
        } else {
            false
        }
    }

    /// Remove a target by name.
    pub fn remove(&mut self, name: &str) -> Option<TargetConfig> {
        let name_str = String::try_from(name).ok()?;
        self.targets.remove(&name_str)
    }

    /// Get the number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Get an iterator over target names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(|s| s.as_str())
    }

    /// Get an iterator over targets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetConfig)> {
        self.targets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Clear all targets.
    pub fn clear(&mut self) {
        self.targets.clear();
    }
}
