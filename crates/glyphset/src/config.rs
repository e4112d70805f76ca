//! Declarative TOML configuration for the registry.
//!
//! ```toml
//! class = "icon"
//!
//! [sets.default]
//! path = "resources/svg"
//! prefix = "icon"
//!
//! [sets.ui]
//! disk = "assets"
//! prefix = "ui"
//! class = "ui-icon"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::registry::IconRegistry;
use crate::set::IconSetOptions;

/// Registry configuration: a registry-wide class plus icon sets by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Class applied to every icon.
    #[serde(default)]
    pub class: Option<String>,
    /// Icon sets keyed by name. Applied in sorted-name order.
    #[serde(default)]
    pub sets: BTreeMap<String, SetConfig>,
}

/// Per-set configuration mirroring [`IconSetOptions`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetConfig {
    /// Local directory tree containing `.svg` files.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Name of a storage disk registered on the registry.
    #[serde(default)]
    pub disk: Option<String>,
    /// Prefix used to qualify icon names from this set.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Class string applied to every icon from this set.
    #[serde(default)]
    pub class: Option<String>,
}

impl SetConfig {
    fn options(&self) -> IconSetOptions {
        let mut options = IconSetOptions::new();
        if let Some(path) = &self.path {
            options = options.path(path);
        }
        if let Some(disk) = &self.disk {
            options = options.disk(disk.clone());
        }
        if let Some(prefix) = &self.prefix {
            options = options.prefix(prefix.clone());
        }
        if let Some(class) = &self.class {
            options = options.class(class.clone());
        }
        options
    }
}

impl RegistryConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| ConfigurationError::io(path, err))?;
        Self::from_toml(&raw).map_err(|err| ConfigurationError::parse(path, err))
    }

    /// Build a registry by registering every configured set.
    ///
    /// Sets go through the same validated
    /// [`add`](crate::IconRegistry::add) path as programmatic registration,
    /// in sorted-name order, so failures are deterministic. Disks must be
    /// added to the returned registry afterwards (configuration names them,
    /// the host supplies them).
    pub fn build(&self) -> Result<IconRegistry, ConfigurationError> {
        let mut registry = match &self.class {
            Some(class) => IconRegistry::with_default_class(class.clone()),
            None => IconRegistry::new(),
        };
        for (name, set) in &self.sets {
            registry.add(name.clone(), set.options())?;
        }
        Ok(registry)
    }
}
