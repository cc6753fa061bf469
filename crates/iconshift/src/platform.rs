//! File-backed store and simulated platform for the CLI.
//!
//! `FileStore` persists the pending slot the way the original mobile
//! plugin does in its preference store: an absent file means no
//! pending request, an empty file means "default icon requested", and
//! any other content is the requested alternate's name.
//!
//! `SimPlatform` keeps per-component enabled flags in a TOML file so
//! that icon state survives across CLI invocations (each invocation
//! models one process lifetime).

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use iconshift_core::{
    IconApplier, IconCatalog, IconId, PendingIcon, PendingStore, PlatformError, StoreError,
};

/// Durable single-slot pending store over one file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PendingStore for FileStore {
    fn get(&self) -> Result<Option<PendingIcon>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if content.is_empty() {
            // Empty-string marker: pending default.
            return Ok(Some(None));
        }
        let icon = IconId::new(content).map_err(|err| StoreError::Corrupt(err.to_string()))?;
        Ok(Some(Some(icon)))
    }

    fn set(&self, value: PendingIcon) -> Result<(), StoreError> {
        let encoded = value.as_ref().map(IconId::as_str).unwrap_or("");
        fs::write(&self.path, encoded)?;
        debug!(path = %self.path.display(), pending = encoded, "pending slot written");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Serialized component enablement state.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ComponentState {
    components: BTreeMap<String, bool>,
}

/// Simulated platform: component toggles persisted to a TOML file.
#[derive(Debug, Clone)]
pub struct SimPlatform {
    path: PathBuf,
}

impl SimPlatform {
    /// Open the component-state file, seeding it from the catalog on
    /// first run: default enabled, alternates disabled.
    pub fn open(path: PathBuf, catalog: &dyn IconCatalog) -> Result<Self, PlatformError> {
        let platform = Self { path };
        if !platform.path.exists() {
            let state = ComponentState {
                components: catalog
                    .bindings()
                    .into_iter()
                    .map(|binding| (binding.component.clone(), binding.is_default()))
                    .collect(),
            };
            platform.save(&state)?;
            debug!(path = %platform.path.display(), "seeded component state");
        }
        Ok(platform)
    }

    fn load(&self) -> Result<ComponentState, PlatformError> {
        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|err| PlatformError::Corrupt(err.to_string()))
    }

    fn save(&self, state: &ComponentState) -> Result<(), PlatformError> {
        let content =
            toml::to_string_pretty(state).map_err(|err| PlatformError::Corrupt(err.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl IconApplier for SimPlatform {
    fn set_enabled(&self, component: &str, enabled: bool) -> Result<(), PlatformError> {
        let mut state = self.load()?;
        match state.components.get_mut(component) {
            Some(flag) => *flag = enabled,
            None => return Err(PlatformError::UnknownComponent(component.to_string())),
        }
        self.save(&state)
    }

    fn is_enabled(&self, component: &str) -> Result<bool, PlatformError> {
        self.load()?
            .components
            .get(component)
            .copied()
            .ok_or_else(|| PlatformError::UnknownComponent(component.to_string()))
    }
}
