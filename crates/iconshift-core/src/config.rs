//! Catalog declaration files.
//!
//! Mobile platforms discover launcher components from a manifest; a
//! Rust host declares them in a small TOML file instead. The schema is
//! intentionally flat and serialization-friendly: one default
//! component plus a list of named alternates.
//!
//! ```toml
//! default_component = "app.MainActivity"
//!
//! [[icons]]
//! name = "red"
//! component = "app.RedIcon"
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::StaticCatalog;
use crate::icon::{ComponentBinding, IconId};

/// Errors from loading or validating a catalog declaration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The declaration file does not exist.
    #[error("catalog file not found: {0}")]
    NotFound(PathBuf),

    /// Reading the declaration file failed.
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),

    /// The declaration file is not valid TOML for the schema.
    #[error("failed to parse catalog file")]
    Parse(#[from] toml::de::Error),

    /// The declaration parsed but its contents are inconsistent.
    #[error("invalid catalog: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// One alternate icon declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconEntry {
    /// Icon name exposed to callers.
    pub name: IconId,
    /// Platform component serving this icon.
    pub component: String,
}

/// Root of a catalog declaration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    /// Component that serves the default icon.
    pub default_component: String,
    /// Alternate icons, in declaration order.
    #[serde(default)]
    pub icons: Vec<IconEntry>,
}

impl CatalogFile {
    /// Load a catalog declaration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a catalog declaration from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let file: CatalogFile = toml::from_str(toml)?;
        file.validate()?;
        Ok(file)
    }

    /// Check internal consistency: non-empty components, unique icon
    /// names, and unique component handles (default included).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.default_component.is_empty() {
            errors.push("default_component must be non-empty".to_string());
        }

        let mut names = BTreeSet::new();
        let mut components = BTreeSet::new();
        components.insert(self.default_component.as_str());

        for entry in &self.icons {
            if entry.component.is_empty() {
                errors.push(format!("icon '{}' has an empty component", entry.name));
            }
            if !names.insert(&entry.name) {
                errors.push(format!("duplicate icon name '{}'", entry.name));
            }
            if !components.insert(entry.component.as_str()) {
                errors.push(format!(
                    "component '{}' is bound more than once",
                    entry.component
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Turn the declaration into a fixed catalog.
    pub fn into_catalog(self) -> StaticCatalog {
        let mut bindings = vec![ComponentBinding::default_icon(self.default_component)];
        bindings.extend(
            self.icons
                .into_iter()
                .map(|entry| ComponentBinding::alternate(entry.component, entry.name)),
        );
        StaticCatalog::new(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconCatalog;

    const DEMO: &str = r#"
default_component = "app.MainActivity"

[[icons]]
name = "red"
component = "app.RedIcon"

[[icons]]
name = "blue"
component = "app.BlueIcon"
"#;

    #[test]
    fn test_parse_demo_catalog() {
        let file = CatalogFile::from_toml(DEMO).unwrap();
        assert_eq!(file.default_component, "app.MainActivity");
        assert_eq!(file.icons.len(), 2);

        let catalog = file.into_catalog();
        assert_eq!(catalog.bindings().len(), 3);
        assert_eq!(catalog.supported_icons().len(), 2);
    }

    #[test]
    fn test_empty_icon_name_rejected() {
        let toml = r#"
default_component = "app.MainActivity"

[[icons]]
name = ""
component = "app.RedIcon"
"#;
        // Empty names fail IconId deserialization, not validation.
        assert!(matches!(
            CatalogFile::from_toml(toml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_duplicate_icon_name_rejected() {
        let toml = r#"
default_component = "app.MainActivity"

[[icons]]
name = "red"
component = "app.RedIcon"

[[icons]]
name = "red"
component = "app.CrimsonIcon"
"#;
        match CatalogFile::from_toml(toml) {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("duplicate icon name")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_reused_component_rejected() {
        let toml = r#"
default_component = "app.MainActivity"

[[icons]]
name = "red"
component = "app.MainActivity"
"#;
        match CatalogFile::from_toml(toml) {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("bound more than once")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
default_component = "app.MainActivity"
extra = true
"#;
        assert!(matches!(
            CatalogFile::from_toml(toml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_icons_are_optional() {
        let file = CatalogFile::from_toml(r#"default_component = "app.MainActivity""#).unwrap();
        assert!(file.icons.is_empty());
        let catalog = file.into_catalog();
        assert!(catalog.supported_icons().is_empty());
    }
}
