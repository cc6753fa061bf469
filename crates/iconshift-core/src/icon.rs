//! Icon identity and launcher component binding types.
//!
//! These types are deliberately platform-neutral: a "component" is an
//! opaque handle the host platform understands (an activity alias on
//! Android, an alternate icon name on iOS), and the core only ever
//! passes it through to the [`IconApplier`](crate::IconApplier).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of an alternate launcher icon.
///
/// Always non-empty. "No alternate icon" (the default icon) is
/// `None` at every API boundary; the empty string exists only inside
/// the persisted wire encoding of a pending-default request and never
/// leaks into an `IconId`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconId(String);

/// Error for an attempted empty icon name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("icon names must be non-empty")]
pub struct EmptyIconName;

impl IconId {
    /// Create an icon identifier, rejecting the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, EmptyIconName> {
        let name = name.into();
        if name.is_empty() {
            Err(EmptyIconName)
        } else {
            Ok(Self(name))
        }
    }

    /// The icon name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IconId {
    type Error = EmptyIconName;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<IconId> for String {
    fn from(id: IconId) -> String {
        id.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One pending icon request: `None` means "switch to the default icon".
pub type PendingIcon = Option<IconId>;

/// Pairing of a launcher component handle with the icon it serves.
///
/// Exactly one binding should be enabled on the platform at any time;
/// the platform does not guarantee that on its own, so the controller
/// re-establishes exclusivity on every apply pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentBinding {
    /// Opaque platform component handle (e.g. an activity alias name).
    pub component: String,
    /// Icon served by this component; `None` marks the default binding.
    pub icon: Option<IconId>,
}

impl ComponentBinding {
    /// Binding for the default launcher icon.
    pub fn default_icon(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            icon: None,
        }
    }

    /// Binding for an alternate icon.
    pub fn alternate(component: impl Into<String>, icon: IconId) -> Self {
        Self {
            component: component.into(),
            icon: Some(icon),
        }
    }

    /// Whether this binding serves the default icon.
    pub fn is_default(&self) -> bool {
        self.icon.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_id_rejects_empty() {
        assert_eq!(IconId::new(""), Err(EmptyIconName));
    }

    #[test]
    fn test_icon_id_roundtrips_through_string() {
        let id = IconId::new("red").unwrap();
        assert_eq!(id.as_str(), "red");
        assert_eq!(String::from(id.clone()), "red");
        assert_eq!(IconId::try_from(String::from("red")).unwrap(), id);
    }

    #[test]
    fn test_default_binding_has_no_icon() {
        let binding = ComponentBinding::default_icon("app.MainActivity");
        assert!(binding.is_default());
        assert!(binding.icon.is_none());

        let alt = ComponentBinding::alternate("app.RedIcon", IconId::new("red").unwrap());
        assert!(!alt.is_default());
    }
}
