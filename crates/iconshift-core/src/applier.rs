//! Platform enable/disable primitive for launcher components.
//!
//! The applier is purely mechanical: it toggles one component at a
//! time and decides no policy. All policy (which components to enable
//! or disable for a given target icon) lives in the controller.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

/// Typed failure from a platform component operation.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The platform refused the toggle.
    #[error("platform denied the component toggle: {0}")]
    Denied(String),

    /// The component handle is not known to the platform.
    #[error("unknown launcher component '{0}'")]
    UnknownComponent(String),

    /// The platform's component state could not be read or decoded.
    #[error("platform component state is corrupt: {0}")]
    Corrupt(String),

    /// Underlying platform I/O failed.
    #[error("platform I/O failed")]
    Io(#[from] std::io::Error),
}

/// How the platform handles a request to bypass the user-visible
/// confirmation when switching icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SilentSupport {
    /// The flag has no meaning on this platform; silent requests pass
    /// through unchanged.
    Ignored,
    /// The platform has a silent path but it is unavailable on this
    /// version; silent requests fail with `PrivateApiUnavailable`.
    Unavailable,
    /// Silent switching works.
    Supported,
}

/// Performs the platform-level component switch for one binding.
///
/// Implementations must be idempotent: enabling an already-enabled
/// component is a no-op success, and likewise for disabling.
pub trait IconApplier: Send + Sync {
    /// Set the enabled state of one launcher component.
    fn set_enabled(&self, component: &str, enabled: bool) -> Result<(), PlatformError>;

    /// Read the enabled state of one launcher component.
    ///
    /// Only used by the controller's read-side reconciliation; the
    /// core never bases write decisions on live platform state.
    fn is_enabled(&self, component: &str) -> Result<bool, PlatformError>;

    /// Whether this platform/version can alternate launcher icons at all.
    fn supports_alternate_icons(&self) -> bool {
        true
    }

    /// Capability of the confirmation-free switch path.
    fn silent_support(&self) -> SilentSupport {
        SilentSupport::Ignored
    }
}

/// In-memory platform fake with inspectable component state.
///
/// Clones share the same state, so a test can keep a handle for
/// assertions after moving a clone into the controller.
#[derive(Debug, Clone, Default)]
pub struct MemoryApplier {
    components: Arc<Mutex<BTreeMap<String, bool>>>,
}

impl MemoryApplier {
    /// Fake platform knowing the given components, all disabled.
    pub fn new(components: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            components: Arc::new(Mutex::new(
                components.into_iter().map(|c| (c.into(), false)).collect(),
            )),
        }
    }

    /// Force a component's state, bypassing the trait contract.
    ///
    /// Test setup hook for simulating external interference or a
    /// platform left in an inconsistent (multiple-enabled) state.
    pub fn force_state(&self, component: &str, enabled: bool) {
        self.components.lock().insert(component.to_string(), enabled);
    }

    /// Components currently enabled, in sorted order.
    pub fn enabled_components(&self) -> Vec<String> {
        self.components
            .lock()
            .iter()
            .filter(|&(_, &enabled)| enabled)
            .map(|(component, _)| component.clone())
            .collect()
    }
}

impl IconApplier for MemoryApplier {
    fn set_enabled(&self, component: &str, enabled: bool) -> Result<(), PlatformError> {
        let mut components = self.components.lock();
        match components.get_mut(component) {
            Some(state) => {
                *state = enabled;
                Ok(())
            }
            None => Err(PlatformError::UnknownComponent(component.to_string())),
        }
    }

    fn is_enabled(&self, component: &str) -> Result<bool, PlatformError> {
        self.components
            .lock()
            .get(component)
            .copied()
            .ok_or_else(|| PlatformError::UnknownComponent(component.to_string()))
    }
}
