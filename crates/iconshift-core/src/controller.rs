//! Deferred icon-switch controller.
//!
//! Switching the launcher icon while the app is foregrounded forces a
//! destructive process kill on Android, so a requested change is never
//! applied immediately. Instead the request is persisted and applied
//! at the next background transition, or at the next launch if the
//! process was killed before a background event fired.
//!
//! # Architecture
//!
//! - [`request_icon_change`](IconSwitchController::request_icon_change)
//!   validates against the catalog and persists the request. Nothing
//!   is applied.
//! - [`on_background`](IconSwitchController::on_background) and
//!   [`on_attach`](IconSwitchController::on_attach) consume the
//!   persisted request exactly once: apply, then clear. On apply
//!   failure the slot is kept, so the next lifecycle event retries the
//!   same target (at-least-once semantics for a requested change).
//! - The process restart that realizes the change on screen is an
//!   output signal in [`BackgroundOutcome`]; the core never touches
//!   process control itself, and debug builds never request it.
//!
//! The host is expected to serialize lifecycle and request calls; a
//! single mutex around the pending-slot transition covers hosts that
//! do not.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::applier::{IconApplier, SilentSupport};
use crate::catalog::IconCatalog;
use crate::error::{Error, Result};
use crate::icon::{IconId, PendingIcon};
use crate::store::PendingStore;

/// Build flavor the controller runs under.
///
/// Debug builds never request a process restart after applying a
/// deferred change, keeping development reload workflows uninterrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// The flavor this binary was compiled as.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }
}

/// Options for an icon change request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeOptions {
    /// Bypass the user-visible confirmation where the platform has a
    /// silent path. Ignored on platforms where the flag has no
    /// meaning; fails with `PrivateApiUnavailable` where the path
    /// exists but is unavailable on this version.
    pub silent: bool,
}

/// Result of a background transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundOutcome {
    /// The target that was applied, if a request was pending:
    /// `Some(None)` means the default icon was applied, `Some(Some(id))`
    /// an alternate. `None` means nothing was pending (no-op).
    pub applied: Option<PendingIcon>,
    /// Whether the host should restart the process now. Only ever true
    /// in release builds, and only after a successful apply.
    pub restart: bool,
}

impl BackgroundOutcome {
    fn noop() -> Self {
        Self {
            applied: None,
            restart: false,
        }
    }
}

/// Owns the immediate-vs-deferred decision and the resume-on-attach
/// logic for launcher icon switches.
pub struct IconSwitchController {
    catalog: Box<dyn IconCatalog>,
    store: Box<dyn PendingStore>,
    applier: Box<dyn IconApplier>,
    build_mode: BuildMode,
    /// In-memory mirror of the persisted slot. The lock also guards
    /// the store write in a request and the read+apply+clear
    /// transition in the lifecycle hooks.
    pending: Mutex<PendingIcon>,
}

impl IconSwitchController {
    /// Create a controller over the injected collaborators, using the
    /// compiled build flavor.
    pub fn new(
        catalog: Box<dyn IconCatalog>,
        store: Box<dyn PendingStore>,
        applier: Box<dyn IconApplier>,
    ) -> Self {
        Self {
            catalog,
            store,
            applier,
            build_mode: BuildMode::current(),
            pending: Mutex::new(None),
        }
    }

    /// Override the build flavor (hosts that learn debuggability at
    /// runtime rather than compile time).
    pub fn with_build_mode(mut self, build_mode: BuildMode) -> Self {
        self.build_mode = build_mode;
        self
    }

    /// Request an icon change, to be applied at the next background
    /// transition or launch.
    ///
    /// `None` requests the default icon. An unknown icon fails with
    /// [`Error::InvalidIcon`] before anything is persisted. A new
    /// request overwrites any prior pending one (last write wins).
    pub fn request_icon_change(&self, icon: PendingIcon, options: ChangeOptions) -> Result<()> {
        if !self.applier.supports_alternate_icons() {
            return Err(Error::Unsupported);
        }
        if options.silent && self.applier.silent_support() == SilentSupport::Unavailable {
            return Err(Error::PrivateApiUnavailable);
        }

        if let Some(ref id) = icon {
            let available = self.catalog.supported_icons();
            if !available.contains(id) {
                return Err(Error::InvalidIcon {
                    requested: id.to_string(),
                    available: available.into_iter().map(|i| i.to_string()).collect(),
                });
            }
        }

        let mut pending = self.pending.lock();
        self.store.set(icon.clone())?;
        *pending = icon;
        debug!(target_icon = ?pending.as_ref().map(IconId::as_str), "icon change recorded");
        Ok(())
    }

    /// The icon the platform currently shows: `None` for the default,
    /// `Some(id)` for an alternate.
    ///
    /// Platform toggles are not mutually exclusive by construction, so
    /// an alternate can read enabled while the default is too. The
    /// alternate wins that read; exclusivity is restored on the next
    /// apply pass regardless.
    pub fn current_icon(&self) -> Result<Option<IconId>> {
        for binding in self.catalog.bindings() {
            if binding.is_default() {
                continue;
            }
            let enabled = self
                .applier
                .is_enabled(&binding.component)
                .map_err(|cause| Error::ApplyFailed {
                    binding: binding.component.clone(),
                    cause,
                })?;
            if enabled {
                return Ok(binding.icon);
            }
        }
        Ok(None)
    }

    /// Alternate icons the catalog declares, default excluded.
    pub fn supported_icons(&self) -> Vec<IconId> {
        self.catalog.supported_icons().into_iter().collect()
    }

    /// Whether this platform/version can alternate launcher icons.
    pub fn is_supported(&self) -> bool {
        self.applier.supports_alternate_icons()
    }

    /// Resume-on-attach: called once when the process starts.
    ///
    /// Applies and clears any request the previous process persisted
    /// but never applied (killed before backgrounding). Returns the
    /// applied target, if any. Never requests a restart: attach-time
    /// application happens before the UI is live.
    pub fn on_attach(&self) -> Result<Option<PendingIcon>> {
        let mut pending = self.pending.lock();
        let Some(target) = self.store.get()? else {
            *pending = None;
            return Ok(None);
        };

        self.apply_icon(&target)?;
        self.store.clear()?;
        *pending = None;
        info!(target_icon = ?target.as_ref().map(IconId::as_str), "pending icon applied at launch");
        Ok(Some(target))
    }

    /// Background transition: apply and clear any pending request.
    ///
    /// In release builds a successful apply also sets the `restart`
    /// output signal, strictly ordered after the apply. With nothing
    /// pending this is a no-op.
    pub fn on_background(&self) -> Result<BackgroundOutcome> {
        let mut pending = self.pending.lock();
        let Some(target) = self.store.get()? else {
            return Ok(BackgroundOutcome::noop());
        };

        self.apply_icon(&target)?;
        self.store.clear()?;
        *pending = None;

        let restart = self.build_mode == BuildMode::Release;
        if restart {
            info!("process restart requested after deferred icon apply");
        } else {
            debug!("debug build: restart suppressed after deferred icon apply");
        }
        Ok(BackgroundOutcome {
            applied: Some(target),
            restart,
        })
    }

    /// Drive every binding to its target enabled state.
    ///
    /// Target per binding: the default binding is enabled iff the
    /// default icon is requested; an alternate binding is enabled iff
    /// it serves the requested icon; everything else is disabled. This
    /// re-establishes mutual exclusivity on every pass regardless of
    /// whatever inconsistent state the platform was left in, and is
    /// idempotent.
    ///
    /// A partial failure is fatal for the pass: the error surfaces and
    /// the caller keeps the pending slot for retry.
    fn apply_icon(&self, target: &PendingIcon) -> Result<()> {
        for binding in self.catalog.bindings() {
            let enable = match (target, &binding.icon) {
                (None, None) => true,
                (None, Some(_)) => false,
                (Some(_), None) => false,
                (Some(want), Some(has)) => want == has,
            };
            self.applier
                .set_enabled(&binding.component, enable)
                .map_err(|cause| {
                    warn!(component = %binding.component, error = %cause, "component toggle failed, keeping pending request");
                    Error::ApplyFailed {
                        binding: binding.component.clone(),
                        cause,
                    }
                })?;
        }
        Ok(())
    }
}
