//! iconshift-core: deferred launcher-icon switch state machine.
//!
//! Lets an app switch its launcher icon among pre-declared alternates
//! without the restart flash naive switching causes. A change request
//! is validated, persisted, and applied only at the next background
//! transition (or next launch if the process died first); applying
//! drives every declared component to a mutually exclusive
//! enabled/disabled state.
//!
//! The platform specifics are injected through three narrow traits:
//! [`IconCatalog`] (which components exist), [`PendingStore`] (one
//! durable slot surviving process death), and [`IconApplier`] (the
//! mechanical enable/disable primitive). In-memory implementations of
//! all three ship with the crate, which makes the whole lifecycle
//! testable without a platform:
//!
//! ```
//! use iconshift_core::{
//!     BuildMode, ChangeOptions, ComponentBinding, IconId, IconSwitchController,
//!     MemoryApplier, MemoryStore, StaticCatalog,
//! };
//!
//! let red = IconId::new("red").unwrap();
//! let catalog = StaticCatalog::new(vec![
//!     ComponentBinding::default_icon("app.Main"),
//!     ComponentBinding::alternate("app.Red", red.clone()),
//! ]);
//! let applier = MemoryApplier::new(["app.Main", "app.Red"]);
//! applier.force_state("app.Main", true);
//!
//! let controller = IconSwitchController::new(
//!     Box::new(catalog),
//!     Box::new(MemoryStore::new()),
//!     Box::new(applier),
//! )
//! .with_build_mode(BuildMode::Release);
//!
//! controller.request_icon_change(Some(red.clone()), ChangeOptions::default()).unwrap();
//! let outcome = controller.on_background().unwrap();
//! assert!(outcome.restart);
//! assert_eq!(controller.current_icon().unwrap(), Some(red));
//! ```

mod applier;
mod catalog;
pub mod config;
mod controller;
mod error;
mod icon;
pub mod logging;
mod store;

pub use applier::{IconApplier, MemoryApplier, PlatformError, SilentSupport};
pub use catalog::{IconCatalog, StaticCatalog};
pub use config::{CatalogFile, ConfigError, IconEntry};
pub use controller::{BackgroundOutcome, BuildMode, ChangeOptions, IconSwitchController};
pub use error::{Error, Result};
pub use icon::{ComponentBinding, EmptyIconName, IconId, PendingIcon};
pub use store::{MemoryStore, PendingStore, StoreError};
