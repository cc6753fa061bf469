//! Error types shared across the crate.

use thiserror::Error;

use crate::applier::PlatformError;
use crate::store::StoreError;

/// Convenience result alias for controller operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the icon-switch controller.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested icon is not declared in the catalog. Rejected
    /// before any persistence write, so there is no partial state.
    #[error("icon '{requested}' is not in the catalog (available: {})", .available.join(", "))]
    InvalidIcon {
        /// The icon name that was requested.
        requested: String,
        /// Names the catalog does declare.
        available: Vec<String>,
    },

    /// The platform cannot alternate launcher icons at all.
    #[error("alternate launcher icons are not supported on this platform")]
    Unsupported,

    /// A silent (confirmation-free) switch was requested on a platform
    /// version where the silent path exists but is unavailable.
    #[error("silent icon switching is unavailable on this platform version")]
    PrivateApiUnavailable,

    /// A platform component operation was refused. The pending slot is
    /// left untouched so the next lifecycle event retries the same
    /// target state.
    #[error("platform refused the toggle for component '{binding}'")]
    ApplyFailed {
        /// Component handle the platform rejected.
        binding: String,
        /// Underlying platform failure.
        #[source]
        cause: PlatformError,
    },

    /// The pending-state store failed. Like `ApplyFailed`, the slot is
    /// retried on the next lifecycle event.
    #[error("pending-state store failed")]
    Store(#[from] StoreError),
}
