//! Icon catalog: the read-only set of launcher components an app
//! declares.
//!
//! The catalog is queried fresh on every call and never cached by the
//! controller; package reinstalls or updates can change membership
//! between launches.

use std::collections::BTreeSet;

use crate::icon::{ComponentBinding, IconId};

/// Read-only provider of the app's launcher component bindings.
///
/// The default icon always exists implicitly: implementations must
/// include exactly one default binding in [`bindings`](Self::bindings).
pub trait IconCatalog: Send + Sync {
    /// All launcher component bindings, default included.
    fn bindings(&self) -> Vec<ComponentBinding>;

    /// Alternate icon identifiers, default excluded.
    fn supported_icons(&self) -> BTreeSet<IconId> {
        self.bindings()
            .into_iter()
            .filter_map(|binding| binding.icon)
            .collect()
    }
}

/// Fixed in-memory catalog.
///
/// Hosts that discover bindings dynamically implement [`IconCatalog`]
/// themselves; this covers declaration-file and test setups.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    bindings: Vec<ComponentBinding>,
}

impl StaticCatalog {
    /// Create a catalog from a fixed set of bindings.
    pub fn new(bindings: Vec<ComponentBinding>) -> Self {
        Self { bindings }
    }
}

impl IconCatalog for StaticCatalog {
    fn bindings(&self) -> Vec<ComponentBinding> {
        self.bindings.clone()
    }
}
