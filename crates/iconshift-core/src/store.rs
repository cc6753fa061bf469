//! Durable single-slot storage for a pending icon request.
//!
//! The store is pure storage: one slot, last write wins, no lifecycle
//! logic of its own. The controller is the sole owner of the slot's
//! lifecycle (written by a request, consumed exactly once by the next
//! background or attach event).

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::icon::PendingIcon;

/// Errors from a pending-store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage I/O failed.
    #[error("pending-state storage I/O failed")]
    Io(#[from] std::io::Error),

    /// The slot holds a value the store cannot decode.
    #[error("pending-state slot is corrupt: {0}")]
    Corrupt(String),
}

/// Crash-surviving single-slot store for the pending icon request.
///
/// Durable implementations must survive process restart; the in-memory
/// [`MemoryStore`] exists for tests and for hosts that layer their own
/// durability underneath.
pub trait PendingStore: Send + Sync {
    /// Read the slot. `None` means no pending request.
    fn get(&self) -> Result<Option<PendingIcon>, StoreError>;

    /// Overwrite the slot with a new pending request.
    fn set(&self, value: PendingIcon) -> Result<(), StoreError>;

    /// Empty the slot.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory pending store.
///
/// Clones share the same slot, so a test can keep a handle to the
/// store after moving a clone into the controller (and can hand a
/// clone to a second controller to simulate a process restart that
/// kept its durable storage).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<PendingIcon>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PendingStore for MemoryStore {
    fn get(&self) -> Result<Option<PendingIcon>, StoreError> {
        Ok(self.slot.lock().clone())
    }

    fn set(&self, value: PendingIcon) -> Result<(), StoreError> {
        *self.slot.lock() = Some(value);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock() = None;
        Ok(())
    }
}
