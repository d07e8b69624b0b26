//! Block clock shared between the host and the ledger task.

use std::sync::atomic::{AtomicU64, Ordering};

use polireg_core::Height;

/// Current block height.
///
/// Heights are whatever the host sets; nothing here enforces that they only
/// move forward.
#[derive(Debug, Default)]
pub struct BlockClock {
    height: AtomicU64,
}

impl BlockClock {
    pub fn new(genesis: Height) -> Self {
        Self {
            height: AtomicU64::new(genesis),
        }
    }

    pub fn now(&self) -> Height {
        self.height.load(Ordering::Acquire)
    }

    pub fn set(&self, height: Height) {
        self.height.store(height, Ordering::Release);
    }

    /// Move forward by `blocks` and return the new height.
    pub fn advance(&self, blocks: Height) -> Height {
        self.height.fetch_add(blocks, Ordering::AcqRel) + blocks
    }
}
