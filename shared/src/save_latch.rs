//! Single-flight latch for save operations. A save requested while another
//! is running is dropped, not queued.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

#[derive(Debug, Clone, Default)]
pub struct SaveLatch {
    busy: Arc<AtomicBool>,
}

impl SaveLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a guard if no save is in progress. The latch reopens when the
    /// guard drops, including on early return or panic.
    pub fn try_acquire(&self) -> Option<SaveGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SaveGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
#[must_use = "the latch reopens as soon as the guard is dropped"]
pub struct SaveGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for SaveGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
