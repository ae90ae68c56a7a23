//! Holder counting for mutual-exclusion checks.

use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Default)]
pub(crate) struct HolderCounter {
    current: AtomicU32,
    peak: AtomicU32,
}

impl HolderCounter {
    pub(crate) fn enter(&self) {
        let now = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        self.peak.fetch_max(now, Ordering::AcqRel);
    }

    pub(crate) fn exit(&self) {
        self.current.fetch_sub(1, Ordering::AcqRel);
    }

    pub(crate) fn current(&self) -> u32 {
        self.current.load(Ordering::Acquire)
    }

    pub(crate) fn peak(&self) -> u32 {
        self.peak.load(Ordering::Acquire)
    }
}
