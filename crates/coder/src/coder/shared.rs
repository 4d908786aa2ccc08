//! Coder that can be shared between threads.
//!
//! One lock is held for the whole of a `create_code` call. Finished tables
//! are published as `Arc` snapshots, so readers never hold the lock while
//! they look at a result.

use super::EffectiveCoder;
use huffcode_core::CodeTable;
use parking_lot::Mutex;
use std::sync::Arc;

struct SharedState<C> {
    coder: C,
    snapshot: Option<Arc<CodeTable>>,
}

/// Thread-safe wrapper around an [`EffectiveCoder`].
pub struct SharedCoder<C> {
    inner: Mutex<SharedState<C>>,
}

impl<C: EffectiveCoder> SharedCoder<C> {
    /// Wrap a coder.
    pub fn new(coder: C) -> Self {
        let snapshot = coder.result().cloned().map(Arc::new);
        Self {
            inner: Mutex::new(SharedState { coder, snapshot }),
        }
    }

    /// Compute the code table for `text`; see [`EffectiveCoder::create_code`].
    pub fn create_code(&self, text: &str) -> bool {
        let mut state = self.inner.lock();
        let recomputed = state.coder.create_code(text);
        if recomputed {
            state.snapshot = state.coder.result().cloned().map(Arc::new);
        }
        recomputed
    }

    /// Snapshot of the current result.
    pub fn result(&self) -> Option<Arc<CodeTable>> {
        self.inner.lock().snapshot.clone()
    }

    /// The text the current result belongs to.
    pub fn last_text(&self) -> Option<String> {
        self.inner.lock().coder.last_text().map(str::to_string)
    }

    /// Drop the remembered text and result.
    pub fn invalidate(&self) {
        let mut state = self.inner.lock();
        state.coder.invalidate();
        state.snapshot = None;
    }

    /// Unwrap the inner coder.
    pub fn into_inner(self) -> C {
        self.inner.into_inner().coder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HuffmanCoder;
    use std::thread;

    #[test]
    fn test_only_one_thread_recomputes() {
        let shared = SharedCoder::new(HuffmanCoder::new());
        let shared_ref = &shared;

        let recomputed: usize = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || shared_ref.create_code("mississippi")))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap() as usize)
                .sum()
        });

        assert_eq!(recomputed, 1);
        assert_eq!(shared.last_text().as_deref(), Some("mississippi"));
    }

    #[test]
    fn test_snapshot_survives_recomputation() {
        let shared = SharedCoder::new(HuffmanCoder::new());
        shared.create_code("aaab");
        let old = shared.result().unwrap();

        shared.create_code("zzzz");
        let new = shared.result().unwrap();

        assert_eq!(old.code_of('a'), Some("0"));
        assert_eq!(new.code_of('z'), Some(""));
    }

    #[test]
    fn test_invalidate_and_into_inner() {
        let shared = SharedCoder::new(HuffmanCoder::new());
        shared.create_code("abc");
        shared.invalidate();
        assert!(shared.result().is_none());

        let coder = shared.into_inner();
        assert!(coder.result().is_none());
    }
}
