//! Single-slot memo for the most recent computation.
//!
//! The slot remembers one key and the value computed for it. Asking for the
//! same key again is a no-op; any other key replaces both.

/// Memo holding the value computed for the last key.
#[derive(Debug, Clone)]
pub struct MemoSlot<T> {
    /// Key the stored value belongs to
    key: Option<String>,
    /// Stored value; `None` is a valid computed result
    value: Option<T>,
    /// Number of refreshes answered from the slot
    hits: u64,
    /// Number of refreshes that recomputed
    misses: u64,
}

impl<T> MemoSlot<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            key: None,
            value: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Check if the slot currently holds the value for `key`.
    pub fn is_current(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// Recompute the value unless `key` is already current.
    ///
    /// # Returns
    /// `true` if `compute` ran and replaced the stored value.
    pub fn refresh<F>(&mut self, key: &str, compute: F) -> bool
    where
        F: FnOnce(&str) -> Option<T>,
    {
        if self.is_current(key) {
            self.hits += 1;
            return false;
        }

        self.misses += 1;
        self.value = compute(key);
        self.key = Some(key.to_string());
        true
    }

    /// The stored value.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The key the stored value belongs to.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Forget the key and the value. Statistics are kept.
    pub fn clear(&mut self) {
        self.key = None;
        self.value = None;
    }

    /// Get memo statistics.
    pub fn stats(&self) -> MemoStats {
        let total = self.hits + self.misses;
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            hit_rate: (total > 0).then(|| self.hits as f64 / total as f64),
        }
    }
}

impl<T> Default for MemoSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Memo statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoStats {
    /// Refreshes answered without recomputation
    pub hits: u64,
    /// Refreshes that recomputed
    pub misses: u64,
    /// hits / (hits + misses), if anything was asked
    pub hit_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_miss() {
        let mut slot = MemoSlot::new();

        // First call computes
        assert!(slot.refresh("hello", |text| Some(text.len())));
        assert_eq!(slot.get(), Some(&5));

        // Same key is answered from the slot
        assert!(!slot.refresh("hello", |_| panic!("Should not compute")));
        assert_eq!(slot.get(), Some(&5));

        let stats = slot.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate, Some(0.5));
    }

    #[test]
    fn test_new_key_replaces_value() {
        let mut slot = MemoSlot::new();
        slot.refresh("a", |_| Some(1));
        slot.refresh("b", |_| Some(2));

        assert_eq!(slot.key(), Some("b"));
        assert_eq!(slot.get(), Some(&2));
        assert!(!slot.is_current("a"));
    }

    #[test]
    fn test_absent_value_is_remembered() {
        let mut slot: MemoSlot<u32> = MemoSlot::new();

        assert!(slot.refresh("x", |_| None));
        assert!(slot.get().is_none());
        assert!(!slot.refresh("x", |_| Some(1)));
        assert!(slot.get().is_none());
    }

    #[test]
    fn test_clear() {
        let mut slot = MemoSlot::new();
        slot.refresh("hello", |_| Some(1));

        slot.clear();
        assert!(slot.key().is_none());
        assert!(slot.get().is_none());
        assert!(slot.refresh("hello", |_| Some(2)));
        assert_eq!(slot.stats().misses, 2);
    }
}
