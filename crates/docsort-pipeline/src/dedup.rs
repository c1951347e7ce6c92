//! Run-scoped identity-key set

use docsort_domain::IdentityKey;
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Identity keys already emitted during one run
///
/// Create a fresh set per run. [`SeenKeys::claim`] inserts and reports in one
/// step under the lock, so exactly one caller wins a given key.
#[derive(Debug, Default)]
pub struct SeenKeys {
    keys: Mutex<HashSet<String>>,
}

impl SeenKeys {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a key; `true` if this call inserted it
    pub fn claim(&self, key: &IdentityKey) -> bool {
        self.lock().insert(key.as_str().to_string())
    }

    /// Whether a key has already been claimed
    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.lock().contains(key.as_str())
    }

    /// Number of claimed keys
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been claimed
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        // A panic while holding the lock cannot leave the set half-updated
        self.keys.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
