//! Expiring key-value store — the only shared mutable state in the process.
//!
//! TTL-only semantics: entries record an absolute expiry at `set` time and are
//! evicted lazily when a `get` observes them expired. There is no background
//! sweep and no capacity bound; memory is bounded by read traffic, not
//! wall-clock time. Acceptable for a short-lived single-process service.
//!
//! Time is injected through the `Clock` trait so tests can advance it manually.
//! Stores are constructed in main and carried in `AppState` — no globals.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Source of the current instant. `SystemClock` in production; tests inject
/// a manually advanced clock to exercise expiry without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

struct Inner<V> {
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, Entry<V>>>,
}

/// Process-local string-keyed map with per-entry TTL.
///
/// Cheap to clone (Arc inner) — handlers receive clones via `AppState`.
/// Concurrent `set` calls to the same key are last-write-wins; callers store
/// idempotent values keyed by fingerprint, so an overwrite is equivalent.
pub struct ExpiringStore<V> {
    inner: Arc<Inner<V>>,
}

impl<V> Clone for ExpiringStore<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V: Clone> ExpiringStore<V> {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Inner {
                clock,
                entries: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Stores `value` under `key`, overwriting any existing entry.
    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        let expires_at = self.inner.clock.now() + ttl;
        let mut entries = self.inner.entries.lock().expect("cache mutex poisoned");
        entries.insert(key.to_string(), Entry { value, expires_at });
    }

    /// Returns the value if present and unexpired. An expired entry is
    /// deleted as a side effect and reported as absent.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.inner.clock.now();
        let mut entries = self.inner.entries.lock().expect("cache mutex poisoned");
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Removes the entry unconditionally.
    #[allow(dead_code)]
    pub fn delete(&self, key: &str) {
        let mut entries = self.inner.entries.lock().expect("cache mutex poisoned");
        entries.remove(key);
    }

    /// Number of live-or-stale entries currently held (stale entries linger
    /// until read — see module docs).
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.inner.entries.lock().expect("cache mutex poisoned").len()
    }
}

#[cfg(test)]
pub mod test_clock {
    use super::*;

    /// Manually advanced clock for expiry tests.
    pub struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
            }
        }

        pub fn advance(&self, by: Duration) {
            let mut offset = self.offset.lock().unwrap();
            *offset += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + *self.offset.lock().unwrap()
        }
    }
}
