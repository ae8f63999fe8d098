//! The fingerprint novelty cache: read-only seed knowledge plus every
//! fingerprint discovered so far this run, internally synchronized so it
//! can be shared across the optional worker pool (§5: "the fingerprint
//! cache, if present, is per-run and internally synchronized").

use std::collections::HashSet;
use std::sync::Mutex;

/// A shared set of known fingerprints. Cloning is cheap (an `Arc` would
/// be the natural next step for a caller sharing one cache across
/// threads; this type is `Sync` on its own via the inner `Mutex` and
/// callers wrap it in `Arc` if they need to move it across threads).
#[derive(Debug, Default)]
pub struct NoveltyCache {
    seen: Mutex<HashSet<String>>,
}

impl NoveltyCache {
    /// An empty cache — every fingerprint counts as novel until inserted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache with a caller-supplied known-fingerprint set, e.g.
    /// loaded from a prior run's persisted discoveries.
    pub fn from_known(known: impl IntoIterator<Item = String>) -> Self {
        Self {
            seen: Mutex::new(known.into_iter().collect()),
        }
    }

    /// Is `fingerprint` already known?
    pub fn contains(&self, fingerprint: &str) -> bool {
        self.seen.lock().expect("novelty cache mutex poisoned").contains(fingerprint)
    }

    /// Record `fingerprint` as seen. Returns `true` if it was newly
    /// inserted (i.e. it was novel at the moment of insertion).
    pub fn insert(&self, fingerprint: String) -> bool {
        self.seen.lock().expect("novelty cache mutex poisoned").insert(fingerprint)
    }

    /// A point-in-time copy of every fingerprint seen so far, suitable
    /// for passing to [`discover_score::score`]'s `known_fingerprints`
    /// parameter.
    pub fn snapshot(&self) -> HashSet<String> {
        self.seen.lock().expect("novelty cache mutex poisoned").clone()
    }
}
