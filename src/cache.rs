// src/cache.rs

//! Bounded prompt interning cache with least-recently-used eviction.

// dependencies
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Default number of prompts kept by [`PromptCache::default`].
pub const DEFAULT_PROMPT_CACHE_CAPACITY: usize = 1024;

/// Interns prompts so equal prompt strings share one allocation.
///
/// When full, inserting a new prompt evicts the least recently used one.
/// A capacity of zero disables caching: every lookup is a miss and nothing
/// is retained.
#[derive(Debug)]
pub struct PromptCache {
    capacity: usize,
    state: Mutex<CacheState>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Default)]
struct CacheState {
    // prompt -> tick of last use
    entries: HashMap<Arc<str>, u64>,
    // tick of last use -> prompt, oldest first
    recency: BTreeMap<u64, Arc<str>>,
    tick: u64,
}

impl PromptCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached copy of `prompt`, inserting it on a miss.
    pub fn get_or_insert(&self, prompt: &str) -> Arc<str> {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        state.tick += 1;
        let tick = state.tick;

        let hit = state
            .entries
            .get_key_value(prompt)
            .map(|(key, &last_used)| (Arc::clone(key), last_used));
        if let Some((key, last_used)) = hit {
            state.recency.remove(&last_used);
            state.recency.insert(tick, Arc::clone(&key));
            state.entries.insert(Arc::clone(&key), tick);
            self.hits.fetch_add(1, Ordering::Relaxed);
            return key;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value: Arc<str> = Arc::from(prompt);
        if self.capacity == 0 {
            return value;
        }

        if state.entries.len() >= self.capacity {
            if let Some((_, evicted)) = state.recency.pop_first() {
                state.entries.remove(&evicted);
            }
        }
        state.entries.insert(Arc::clone(&value), tick);
        state.recency.insert(tick, Arc::clone(&value));
        value
    }

    pub fn contains(&self, prompt: &str) -> bool {
        self.state.lock().entries.contains_key(prompt)
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drop every entry. Hit/miss counters are kept.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.recency.clear();
    }
}

impl Default for PromptCache {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_CACHE_CAPACITY)
    }
}
