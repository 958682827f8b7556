// SPDX-License-Identifier: MPL-2.0
//! Memoized classification of video references.
//!
//! A list view classifies the same references on every render. The cache
//! keeps one immutable [`VideoSource`] per distinct reference and hands out
//! shared pointers to it.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used references are evicted first
//! - **Count-bounded**: Capacity comes from the configuration, clamped
//! - **Reference-keyed**: Entries are keyed by the exact input string

use super::classifier::analyze;
use crate::config::{MAX_SOURCE_CACHE_CAPACITY, MIN_SOURCE_CACHE_CAPACITY};
use crate::domain::video::VideoSource;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Hit/miss counters for the source cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// LRU cache of classified references.
#[derive(Debug)]
pub struct SourceCache {
    entries: LruCache<String, Arc<VideoSource>>,
    stats: CacheStats,
}

impl SourceCache {
    /// Creates a cache holding at most `capacity` references (clamped).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_SOURCE_CACHE_CAPACITY, MAX_SOURCE_CACHE_CAPACITY);
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Returns the classification of `reference`, computing it on first use.
    pub fn resolve(&mut self, reference: &str) -> Arc<VideoSource> {
        if let Some(source) = self.entries.get(reference) {
            self.stats.hits += 1;
            return Arc::clone(source);
        }

        self.stats.misses += 1;
        let source = Arc::new(analyze(reference));
        self.entries.put(reference.to_string(), Arc::clone(&source));
        source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for SourceCache {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SOURCE_CACHE_CAPACITY)
    }
}
