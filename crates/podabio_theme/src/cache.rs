//! LRU cache of rendered style blocks
//!
//! Entries are keyed by page, theme and a hash of every token column that
//! feeds the render, so editing any layer produces a new key. Keys built by
//! [`crate::ThemeEngine`] also carry the engine's fingerprint, so engines with
//! different defaults or selectors can share one cache.

use crate::record::{PageRecord, ThemeRecord};
use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of cached style blocks
pub const DEFAULT_CAPACITY: usize = 256;

/// Identity of one render input
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct StyleKey {
    pub page_id: i64,
    pub theme_id: Option<i64>,
    pub tokens_hash: u64,
    /// Render settings the block was produced with; zero when unscoped
    pub engine: u64,
}

impl StyleKey {
    pub fn new(page: &PageRecord, theme: Option<&ThemeRecord>) -> Self {
        let mut hasher = FxHasher::default();
        page.theme_id.hash(&mut hasher);
        page.overrides.hash(&mut hasher);
        theme.map(|t| &t.tokens).hash(&mut hasher);

        Self {
            page_id: page.id,
            theme_id: theme.map(|t| t.id),
            tokens_hash: hasher.finish(),
            engine: 0,
        }
    }

    /// Scope the key to one engine's defaults and config.
    pub fn for_engine(mut self, fingerprint: u64) -> Self {
        self.engine = fingerprint;
        self
    }
}

/// Hit and miss counters since creation or the last [`StyleCache::clear`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Bounded cache of style blocks
pub struct StyleCache {
    entries: LruCache<StyleKey, Arc<str>>,
    stats: CacheStats,
}

impl StyleCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    pub fn get(&mut self, key: &StyleKey) -> Option<Arc<str>> {
        let hit = self.entries.get(key).cloned();
        if hit.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        hit
    }

    /// Return the cached block or render, store and return a new one.
    pub fn get_or_insert_with(&mut self, key: StyleKey, render: impl FnOnce() -> String) -> Arc<str> {
        if let Some(css) = self.get(&key) {
            return css;
        }

        let css: Arc<str> = Arc::from(render());
        if let Some((evicted, _)) = self.entries.push(key, Arc::clone(&css)) {
            if evicted != key {
                tracing::trace!(page_id = evicted.page_id, "evicted cached style block");
            }
        }
        css
    }

    /// Drop every entry rendered for a page.
    pub fn invalidate_page(&mut self, page_id: i64) -> usize {
        let stale: Vec<StyleKey> = self
            .entries
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| key.page_id == page_id)
            .collect();
        for key in &stale {
            self.entries.pop(key);
        }
        stale.len()
    }

    /// Drop every entry rendered against a theme.
    pub fn invalidate_theme(&mut self, theme_id: i64) -> usize {
        let stale: Vec<StyleKey> = self
            .entries
            .iter()
            .map(|(key, _)| *key)
            .filter(|key| key.theme_id == Some(theme_id))
            .collect();
        for key in &stale {
            self.entries.pop(key);
        }
        stale.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
