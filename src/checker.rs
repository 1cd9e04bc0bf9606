use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::domain::Domain;
use crate::error::Result;
use crate::index::DomainIndex;

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Checker builder options.
pub struct CheckerOptions {
    /// LRU cache size for query verdicts
    pub cache_size: usize,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

impl CheckerOptions {
    /// Create new checker options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache size.
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache_size = size;
        self
    }
}

/// Forbidden-domain checker with verdict caching.
///
/// Wraps a read-only [`DomainIndex`] with an LRU cache keyed by the raw
/// candidate name, so repeated queries skip the parse and trie walk. The
/// index itself never changes after construction, so the checker can be
/// shared across threads.
pub struct DomainChecker {
    index: DomainIndex,
    cache: Mutex<LruCache<String, bool>>,
}

impl DomainChecker {
    /// Create a checker from raw forbidden domain names.
    pub fn new<I, S>(forbidden: I, options: CheckerOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = DomainIndex::from_names(forbidden)?;
        Ok(Self::from_index(index, options))
    }

    /// Create a checker around an existing index.
    pub fn from_index(index: DomainIndex, options: CheckerOptions) -> Self {
        let cache_size =
            NonZeroUsize::new(options.cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            index,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Check a raw candidate name, consulting the verdict cache first.
    pub fn is_forbidden(&self, name: &str) -> Result<bool> {
        {
            let mut cache = self.cache.lock();
            if let Some(&verdict) = cache.get(name) {
                return Ok(verdict);
            }
        }

        let verdict = self.index.is_forbidden(&Domain::parse(name)?);
        self.cache.lock().put(name.to_string(), verdict);
        Ok(verdict)
    }

    /// The underlying index.
    pub fn index(&self) -> &DomainIndex {
        &self.index
    }

    /// Clear the verdict cache.
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}
