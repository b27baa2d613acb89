//! Memoized regex compilation.
//!
//! This module provides [`RegexCache`], which compiles each distinct pattern
//! string at most once for the lifetime of the cache. Schemas keep their
//! patterns as raw strings, so a pattern that fails to compile surfaces as a
//! validation failure instead of poisoning schema construction.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use regex::Regex;

/// A thread-safe memoizing pattern compiler.
///
/// Compilation results, including failures, are cached by exact pattern
/// string, so a given pattern is handed to the regex compiler at most once
/// no matter how many validations consult it.
///
/// # Thread Safety
///
/// The cache map is guarded by an `RwLock`: concurrent lookups of already
/// compiled patterns take the read lock only, while a first compile takes
/// the write lock and re-checks the map before compiling.
///
/// # Example
///
/// ```rust
/// use conform::RegexCache;
///
/// let cache = RegexCache::new();
/// let a = cache.compile(r"^\d+$").unwrap();
/// let b = cache.compile(r"^\d+$").unwrap();
///
/// assert!(a.is_match("42"));
/// assert!(b.is_match("42"));
/// assert_eq!(cache.compile_count(), 1);
/// ```
#[derive(Default)]
pub struct RegexCache {
    compiled: RwLock<HashMap<String, Result<Arc<Regex>, Arc<regex::Error>>>>,
    compile_count: AtomicUsize,
}

impl RegexCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compiled matcher for `pattern`, compiling it on first use.
    ///
    /// # Errors
    ///
    /// Returns the compiler's error if the pattern is invalid. The error is
    /// cached as well, so a bad pattern is not recompiled on every lookup.
    pub fn compile(&self, pattern: &str) -> Result<Arc<Regex>, Arc<regex::Error>> {
        if let Some(cached) = self.compiled.read().get(pattern) {
            return cached.clone();
        }

        let mut compiled = self.compiled.write();
        // Another thread may have compiled this pattern between the read
        // unlock and the write lock.
        if let Some(cached) = compiled.get(pattern) {
            return cached.clone();
        }

        self.compile_count.fetch_add(1, Ordering::Relaxed);
        let result = Regex::new(pattern).map(Arc::new).map_err(Arc::new);
        compiled.insert(pattern.to_string(), result.clone());
        result
    }

    /// Returns how many times the underlying compiler has been invoked.
    pub fn compile_count(&self) -> usize {
        self.compile_count.load(Ordering::Relaxed)
    }

    /// Returns the number of distinct patterns cached (valid or not).
    pub fn len(&self) -> usize {
        self.compiled.read().len()
    }

    /// Returns true if no patterns have been cached yet.
    pub fn is_empty(&self) -> bool {
        self.compiled.read().is_empty()
    }
}
