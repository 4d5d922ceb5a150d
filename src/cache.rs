//! An explicit, bounded cache of compiled patterns.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::PatternError;
use crate::pattern::CompiledPattern;

/// A bounded map from pattern string to compiled pattern.
///
/// Compilation is cheap but hot patterns are reused constantly, so
/// callers that format or parse repeatedly should hold one of these
/// instead of recompiling. The cache is an owned object with an injected
/// capacity, not a process-wide instance, and evicts its oldest entry
/// once full.
#[derive(Debug, Clone)]
pub struct PatternCache {
    capacity: usize,
    map: FxHashMap<String, Arc<CompiledPattern>>,
    order: VecDeque<String>,
}

impl PatternCache {
    /// Creates a cache holding at most `capacity` compiled patterns. A
    /// capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            map: FxHashMap::default(),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns the compiled form of `pattern`, compiling on a miss.
    pub fn get_or_compile(&mut self, pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
        if let Some(hit) = self.map.get(pattern) {
            return Ok(Arc::clone(hit));
        }

        let compiled = Arc::new(CompiledPattern::compile(pattern)?);
        if self.map.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                #[cfg(feature = "log")]
                log::debug!("evicting pattern {oldest:?}");
                self.map.remove(&oldest);
            }
        }
        self.order.push_back(String::from(pattern));
        self.map.insert(String::from(pattern), Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Number of resident patterns.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
