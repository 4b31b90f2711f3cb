use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// In-memory cache holding at most `capacity` entries, evicting the least recently used
pub struct BoundedCache<K, V> {
    capacity: usize,
    entries: HashMap<K, (V, u64)>,
    recency: BTreeMap<u64, K>,
    tick: u64,
}

impl<K: Eq + Hash + Clone, V: Clone> BoundedCache<K, V> {
    /// Create a new cache; a zero capacity is bumped to one
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            tick: 0,
        }
    }

    /// Look up a key, marking it as most recently used
    pub fn get(&mut self, key: &K) -> Option<V> {
        let next = self.next_tick();
        let (value, stamp) = self.entries.get_mut(key)?;
        self.recency.remove(&*stamp);
        *stamp = next;
        self.recency.insert(next, key.clone());
        Some(value.clone())
    }

    /// Insert or replace a value, evicting the oldest entry when full
    pub fn insert(&mut self, key: K, value: V) {
        let next = self.next_tick();

        if let Some((_, old_stamp)) = self.entries.remove(&key) {
            self.recency.remove(&old_stamp);
        } else if self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        self.recency.insert(next, key.clone());
        self.entries.insert(key, (value, next));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // --- Helper Methods ---

    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.recency.pop_first() {
            self.entries.remove(&key);
        }
    }
}
