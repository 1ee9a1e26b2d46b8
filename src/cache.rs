//! O(1) get/set LFU cache with frequency buckets, guarded by a single lock.
//!
//! Ported from the classic two-level linked-list LFU design (key -> node,
//! frequency buckets in increasing order, each owning a doubly linked list
//! of entries in insertion order). The reference implementation keeps `get`
//! lock-free; this port takes the same lock in both `get` and `set`, since
//! nothing here is hot enough to be worth proving a lock-free read safe.

use rustc_hash::FxHashMap;
use std::sync::Mutex;

type EntryId = usize;
type FreqId = usize;

struct Entry<K, V> {
    key: K,
    value: V,
    freq: FreqId,
}

struct FreqBucket {
    freq: usize,
    // entry ids in insertion order
    entries: Vec<EntryId>,
}

struct Inner<K, V> {
    capacity: usize,
    entries: slab::Slab<Entry<K, V>>,
    key_to_entry: FxHashMap<K, EntryId>,
    // frequency buckets, kept sorted ascending by `freq`
    buckets: Vec<FreqBucket>,
    // freq -> index into `buckets`
    bucket_index: FxHashMap<usize, usize>,
}

impl<K: Eq + std::hash::Hash + Clone, V: Clone> Inner<K, V> {
    fn new(capacity: usize) -> Self {
        Inner {
            capacity,
            entries: slab::Slab::new(),
            key_to_entry: FxHashMap::default(),
            buckets: Vec::new(),
            bucket_index: FxHashMap::default(),
        }
    }

    fn bucket_at(&self, freq: usize) -> Option<usize> {
        self.bucket_index.get(&freq).copied()
    }

    fn remove_entry_from_bucket(&mut self, bucket_pos: usize, entry_id: EntryId) {
        let bucket = &mut self.buckets[bucket_pos];
        if let Some(pos) = bucket.entries.iter().position(|&e| e == entry_id) {
            bucket.entries.remove(pos);
        }
        if bucket.entries.is_empty() {
            let freq = bucket.freq;
            self.buckets.remove(bucket_pos);
            self.bucket_index.remove(&freq);
            // everything after this position shifted down by one
            for (pos, b) in self.buckets.iter().enumerate() {
                self.bucket_index.insert(b.freq, pos);
            }
        }
    }

    fn bucket_for_insert(&mut self, freq: usize) -> usize {
        if let Some(pos) = self.bucket_at(freq) {
            return pos;
        }
        // insert keeping ascending order by freq
        let insert_pos = self.buckets.iter().position(|b| b.freq > freq).unwrap_or(self.buckets.len());
        self.buckets.insert(insert_pos, FreqBucket { freq, entries: Vec::new() });
        for (pos, b) in self.buckets.iter().enumerate() {
            self.bucket_index.insert(b.freq, pos);
        }
        insert_pos
    }

    fn promote(&mut self, entry_id: EntryId) {
        let (old_freq, new_freq) = {
            let entry = &self.entries[entry_id];
            (entry.freq, entry.freq + 1)
        };
        if let Some(old_pos) = self.bucket_at(old_freq) {
            self.remove_entry_from_bucket(old_pos, entry_id);
        }
        let new_pos = self.bucket_for_insert(new_freq);
        self.buckets[new_pos].entries.push(entry_id);
        self.entries[entry_id].freq = new_freq;
    }

    fn get(&mut self, key: &K) -> Option<V> {
        let entry_id = *self.key_to_entry.get(key)?;
        self.promote(entry_id);
        Some(self.entries[entry_id].value.clone())
    }

    fn evict_one(&mut self) {
        if self.buckets.is_empty() {
            return;
        }
        let bucket_pos = 0;
        let entry_id = self.buckets[bucket_pos].entries[0];
        self.remove_entry_from_bucket(bucket_pos, entry_id);
        let key = self.entries[entry_id].key.clone();
        self.key_to_entry.remove(&key);
        self.entries.remove(entry_id);
    }

    fn set(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&entry_id) = self.key_to_entry.get(&key) {
            self.entries[entry_id].value = value;
            self.promote(entry_id);
            return;
        }
        if self.key_to_entry.len() >= self.capacity {
            self.evict_one();
        }
        let entry_id = self.entries.insert(Entry { key: key.clone(), value, freq: 0 });
        self.key_to_entry.insert(key, entry_id);
        let bucket_pos = self.bucket_for_insert(0);
        self.buckets[bucket_pos].entries.push(entry_id);
    }

    fn sorted_keys(&self) -> Vec<(K, usize)> {
        let mut result: Vec<(K, usize)> = self
            .key_to_entry
            .iter()
            .map(|(k, &id)| (k.clone(), self.entries[id].freq))
            .collect();
        result.sort_by(|a, b| b.1.cmp(&a.1));
        result
    }
}

/// Thread-safe LFU cache: O(1) `get`/`set`, evicts the least-frequently-used
/// entry (oldest among ties) once `capacity` is exceeded.
pub struct LfuCache<K, V> {
    inner: Mutex<Inner<K, V>>,
}

impl<K: Eq + std::hash::Hash + Clone, V: Clone> LfuCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        LfuCache { inner: Mutex::new(Inner::new(capacity)) }
    }

    /// Returns `None` on a cache miss -- the sentinel never escapes this type.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().unwrap().get(key)
    }

    pub fn set(&self, key: K, value: V) {
        self.inner.lock().unwrap().set(key, value);
    }

    /// All stored keys with their current frequency, sorted by frequency
    /// descending. For inspection and tests.
    pub fn sorted_keys(&self) -> Vec<(K, usize)> {
        self.inner.lock().unwrap().sorted_keys()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().key_to_entry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_capacity() {
        let cache: LfuCache<char, i32> = LfuCache::new(3);
        for k in ['a', 'a', 'b', 'a', 'c', 'b', 'd'] {
            cache.set(k, 0);
        }
        let mut keys: Vec<(char, usize)> = cache.sorted_keys();
        keys.sort();
        assert_eq!(keys, vec![('a', 2), ('b', 1), ('d', 0)]);
    }

    #[test]
    fn longer_sequence_matches_reference() {
        let cache: LfuCache<char, i32> = LfuCache::new(3);
        let seq = ['a', 'a', 'b', 'a', 'c', 'b', 'd', 'e', 'c', 'b', 'b', 'c', 'd', 'b'];
        for k in seq {
            cache.set(k, 0);
        }
        let mut keys: Vec<(char, usize)> = cache.sorted_keys();
        keys.sort();
        assert_eq!(keys, vec![('a', 2), ('b', 4), ('d', 0)]);
    }

    #[test]
    fn miss_returns_none() {
        let cache: LfuCache<&str, i32> = LfuCache::new(2);
        assert_eq!(cache.get(&"nope"), None);
    }

    #[test]
    fn zero_capacity_is_a_no_op() {
        let cache: LfuCache<&str, i32> = LfuCache::new(0);
        cache.set("a", 1);
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn set_updates_value_and_promotes() {
        let cache: LfuCache<&str, i32> = LfuCache::new(2);
        cache.set("a", 1);
        cache.set("a", 2);
        assert_eq!(cache.get(&"a"), Some(2));
        assert_eq!(cache.sorted_keys(), vec![("a", 2)]);
    }
}
