use std::collections::BTreeMap;
use crossbeam::utils::CachePadded;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use crate::core::types::DocId;

/// Keys that can pick a shard. Integers use their value modulo the shard
/// count; other key types can hash first.
pub trait ShardKey: Copy + Ord {
    fn shard_hint(&self) -> u64;
}

macro_rules! impl_shard_key {
    ($($t:ty),*) => {
        $(impl ShardKey for $t {
            #[inline]
            fn shard_hint(&self) -> u64 {
                *self as u64
            }
        })*
    };
}

impl_shard_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl ShardKey for DocId {
    #[inline]
    fn shard_hint(&self) -> u64 {
        self.0 as u64
    }
}

/// Exclusive access to one value. The owning shard stays locked until this is dropped.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Map partitioned into independently locked shards (`key mod shard_count`),
/// so threads working on different keys rarely contend.
pub struct ConcurrentMap<K, V> {
    shards: Vec<CachePadded<Mutex<BTreeMap<K, V>>>>,
}

impl<K: ShardKey, V> ConcurrentMap<K, V> {
    /// A `shard_count` of zero is raised to one.
    pub fn new(shard_count: usize) -> Self {
        let shards = (0..shard_count.max(1))
            .map(|_| CachePadded::new(Mutex::new(BTreeMap::new())))
            .collect();
        ConcurrentMap { shards }
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Locks the key's shard and returns its value, inserting `V::default()` if absent.
    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let guard = self.shard(&key).lock();
        MutexGuard::map(guard, |map| map.entry(key).or_default())
    }

    pub fn erase(&self, key: &K) -> Option<V> {
        self.shard(key).lock().remove(key)
    }

    /// Merges every shard into one ordinary map. Shards are locked one at a time.
    pub fn to_plain_map(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for shard in &self.shards {
            let map = shard.lock();
            result.extend(map.iter().map(|(k, v)| (*k, v.clone())));
        }
        result
    }

    /// Consumes the map without locking.
    pub fn into_plain_map(self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for shard in self.shards {
            result.append(&mut shard.into_inner().into_inner());
        }
        result
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn shard(&self, key: &K) -> &Mutex<BTreeMap<K, V>> {
        let index = (key.shard_hint() % self.shards.len() as u64) as usize;
        &self.shards[index]
    }
}
