//! Key-indexed object pool over an append-only buffer.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::buf::Buf;

/// A pool of values stored by construction and looked up by key.
///
/// Values live in an append-only [`Buf`]; the pool itself only maintains
/// the key table mapping each key to its buffer slot. Storing under an
/// existing key re-points the key at a fresh slot — the previous slot
/// stays in the buffer (append-only), it just becomes unreachable
/// through the key table.
///
/// # Examples
///
/// ```
/// use carve_pool::Pool;
///
/// let mut connections: Pool<&str, Vec<u8>> = Pool::new();
/// connections.store_at("north", vec![1, 2]);
/// connections.store_default_at("south");
///
/// assert_eq!(connections.load_at(&"north"), Some(&vec![1, 2]));
/// assert_eq!(connections.load_at(&"east"), None);
/// ```
#[derive(Clone, Debug)]
pub struct Pool<K, V> {
    buf: Buf<V>,
    index: IndexMap<K, usize>,
}

impl<K: Hash + Eq, V> Default for Pool<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> Pool<K, V> {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            buf: Buf::new(),
            index: IndexMap::new(),
        }
    }

    /// Create an empty pool with room for `capacity` values before the
    /// first reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Buf::with_capacity(capacity),
            index: IndexMap::with_capacity(capacity),
        }
    }

    /// Store a value under `key`, returning a reference to it in place.
    pub fn store_at(&mut self, key: K, value: V) -> &mut V {
        let slot = self.buf.push(value);
        self.index.insert(key, slot);
        self.buf
            .get_mut(slot)
            .expect("slot was just pushed")
    }

    /// Store `V::default()` under `key`.
    pub fn store_default_at(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.store_at(key, V::default())
    }

    /// Look up the value stored under `key`.
    pub fn load_at(&self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.buf.get(slot)
    }

    /// Look up the value stored under `key`, mutably.
    pub fn load_at_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        self.buf.get_mut(slot)
    }

    /// Whether a value is stored under `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of live keys (not buffer slots).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
