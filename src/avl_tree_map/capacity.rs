use super::AvlTreeMap;
use crate::raw::RawAvlTreeMap;

impl<K, V> AvlTreeMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// the node storage reallocates.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_rank_tree::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, i32> = AvlTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AvlTreeMap {
            raw: RawAvlTreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating
    /// its node storage.
    ///
    /// This is an extension and is not part of the standard `BTreeMap` API.
    /// Slots freed by removal are reused by later inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_rank_tree::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::with_capacity(4);
    /// let capacity = map.capacity();
    /// for i in 0..4 {
    ///     map.insert(i, i);
    /// }
    /// map.remove(&0);
    /// map.insert(4, 4);
    /// assert_eq!(map.capacity(), capacity);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
