/// A zero-based rank into the sorted order of a map.
///
/// Indexing an [`AvlTreeMap`](crate::AvlTreeMap) by `Rank` reaches the entry
/// at that position without walking the entries before it.
///
/// # Examples
///
/// ```
/// use avl_rank_tree::{AvlTreeMap, Rank};
///
/// let mut map = AvlTreeMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
