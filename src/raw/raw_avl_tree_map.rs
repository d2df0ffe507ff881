use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use super::arena::Arena;
use super::handle::{Handle, Link};
use super::node::Node;
use super::size::{Height, Size};

/// The core AVL tree implementation backing `AvlTreeMap`.
///
/// Every structural operation takes the link of a subtree, rebuilds that
/// subtree and hands back the link of its (possibly different) new root. The
/// caller must store the returned link in place of the one it passed in.
#[derive(Clone)]
pub(crate) struct RawAvlTreeMap<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Link,
}

impl<K, V> RawAvlTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.size(self.root).to_usize()
    }

    /// Returns true if the tree contains no elements.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the whole tree, 0 when empty.
    pub(crate) fn height(&self) -> usize {
        self.height_of(self.root).to_usize()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    #[inline]
    fn size(&self, link: Link) -> Size {
        link.map_or(Size::ZERO, |h| self.nodes.get(h).size())
    }

    #[inline]
    fn height_of(&self, link: Link) -> Height {
        link.map_or(Height::ZERO, |h| self.nodes.get(h).height())
    }

    /// Re-derives the size and height of `handle` from its children.
    fn update(&mut self, handle: Handle) {
        let (left, right) = self.nodes.get(handle).children();
        let size = Size::from_usize(self.size(left).to_usize() + self.size(right).to_usize() + 1);
        let height = self.height_of(left).max(self.height_of(right)).above();
        self.nodes.get_mut(handle).set_metadata(size, height);
    }

    /// Returns the node at `rank` within the subtree at `link`.
    fn nth(&self, link: Link, rank: usize) -> Link {
        let handle = link?;
        let node = self.nodes.get(handle);
        let left_size = self.size(node.left()).to_usize();
        match rank.cmp(&left_size) {
            Ordering::Less => self.nth(node.left(), rank),
            Ordering::Equal => Some(handle),
            Ordering::Greater => self.nth(node.right(), rank - left_size - 1),
        }
    }

    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        let handle = self.nth(self.root, rank)?;
        Some(self.nodes.get(handle).entry())
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let handle = self.nth(self.root, rank)?;
        Some(self.nodes.get_mut(handle).entry_mut())
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        self.get_by_rank(0)
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        self.get_by_rank(self.len().checked_sub(1)?)
    }

    /// Visits every entry in key order.
    pub(crate) fn for_each<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a K, &'a V),
    {
        self.walk(self.root, &mut f);
    }

    fn walk<'a, F>(&'a self, link: Link, f: &mut F)
    where
        F: FnMut(&'a K, &'a V),
    {
        if let Some(handle) = link {
            let node = self.nodes.get(handle);
            self.walk(node.left(), f);
            f(node.key(), node.value());
            self.walk(node.right(), f);
        }
    }

    /// Restores the balance invariant at `handle` after one of its subtrees
    /// changed height by at most one. Returns the new subtree root.
    fn repair(&mut self, handle: Handle) -> Handle {
        let (left, right) = self.nodes.get(handle).children();
        let balance = self.height_of(left).diff(self.height_of(right));
        if balance < -1 {
            self.rotate_left(handle)
        } else if balance > 1 {
            self.rotate_right(handle)
        } else {
            self.update(handle);
            handle
        }
    }

    /// Rebalances a right-heavy `a` around its right child.
    fn rotate_left(&mut self, a: Handle) -> Handle {
        let b = self.nodes.get(a).right().expect("`RawAvlTreeMap::rotate_left()` - missing right child!");
        let (b_left, b_right) = self.nodes.get(b).children();

        if self.height_of(b_right) >= self.height_of(b_left) {
            self.nodes.get_mut(a).set_right(b_left);
            self.update(a);
            self.nodes.get_mut(b).set_left(Some(a));
            self.update(b);
            return b;
        }

        let g = b_left.expect("`RawAvlTreeMap::rotate_left()` - missing inner grandchild!");
        let (g_left, g_right) = self.nodes.get(g).children();
        self.nodes.get_mut(a).set_right(g_left);
        self.update(a);
        self.nodes.get_mut(b).set_left(g_right);
        self.update(b);
        let grandchild = self.nodes.get_mut(g);
        grandchild.set_left(Some(a));
        grandchild.set_right(Some(b));
        self.update(g);
        g
    }

    /// Rebalances a left-heavy `a` around its left child.
    fn rotate_right(&mut self, a: Handle) -> Handle {
        let b = self.nodes.get(a).left().expect("`RawAvlTreeMap::rotate_right()` - missing left child!");
        let (b_left, b_right) = self.nodes.get(b).children();

        if self.height_of(b_left) >= self.height_of(b_right) {
            self.nodes.get_mut(a).set_left(b_right);
            self.update(a);
            self.nodes.get_mut(b).set_right(Some(a));
            self.update(b);
            return b;
        }

        let g = b_right.expect("`RawAvlTreeMap::rotate_right()` - missing inner grandchild!");
        let (g_left, g_right) = self.nodes.get(g).children();
        self.nodes.get_mut(a).set_left(g_right);
        self.update(a);
        self.nodes.get_mut(b).set_right(g_left);
        self.update(b);
        let grandchild = self.nodes.get_mut(g);
        grandchild.set_right(Some(a));
        grandchild.set_left(Some(b));
        self.update(g);
        g
    }

    /// Detaches the minimum of the subtree at `handle`.
    /// Returns the remaining subtree and the detached node.
    fn remove_min(&mut self, handle: Handle) -> (Link, Handle) {
        let left = self.nodes.get(handle).left();
        match left {
            None => {
                let (_, right) = self.nodes.get_mut(handle).untie();
                (right, handle)
            }
            Some(left) => {
                let (new_left, min) = self.remove_min(left);
                self.nodes.get_mut(handle).set_left(new_left);
                (Some(self.repair(handle)), min)
            }
        }
    }
}

impl<K: Ord, V> RawAvlTreeMap<K, V> {
    /// Searches the subtree at `link` for `key`.
    fn find<Q>(&self, link: Link, key: &Q) -> Link
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = link?;
        let node = self.nodes.get(handle);
        match key.cmp(node.key().borrow()) {
            Ordering::Less => self.find(node.left(), key),
            Ordering::Greater => self.find(node.right(), key),
            Ordering::Equal => Some(handle),
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(self.root, key)?;
        Some(self.nodes.get(handle).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(self.root, key)?;
        Some(self.nodes.get_mut(handle).value_mut())
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.find(self.root, key)?;
        Some(self.nodes.get(handle).entry())
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(self.root, key).is_some()
    }

    /// Returns the number of keys strictly less than `key`, if `key` is
    /// present.
    pub(crate) fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link = self.root;
        let mut rank = 0;
        while let Some(handle) = link {
            let node = self.nodes.get(handle);
            let left_size = self.size(node.left()).to_usize();
            match key.cmp(node.key().borrow()) {
                Ordering::Less => link = node.left(),
                Ordering::Equal => return Some(rank + left_size),
                Ordering::Greater => {
                    rank += left_size + 1;
                    link = node.right();
                }
            }
        }
        None
    }

    /// Inserts or updates `key`, returning the previous value if any.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, old_value) = self.insert_at(self.root, key, value);
        self.root = Some(root);
        debug_assert_eq!(self.nodes.len(), self.len(), "`RawAvlTreeMap::insert()` - leaked a node!");
        old_value
    }

    fn insert_at(&mut self, link: Link, key: K, value: V) -> (Handle, Option<V>) {
        let Some(handle) = link else {
            return (self.nodes.alloc(Node::new(key, value)), None);
        };

        let node = self.nodes.get(handle);
        match key.cmp(node.key()) {
            Ordering::Less => {
                let left = node.left();
                let (new_left, old_value) = self.insert_at(left, key, value);
                self.nodes.get_mut(handle).set_left(Some(new_left));
                (self.repair(handle), old_value)
            }
            Ordering::Greater => {
                let right = node.right();
                let (new_right, old_value) = self.insert_at(right, key, value);
                self.nodes.get_mut(handle).set_right(Some(new_right));
                (self.repair(handle), old_value)
            }
            Ordering::Equal => {
                let old_value = mem::replace(self.nodes.get_mut(handle).value_mut(), value);
                (handle, Some(old_value))
            }
        }
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;
        let entry = removed.map(|handle| self.nodes.take(handle).into_entry());
        debug_assert_eq!(self.nodes.len(), self.len(), "`RawAvlTreeMap::remove_entry()` - leaked a node!");
        entry
    }

    /// Removes `key` from the subtree at `link`.
    /// Returns the new subtree and the detached node, still in the arena.
    fn remove_at<Q>(&mut self, link: Link, key: &Q) -> (Link, Option<Handle>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = link else {
            return (None, None);
        };

        let node = self.nodes.get(handle);
        match key.cmp(node.key().borrow()) {
            Ordering::Less => {
                let left = node.left();
                let (new_left, removed) = self.remove_at(left, key);
                self.nodes.get_mut(handle).set_left(new_left);
                (Some(self.repair(handle)), removed)
            }
            Ordering::Greater => {
                let right = node.right();
                let (new_right, removed) = self.remove_at(right, key);
                self.nodes.get_mut(handle).set_right(new_right);
                (Some(self.repair(handle)), removed)
            }
            Ordering::Equal => {
                let children = self.nodes.get_mut(handle).untie();
                let replacement = match children {
                    (None, right) => right,
                    (left, None) => left,
                    (Some(left), Some(right)) => {
                        // The in-order successor moves into this position.
                        let (new_right, successor) = self.remove_min(right);
                        let node = self.nodes.get_mut(successor);
                        node.set_left(Some(left));
                        node.set_right(new_right);
                        Some(self.repair(successor))
                    }
                };
                (replacement, Some(handle))
            }
        }
    }
}
