use super::handle::Link;
use super::size::{Height, Size};

/// A single AVL node.
///
/// Children are referenced by handle into the owning arena. A node never
/// knows its parent; restructuring happens on the way back up the recursion.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    left: Link,
    right: Link,
    // Nodes in the subtree rooted here, including this one.
    size: Size,
    // Longest path from here to a leaf, counted in nodes.
    height: Height,
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            size: Size::ONE,
            height: Height::ONE,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[inline]
    pub(crate) fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    #[inline]
    pub(crate) fn left(&self) -> Link {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Link {
        self.right
    }

    #[inline]
    pub(crate) fn children(&self) -> (Link, Link) {
        (self.left, self.right)
    }

    pub(crate) fn set_left(&mut self, left: Link) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: Link) {
        self.right = right;
    }

    /// Unlinks both children and resets the cached metadata to that of a
    /// lone leaf. Returns the former `(left, right)`.
    pub(crate) fn untie(&mut self) -> (Link, Link) {
        self.size = Size::ONE;
        self.height = Height::ONE;
        (self.left.take(), self.right.take())
    }

    #[inline]
    pub(crate) fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub(crate) fn height(&self) -> Height {
        self.height
    }

    /// Stores metadata derived from the children.
    pub(crate) fn set_metadata(&mut self, size: Size, height: Height) {
        self.size = size;
        self.height = height;
    }

    /// Consumes a detached node, yielding its entry.
    pub(crate) fn into_entry(self) -> (K, V) {
        debug_assert!(
            self.left.is_none() && self.right.is_none(),
            "`Node::into_entry()` - node is still linked into the tree!"
        );
        (self.key, self.value)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::raw::handle::Handle;

    #[test]
    fn new_node_is_a_leaf() {
        let node = Node::new(7, "seven");
        assert_eq!(node.entry(), (&7, &"seven"));
        assert_eq!(node.children(), (None, None));
        assert_eq!(node.size(), Size::ONE);
        assert_eq!(node.height(), Height::ONE);
    }

    #[test]
    fn untie_clears_links_and_metadata() {
        let mut node = Node::new(2, ());
        node.set_left(Some(Handle::from_index(0)));
        node.set_right(Some(Handle::from_index(1)));
        node.set_metadata(Size::from_usize(3), Height::ONE.above());

        let (left, right) = node.untie();
        assert_eq!(left, Some(Handle::from_index(0)));
        assert_eq!(right, Some(Handle::from_index(1)));
        assert_eq!(node.children(), (None, None));
        assert_eq!(node.size(), Size::ONE);
        assert_eq!(node.height(), Height::ONE);
        assert_eq!(node.into_entry(), (2, ()));
    }
}
