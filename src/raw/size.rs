use super::handle::Handle;

#[cfg(test)]
type RawSize = u16;
#[cfg(not(test))]
type RawSize = u32;

/// Number of nodes in a subtree, including its root.
///
/// A subtree can never hold more nodes than the arena can name, so the bound
/// is shared with [`Handle`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Size(RawSize);

impl Size {
    pub(crate) const MAX: usize = Handle::MAX + 1;
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    #[inline]
    pub(crate) const fn from_usize(size: usize) -> Self {
        assert!(size <= Self::MAX, "`Size::from_usize()` - `size` > `Size::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let raw = size as RawSize;
        Self(raw)
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }
}

/// Longest root-to-leaf path of a subtree, counted in nodes.
///
/// An AVL tree of height `h` holds at least `fib(h + 2) - 1` nodes, so a
/// `u8` covers any tree the arena can hold.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Height(u8);

impl Height {
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const ONE: Self = Self(1);

    /// The height of a node whose taller child has height `self`.
    #[inline]
    pub(crate) const fn above(self) -> Self {
        Self(self.0 + 1)
    }

    /// Signed difference `self - other`, the balance factor when `self` is
    /// the left child.
    #[inline]
    pub(crate) const fn diff(self, other: Self) -> i16 {
        self.0 as i16 - other.0 as i16
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }
}
