//! An order-statistic AVL tree map for Rust.
//!
//! This crate provides [`AvlTreeMap`], an ordered map with the familiar
//! `BTreeMap` lookup and update methods plus O(log n) order-statistic
//! operations:
//!
//! - [`get_by_rank`](AvlTreeMap::get_by_rank) - Get the entry at a given sorted position
//! - [`rank_of`](AvlTreeMap::rank_of) - Get the sorted position of a key
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the first element
//!
//! # Example
//!
//! ```
//! use avl_rank_tree::{AvlTreeMap, Rank};
//!
//! let mut scores = AvlTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // The median (rank 1 = second element in sorted order).
//! let (name, score) = scores.get_by_rank(1).unwrap();
//! assert_eq!((*name, *score), ("Bob", 85));
//!
//! assert_eq!(scores.rank_of(&"Carol"), Some(2));
//! assert_eq!(scores[Rank(0)], 100);
//! ```
//!
//! # Implementation
//!
//! Every node caches the size and height of its subtree. After each insert or
//! remove the tree is repaired on the way back up the search path with single
//! or double rotations, so the heights of any node's two subtrees never differ
//! by more than one and the cached sizes always add up. Nodes live in an arena
//! and refer to their children by handle; there are no parent links.
//!
//! The map is not internally synchronized. Mutation needs `&mut self`, so
//! sharing it between threads requires an external lock.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod order_statistic;
mod raw;

pub mod avl_tree_map;

pub use avl_tree_map::AvlTreeMap;
pub use order_statistic::Rank;
