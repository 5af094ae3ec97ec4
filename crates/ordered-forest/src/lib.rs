//! In-memory ordered indexes.
//!
//! Two self-balancing binary search trees built on one arena-backed ordered
//! tree, plus an index-tracked binary min-heap:
//!
//! - [`AvlTree`]: height-balanced, every node stores its subtree height.
//! - [`RbTree`]: color-balanced, every node stores a red/black tag.
//! - [`SearchTree`]: the same tree without rebalancing.
//! - [`IndexedMinHeap`]: elements carry their own slot so arbitrary elements
//!   can be removed or re-prioritised in `O(log n)`.
//!
//! Nodes live in a `Vec` arena and every link is an `Option<u32>` index, so
//! parent back-links need no reference counting. The structures are
//! single-threaded; sharing them across threads needs external locking.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] link trait, [`Comparator`] |
//! [`util`] | arena navigation, unlinking, rotations |
//! [`tree`] | [`OrderedTree`], [`Balance`] policies, iterators |
//! [`avl`] | [`Avl`] policy and checks |
//! [`red_black`] | [`RedBlack`] policy, [`Color`] and checks |
//! [`heap`] | [`IndexedMinHeap`], [`Indexed`], [`heap_sort`] |

pub mod avl;
pub mod error;
pub mod heap;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use avl::{Avl, AvlTree};
pub use error::ForestError;
pub use heap::{heap_sort, Carrier, Indexed, IndexedMinHeap};
pub use red_black::{Color, RbTree, RedBlack};
pub use tree::{Balance, OrderedTree, Plain, SearchTree, TreeNode};
pub use types::{Comparator, Node};
