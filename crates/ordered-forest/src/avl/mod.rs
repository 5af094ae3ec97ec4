//! Height-balanced (AVL) policy.
//!
//! Every node stores the height of its subtree (absent child = `-1`), and
//! after each insertion or deletion the path to the root is walked bottom-up,
//! rotating wherever `height(left) - height(right)` reaches `±2`.

pub mod util;

use std::cmp::Ordering;

use crate::tree::{sealed, Balance, OrderedTree, TreeNode};
use crate::types::Comparator;
use crate::util::unlink;

pub use util::{assert_avl_tree, balance_factor};

#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

/// Height-balanced search tree.
pub type AvlTree<T, C = Comparator<T>> = OrderedTree<T, Avl, C>;

impl sealed::Sealed for Avl {}

impl Balance for Avl {
    type Meta = i32;

    const NAME: &'static str = "AVL";
    const EXTERNAL_ROTATION: bool = false;

    fn leaf_meta() -> i32 {
        0
    }

    fn after_insert<T>(arena: &mut [TreeNode<T, i32>], root: u32, node: u32) -> u32 {
        let parent = arena[node as usize].p;
        util::rebalance(arena, root, parent)
    }

    fn detach<T>(arena: &mut [TreeNode<T, i32>], root: u32, node: u32) -> Option<u32> {
        let parent = arena[node as usize].p;
        let root = unlink(arena, root, node)?;
        Some(util::rebalance(arena, root, parent))
    }

    fn describe<T>(arena: &[TreeNode<T, i32>], node: u32) -> String {
        format!(
            "h={} bf={}",
            arena[node as usize].meta,
            balance_factor(arena, node)
        )
    }

    fn validate<T>(arena: &[TreeNode<T, i32>], root: u32) -> Result<(), String> {
        assert_avl_tree(arena, root)
    }
}

impl<T, C> OrderedTree<T, Avl, C>
where
    C: Fn(&T, &T) -> Option<Ordering>,
{
    /// Stored height of the subtree rooted at `node`.
    pub fn node_height(&self, node: u32) -> Option<i32> {
        self.meta(node)
    }

    pub fn balance_factor(&self, node: u32) -> Option<i32> {
        self.meta(node)?;
        Some(balance_factor(self.arena(), node))
    }
}
