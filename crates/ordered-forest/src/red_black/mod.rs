//! Color-balanced (red-black) policy.
//!
//! New leaves are red and are fixed up by recoloring and at most two
//! rotations. Deletion that removes a black node with a black (or absent)
//! replacement leaves a black-height deficit, resolved bottom-up in six
//! cases.

pub mod util;

use std::cmp::Ordering;
use std::fmt;

use crate::tree::{sealed, Balance, OrderedTree, TreeNode};
use crate::types::Comparator;
use crate::util::unlink;

pub use util::assert_red_black_tree;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RedBlack;

/// Color-balanced search tree.
pub type RbTree<T, C = Comparator<T>> = OrderedTree<T, RedBlack, C>;

impl sealed::Sealed for RedBlack {}

impl Balance for RedBlack {
    type Meta = Color;

    const NAME: &'static str = "red-black";
    const EXTERNAL_ROTATION: bool = false;

    fn leaf_meta() -> Color {
        Color::Red
    }

    fn after_insert<T>(arena: &mut [TreeNode<T, Color>], root: u32, node: u32) -> u32 {
        util::fix_insert(arena, root, node)
    }

    fn detach<T>(arena: &mut [TreeNode<T, Color>], root: u32, node: u32) -> Option<u32> {
        let n = &arena[node as usize];
        let parent = n.p;
        let child = n.l.or(n.r);
        let removed = n.meta;

        let root = unlink(arena, root, node)?;
        if removed == Color::Red {
            return Some(root);
        }
        match child {
            Some(c) if arena[c as usize].meta == Color::Red => {
                arena[c as usize].meta = Color::Black;
                Some(root)
            }
            _ => Some(util::fix_deficit(arena, root, child, parent)),
        }
    }

    fn describe<T>(arena: &[TreeNode<T, Color>], node: u32) -> String {
        arena[node as usize].meta.to_string()
    }

    fn validate<T>(arena: &[TreeNode<T, Color>], root: u32) -> Result<(), String> {
        assert_red_black_tree(arena, root)
    }
}

impl<T, C> OrderedTree<T, RedBlack, C>
where
    C: Fn(&T, &T) -> Option<Ordering>,
{
    pub fn color(&self, node: u32) -> Option<Color> {
        self.meta(node)
    }
}
