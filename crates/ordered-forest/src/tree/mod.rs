//! Ordered binary search tree over an index arena.
//!
//! [`OrderedTree`] owns the node arena and implements the policy-free parts of
//! a search tree: keyed insertion, search, splicing and in-order navigation.
//! Rebalancing is delegated to a [`Balance`] policy chosen once per tree
//! instance through the `B` type parameter:
//!
//! | Policy | Node metadata | Alias |
//! |--------|---------------|-------|
//! | [`Plain`] | `()` | [`SearchTree`] |
//! | [`Avl`](crate::avl::Avl) | subtree height | [`AvlTree`](crate::avl::AvlTree) |
//! | [`RedBlack`](crate::red_black::RedBlack) | [`Color`](crate::red_black::Color) | [`RbTree`](crate::red_black::RbTree) |
//!
//! Equal elements are routed to the right on insertion, so in-order traversal
//! yields them in insertion order until a rotation or deletion reshapes them.

mod iter;
mod node;

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

use crate::error::ForestError;
use crate::types::Comparator;
use crate::util::{self, first, height, last, next, prev, set_l, set_p, set_r, unlink};

pub use iter::{Iter, Levels};
pub use node::TreeNode;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Rebalancing policy of an [`OrderedTree`].
///
/// Sealed: the crate provides [`Plain`], [`Avl`](crate::avl::Avl) and
/// [`RedBlack`](crate::red_black::RedBlack).
pub trait Balance: sealed::Sealed {
    type Meta: Copy + PartialEq + fmt::Debug;

    /// Policy name used in error messages.
    const NAME: &'static str;
    /// Whether callers may rotate nodes directly.
    const EXTERNAL_ROTATION: bool;

    fn leaf_meta() -> Self::Meta;

    /// Restores the policy invariant after `node` was attached as a leaf.
    /// Returns the new root.
    fn after_insert<T>(arena: &mut [TreeNode<T, Self::Meta>], root: u32, node: u32) -> u32;

    /// Physically removes `node`, which has at most one child, and restores
    /// the policy invariant. Returns the new root.
    fn detach<T>(arena: &mut [TreeNode<T, Self::Meta>], root: u32, node: u32) -> Option<u32>;

    /// Short metadata label used by [`OrderedTree::print`].
    fn describe<T>(arena: &[TreeNode<T, Self::Meta>], node: u32) -> String;

    /// Checks the policy invariant of a non-empty tree.
    fn validate<T>(arena: &[TreeNode<T, Self::Meta>], root: u32) -> Result<(), String>;
}

/// Unbalanced search tree: no metadata, no fix-up, rotations allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl sealed::Sealed for Plain {}

impl Balance for Plain {
    type Meta = ();

    const NAME: &'static str = "plain";
    const EXTERNAL_ROTATION: bool = true;

    fn leaf_meta() {}

    fn after_insert<T>(_arena: &mut [TreeNode<T, ()>], root: u32, _node: u32) -> u32 {
        root
    }

    fn detach<T>(arena: &mut [TreeNode<T, ()>], root: u32, node: u32) -> Option<u32> {
        unlink(arena, root, node)
    }

    fn describe<T>(_arena: &[TreeNode<T, ()>], _node: u32) -> String {
        String::new()
    }

    fn validate<T>(_arena: &[TreeNode<T, ()>], _root: u32) -> Result<(), String> {
        Ok(())
    }
}

fn default_comparator<T: PartialOrd>(a: &T, b: &T) -> Option<Ordering> {
    a.partial_cmp(b)
}

/// Exchanges the elements of `n` and its in-order predecessor (the rightmost
/// node of its left subtree) and returns the predecessor's index.
///
/// `n` must have two children; the returned node has at most one.
pub(crate) fn swap_with_predecessor<T, M>(arena: &mut [TreeNode<T, M>], n: u32) -> u32 {
    let l = arena[n as usize]
        .l
        .expect("predecessor swap needs a left subtree");
    let v = last(arena, Some(l)).expect("non-empty subtree has a rightmost node");
    let (lo, hi) = (n.min(v) as usize, n.max(v) as usize);
    let (head, tail) = arena.split_at_mut(hi);
    std::mem::swap(&mut head[lo].value, &mut tail[0].value);
    v
}

/// Search tree over an index arena, rebalanced by `B`, ordered by `C`.
///
/// Node handles are `u32` arena indices. A handle stays valid while its node
/// lives; deleting an element with two children moves its in-order
/// predecessor's element into the deleted element's node.
pub struct OrderedTree<T, B = Plain, C = Comparator<T>>
where
    B: Balance,
    C: Fn(&T, &T) -> Option<Ordering>,
{
    root: Option<u32>,
    len: usize,
    free: Option<u32>,
    comparator: C,
    arena: Vec<TreeNode<T, B::Meta>>,
    policy: PhantomData<B>,
}

/// Unbalanced search tree.
pub type SearchTree<T, C = Comparator<T>> = OrderedTree<T, Plain, C>;

impl<T, B> OrderedTree<T, B>
where
    T: PartialOrd,
    B: Balance,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut tree = Self::new();
        tree.arena.reserve(capacity);
        tree
    }

    /// Builds a tree by inserting every value in iteration order.
    pub fn try_from_values<I>(values: I) -> Result<Self, ForestError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }
}

impl<T, B> Default for OrderedTree<T, B>
where
    T: PartialOrd,
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B, C> OrderedTree<T, B, C>
where
    B: Balance,
    C: Fn(&T, &T) -> Option<Ordering>,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            len: 0,
            free: None,
            comparator,
            arena: Vec::new(),
            policy: PhantomData,
        }
    }

    pub(crate) fn arena(&self) -> &[TreeNode<T, B::Meta>] {
        &self.arena
    }

    fn live(&self, node: u32) -> Option<&TreeNode<T, B::Meta>> {
        self.arena.get(node as usize).filter(|n| n.is_live())
    }

    fn alloc(&mut self, value: T) -> u32 {
        let node = TreeNode::new(value, B::leaf_meta());
        match self.free {
            Some(i) => {
                self.free = self.arena[i as usize].p;
                self.arena[i as usize] = node;
                i
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    fn release(&mut self, i: u32) -> T {
        let slot = &mut self.arena[i as usize];
        let value = slot.value.take().expect("released node holds a value");
        slot.l = None;
        slot.r = None;
        slot.p = self.free;
        self.free = Some(i);
        value
    }

    /// Inserts `value` as a new leaf and rebalances; returns its node handle.
    ///
    /// Ties descend to the right. Fails with
    /// [`ForestError::InvalidArgument`] when `value` has no total order.
    pub fn insert(&mut self, value: T) -> Result<u32, ForestError> {
        if (self.comparator)(&value, &value) != Some(Ordering::Equal) {
            return Err(ForestError::InvalidArgument(
                "element is not comparable with itself",
            ));
        }

        let mut parent = None;
        let mut go_left = false;
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            let cmp = (self.comparator)(&value, node.element()).ok_or(
                ForestError::InvalidArgument("element is not comparable with the tree"),
            )?;
            parent = Some(i);
            go_left = cmp == Ordering::Less;
            curr = if go_left { node.l } else { node.r };
        }

        let n = self.alloc(value);
        self.len += 1;
        let root = match (self.root, parent) {
            (Some(root), Some(p)) => {
                set_p(&mut self.arena, n, Some(p));
                if go_left {
                    set_l(&mut self.arena, p, Some(n));
                } else {
                    set_r(&mut self.arena, p, Some(n));
                }
                root
            }
            _ => n,
        };
        self.root = Some(B::after_insert(&mut self.arena, root, n));
        Ok(n)
    }

    /// Finds a node holding an element equal to `value`.
    pub fn search(&self, value: &T) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            curr = match (self.comparator)(value, node.element())? {
                Ordering::Less => node.l,
                Ordering::Equal => return Some(i),
                Ordering::Greater => node.r,
            };
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes one element equal to `value` and returns it.
    ///
    /// A node with two children first swaps its element with its in-order
    /// predecessor; the predecessor's node is the one physically removed.
    pub fn delete(&mut self, value: &T) -> Result<T, ForestError> {
        let root = self.root.ok_or(ForestError::EmptyStructure)?;
        let mut n = self.search(value).ok_or(ForestError::EmptyStructure)?;

        let node = &self.arena[n as usize];
        if node.l.is_some() && node.r.is_some() {
            n = swap_with_predecessor(&mut self.arena, n);
        }
        self.root = B::detach(&mut self.arena, root, n);
        self.len -= 1;
        Ok(self.release(n))
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.free = None;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; `-1` when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn left(&self, node: u32) -> Option<u32> {
        self.live(node)?.l
    }

    pub fn right(&self, node: u32) -> Option<u32> {
        self.live(node)?.r
    }

    pub fn parent(&self, node: u32) -> Option<u32> {
        self.live(node)?.p
    }

    pub fn value(&self, node: u32) -> Option<&T> {
        self.live(node)?.value.as_ref()
    }

    pub fn meta(&self, node: u32) -> Option<B::Meta> {
        self.live(node).map(|n| n.meta)
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn next(&self, node: u32) -> Option<u32> {
        self.live(node)?;
        next(&self.arena, node)
    }

    pub fn prev(&self, node: u32) -> Option<u32> {
        self.live(node)?;
        prev(&self.arena, node)
    }

    pub fn min(&self) -> Option<&T> {
        self.first().map(|i| self.arena[i as usize].element())
    }

    pub fn max(&self) -> Option<&T> {
        self.last().map(|i| self.arena[i as usize].element())
    }

    /// Elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T, B::Meta> {
        Iter {
            arena: &self.arena,
            curr: self.first(),
            remaining: self.len,
        }
    }

    /// Node handles in breadth-first order.
    pub fn levels(&self) -> Levels<'_, T, B::Meta> {
        Levels {
            arena: &self.arena,
            queue: self.root.into_iter().collect::<VecDeque<_>>(),
        }
    }

    fn rotation_root(&self, node: u32, has_pivot: bool) -> Result<u32, ForestError> {
        if !B::EXTERNAL_ROTATION {
            return Err(ForestError::UnsupportedOperation(B::NAME));
        }
        self.live(node)
            .ok_or(ForestError::InvalidArgument("node is not in the tree"))?;
        if !has_pivot {
            return Err(ForestError::InvalidArgument(
                "rotation needs a child on the pivot side",
            ));
        }
        self.root.ok_or(ForestError::EmptyStructure)
    }

    /// Rotates `node` down to the left. Only [`Plain`] trees allow it.
    pub fn rotate_left(&mut self, node: u32) -> Result<(), ForestError> {
        let has_pivot = self.live(node).is_some_and(|n| n.r.is_some());
        let root = self.rotation_root(node, has_pivot)?;
        self.root = Some(util::rotate_left(&mut self.arena, root, node));
        Ok(())
    }

    /// Rotates `node` down to the right. Only [`Plain`] trees allow it.
    pub fn rotate_right(&mut self, node: u32) -> Result<(), ForestError> {
        let has_pivot = self.live(node).is_some_and(|n| n.l.is_some());
        let root = self.rotation_root(node, has_pivot)?;
        self.root = Some(util::rotate_right(&mut self.arena, root, node));
        Ok(())
    }

    /// Checks links, element count, in-order ordering and the policy
    /// invariant.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            return if self.len == 0 {
                Ok(())
            } else {
                Err(format!("Empty tree reports {} elements", self.len))
            };
        };
        if self.arena[root as usize].p.is_some() {
            return Err("Root has parent".to_string());
        }

        let mut count = 0;
        let mut stack = vec![root];
        while let Some(i) = stack.pop() {
            let node = &self.arena[i as usize];
            if !node.is_live() {
                return Err(format!("Freed node {i} is still linked"));
            }
            count += 1;
            for child in [node.l, node.r].into_iter().flatten() {
                if self.arena[child as usize].p != Some(i) {
                    return Err(format!("Broken parent link below node {i}"));
                }
                stack.push(child);
            }
        }
        if count != self.len {
            return Err(format!("Counted {count} nodes, expected {}", self.len));
        }

        let mut prev_value: Option<&T> = None;
        for value in self.iter() {
            if let Some(prev_value) = prev_value {
                if (self.comparator)(prev_value, value) == Some(Ordering::Greater) {
                    return Err("Node order violated".to_string());
                }
            }
            prev_value = Some(value);
        }

        B::validate(&self.arena, root)
    }

    /// Debug rendering of the tree shape.
    ///
    /// Pre-order with an explicit stack; each level indents by two spaces.
    pub fn print(&self) -> String
    where
        T: fmt::Debug,
    {
        enum Step {
            Visit(Option<u32>, usize),
            Emit(String),
        }

        let mut out = String::new();
        let mut stack = vec![Step::Visit(self.root, 0)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Emit(text) => out.push_str(&text),
                Step::Visit(None, _) => out.push('∅'),
                Step::Visit(Some(i), depth) => {
                    let n = &self.arena[i as usize];
                    let tab = "  ".repeat(depth);
                    let label = B::describe(&self.arena, i);
                    let tag = if label.is_empty() {
                        String::new()
                    } else {
                        format!(" [{label}]")
                    };
                    out.push_str(&format!(
                        "Node[{i}]{tag} {{ {:?} }}\n{tab}L=",
                        n.element()
                    ));
                    stack.push(Step::Visit(n.r, depth + 1));
                    stack.push(Step::Emit(format!("\n{tab}R=")));
                    stack.push(Step::Visit(n.l, depth + 1));
                }
            }
        }
        out
    }

    fn same_shape(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        let mut stack = vec![(self.root, other.root)];
        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => {
                    let x = &self.arena[a as usize];
                    let y = &other.arena[b as usize];
                    if x.value != y.value || x.meta != y.meta {
                        return false;
                    }
                    stack.push((x.l, y.l));
                    stack.push((x.r, y.r));
                }
                _ => return false,
            }
        }
        true
    }
}

/// Two trees are equal when they have the same shape, the same elements in
/// the same places and the same balance metadata.
impl<T, B, C> PartialEq for OrderedTree<T, B, C>
where
    T: PartialEq,
    B: Balance,
    C: Fn(&T, &T) -> Option<Ordering>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.same_shape(other)
    }
}

impl<T, B, C> fmt::Debug for OrderedTree<T, B, C>
where
    T: fmt::Debug,
    B: Balance,
    C: Fn(&T, &T) -> Option<Ordering>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, B, C> IntoIterator for &'a OrderedTree<T, B, C>
where
    B: Balance,
    C: Fn(&T, &T) -> Option<Ordering>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, B::Meta>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
