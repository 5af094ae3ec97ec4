//! Arena link trait and comparator type.
//!
//! Nodes are stored in a [`Vec`]-backed arena and every "pointer" is an
//! `Option<u32>` index into it. Child links own their target; the parent link
//! is a back-reference used only for upward walks.

use std::cmp::Ordering;

/// Binary-tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Three-way comparison used by the trees.
///
/// `None` means the two elements have no defined order.
pub type Comparator<T> = fn(&T, &T) -> Option<Ordering>;
