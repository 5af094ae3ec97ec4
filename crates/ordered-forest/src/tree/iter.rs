use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::util::next;

use super::node::TreeNode;

/// In-order (ascending) iterator over tree elements.
pub struct Iter<'a, T, M> {
    pub(crate) arena: &'a [TreeNode<T, M>],
    pub(crate) curr: Option<u32>,
    pub(crate) remaining: usize,
}

impl<'a, T, M> Iterator for Iter<'a, T, M> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        self.remaining -= 1;
        Some(self.arena[i as usize].element())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, M> ExactSizeIterator for Iter<'_, T, M> {}

impl<T, M> FusedIterator for Iter<'_, T, M> {}

/// Breadth-first iterator over node handles, root first, left before right.
pub struct Levels<'a, T, M> {
    pub(crate) arena: &'a [TreeNode<T, M>],
    pub(crate) queue: VecDeque<u32>,
}

impl<T, M> Iterator for Levels<'_, T, M> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.queue.pop_front()?;
        let node = &self.arena[i as usize];
        self.queue.extend(node.l);
        self.queue.extend(node.r);
        Some(i)
    }
}
