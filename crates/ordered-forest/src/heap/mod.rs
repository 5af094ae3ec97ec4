//! Array-backed binary min-heap whose elements track their own slot.
//!
//! Every element knows its current array position through [`Indexed`], so an
//! arbitrary element (not only the minimum) can be found, removed or
//! re-prioritised in `O(log n)`. Elements are usually shared handles such as
//! `Rc<E>`: the caller keeps a clone, mutates the ordering key through
//! interior mutability and then calls [`IndexedMinHeap::reorder`].

mod sort;

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::error::ForestError;

pub use sort::{heap_sort, Carrier};

/// Element that stores its own heap position.
///
/// `None` is the "not in a heap" sentinel.
///
/// [`IndexedMinHeap::remove`], [`IndexedMinHeap::reorder`] and
/// [`IndexedMinHeap::contains`] match elements by identity, so the caller
/// must hold a shared handle (`Rc<E>` or `&E`) to the stored element. A heap
/// that owns its elements by value only supports the minimum-side operations.
pub trait Indexed {
    fn position(&self) -> Option<usize>;
    fn set_position(&self, position: Option<usize>);

    /// Whether `self` and `other` are the very same element.
    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<E: Indexed + ?Sized> Indexed for &E {
    fn position(&self) -> Option<usize> {
        (**self).position()
    }

    fn set_position(&self, position: Option<usize>) {
        (**self).set_position(position)
    }

    fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<E: Indexed + ?Sized> Indexed for Rc<E> {
    fn position(&self) -> Option<usize> {
        (**self).position()
    }

    fn set_position(&self, position: Option<usize>) {
        (**self).set_position(position)
    }

    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

#[inline]
fn is_orderable<E: PartialOrd>(e: &E) -> bool {
    e.partial_cmp(e) == Some(Ordering::Equal)
}

#[inline]
fn less<E: PartialOrd>(a: &E, b: &E) -> bool {
    a.partial_cmp(b) == Some(Ordering::Less)
}

pub struct IndexedMinHeap<E> {
    slots: Vec<E>,
}

impl<E> Default for IndexedMinHeap<E> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<E> IndexedMinHeap<E>
where
    E: Indexed + PartialOrd,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from all `elements` at once in `O(n)`.
    pub fn build<I>(elements: I) -> Result<Self, ForestError>
    where
        I: IntoIterator<Item = E>,
    {
        let slots: Vec<E> = elements.into_iter().collect();
        if !slots.iter().all(is_orderable) {
            return Err(ForestError::InvalidArgument(
                "element is not comparable with itself",
            ));
        }
        for (i, e) in slots.iter().enumerate() {
            e.set_position(Some(i));
        }

        let mut heap = Self { slots };
        let n = heap.slots.len();
        debug!("heap: building from {n} elements");
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        Ok(heap)
    }

    pub fn insert(&mut self, element: E) -> Result<(), ForestError> {
        if !is_orderable(&element) {
            return Err(ForestError::InvalidArgument(
                "element is not comparable with itself",
            ));
        }
        let i = self.slots.len();
        element.set_position(Some(i));
        self.slots.push(element);
        self.sift_up(i);
        Ok(())
    }

    /// Removes and returns the minimum; its position becomes `None`.
    pub fn extract_min(&mut self) -> Result<E, ForestError> {
        if self.slots.is_empty() {
            return Err(ForestError::EmptyStructure);
        }
        let last = self.slots.len() - 1;
        self.swap(0, last);
        let min = self.slots.pop().ok_or(ForestError::EmptyStructure)?;
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        min.set_position(None);
        Ok(min)
    }

    /// Removes `element` from wherever it sits. Returns `None`, and leaves the
    /// heap untouched, when `element` is not held (stale or absent position).
    pub fn remove(&mut self, element: &E) -> Option<E> {
        if !self.contains(element) {
            return None;
        }
        let i = element.position()?;
        let last = self.slots.len() - 1;
        self.swap(i, last);
        let removed = self.slots.pop()?;
        if i < self.slots.len() {
            self.restore(i);
        }
        removed.set_position(None);
        Some(removed)
    }

    /// Restores the heap property around `element` after its ordering key
    /// changed. No-op for elements the heap does not hold.
    pub fn reorder(&mut self, element: &E) {
        if let Some(i) = element.position().filter(|_| self.contains(element)) {
            self.restore(i);
        }
    }

    /// True when `element`'s position is in range and that slot holds exactly
    /// this element.
    pub fn contains(&self, element: &E) -> bool {
        element
            .position()
            .and_then(|i| self.slots.get(i))
            .is_some_and(|held| held.is_same(element))
    }

    /// Checks the min-heap property and that every element's stored position
    /// matches its slot.
    pub fn assert_valid(&self) -> Result<(), String> {
        for (i, e) in self.slots.iter().enumerate() {
            if e.position() != Some(i) {
                return Err(format!(
                    "Element at slot {i} reports position {:?}",
                    e.position()
                ));
            }
            if i > 0 && less(e, &self.slots[(i - 1) / 2]) {
                return Err(format!("Heap order violated at slot {i}"));
            }
        }
        Ok(())
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.slots.swap(i, j);
        self.slots[i].set_position(Some(i));
        self.slots[j].set_position(Some(j));
    }

    /// Sift-down, then sift-up from wherever the element settled.
    fn restore(&mut self, i: usize) {
        let settled = self.sift_down(i);
        self.sift_up(settled);
    }

    /// Returns the slot the element ends up in. Ties pick the left child.
    fn sift_down(&mut self, mut i: usize) -> usize {
        let n = self.slots.len();
        loop {
            let l = 2 * i + 1;
            if l >= n {
                return i;
            }
            let r = l + 1;
            let child = if r < n && less(&self.slots[r], &self.slots[l]) {
                r
            } else {
                l
            };
            if !less(&self.slots[child], &self.slots[i]) {
                return i;
            }
            self.swap(i, child);
            i = child;
        }
    }

    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !less(&self.slots[i], &self.slots[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }
}

impl<E> IndexedMinHeap<E> {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn peek(&self) -> Option<&E> {
        self.slots.first()
    }

    /// Element at array slot `i` (level order, not sorted).
    pub fn get(&self, i: usize) -> Result<&E, ForestError> {
        self.slots.get(i).ok_or(ForestError::IndexOutOfRange {
            index: i,
            len: self.slots.len(),
        })
    }

    /// Elements in raw array order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.slots.iter()
    }
}

impl<E: Indexed> IndexedMinHeap<E> {
    /// Empties the heap; every released element's position becomes `None`.
    pub fn clear(&mut self) {
        for e in self.slots.drain(..) {
            e.set_position(None);
        }
    }
}

impl<'a, E> IntoIterator for &'a IndexedMinHeap<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// Heaps are equal when their arrays hold equally ordered elements slot by
/// slot.
impl<E: PartialOrd> PartialEq for IndexedMinHeap<E> {
    fn eq(&self, other: &Self) -> bool {
        self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .zip(&other.slots)
                .all(|(a, b)| a.partial_cmp(b) == Some(Ordering::Equal))
    }
}

impl<E: fmt::Display> fmt::Display for IndexedMinHeap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug> fmt::Debug for IndexedMinHeap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.slots).finish()
    }
}
