use std::cell::Cell;
use std::cmp::Ordering;

use crate::error::ForestError;

use super::{Indexed, IndexedMinHeap};

/// Wraps a value that has no position field of its own so it can live in an
/// [`IndexedMinHeap`].
#[derive(Debug)]
pub struct Carrier<T> {
    value: T,
    position: Cell<Option<usize>>,
}

impl<T> Carrier<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            position: Cell::new(None),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Indexed for Carrier<T> {
    fn position(&self) -> Option<usize> {
        self.position.get()
    }

    fn set_position(&self, position: Option<usize>) {
        self.position.set(position);
    }
}

impl<T: PartialEq> PartialEq for Carrier<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialOrd> PartialOrd for Carrier<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/// Returns `items` in ascending order.
///
/// Builds a heap of [`Carrier`]s in `O(n)` and extracts the minimum `n`
/// times. Fails with [`ForestError::InvalidArgument`] if an item is not
/// comparable with itself (e.g. `NaN`).
pub fn heap_sort<T, I>(items: I) -> Result<Vec<T>, ForestError>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
{
    let mut heap = IndexedMinHeap::build(items.into_iter().map(Carrier::new))?;
    let mut sorted = Vec::with_capacity(heap.len());
    while !heap.is_empty() {
        sorted.push(heap.extract_min()?.into_inner());
    }
    Ok(sorted)
}
