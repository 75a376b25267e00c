//! Growable child array backing table members and allowed-VLAN lists.

use crate::error::{CiscoError, CiscoResult};
use std::ops::Deref;

/// Slots reserved when an array is created.
pub const INITIAL_CAPACITY: usize = 2;

/// Ordered, append-only sequence with minimal growth.
///
/// When the backing storage is full, it is grown to exactly `count + 1`
/// slots rather than doubled, so repeated appends cost O(n) reallocations.
/// Growth failure is reported instead of aborting, and leaves the array
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildArray<T> {
    items: Vec<T>,
    what: &'static str,
}

impl<T> ChildArray<T> {
    /// Creates an empty array; `what` names it in errors.
    pub fn new(what: &'static str) -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            what,
        }
    }

    /// Appends an element, growing storage by one slot when full.
    pub fn push(&mut self, item: T) -> CiscoResult<()> {
        if self.items.len() == self.items.capacity() {
            self.items
                .try_reserve_exact(1)
                .map_err(|source| CiscoError::ResourceExhausted {
                    what: self.what,
                    source,
                })?;
        }
        self.items.push(item);
        Ok(())
    }

    /// Returns the element at `index`, or `None` when the index is
    /// negative or past the end.
    pub fn get(&self, index: isize) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.items.get(index))
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> Deref for ChildArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a ChildArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_with_two_slots() {
        let array: ChildArray<u16> = ChildArray::new("test");
        assert!(array.is_empty());
        assert!(array.capacity() >= INITIAL_CAPACITY);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut array = ChildArray::new("test");
        for value in [30u16, 10, 20, 10] {
            array.push(value).unwrap();
        }
        assert_eq!(&array[..], &[30, 10, 20, 10]);
    }

    #[test]
    fn test_grows_one_slot_at_a_time() {
        let mut array = ChildArray::new("test");
        let mut capacities = vec![array.capacity()];
        for value in 0u16..6 {
            array.push(value).unwrap();
            capacities.push(array.capacity());
        }
        assert_eq!(capacities, [2, 2, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_get_bounds() {
        let mut array = ChildArray::new("test");
        array.push("a").unwrap();
        array.push("b").unwrap();

        assert_eq!(array.get(0), Some(&"a"));
        assert_eq!(array.get(1), Some(&"b"));
        assert_eq!(array.get(2), None);
        assert_eq!(array.get(-1), None);
        assert_eq!(array.get(isize::MIN), None);
    }
}
