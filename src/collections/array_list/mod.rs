use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::{fault, trace, Container, Indexed, List, ListError, Stack};


/// Capacity of a list built with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 2;

/// A list over one owned, contiguous buffer that grows by half its size
/// whenever it runs out of slots.
///
/// The list keeps its own notion of capacity and only ever reallocates
/// according to the policy documented on each operation. A reallocation moves
/// every element into a fresh buffer and frees the old one, so a reference
/// into the list can never be held across a call that may grow it; the
/// borrow checker rejects such code.
///
/// ```
/// use shelf::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push(1);
/// list.push(2);
/// assert_eq!(list.capacity(), 2);
///
/// list.push(3);
/// assert_eq!(list.capacity(), 3);
///
/// list.add(4, 1);
/// assert_eq!(list.as_slice(), &[1, 4, 2, 3]);
/// ```
pub struct ArrayList<T> {
    // `items.len()` is the list length. The vector is always allocated with
    // room for at least `capacity` elements so that it never grows on its own.
    items: Vec<T>,
    capacity: usize,
}

impl<T> ArrayList<T> {
    /// An empty list with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots the list can fill before its next reallocation.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Makes room for `additional` more elements.
    ///
    /// When they do not fit, the buffer is reallocated to exactly
    /// `len() + additional` slots. This never shrinks the buffer.
    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        let required = self.required(additional);
        if required > self.capacity {
            self.reallocate(required);
        }
    }

    /// Reallocates the buffer to exactly `new_capacity` slots, growing or
    /// shrinking it.
    ///
    /// **This loses data.** When `new_capacity < len()`, every element at
    /// index `new_capacity` or later is dropped and the length becomes
    /// `new_capacity`. Use [`ArrayList::reserve`] to only ever grow.
    pub fn set_capacity_truncating(&mut self, new_capacity: usize) {
        self.reallocate(new_capacity);
    }

    /// Appends `item` after the last element.
    #[track_caller]
    pub fn push(&mut self, item: T) {
        self.grow_for(1);
        self.items.push(item);
    }

    /// Appends a clone of every element of `items`, in order, after reserving
    /// room for all of them at once.
    #[track_caller]
    pub fn push_all<S: Indexed<T> + ?Sized>(&mut self, items: &S)
    where
        T: Clone,
    {
        self.reserve(items.len());
        for index in 0..items.len() {
            if let Some(item) = items.get(index) {
                self.items.push(item.clone());
            }
        }
    }

    /// Appends the value built by `make` and returns it.
    ///
    /// The buffer is grown before `make` runs, so the new element is never
    /// relocated by a reallocation and never cloned.
    #[track_caller]
    pub fn emplace<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        self.grow_for(1);
        let index = self.items.len();
        self.items.push(make());
        &mut self.items[index]
    }

    /// Inserts `item` at `index`, shifting every element at or after `index`
    /// one slot to the right. Faults when `index > len()`.
    #[track_caller]
    pub fn add(&mut self, item: T, index: usize) {
        let len = self.len();
        if self.try_add(item, index).is_err() {
            fault(ListError::IndexOutOfBounds { index, len });
        }
    }

    /// Like [`ArrayList::add`] but hands `item` back when `index > len()`.
    #[track_caller]
    pub fn try_add(&mut self, item: T, index: usize) -> Result<(), T> {
        if index > self.len() {
            return Err(item);
        }

        self.grow_for(1);
        self.items.insert(index, item);
        Ok(())
    }

    /// Drops the element at `index` and shifts every later element one slot
    /// to the left. Faults when `index >= len()`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) {
        if let Err(error) = self.try_remove(index) {
            fault(error);
        }
    }

    pub fn try_remove(&mut self, index: usize) -> Result<(), ListError> {
        let len = self.len();
        if index >= len {
            return Err(ListError::IndexOutOfBounds { index, len });
        }

        drop(self.items.remove(index));
        Ok(())
    }

    /// Drops the `count` elements starting at `index` and shifts the rest
    /// `count` slots to the left. Faults unless `index + count <= len()`.
    #[track_caller]
    pub fn remove_range(&mut self, index: usize, count: usize) {
        if let Err(error) = self.try_remove_range(index, count) {
            fault(error);
        }
    }

    pub fn try_remove_range(&mut self, index: usize, count: usize) -> Result<(), ListError> {
        let len = self.len();
        let end = index
            .checked_add(count)
            .filter(|end| *end <= len)
            .ok_or(ListError::RangeOutOfBounds { index, count, len })?;

        drop(self.items.drain(index..end));
        Ok(())
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[track_caller]
    fn required(&self, additional: usize) -> usize {
        match self.len().checked_add(additional) {
            Some(required) => required,
            None => panic!("capacity overflow"),
        }
    }

    /// Grows by half the current capacity when `additional` more elements do
    /// not fit, or to exactly the required size if half is not enough.
    #[track_caller]
    fn grow_for(&mut self, additional: usize) {
        let required = self.required(additional);
        if required <= self.capacity {
            return;
        }

        let grown = self.capacity.saturating_add(self.capacity / 2);
        self.reallocate(grown.max(required));
    }

    fn reallocate(&mut self, new_capacity: usize) {
        trace!(
            "reallocating list: capacity {} -> {}, length {}",
            self.capacity,
            new_capacity,
            self.items.len()
        );

        let mut old = core::mem::replace(&mut self.items, Vec::with_capacity(new_capacity));
        if old.len() > new_capacity {
            trace!(
                "dropping {} elements past the new capacity",
                old.len() - new_capacity
            );
            old.truncate(new_capacity);
        }

        self.items.extend(old);
        self.capacity = new_capacity;
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.items.get(index) {
            Some(item) => item,
            None => fault(ListError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.items.get_mut(index) {
            Some(item) => item,
            None => fault(ListError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayList<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> Container for ArrayList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Indexed<T> for ArrayList<T> {
    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }
}

impl<T> List<T> for ArrayList<T> {
    fn push(&mut self, item: T) {
        ArrayList::push(self, item)
    }

    fn push_all<S: Indexed<T> + ?Sized>(&mut self, items: &S)
    where
        T: Clone,
    {
        ArrayList::push_all(self, items)
    }

    fn add(&mut self, item: T, index: usize) {
        ArrayList::add(self, item, index)
    }

    fn remove(&mut self, index: usize) {
        ArrayList::remove(self, index)
    }

    fn remove_range(&mut self, index: usize, count: usize) {
        ArrayList::remove_range(self, index, count)
    }

    fn clear(&mut self) {
        ArrayList::clear(self)
    }
}

/// The top of the stack is the last element. Popping never shrinks the
/// buffer.
impl<T> Stack<T> for ArrayList<T> {
    fn try_push(&mut self, item: T) -> Result<(), T> {
        ArrayList::push(self, item);
        Ok(())
    }

    fn try_pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn try_peek(&self) -> Option<&T> {
        self.items.last()
    }

    fn push_all<S: Indexed<T> + ?Sized>(&mut self, items: &S)
    where
        T: Clone,
    {
        ArrayList::push_all(self, items)
    }
}
