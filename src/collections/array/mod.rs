use core::ops::{Index, IndexMut};

use crate::{fault, Container, Indexed, ListError};

#[cfg(test)]
mod tests;

/// A block of exactly `N` live elements.
///
/// The length is part of the type. There is no insert, remove or resize;
/// elements can only be read and overwritten in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Array<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> Array<T, N> {
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self {
            data: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> Index<usize> for Array<T, N> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(item) => item,
            None => fault(ListError::IndexOutOfBounds { index, len: N }),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for Array<T, N> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.data.get_mut(index) {
            Some(item) => item,
            None => fault(ListError::IndexOutOfBounds { index, len: N }),
        }
    }
}

impl<T, const N: usize> Container for Array<T, N> {
    fn len(&self) -> usize {
        N
    }
}

impl<T, const N: usize> Indexed<T> for Array<T, N> {
    fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
