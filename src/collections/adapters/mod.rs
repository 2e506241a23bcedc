//! Capability impls for storages this crate does not own.
//!
//! `VecDeque` is an unbounded queue. The `heapless` types are bounded by their
//! const capacity: `try_push` hands the item back once they are full, and the
//! provided `push` faults.

use alloc::collections::VecDeque;

use crate::{Container, Indexed, Queue, Stack};


impl<T> Container for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Indexed<T> for VecDeque<T> {
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

impl<T> Queue<T> for VecDeque<T> {
    fn try_push(&mut self, item: T) -> Result<(), T> {
        self.push_back(item);
        Ok(())
    }

    fn try_dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn try_peek(&self) -> Option<&T> {
        self.front()
    }
}

impl<T, const N: usize> Container for heapless::Deque<T, N> {
    fn len(&self) -> usize {
        heapless::Deque::len(self)
    }
}

impl<T, const N: usize> Queue<T> for heapless::Deque<T, N> {
    fn try_push(&mut self, item: T) -> Result<(), T> {
        self.push_back(item)
    }

    fn try_dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn try_peek(&self) -> Option<&T> {
        self.front()
    }
}

impl<T, const N: usize> Container for heapless::Vec<T, N> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }
}

impl<T, const N: usize> Indexed<T> for heapless::Vec<T, N> {
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}

impl<T, const N: usize> Stack<T> for heapless::Vec<T, N> {
    fn try_push(&mut self, item: T) -> Result<(), T> {
        heapless::Vec::push(self, item)
    }

    fn try_pop(&mut self) -> Option<T> {
        heapless::Vec::pop(self)
    }

    fn try_peek(&self) -> Option<&T> {
        self.last()
    }
}
