use core::ops::{Index, IndexMut};

/// Anything that holds a countable number of elements.
pub trait Container {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Random access by position. Positions run from `0` to `len() - 1`.
pub trait Indexed<T>: Container {
    fn get(&self, index: usize) -> Option<&T>;
    fn get_mut(&mut self, index: usize) -> Option<&mut T>;

    fn contains_index(&self, index: usize) -> bool {
        index < self.len()
    }
}

/// Linear equality scans over an [`Indexed`] container.
///
/// A miss is reported as `None`. Every `Indexed` container with comparable
/// elements gets this for free.
pub trait Searchable<T: PartialEq>: Indexed<T> {
    fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Smallest index holding a value equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize> {
        (0..self.len()).find(|&index| self.get(index) == Some(item))
    }

    /// Largest index holding a value equal to `item`.
    fn last_index_of(&self, item: &T) -> Option<usize> {
        // A reversed range stops at 0, it never wraps.
        (0..self.len())
            .rev()
            .find(|&index| self.get(index) == Some(item))
    }
}

impl<T: PartialEq, C: Indexed<T> + ?Sized> Searchable<T> for C {}

/// A growable sequence with positional insert and removal.
///
/// Indexing with `[]` faults when `index >= len()`. Positional operations
/// fault on an invalid position; they are caller bugs, not recoverable errors.
pub trait List<T>: Indexed<T> + Index<usize, Output = T> + IndexMut<usize> {
    /// Appends `item` after the last element.
    fn push(&mut self, item: T);

    /// Appends a clone of every element of `items`, in order.
    fn push_all<S: Indexed<T> + ?Sized>(&mut self, items: &S)
    where
        T: Clone;

    /// Inserts `item` before `index`, so that it ends up at `index`.
    /// `index == len()` appends.
    fn add(&mut self, item: T, index: usize);

    /// Drops the element at `index` and closes the gap.
    fn remove(&mut self, index: usize);

    /// Drops `count` consecutive elements starting at `index` and closes the gap.
    fn remove_range(&mut self, index: usize, count: usize);

    fn clear(&mut self);
}

/// First in, first out.
pub trait Queue<T>: Container {
    /// Enqueues at the tail. A bounded queue hands the item back when full.
    fn try_push(&mut self, item: T) -> Result<(), T>;
    fn try_dequeue(&mut self) -> Option<T>;
    fn try_peek(&self) -> Option<&T>;

    #[track_caller]
    fn push(&mut self, item: T) {
        if self.try_push(item).is_err() {
            panic!("push on a full queue");
        }
    }

    /// Enqueues a clone of every element of `items`, in order.
    #[track_caller]
    fn push_all<S: Indexed<T> + ?Sized>(&mut self, items: &S)
    where
        T: Clone,
        Self: Sized,
    {
        for index in 0..items.len() {
            if let Some(item) = items.get(index) {
                self.push(item.clone());
            }
        }
    }

    /// Removes and returns the front element. Faults when empty.
    #[track_caller]
    fn dequeue(&mut self) -> T {
        match self.try_dequeue() {
            Some(item) => item,
            None => panic!("dequeue on an empty queue"),
        }
    }

    /// The front element. Faults when empty.
    #[track_caller]
    fn peek(&self) -> &T {
        match self.try_peek() {
            Some(item) => item,
            None => panic!("peek on an empty queue"),
        }
    }
}

/// Last in, first out.
pub trait Stack<T>: Container {
    /// Pushes onto the top. A bounded stack hands the item back when full.
    fn try_push(&mut self, item: T) -> Result<(), T>;
    fn try_pop(&mut self) -> Option<T>;
    fn try_peek(&self) -> Option<&T>;

    #[track_caller]
    fn push(&mut self, item: T) {
        if self.try_push(item).is_err() {
            panic!("push on a full stack");
        }
    }

    /// Pushes a clone of every element of `items` in order, leaving the last
    /// one on top.
    #[track_caller]
    fn push_all<S: Indexed<T> + ?Sized>(&mut self, items: &S)
    where
        T: Clone,
        Self: Sized,
    {
        for index in 0..items.len() {
            if let Some(item) = items.get(index) {
                self.push(item.clone());
            }
        }
    }

    /// Removes and returns the top element. Faults when empty.
    #[track_caller]
    fn pop(&mut self) -> T {
        match self.try_pop() {
            Some(item) => item,
            None => panic!("pop on an empty stack"),
        }
    }

    /// The top element. Faults when empty.
    #[track_caller]
    fn peek(&self) -> &T {
        match self.try_peek() {
            Some(item) => item,
            None => panic!("peek on an empty stack"),
        }
    }
}
