#![no_std]

extern crate alloc;

/// Emits a `log::trace!` record when the `log` feature is on and compiles to
/// nothing otherwise.
#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}
pub(crate) use trace;

#[cfg(test)]
mod tests;

mod capability;
pub use capability::*;

mod collections;
pub use collections::*;

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    IndexOutOfBounds { index: usize, len: usize },
    RangeOutOfBounds { index: usize, count: usize, len: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            ListError::RangeOutOfBounds { index, count, len } => write!(
                f,
                "range of {count} elements at index {index} out of range for length {len}"
            ),
        }
    }
}

impl core::error::Error for ListError {}

/// Aborts the current operation on a precondition violation.
#[cold]
#[track_caller]
pub(crate) fn fault(error: ListError) -> ! {
    panic!("{error}")
}
