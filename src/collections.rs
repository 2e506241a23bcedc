pub mod array;
pub use array::*;

pub mod array_list;
pub use array_list::*;

pub mod adapters;
