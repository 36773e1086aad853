//! # Singly Linked List
//!
//! An owning singly linked list with a sentinel head and cursor positions.
//!
//! ## Core Components
//!
//! - [`list::LinkedList`]: the container. Push and pop at the front in O(1), length in O(1).
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: read-only and mutable positions.
//!   A mutable cursor inserts and erases right after itself.
//! - [`iter`]: the usual borrowing and owning iterators.
//! - [`traits`]: `Link` for next-pointer access and `Position` for cursor identity.
//!
//! ## Misuse
//!
//! Operations that have no meaning at a position are checked instead of being
//! left undefined:
//!
//! - `pop_front` and `remove_after` return `None` when there is nothing to remove.
//! - `insert_after` and `erase_after` return a [`error::CursorError`].
//! - `current` returns `None` at end and before-begin.
//! - Advancing a cursor that is already at the end panics.

pub mod cmp;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod traits;

pub use cursor::{Cursor, CursorMut};
pub use error::CursorError;
pub use list::{swap, LinkedList};

#[cfg(test)]
mod tests;
