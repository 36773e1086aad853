use core::ptr::NonNull;

use super::node::SingleLink;

/// A trait for anything that carries a next pointer in the chain.
pub trait Link {
    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<SingleLink>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<SingleLink>>);
}

/// A trait for a position inside a linked list.
///
/// Implemented by [`Cursor`](super::cursor::Cursor) and
/// [`CursorMut`](super::cursor::CursorMut) so that positions of either kind
/// can be compared with each other.
pub trait Position {
    /// The link this position refers to, `None` for the end position.
    fn link(&self) -> Option<NonNull<SingleLink>>;

    /// Check if this is the position one past the last element
    fn is_end(&self) -> bool {
        self.link().is_none()
    }
}
