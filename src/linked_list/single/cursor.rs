use core::fmt;
use core::ptr::NonNull;

use super::{
    error::CursorError,
    list::LinkedList,
    node::{Node, SingleLink},
    traits::{Link, Position},
};

/// Steps from `current` to the following link.
fn advance<T>(list: &LinkedList<T>, current: Option<NonNull<SingleLink>>) -> Option<NonNull<SingleLink>> {
    let at = current.unwrap_or_else(|| panic!("cannot advance a cursor past the end of the list"));
    unsafe { list.link(at) }.next()
}

/// A read-only position in a [`LinkedList`].
///
/// A cursor sits on an element, on the sentinel in front of the first
/// element (before-begin), or one past the last element (end). Only the
/// first kind can be dereferenced. Cursors are `Copy`, so saving a position
/// and coming back to it is free as long as the list is borrowed.
pub struct Cursor<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<NonNull<SingleLink>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>, current: Option<NonNull<SingleLink>>) -> Self {
        Cursor { list, current }
    }

    /// The element under the cursor, `None` at end or before-begin.
    pub fn current(&self) -> Option<&'a T> {
        let at = self.current?;
        if self.list.is_sentinel(at) {
            return None;
        }
        Some(unsafe { Node::<T>::value(at) })
    }

    /// The element right after the cursor, `None` at end or on the last element.
    pub fn peek_next(&self) -> Option<&'a T> {
        let next = unsafe { self.list.link(self.current?) }.next()?;
        Some(unsafe { Node::<T>::value(next) })
    }

    /// Moves to the next position and returns the cursor itself.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) -> &mut Self {
        self.current = advance(self.list, self.current);
        self
    }

    /// Moves to the next position and returns the position it was at before.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn step(&mut self) -> Self {
        let before = *self;
        self.move_next();
        before
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn is_before_begin(&self) -> bool {
        self.current.is_some_and(|at| self.list.is_sentinel(at))
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Position for Cursor<'_, T> {
    fn link(&self) -> Option<NonNull<SingleLink>> {
        self.current
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("before_begin", &self.is_before_begin())
            .field("current", &self.current())
            .finish()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

/// A position in a [`LinkedList`] that can modify the list.
///
/// Besides read/write access to the element under it, a mutable cursor can
/// splice elements in and out right after its position. There is one per
/// list at a time; [`CursorMut::as_cursor`] gives out read-only copies.
pub struct CursorMut<'a, T> {
    list: &'a mut LinkedList<T>,
    current: Option<NonNull<SingleLink>>,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut LinkedList<T>, current: Option<NonNull<SingleLink>>) -> Self {
        CursorMut { list, current }
    }

    /// The element under the cursor, `None` at end or before-begin.
    pub fn current(&mut self) -> Option<&mut T> {
        let at = self.current?;
        if self.list.is_sentinel(at) {
            return None;
        }
        Some(unsafe { Node::<T>::value_mut(at) })
    }

    pub fn peek_next(&mut self) -> Option<&mut T> {
        let next = unsafe { self.list.link(self.current?) }.next()?;
        Some(unsafe { Node::<T>::value_mut(next) })
    }

    /// Moves to the next position and returns the cursor itself.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) -> &mut Self {
        self.current = advance(self.list, self.current);
        self
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn is_before_begin(&self) -> bool {
        self.current.is_some_and(|at| self.list.is_sentinel(at))
    }

    /// A read-only view of this position, borrowing the cursor.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current)
    }

    /// Inserts `value` right after the cursor and returns a cursor on it.
    ///
    /// At before-begin this is the same as [`LinkedList::push_front`]. The
    /// cursor itself does not move.
    pub fn insert_after(&mut self, value: T) -> Result<CursorMut<'_, T>, CursorError> {
        let Some(at) = self.current else {
            log::debug!("insert_after rejected: {}", CursorError::AtEnd);
            return Err(CursorError::AtEnd);
        };
        let node = unsafe { self.list.link_after(at, value) };
        Ok(CursorMut::new(self.list, Some(node)))
    }

    /// Drops the element right after the cursor and returns a cursor on the
    /// element that follows it now (possibly the end).
    ///
    /// At before-begin this is the same as [`LinkedList::pop_front`]. The
    /// cursor itself does not move.
    pub fn erase_after(&mut self) -> Result<CursorMut<'_, T>, CursorError> {
        let Some(at) = self.current else {
            log::debug!("erase_after rejected: {}", CursorError::AtEnd);
            return Err(CursorError::AtEnd);
        };
        match unsafe { self.list.unlink_after(at) } {
            Some(value) => drop(value),
            None => {
                log::debug!("erase_after rejected: {}", CursorError::NoSuccessor);
                return Err(CursorError::NoSuccessor);
            }
        }
        let next = unsafe { self.list.link(at) }.next();
        Ok(CursorMut::new(self.list, next))
    }

    /// Unlinks the element right after the cursor and hands it back.
    pub fn remove_after(&mut self) -> Option<T> {
        unsafe { self.list.unlink_after(self.current?) }
    }
}

impl<T> Position for CursorMut<'_, T> {
    fn link(&self) -> Option<NonNull<SingleLink>> {
        self.current
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        Cursor::new(cursor.list, cursor.current)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.as_cursor()).finish()
    }
}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
