use alloc::boxed::Box;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{
    cursor::{Cursor, CursorMut},
    iter::{IntoIter, Iter, IterMut},
    node::{Node, SingleLink},
    traits::Link,
};

/// A singly linked list that owns its elements.
///
/// The list keeps a sentinel link inline, in front of the first element. The
/// before-begin cursors point at it, which lets `insert_after` and
/// `erase_after` work the same way at the front as anywhere else.
pub struct LinkedList<T> {
    head: SingleLink,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: SingleLink::new(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the linked list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Exchanges the contents of two lists in O(1). No element is moved or cloned.
    pub fn swap(&mut self, other: &mut Self) {
        let head = self.head.next();
        self.head.set_next(other.head.next());
        other.head.set_next(head);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// Push a new element to the front of the linked list
    pub fn push_front(&mut self, value: T) {
        let node = Node::alloc(value, self.head.next());
        self.head.set_next(Some(node));
        self.len += 1;
    }

    /// Pop the first element of the linked list, `None` if it is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        unsafe { self.unlink_after(self.sentinel()) }
    }

    pub fn front(&self) -> Option<&T> {
        self.head.next().map(|first| unsafe { Node::<T>::value(first) })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.next().map(|first| unsafe { Node::<T>::value_mut(first) })
    }

    /// Drops every element. O(n).
    pub fn clear(&mut self) {
        log::trace!("clearing linked list of {} elements", self.len);
        while self.pop_front().is_some() {}
    }

    /// Get an iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.next(), self.len)
    }

    /// Get an iterator that yields mutable references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.next(), self.len)
    }

    /// A read-only cursor at the first element, equal to the end cursor when
    /// the list is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head.next())
    }

    /// A read-only cursor one past the last element.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// A read-only cursor at the sentinel, in front of the first element.
    pub fn cursor_before_begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, Some(self.sentinel()))
    }

    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let first = self.head.next();
        CursorMut::new(self, first)
    }

    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, None)
    }

    /// A mutable cursor at the sentinel. Inserting after it pushes to the
    /// front, erasing after it pops the front.
    pub fn cursor_before_begin_mut(&mut self) -> CursorMut<'_, T> {
        let sentinel = self.sentinel();
        CursorMut::new(self, Some(sentinel))
    }

    /// The address of the sentinel. Only valid until the list moves.
    #[inline]
    pub(crate) fn sentinel(&self) -> NonNull<SingleLink> {
        NonNull::from(&self.head)
    }

    #[inline]
    pub(crate) fn is_sentinel(&self, at: NonNull<SingleLink>) -> bool {
        at == self.sentinel()
    }

    /// Resolves a position to the link it names.
    ///
    /// # Safety
    ///
    /// `at` must be the sentinel of this list or the link of one of its nodes.
    pub(crate) unsafe fn link(&self, at: NonNull<SingleLink>) -> &SingleLink {
        if self.is_sentinel(at) {
            &self.head
        } else {
            unsafe { at.as_ref() }
        }
    }

    /// # Safety
    ///
    /// Same as [`LinkedList::link`].
    pub(crate) unsafe fn link_mut(&mut self, at: NonNull<SingleLink>) -> &mut SingleLink {
        if self.is_sentinel(at) {
            &mut self.head
        } else {
            unsafe { &mut *at.as_ptr() }
        }
    }

    /// Splices a new node holding `value` right after `at` and returns its link.
    ///
    /// # Safety
    ///
    /// Same as [`LinkedList::link`].
    pub(crate) unsafe fn link_after(&mut self, at: NonNull<SingleLink>, value: T) -> NonNull<SingleLink> {
        let link = unsafe { self.link_mut(at) };
        let node = Node::alloc(value, link.next());
        link.set_next(Some(node));
        self.len += 1;
        node
    }

    /// Unlinks the node right after `at`, if any, and returns its value.
    ///
    /// # Safety
    ///
    /// Same as [`LinkedList::link`].
    pub(crate) unsafe fn unlink_after(&mut self, at: NonNull<SingleLink>) -> Option<T> {
        let link = unsafe { self.link_mut(at) };
        let next = link.next()?;
        let (value, after) = unsafe { Node::<T>::free(next) };
        link.set_next(after);
        self.len -= 1;
        Some(value)
    }
}

/// Exchanges the contents of two lists in O(1).
pub fn swap<T>(lhs: &mut LinkedList<T>, rhs: &mut LinkedList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy assignment. The copy is built on the side and swapped in, so a
    /// panicking `T::clone` leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = list.sentinel();
        for value in iter {
            tail = unsafe { list.link_after(tail, value) };
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for LinkedList<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}
