use alloc::boxed::Box;
use core::ptr::NonNull;

use super::traits::Link;

/// A bare link in a singly linked list.
///
/// Every [`Node`] starts with one, and the list keeps one inline as its
/// sentinel head.
#[derive(Debug, Default)]
pub struct SingleLink {
    next: Option<NonNull<SingleLink>>,
}

impl SingleLink {
    /// Creates a link that points nowhere.
    pub const fn new() -> Self {
        SingleLink { next: None }
    }
}

impl Link for SingleLink {
    #[inline]
    fn next(&self) -> Option<NonNull<SingleLink>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<SingleLink>>) {
        self.next = next;
    }
}

/// A heap allocated element of the list.
///
/// `repr(C)` keeps `link` at offset zero, so a pointer to the link is also a
/// pointer to the node.
#[repr(C)]
pub(crate) struct Node<T> {
    link: SingleLink,
    value: T,
}

impl<T> Link for Node<T> {
    #[inline]
    fn next(&self) -> Option<NonNull<SingleLink>> {
        self.link.next()
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<SingleLink>>) {
        self.link.set_next(next);
    }
}

impl<T> Node<T> {
    /// Allocates a node holding `value` in front of `next` and hands out its link.
    pub(crate) fn alloc(value: T, next: Option<NonNull<SingleLink>>) -> NonNull<SingleLink> {
        let mut node = Box::new(Node {
            link: SingleLink::new(),
            value,
        });
        node.set_next(next);
        NonNull::from(Box::leak(node)).cast()
    }

    /// Frees the node behind `link`, returning its value and its next pointer.
    ///
    /// # Safety
    ///
    /// `link` must come from [`Node::alloc`] with the same `T`, must not be
    /// reachable from any list afterwards and must not be freed twice.
    pub(crate) unsafe fn free(link: NonNull<SingleLink>) -> (T, Option<NonNull<SingleLink>>) {
        let node = unsafe { Box::from_raw(link.cast::<Node<T>>().as_ptr()) };
        let next = node.next();
        (node.value, next)
    }

    /// # Safety
    ///
    /// `link` must point to a live node of type `Node<T>` that outlives `'a`.
    #[inline]
    pub(crate) unsafe fn value<'a>(link: NonNull<SingleLink>) -> &'a T {
        unsafe { &(*link.cast::<Node<T>>().as_ptr()).value }
    }

    /// # Safety
    ///
    /// `link` must point to a live node of type `Node<T>` that outlives `'a`,
    /// and no other reference to its value may exist for `'a`.
    #[inline]
    pub(crate) unsafe fn value_mut<'a>(link: NonNull<SingleLink>) -> &'a mut T {
        unsafe { &mut (*link.cast::<Node<T>>().as_ptr()).value }
    }
}
