//! Comparison for lists and positions.
//!
//! Lists compare element by element in traversal order. Two lists are equal
//! when they have the same length and pairwise equal elements; ordering is
//! lexicographic, so a strict prefix sorts first. `<=`, `>` and `>=` come from
//! the `PartialOrd` defaults on top of `partial_cmp`.
//!
//! Positions compare by identity: two cursors are equal when they name the
//! same link, whichever of [`Cursor`] and [`CursorMut`] they are. All end
//! positions are equal.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::{
    cursor::{Cursor, CursorMut},
    list::LinkedList,
    traits::Position,
};

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialOrd> PartialOrd for LinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for LinkedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T, P: Position> PartialEq<P> for Cursor<'_, T> {
    fn eq(&self, other: &P) -> bool {
        self.link() == other.link()
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T, P: Position> PartialEq<P> for CursorMut<'_, T> {
    fn eq(&self, other: &P) -> bool {
        self.link() == other.link()
    }
}

impl<T> Eq for CursorMut<'_, T> {}
