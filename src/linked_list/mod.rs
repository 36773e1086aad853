//! Linked list collections.
//!
//! [`single::LinkedList`] owns its nodes and keeps a sentinel in front of the
//! first element, so positions can be used to splice after any element,
//! including "before the first one".
//!
//! # Examples
//!
//! ```
//! use mola_forward_list::linked_list::single::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_front(3);
//! list.push_front(2);
//! list.push_front(1);
//! assert_eq!(list.len(), 3);
//!
//! let mut cursor = list.cursor_front_mut();
//! cursor.insert_after(9).unwrap();
//! cursor.move_next();
//! cursor.erase_after().unwrap();
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 9, 3]);
//! ```
pub mod single;
