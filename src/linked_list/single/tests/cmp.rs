use alloc::{vec, vec::Vec};
use core::cmp::Ordering;
use core::hash::BuildHasher;

use hashbrown::HashSet;

use crate::linked_list::single::LinkedList;

#[test]
fn test_equality() {
    let a = LinkedList::from([1, 2, 3]);
    let b = LinkedList::from([1, 2, 3]);
    let c = LinkedList::from([1, 2, 3]);

    assert!(a == b);
    assert!(!(LinkedList::from([1, 2]) == a));
    assert!(LinkedList::from([1, 2]) != a);
    assert!(LinkedList::from([1, 2, 4]) != a);
    assert_eq!(LinkedList::<i32>::new(), LinkedList::new());

    // reflexive, symmetric, transitive
    assert!(a == a);
    assert_eq!(a == b, b == a);
    assert!(a == b && b == c && a == c);
}

#[test]
fn test_lexicographic_order() {
    let short = LinkedList::from([1, 2]);
    let low = LinkedList::from([1, 2, 3]);
    let high = LinkedList::from([1, 2, 4]);

    assert!(low < high);
    assert!(short < low);
    assert!(LinkedList::new() < short);
    assert!(LinkedList::from([2]) > low);

    assert!(low <= high);
    assert!(low <= low.clone());
    assert!(high > low);
    assert!(high >= low);
    assert!(high >= high.clone());
    assert!(!(low > high));

    assert_eq!(low.cmp(&high), Ordering::Less);
    assert_eq!(low.cmp(&low.clone()), Ordering::Equal);
    assert_eq!(low.partial_cmp(&short), Some(Ordering::Greater));
}

#[test]
fn test_partial_order_with_nan() {
    let a = LinkedList::from([1.0, f64::NAN]);
    let b = LinkedList::from([1.0, 2.0]);

    assert_eq!(a.partial_cmp(&b), None);
    assert!(a != a.clone());
}

#[test]
fn test_sorting_lists() {
    let mut lists = vec![
        LinkedList::from([3]),
        LinkedList::from([1, 2, 3]),
        LinkedList::new(),
        LinkedList::from([1, 2]),
    ];
    lists.sort();

    let sorted: Vec<Vec<i32>> = lists.iter().map(|l| l.iter().copied().collect()).collect();
    assert_eq!(sorted, vec![vec![], vec![1, 2], vec![1, 2, 3], vec![3]]);
}

#[test]
fn test_hash_matches_equality() {
    let a = LinkedList::from([1, 2, 3]);
    let b: LinkedList<i32> = [1, 2, 3].into_iter().collect();

    let mut set = HashSet::new();
    set.insert(a.clone());
    assert!(!set.insert(b.clone()));
    assert!(set.insert(LinkedList::from([1, 2])));
    assert_eq!(set.len(), 2);

    let hasher = hashbrown::DefaultHashBuilder::default();
    assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));
}
