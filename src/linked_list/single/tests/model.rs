//! Randomised operation sequences checked against a `Vec` model.

use alloc::vec::Vec;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::linked_list::single::{CursorError, LinkedList};

const ROUNDS: usize = 2_000;

fn check(list: &LinkedList<u32>, model: &[u32]) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), model);

    let mut cursor = list.cursor_front();
    for _ in 0..list.len() {
        cursor.move_next();
    }
    assert_eq!(cursor, list.cursor_end());
}

#[test]
fn test_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0f11);
    let mut list = LinkedList::new();
    let mut model: Vec<u32> = Vec::new();

    for _ in 0..ROUNDS {
        let value = rng.random::<u32>();
        match rng.random_range(0..7) {
            0 => {
                list.push_front(value);
                model.insert(0, value);
            }
            1 => {
                let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                assert_eq!(list.pop_front(), expected);
            }
            2 | 3 => {
                // Position 0 is before-begin, position k sits on element k - 1
                let at = rng.random_range(0..=model.len());
                let mut cursor = list.cursor_before_begin_mut();
                for _ in 0..at {
                    cursor.move_next();
                }
                let mut inserted = cursor.insert_after(value).unwrap();
                assert_eq!(inserted.current().copied(), Some(value));
                model.insert(at, value);
            }
            4 | 5 => {
                let at = rng.random_range(0..=model.len());
                let mut cursor = list.cursor_before_begin_mut();
                for _ in 0..at {
                    cursor.move_next();
                }
                if at < model.len() {
                    model.remove(at);
                    let mut following = cursor.erase_after().unwrap();
                    assert_eq!(following.current().copied(), model.get(at).copied());
                } else {
                    // On the last element, or before-begin of an empty list
                    assert_eq!(cursor.erase_after().err(), Some(CursorError::NoSuccessor));
                    cursor.move_next();
                    assert_eq!(cursor.erase_after().err(), Some(CursorError::AtEnd));
                }
            }
            _ => {
                if rng.random_bool(0.1) {
                    list.clear();
                    model.clear();
                } else {
                    let copy = list.clone();
                    assert_eq!(copy, list);
                    list = copy;
                }
            }
        }
        check(&list, &model);
    }
}

#[test]
fn test_copies_diverge_independently() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut a: LinkedList<u32> = (0..32).collect();
    let mut b = a.clone();
    let mut model_a: Vec<u32> = (0..32).collect();
    let model_b = model_a.clone();

    for _ in 0..64 {
        if rng.random_bool(0.5) {
            let value = rng.random_range(0..100);
            a.push_front(value);
            model_a.insert(0, value);
        } else if a.pop_front().is_some() {
            model_a.remove(0);
        }
        check(&a, &model_a);
        check(&b, &model_b);
    }

    b.clone_from(&a);
    check(&b, &model_a);
    b.push_front(1_000);
    check(&a, &model_a);
}
