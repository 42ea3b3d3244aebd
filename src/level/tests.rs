use super::*;
use std::collections::VecDeque;
use arrayvec::ArrayVec;
use crate::flatten;

#[test]
fn slice_cursors() {
    let data = [10_u8, 20, 30];
    let slice = &data[..];
    let first = slice.cursor_to_first();
    assert_eq!(first, 0);
    assert_eq!(slice.cursor_past_last(), 3);
    assert_eq!(slice.value_of(&slice.advance_cursor(&first)), &20);
    assert!(!slice.is_empty_level());
    assert!(Vec::<u8>::new().is_empty_level());
}

#[test]
fn deque_wraparound() {
    let mut deque = VecDeque::with_capacity(4);
    deque.push_back(2_i32);
    deque.push_back(3);
    deque.push_front(1);
    assert_eq!(deque.value_of(&0), &1);
    let data = vec![deque, VecDeque::new(), VecDeque::from(vec![4])];
    let leaves: Vec<i32> = flatten(&data).iter().copied().collect();
    assert_eq!(leaves, [1, 2, 3, 4]);
}

#[test]
fn arrayvec_level() {
    let mut storage: ArrayVec<[u16; 4]> = ArrayVec::new();
    storage.push(5);
    storage.push(6);
    assert_eq!(storage.cursor_past_last(), 2);
    *storage.value_mut_at(&1) = 7;
    assert_eq!(storage.as_slice(), &[5, 7]);
}

#[test]
fn boxed_level() {
    let boxed: Box<[i32]> = vec![1, 2].into_boxed_slice();
    assert_eq!(boxed.cursor_past_last(), 2);
    assert_eq!(boxed.value_of(&1), &2);
}

#[test]
fn branch_cursors() {
    let mut level: Branch<[i32; 2], Vec<i32>> = Branch::Right(vec![7, 8, 9]);
    assert_eq!(level.cursor_to_first(), Branch::Right(0));
    assert_eq!(level.cursor_past_last(), Branch::Right(3));
    assert_eq!(level.advance_cursor(&Branch::Right(0)), Branch::Right(1));
    assert_eq!(level.value_of(&Branch::Right(1)), &8);
    *level.value_mut_at(&Branch::Right(2)) = 10;
    assert_eq!(level, Branch::Right(vec![7, 8, 10]));
    assert!(!level.is_left());
}

#[test]
#[should_panic(expected = "a cursor for one variant of a Branch was used on the other variant")]
fn branch_cursor_mismatch() {
    let level: Branch<[i32; 2], Vec<i32>> = Branch::Left([1, 2]);
    level.value_of(&Branch::Right(0));
}

#[test]
fn frozen_delegates() {
    let frozen = Frozen::new(vec![1_i32, 2]);
    assert_eq!(frozen.cursor_past_last(), 2);
    assert_eq!(frozen.value_of(&0), &1);
    assert_eq!(frozen.len(), 2);
    assert_eq!(frozen.into_inner(), [1, 2]);
}

#[derive(Debug, PartialEq)]
struct Reading(u8);
crate::impl_leaf!(Reading);

#[test]
fn custom_leaf() {
    let data = [[Reading(1)], [Reading(2)]];
    let range = flatten(&data);
    assert_eq!(range.size(), 2);
    assert_eq!(range.begin().get(), &Reading(1));
}

#[test]
fn shared_references_are_levels() {
    let first = vec![1_i32, 2];
    let second = vec![3_i32];
    let reference = &first;
    assert_eq!(reference.cursor_past_last(), 2);
    assert_eq!(Level::value_of(&reference, &1), &2);

    let mut borrowed = vec![&first, &second];
    assert_eq!(flatten(&borrowed).size(), 3);
    assert_eq!(flatten(&borrowed).iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    // Still readable through a mutable range, just not writable.
    let mut range = crate::flatten_mut(&mut borrowed);
    let mut position = range.begin();
    position.advance().advance();
    assert_eq!(position.get(), &3);
}
