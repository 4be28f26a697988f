//! Model-based property tests: random operation sequences applied to the
//! lists and to a `VecDeque` reference model must stay in agreement.

use proptest::prelude::*;
use std::collections::VecDeque;
use strand::{DoublyLinkedList, SinglyLinkedList};

#[derive(Debug, Clone)]
enum Operation {
    PushFront(i8),
    PushBack(i8),
    PopFront,
    PopBack,
    RemoveValue(i8),
    Reverse,
}

fn operation() -> impl Strategy<Value = Operation> {
    // Values drawn from a small range so RemoveValue actually hits.
    let small = -5i8..5;
    prop_oneof![
        small.clone().prop_map(Operation::PushFront),
        small.clone().prop_map(Operation::PushBack),
        Just(Operation::PopFront),
        Just(Operation::PopBack),
        small.prop_map(Operation::RemoveValue),
        Just(Operation::Reverse),
    ]
}

fn model_remove_value(model: &mut VecDeque<i8>, value: i8) -> Option<i8> {
    let pos = model.iter().position(|&v| v == value)?;
    model.remove(pos)
}

proptest! {
    #[test]
    fn test_doubly_list_matches_vecdeque(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut model: VecDeque<i8> = VecDeque::new();
        let mut list: DoublyLinkedList<i8> = DoublyLinkedList::new();

        for op in ops {
            match op {
                Operation::PushFront(v) => {
                    model.push_front(v);
                    list.push_front(v);
                }
                Operation::PushBack(v) => {
                    model.push_back(v);
                    list.push_back(v);
                }
                Operation::PopFront => {
                    prop_assert_eq!(list.pop_front(), model.pop_front());
                }
                Operation::PopBack => {
                    prop_assert_eq!(list.pop_back(), model.pop_back());
                }
                Operation::RemoveValue(v) => {
                    prop_assert_eq!(list.remove_value(&v), model_remove_value(&mut model, v));
                }
                Operation::Reverse => {
                    model = model.into_iter().rev().collect();
                    list.reverse();
                }
            }

            // Reachable-node count always equals the recorded length.
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.iter().count(), list.len());
        }

        let forward: Vec<i8> = list.iter().copied().collect();
        prop_assert_eq!(&forward, &model.iter().copied().collect::<Vec<_>>());

        // The prev chain agrees with the next chain.
        let mut backward: Vec<i8> = list.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(backward, forward);
    }

    #[test]
    fn test_singly_list_matches_vecdeque(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut model: VecDeque<i8> = VecDeque::new();
        let mut list: SinglyLinkedList<i8> = SinglyLinkedList::new();

        for op in ops {
            match op {
                // The singly list has no pop_back; fold that case into PopFront.
                Operation::PopBack | Operation::PopFront => {
                    prop_assert_eq!(list.pop_front(), model.pop_front());
                }
                Operation::PushFront(v) => {
                    model.push_front(v);
                    list.push_front(v);
                }
                Operation::PushBack(v) => {
                    model.push_back(v);
                    list.push_back(v);
                }
                Operation::RemoveValue(v) => {
                    prop_assert_eq!(list.remove_value(&v), model_remove_value(&mut model, v));
                }
                Operation::Reverse => {
                    model = model.into_iter().rev().collect();
                    list.reverse();
                }
            }

            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.iter().count(), list.len());
            prop_assert_eq!(list.front(), model.front());
        }

        let contents: Vec<i8> = list.iter().copied().collect();
        prop_assert_eq!(contents, model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_search_agrees_with_position(values in proptest::collection::vec(-5i8..5, 0..50), needle in -5i8..5) {
        let list: SinglyLinkedList<i8> = values.iter().copied().collect();
        prop_assert_eq!(list.search(&needle), values.iter().position(|&v| v == needle));
    }
}
