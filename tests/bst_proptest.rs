//! Model-based property tests for the binary search tree, checked against a
//! sorted multiset model.

use proptest::prelude::*;
use std::collections::BTreeMap;
use strand::BinarySearchTree;

#[derive(Debug, Clone)]
enum Operation {
    Insert(u8),
    Remove(u8),
    Contains(u8),
}

fn operation() -> impl Strategy<Value = Operation> {
    // Narrow key space: collisions exercise the duplicate policy.
    let key = 0u8..20;
    prop_oneof![
        key.clone().prop_map(Operation::Insert),
        key.clone().prop_map(Operation::Remove),
        key.prop_map(Operation::Contains),
    ]
}

fn model_contents(model: &BTreeMap<u8, usize>) -> Vec<u8> {
    model
        .iter()
        .flat_map(|(&k, &count)| std::iter::repeat(k).take(count))
        .collect()
}

proptest! {
    #[test]
    fn test_bst_matches_multiset_model(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut model: BTreeMap<u8, usize> = BTreeMap::new();
        let mut tree = BinarySearchTree::new();

        for op in ops {
            match op {
                Operation::Insert(v) => {
                    *model.entry(v).or_insert(0) += 1;
                    tree.insert(v);
                }
                Operation::Remove(v) => {
                    let model_had = match model.get_mut(&v) {
                        Some(count) if *count > 0 => {
                            *count -= 1;
                            if *count == 0 {
                                model.remove(&v);
                            }
                            true
                        }
                        _ => false,
                    };
                    prop_assert_eq!(tree.remove(&v), model_had);
                    if !model.contains_key(&v) {
                        // Deleting the last occurrence makes search fail.
                        prop_assert!(!tree.contains(&v));
                    }
                }
                Operation::Contains(v) => {
                    prop_assert_eq!(tree.contains(&v), model.contains_key(&v));
                }
            }

            // The ordering invariant holds after every mutation, under the
            // tightening-bounds check.
            prop_assert!(tree.is_valid_bst());
        }

        let expected = model_contents(&model);
        let in_order: Vec<u8> = tree.in_order().into_iter().copied().collect();
        prop_assert_eq!(in_order, expected);
        prop_assert_eq!(tree.len(), model.values().sum::<usize>());
        prop_assert_eq!(tree.min(), model.keys().next());
        prop_assert_eq!(tree.max(), model.keys().next_back());
    }

    #[test]
    fn test_traversals_are_consistent(values in proptest::collection::vec(0u8..50, 0..60)) {
        let tree: BinarySearchTree<u8> = values.iter().copied().collect();

        let in_order = tree.in_order();
        prop_assert!(in_order.windows(2).all(|w| w[0] <= w[1]), "in-order not sorted");

        // Every traversal visits each node exactly once.
        prop_assert_eq!(tree.pre_order().len(), values.len());
        prop_assert_eq!(tree.post_order().len(), values.len());
        prop_assert_eq!(tree.level_order().len(), values.len());

        // Level-order concatenates the per-depth slices in order.
        let mut by_depth: Vec<&u8> = Vec::new();
        for depth in 0..tree.height() {
            by_depth.extend(tree.values_at_depth(depth));
        }
        prop_assert_eq!(by_depth.len(), values.len());
        prop_assert!(tree.values_at_depth(tree.height()).is_empty());

        // Height is at most len (degenerate chain) and at least the number
        // of levels a perfectly packed tree of this size would need.
        if !values.is_empty() {
            let len = values.len();
            let mut min_height = 0;
            let mut capacity = 0usize;
            while capacity < len {
                min_height += 1;
                capacity = capacity * 2 + 1;
            }
            prop_assert!(tree.height() <= len);
            prop_assert!(tree.height() >= min_height);
        }
    }
}
