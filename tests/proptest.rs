use proptest::prelude::*;
use splay_collections::splay_tree::SplaySet;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Action {
    Insert(u8),
    Remove(u8),
    Contains(u8),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        any::<u8>().prop_map(Action::Insert),
        any::<u8>().prop_map(Action::Remove),
        any::<u8>().prop_map(Action::Contains),
    ]
}

proptest! {
    #[test]
    fn prop_matches_btree_set(actions in prop::collection::vec(action_strategy(), 0..300)) {
        let mut set = SplaySet::new();
        let mut expected = BTreeSet::new();
        for action in actions {
            match action {
                Action::Insert(value) => {
                    prop_assert_eq!(set.insert(value), expected.insert(value));
                    prop_assert_eq!(set.root(), Some(&value));
                },
                Action::Remove(value) => {
                    prop_assert_eq!(set.remove(&value), expected.remove(&value));
                    prop_assert!(!set.contains(&value));
                },
                Action::Contains(value) => {
                    let found = set.contains(&value);
                    prop_assert_eq!(found, expected.contains(&value));
                    if found {
                        prop_assert_eq!(set.root(), Some(&value));
                    }
                },
            }
            prop_assert_eq!(set.len(), expected.len());
        }

        let values = set.iter().cloned().collect::<Vec<u8>>();
        prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(values, expected.into_iter().collect::<Vec<u8>>());
    }

    #[test]
    fn prop_insert_is_idempotent(values in prop::collection::vec(any::<u16>(), 1..100)) {
        let mut set: SplaySet<u16> = values.iter().cloned().collect();
        let len = set.len();
        for value in &values {
            prop_assert!(!set.insert(*value));
            prop_assert!(set.contains(value));
        }
        prop_assert_eq!(set.len(), len);
    }

    #[test]
    fn prop_remove_miss_keeps_len(
        values in prop::collection::btree_set(0u32..1_000, 0..100),
        missing in 1_000u32..2_000,
    ) {
        let mut set: SplaySet<u32> = values.iter().cloned().collect();
        prop_assert!(!set.remove(&missing));
        prop_assert_eq!(set.len(), values.len());
        prop_assert_eq!(
            set.iter().cloned().collect::<Vec<u32>>(),
            values.into_iter().collect::<Vec<u32>>(),
        );
    }
}
