//! Property-based tests comparing the tree against a naive left-to-right fold.

use mergetree::{
    merger::{fold, Concat, Max, Min, Sum},
    Merger, RangeMergeTree,
};
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000i64..1_000, 1..64)
}

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{0,3}", 1..32)
}

// Asserts that every range query equals folding the elements directly.
fn check_all_ranges<E, M>(tree: &RangeMergeTree<E, M>, merger: &M) -> Result<(), TestCaseError>
where
    E: Clone + PartialEq + std::fmt::Debug,
    M: Merger<E>,
{
    let elements = tree.elements();
    for l in 0..elements.len() {
        for r in l..elements.len() {
            prop_assert_eq!(tree.query(l, r).ok(), fold(merger, &elements[l..=r]));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn full_query_equals_fold(values in values()) {
        let tree = RangeMergeTree::new(values.clone(), Sum);
        prop_assert_eq!(tree.query(0, values.len() - 1).ok(), fold(&Sum, &values));
        prop_assert_eq!(tree.query_range(..).ok(), fold(&Sum, &values));
    }

    #[test]
    fn every_range_matches_fold(values in values()) {
        check_all_ranges(&RangeMergeTree::new(values.clone(), Sum), &Sum)?;
        check_all_ranges(&RangeMergeTree::new(values.clone(), Min), &Min)?;
        check_all_ranges(&RangeMergeTree::new(values, Max), &Max)?;
    }

    #[test]
    fn concat_preserves_order(words in words()) {
        let tree = RangeMergeTree::new(words.clone(), Concat);
        prop_assert_eq!(tree.query(0, words.len() - 1).ok(), Some(words.concat()));
        check_all_ranges(&tree, &Concat)?;
    }

    #[test]
    fn single_position_query_returns_element(values in values()) {
        let tree = RangeMergeTree::new(values.clone(), Max);
        for (p, value) in values.iter().enumerate() {
            prop_assert_eq!(tree.query(p, p), Ok(*value));
        }
    }

    #[test]
    fn update_preserves_invariants(
        values in values(),
        updates in prop::collection::vec((any::<prop::sample::Index>(), -1_000i64..1_000), 1..16),
    ) {
        let mut tree = RangeMergeTree::new(values.clone(), Sum);
        let mut expected = values;
        for (index, value) in updates {
            let p = index.index(expected.len());
            let before: Vec<_> = (0..expected.len())
                .flat_map(|l| (l..expected.len()).map(move |r| (l, r)))
                .filter(|&(l, r)| p < l || p > r)
                .map(|(l, r)| ((l, r), tree.query(l, r)))
                .collect();

            prop_assert_eq!(tree.set(p, value), Ok(expected[p]));
            expected[p] = value;

            prop_assert_eq!(tree.get(p), Ok(&value));
            prop_assert_eq!(tree.query(0, expected.len() - 1).ok(), fold(&Sum, &expected));
            // ranges that do not contain p are unaffected
            for ((l, r), result) in before {
                prop_assert_eq!(tree.query(l, r), result);
            }
        }
    }

    #[test]
    fn rebuild_matches_updated_tree(
        values in values(),
        updates in prop::collection::vec((any::<prop::sample::Index>(), -1_000i64..1_000), 0..16),
    ) {
        let mut tree = RangeMergeTree::new(values, Min);
        for (index, value) in updates {
            let p = index.index(tree.len());
            tree.set(p, value).unwrap();
        }
        let fresh = RangeMergeTree::new(tree.elements().to_vec(), Min);
        for l in 0..tree.len() {
            for r in l..tree.len() {
                prop_assert_eq!(tree.query(l, r), fresh.query(l, r));
            }
        }
    }

    #[test]
    fn bounds_are_checked(values in values(), extra in 0usize..8) {
        let len = values.len();
        let tree = RangeMergeTree::new(values, Sum);
        prop_assert!(tree.query(0, len + extra).unwrap_err().is_out_of_range());
        prop_assert!(tree.query(len + extra, len + extra).unwrap_err().is_out_of_range());
        prop_assert!(tree.get(len + extra).unwrap_err().is_out_of_range());
        if len > 1 {
            prop_assert!(tree.query(len - 1, 0).unwrap_err().is_invalid_range());
        }
    }
}
