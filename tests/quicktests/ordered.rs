use ordered_tree::tree::OrderedTree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a multiset model.
/// This way we can ensure that after a random smattering of inserts,
/// deletes, and clears the tree holds the same values as the model.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree<i8>, model: &mut BTreeMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Insert(value) => {
                tree.insert(*value);
                *model.entry(*value).or_insert(0) += 1;
            }
            Op::Remove(value) => {
                tree.delete(value);
                if let Some(count) = model.get_mut(value) {
                    *count -= 1;
                    if *count == 0 {
                        model.remove(value);
                    }
                }
            }
            Op::Clear => {
                tree.clear();
                model.clear();
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut model = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut model);

        (i8::MIN..=i8::MAX).all(|value| tree.find(&value).is_some() == model.contains_key(&value))
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x) == None)
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        let mut counts = BTreeMap::new();
        for x in &xs {
            tree.insert(*x);
            *counts.entry(*x).or_insert(0usize) += 1;
        }

        // Each delete removes at most one occurrence.
        for delete in &deletes {
            tree.delete(delete);
            if let Some(count) = counts.get_mut(delete) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(delete);
                }
            }
        }

        (i8::MIN..=i8::MAX).all(|value| tree.find(&value).is_some() == counts.contains_key(&value))
    }
}

quickcheck::quickcheck! {
    fn min_max_match_sorted_input(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        match (xs.iter().min(), xs.iter().max()) {
            (Some(min), Some(max)) => tree.min() == Ok(min) && tree.max() == Ok(max),
            _ => tree.min().is_err() && tree.max().is_err(),
        }
    }
}
