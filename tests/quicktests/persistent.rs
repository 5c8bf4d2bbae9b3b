use persistent_bst::persistent::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set, checking every
/// `Contains` against the set as it goes. Returns every version of the tree
/// along with the set it should hold.
fn do_ops<T>(ops: &[Op<T>]) -> Vec<(Tree<T>, BTreeSet<T>)>
where
    T: Ord + Clone,
{
    let mut versions = vec![(Tree::new(), BTreeSet::new())];

    for op in ops {
        let (tree, set) = versions.last().cloned().unwrap();
        match op {
            Op::Insert(x) => {
                let mut set = set;
                set.insert(x.clone());
                versions.push((tree.insert(x.clone()), set));
            }
            Op::Contains(x) => assert_eq!(tree.contains(x), set.contains(x)),
        }
    }

    versions
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    do_ops(&ops).iter().all(|(tree, set)| {
        tree.size() == set.len() && set.iter().all(|x| tree.contains(x))
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x);
    }

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree = tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn size_is_distinct_count(xs: Vec<String>) -> bool {
    let tree: Tree<String> = xs.iter().cloned().collect();
    let distinct: HashSet<_> = xs.iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn insert_keeps_existing_members(xs: Vec<i8>, x: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let new_tree = tree.insert(x);

    new_tree.contains(&x) && xs.iter().all(|y| new_tree.contains(y))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let once = tree.insert(x);
    let twice = once.insert(x);

    once == twice && once.size() == twice.size() && once.to_string() == twice.to_string()
}

#[quickcheck]
fn insert_leaves_original_alone(xs: Vec<i8>, x: i8) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let before = tree.to_string();
    let was_present = tree.contains(&x);
    let size = tree.size();

    let _new_tree = tree.insert(x);

    tree.contains(&x) == was_present && tree.size() == size && tree.to_string() == before
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let values: Vec<_> = tree.inorder().collect();

    values.windows(2).all(|w| w[0] < w[1]) && values.len() == tree.size()
}

#[quickcheck]
fn inorder_matches_sorted_set(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let set: BTreeSet<i8> = xs.into_iter().collect();

    tree.inorder().eq(set.iter())
        && tree.min() == set.iter().next()
        && tree.max() == set.iter().next_back()
}
