use ordtree::{Config, Order, OrderedTree, Walk};
use quickcheck_macros::quickcheck;

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a tree and to a multiset of keys.
/// Duplicate keys are kept by the tree, so the model counts instances and
/// each delete takes exactly one instance away.
fn do_ops<V>(ops: &[Op<i8, V>], bst: &mut OrderedTree<i8, V>, counts: &mut BTreeMap<i8, usize>)
where
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(*k, v.clone());
                *counts.entry(*k).or_insert(0) += 1;
            }
            Op::Remove(k) => {
                let present = counts.get(k).map_or(false, |&n| n > 0);
                assert_eq!(bst.delete(k), present);
                if present {
                    *counts.get_mut(k).unwrap() -= 1;
                }
            }
        }
    }
}

fn in_order_keys<V>(tree: &OrderedTree<i8, V>) -> Vec<i8> {
    tree.traverse(Order::InOrder).map(|(k, _)| *k).collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut counts = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut counts);
    tree.assert_invariants();

    let expected: Vec<i8> = counts
        .iter()
        .flat_map(|(k, &n)| std::iter::repeat(*k).take(n))
        .collect();

    in_order_keys(&tree) == expected
        && tree.len() == expected.len()
        && (i8::MIN..=i8::MAX).all(|k| tree.has(&k) == counts.get(&k).map_or(false, |&n| n > 0))
}

#[quickcheck]
fn in_order_is_non_decreasing(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let keys = in_order_keys(&tree);
    keys.len() == xs.len() && keys.windows(2).all(|w| w[0] <= w[1])
}

#[quickcheck]
fn deleting_missing_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = OrderedTree::new();
    for x in xs.iter().filter(|x| **x != missing) {
        tree.insert(*x, *x);
    }
    let pre_before: Vec<i8> = tree.traverse(Order::PreOrder).map(|(k, _)| *k).collect();
    let post_before: Vec<i8> = tree.traverse(Order::PostOrder).map(|(k, _)| *k).collect();

    !tree.delete(&missing)
        && tree.traverse(Order::PreOrder).map(|(k, _)| *k).eq(pre_before)
        && tree.traverse(Order::PostOrder).map(|(k, _)| *k).eq(post_before)
}

#[quickcheck]
fn deleting_removes_one_instance(xs: Vec<i8>, pick: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let target = xs[pick % xs.len()];
    let copies = xs.iter().filter(|x| **x == target).count();

    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let deleted = tree.delete(&target);
    tree.assert_invariants();

    let left = in_order_keys(&tree).iter().filter(|x| **x == target).count();
    deleted && left == copies - 1 && tree.has(&target) == (copies > 1)
}

#[quickcheck]
fn begin_advanced_len_times_is_end(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let mut cursor = tree.begin();
    for _ in 0..tree.len() {
        if cursor == tree.end() {
            return false;
        }
        cursor.advance();
    }
    cursor == tree.end() && tree.begin_at(xs.len()) == tree.end()
}

#[quickcheck]
fn retreating_from_rbegin_is_non_increasing(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x, ());
    }

    let mut keys = Vec::new();
    let mut cursor = tree.rbegin();
    while let Some(key) = cursor.key() {
        keys.push(*key);
        cursor.retreat();
    }

    keys.len() == xs.len() && keys.windows(2).all(|w| w[0] >= w[1])
}

#[quickcheck]
fn walks_agree(xs: Vec<i8>) -> bool {
    let mut recursive = OrderedTree::with_config(Config::new().walk(Walk::Recursive));
    let mut iterative = OrderedTree::with_config(Config::new().walk(Walk::Iterative));
    for x in &xs {
        recursive.insert(*x, ());
        iterative.insert(*x, ());
    }

    [Order::InOrder, Order::PreOrder, Order::PostOrder]
        .iter()
        .all(|&order| {
            let mut a = Vec::new();
            let mut b = Vec::new();
            recursive.for_each(order, |k, _| a.push(*k));
            iterative.for_each(order, |k, _| b.push(*k));
            a == b && tree_keys(&iterative, order) == a
        })
}

fn tree_keys(tree: &OrderedTree<i8, ()>, order: Order) -> Vec<i8> {
    tree.traverse(order).map(|(k, _)| *k).collect()
}

#[quickcheck]
fn iter_matches_cursor_and_reverses(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<i8, ()> = xs.into_iter().map(|x| (x, ())).collect();

    let forward: Vec<i8> = tree.iter().map(|(k, _)| *k).collect();
    let mut backward: Vec<i8> = tree.iter().rev().map(|(k, _)| *k).collect();
    backward.reverse();

    forward == in_order_keys(&tree) && forward == backward
}
