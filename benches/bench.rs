use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use dsperf::search::binary_search;
use dsperf::tree::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Builds a tree by inserting values in ascending order, which gives a chain.
fn get_unbalanced_tree(keys: &[i32]) -> Tree<i32> {
    keys.iter().copied().collect()
}

/// Builds a tree by inserting values in a shuffled order, which keeps it shallow.
fn get_shuffled_tree(keys: &[i32]) -> Tree<i32> {
    let mut shuffled = keys.to_vec();
    shuffled.shuffle(&mut StdRng::seed_from_u64(0));
    shuffled.into_iter().collect()
}

/// Builds a tree by inserting values so that, without any self-balancing, the resultant tree
/// is perfectly balanced.
fn get_balanced_tree(keys: &[i32]) -> Tree<i32> {
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, keys);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Looks up every key once, in ascending order, with each kind of search.
fn bench_find_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("find-all");

    // For trees of size 2^3, 2^7, etc....
    for num_levels in [3, 7, 11] {
        let keys: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
        let tree_tests = [
            ("sorted-insert", get_unbalanced_tree(&keys)),
            ("shuffled-insert", get_shuffled_tree(&keys)),
            ("balanced-insert", get_balanced_tree(&keys)),
        ];
        for (name, tree) in &tree_tests {
            group.bench_with_input(BenchmarkId::new(*name, keys.len()), &keys, |b, keys| {
                b.iter(|| {
                    for k in keys {
                        black_box(tree.search(k));
                    }
                })
            });
        }

        group.bench_with_input(
            BenchmarkId::new("binary-search", keys.len()),
            &keys,
            |b, keys| {
                b.iter(|| {
                    for k in keys {
                        black_box(binary_search(keys, k));
                    }
                })
            },
        );
    }

    group.finish();
}

/// Compares building a tree with the iterative and the recursive insert.
fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for num_levels in [7, 11] {
        let mut keys: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
        keys.shuffle(&mut StdRng::seed_from_u64(1));

        group.bench_with_input(BenchmarkId::new("iterative", keys.len()), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = Tree::new();
                for k in keys {
                    tree.insert(*k);
                }
                tree
            })
        });
        group.bench_with_input(BenchmarkId::new("recursive", keys.len()), &keys, |b, keys| {
            b.iter(|| {
                let mut tree = Tree::new();
                for k in keys {
                    tree.insert_recursive(*k);
                }
                tree
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_all, bench_insert);
criterion_main!(benches);
