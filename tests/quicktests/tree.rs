use dsperf::tree::{Node, Tree};

use std::collections::HashSet;

/// Builds one tree with the iterative insert and one with the recursive insert.
fn build_both(xs: &[i8]) -> (Tree<i8>, Tree<i8>) {
    let mut iterative = Tree::new();
    let mut recursive = Tree::new();
    for x in xs {
        iterative.insert(*x);
        recursive.insert_recursive(*x);
    }
    (iterative, recursive)
}

/// Walks the tree checking each node against the bounds its ancestors impose:
/// strictly below every ancestor it is left of, at least every ancestor it is right of.
fn is_ordered(tree: &Tree<i8>) -> bool {
    let mut stack: Vec<(Option<&Node<i8>>, Option<i8>, Option<i8>)> =
        vec![(tree.root(), None, None)];
    while let Some((link, below, at_least)) = stack.pop() {
        let node = match link {
            Some(node) => node,
            None => continue,
        };
        let key = *node.key();
        if below.map_or(false, |b| key >= b) || at_least.map_or(false, |a| key < a) {
            return false;
        }
        stack.push((node.left(), Some(key), at_least));
        stack.push((node.right(), below, Some(key)));
    }
    true
}

/// Pre-order keys with explicit markers for missing children, so equal output means equal shape.
fn shape(tree: &Tree<i8>) -> Vec<Option<i8>> {
    let mut out = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(link) = stack.pop() {
        out.push(link.map(|n| *n.key()));
        if let Some(n) = link {
            stack.push(n.right());
            stack.push(n.left());
        }
    }
    out
}

#[quickcheck]
fn ordered(xs: Vec<i8>) -> bool {
    let (iterative, recursive) = build_both(&xs);
    is_ordered(&iterative) && is_ordered(&recursive)
}

#[quickcheck]
fn iterative_and_recursive_insert_agree(xs: Vec<i8>) -> bool {
    let (iterative, recursive) = build_both(&xs);
    shape(&iterative) == shape(&recursive) && iterative.len() == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let (tree, _) = build_both(&xs);

    xs.iter().all(|x| {
        tree.search(x).map(|n| n.key()) == Some(x)
            && tree.search_recursive(x).map(|n| n.key()) == Some(x)
    })
}

#[quickcheck]
fn search_after_insert(xs: Vec<i8>, k: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(k);

    tree.search(&k).is_some()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let (tree, _) = build_both(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none() && tree.search_recursive(x).is_none())
}

#[quickcheck]
fn iter_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut sorted = xs;
    sorted.sort();

    tree.iter().copied().collect::<Vec<_>>() == sorted
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let n = xs.len();
    // A perfectly balanced tree is as short as it gets.
    let min_height = (usize::BITS - n.leading_zeros()) as usize;

    tree.height() >= min_height && tree.height() <= n
}
