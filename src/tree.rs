//! An unbalanced Binary Search Tree. Nothing here ever rotates or rebalances so the shape of
//! the tree is entirely decided by the order keys are inserted in. Inserting keys in ascending
//! order gives a linked list with extra steps, inserting them shuffled gives something close to
//! balanced.
//!
//! Keys that compare equal to a node's key go into its right subtree so duplicates are kept.
//!
//! # Examples
//!
//! ```
//! use dsperf::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! let found = tree.search(&1).unwrap();
//! assert_eq!(found.key(), &1);
//! assert_eq!(tree.height(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

type Link<K> = Option<Box<Node<K>>>;

/// A node in a [`Tree`]. Each node uniquely owns its children.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the subtree holding keys strictly less than this node's key.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// The root of the subtree holding keys greater than or equal to this node's key.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }
}

impl<K: fmt::Debug> fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node").field("key", &self.key).finish_non_exhaustive()
    }
}

/// An unbalanced Binary Search Tree supporting insertion and search.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // The default drop recurses once per level which blows the stack on long chains.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys have been inserted, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Inserts the key as a new leaf by walking down from the root: strictly smaller keys go
    /// left, everything else goes right.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsperf::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// // The duplicate lands in the right subtree of the first one.
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.right().map(|n| *n.key()), Some(1));
    /// assert!(root.left().is_none());
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
    }

    /// Same as [`insert`][Tree::insert] but descends by tail recursion through the child links.
    /// Both produce the same tree for the same sequence of keys.
    ///
    /// Every level of the tree costs a stack frame so this can overflow the stack on a long
    /// degenerate chain. Prefer [`insert`][Tree::insert].
    pub fn insert_recursive(&mut self, key: K)
    where
        K: Ord,
    {
        Self::insert_at(&mut self.root, key);
        self.len += 1;
    }

    fn insert_at(link: &mut Link<K>, key: K)
    where
        K: Ord,
    {
        match link {
            None => *link = Some(Box::new(Node::new(key))),
            Some(node) if key < node.key => Self::insert_at(&mut node.left, key),
            Some(node) => Self::insert_at(&mut node.right, key),
        }
    }

    /// Finds the first node on the search path whose key equals the given key. Returns `None`
    /// when the key isn't in the tree, which is a normal answer and not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsperf::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&8).map(|n| *n.key()), Some(8));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.find_with_depth(key).map(|(node, _)| node)
    }

    /// Recursive version of [`search`][Tree::search].
    ///
    /// Every level of the tree costs a stack frame so this can overflow the stack on a long
    /// degenerate chain. Prefer [`search`][Tree::search].
    pub fn search_recursive(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        fn go<'a, K: Ord>(link: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>> {
            let node = link?;
            match key.cmp(&node.key) {
                Ordering::Equal => Some(node),
                Ordering::Less => go(node.left(), key),
                Ordering::Greater => go(node.right(), key),
            }
        }
        go(self.root(), key)
    }

    /// The 1-based depth of the node [`search`][Tree::search] would return for this key.
    pub fn depth_of(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        self.find_with_depth(key).map(|(_, depth)| depth)
    }

    fn find_with_depth(&self, key: &K) -> Option<(&Node<K>, usize)>
    where
        K: Ord,
    {
        let mut current = self.root();
        let mut depth = 1;
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some((node, depth)),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a tree built from `n` ascending keys has a height of `n`.
    pub fn height(&self) -> usize {
        self.depths().max().unwrap_or(0)
    }

    /// The mean 1-based depth of all nodes, or `0.0` for an empty tree. This is the expected
    /// number of nodes visited by a successful search for a uniformly chosen key.
    pub fn average_depth(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let total: usize = self.depths().sum();
        total as f64 / self.len as f64
    }

    /// Depths of every node, in no particular order.
    fn depths(&self) -> impl Iterator<Item = usize> + '_ {
        let mut stack: Vec<(&Node<K>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
            Some(depth)
        })
    }

    /// Iterates over the keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsperf::tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }
}

/// In-order iterator over the keys of a [`Tree`]. See [`Tree::iter`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut next: Option<&'a Node<K>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
