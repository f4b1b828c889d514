//! This crate exposes a handful of classic data structures and algorithms
//! mostly for educational purposes, alongside benchmarks comparing them.
//!
//! ## Binary Search Tree
//!
//! [`tree::Tree`] is a plain, unbalanced Binary Search Tree. For every `Node`
//! in it, all the `Node`s in its left subtree have a key less than its own
//! key and all the `Node`s in its right subtree have a key greater than or
//! equal to its own.
//!
//! Searching takes `O(height)`. Nothing keeps the height down so it depends
//! entirely on insertion order: keys inserted in a random order give an
//! expected height of `O(lg N)`, keys inserted in ascending order give a
//! chain of height `N`. [`search::binary_search`] over a sorted slice is the
//! array-backed point of comparison.
//!
//! ## Binary Heap
//!
//! [`heap::MinHeap`] keeps its elements in a `Vec` read as a complete binary
//! tree where every element is no bigger than its children, so the minimum
//! is always at the front.
//!
//! ## Expression Evaluation
//!
//! [`expr`] evaluates integer arithmetic written in infix by converting it
//! to postfix with an operator stack, building a tree from the postfix and
//! evaluating the tree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod expr;
pub mod heap;
pub mod search;
pub mod tree;
