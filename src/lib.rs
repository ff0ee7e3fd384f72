//! This crate exposes an ordered Binary Search Tree (BST) built from
//! "update-on-return" recursion, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value (equal values are routed
//!    to the right on insertion, so duplicates are allowed).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). The tree here does no
//! self-balancing, so the height depends entirely on insertion order: sorted
//! input degenerates into a linked list while shuffled input stays roughly
//! logarithmic. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Update-on-return
//!
//! Every mutating operation is written as a recursive function that consumes
//! a subtree and returns the replacement subtree; the caller rewires its
//! child pointer (or the tree's root) to whatever comes back. In Rust this
//! maps directly onto functions taking and returning an owned subtree, so
//! there is no pointer juggling and no `unsafe`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod tree;

mod render;
