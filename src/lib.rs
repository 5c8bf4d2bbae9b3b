//! This crate exposes a persistent (immutable) Binary Search Tree (BST)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored values. BSTs are typically defined recursively
//! using the notion of a `Node`. A `Node` stores the value that was inserted
//! and has two child subtrees, either of which may be empty. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). BSTs
//! also naturally support sorted iteration by visiting the left subtree, then
//! the subtree root, then the right subtree.
//!
//! ## Persistence
//!
//! The [`persistent::Tree`] never changes once built. Inserting returns a new
//! tree which shares every subtree the insertion didn't pass through with
//! the old one, and the old tree stays usable. Subtrees are reference counted
//! with [`std::sync::Arc`] so versions can be handed to other threads freely.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod persistent;
