use std::fmt;
use std::iter::FusedIterator;

use super::{Node, Tree};

/// A lazy in-order iterator over the values of a [`Tree`], created by
/// [`Tree::inorder`]. Values come out in ascending order.
///
/// The iterator keeps a stack of the nodes whose left subtrees have been
/// entered but whose values haven't been yielded yet, so it never recurses
/// and uses `O(height)` memory.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::with_capacity(tree.height()),
            remaining: tree.size(),
        };
        iter.push_left_spine(tree);
        iter
    }

    /// Pushes the root of `tree` and every left descendant of it. The last
    /// pushed node holds the smallest value of `tree`.
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(node) = tree {
            self.stack.push(node);
            tree = node.left.tree();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.tree());
        self.remaining -= 1;
        Some(&*node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
