//! A persistent BST. This is modeled after a set one would see in
//! a functional language like Haskell. Inserting into a tree never modifies
//! it. Instead `insert` returns a new tree that reuses every subtree the
//! insertion didn't touch, so only the nodes along the insertion path are
//! allocated.
//!
//! The tree does not rebalance itself. Inserting values in sorted order
//! yields a degenerate, list-shaped tree.
//!
//! # Examples
//!
//! ```
//! use persistent_bst::persistent::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&"b"));
//! assert_eq!(tree.to_string(), "()");
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert("b");
//! let newer_tree = new_tree.insert("a").insert("c");
//!
//! // All history is preserved.
//! assert_eq!(newer_tree.to_string(), "((a)b(c))");
//! assert_eq!(new_tree.to_string(), "(b)");
//! assert_eq!(tree.to_string(), "()");
//!
//! // Values come out in ascending order.
//! let values: Vec<_> = newer_tree.inorder().collect();
//! assert_eq!(values, [&"a", &"b", &"c"]);
//! ```

use std::cmp;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::sync::Arc;

mod iter;

pub use self::iter::Iter;

/// A persistent Binary Search Tree holding a set of ordered values. Note that
/// this data structure is functional - operations that would modify the tree
/// instead return a new tree.
///
/// Cloning a `Tree` is cheap: it only bumps reference counts and never
/// requires `T: Clone`.
///
/// Nothing here recurses once per level, so degenerate trees of any depth
/// can be searched, extended, compared, rendered and dropped.
pub enum Tree<T> {
    /// A marker for an absent subtree. This is where every tree starts.
    Empty,
    /// A `Node` that has a value and two children (which are
    /// both `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

/// Dropping a tree frees every subtree nobody else holds. Uniquely owned
/// subtrees are moved onto a heap stack before their parent is freed, so
/// each drop only ever goes one level deep.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Self::Node(node) = self {
            node.detach_children(&mut stack);
        }
        while let Some(mut tree) = stack.pop() {
            if let Self::Node(node) = &mut tree {
                node.detach_children(&mut stack);
            }
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Empty
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns how many values are stored in the tree. Every node caches the
    /// size of its subtree when it is built, so this is a field read.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::persistent::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(2);
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn size(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.size,
        }
    }

    /// Gets the height of this tree. An empty tree has a height of 0 and a
    /// single value has a height of 1.
    pub fn height(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => n.height,
        }
    }

    /// Returns `true` if the tree contains the given value. Only one child is
    /// visited per level so this takes `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::persistent::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        let mut tree = self;
        while let Self::Node(n) = tree {
            tree = match value.cmp(&n.value) {
                cmp::Ordering::Less => n.left.tree(),
                cmp::Ordering::Equal => return true,
                cmp::Ordering::Greater => n.right.tree(),
            };
        }
        false
    }

    /// Returns a new tree that also contains the given value. If the value is
    /// already present, the returned tree shares every node with this one.
    ///
    /// Only the nodes on the way down to the new value are rebuilt. Every
    /// other subtree is shared with `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::persistent::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert(1);
    /// let newer_tree = new_tree.insert(1);
    ///
    /// // All history is preserved.
    /// assert!(newer_tree.contains(&1));
    /// assert!(new_tree.contains(&1));
    /// assert!(!tree.contains(&1));
    /// assert_eq!(newer_tree, new_tree);
    /// ```
    pub fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        let mut node = match self {
            Self::Empty => return Self::Node(Node::leaf(value, Child::new())),
            Self::Node(n) => n,
        };

        // Every node we pass through, and which side of it we went down.
        let mut path = Vec::with_capacity(self.height());
        let empty = loop {
            let side = value.cmp(&node.value);
            let child = match side {
                cmp::Ordering::Less => &node.left,
                cmp::Ordering::Equal => return self.clone(),
                cmp::Ordering::Greater => &node.right,
            };
            path.push((node, side));
            match child.tree() {
                Self::Empty => break child.clone(),
                Self::Node(n) => node = n,
            }
        };

        // The empty child is reused as both children of the new leaf.
        let mut rebuilt = Node::leaf(value, empty);
        while let Some((parent, side)) = path.pop() {
            let child = Child(Arc::new(Self::Node(rebuilt)));
            rebuilt = match side {
                cmp::Ordering::Less => parent.with_children(child, parent.right.clone()),
                _ => parent.with_children(parent.left.clone(), child),
            };
        }
        Self::Node(rebuilt)
    }

    /// Returns an iterator over the values of the tree in ascending order.
    /// The iterator is lazy and borrows the tree, so calling this again
    /// walks the tree from the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_bst::persistent::Tree;
    ///
    /// let tree: Tree<_> = vec![3, 1, 2].into_iter().collect();
    /// assert!(tree.inorder().eq(&[1, 2, 3]));
    /// ```
    pub fn inorder(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns the smallest value in the tree, if any.
    pub fn min(&self) -> Option<&T> {
        let mut node = match self {
            Self::Empty => return None,
            Self::Node(n) => n,
        };
        while let Self::Node(left) = node.left.tree() {
            node = left;
        }
        Some(&*node.value)
    }

    /// Returns the largest value in the tree, if any.
    pub fn max(&self) -> Option<&T> {
        let mut node = match self {
            Self::Empty => return None,
            Self::Node(n) => n,
        };
        while let Self::Node(right) = node.right.tree() {
            node = right;
        }
        Some(&*node.value)
    }
}

/// Trees are equal when they have the same shape and hold equal values in
/// the same positions. Equal trees render identically.
impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Empty, Self::Empty) => {}
                (Self::Node(a), Self::Node(b)) => {
                    let same_value = Arc::ptr_eq(&a.value, &b.value) || a.value == b.value;
                    if a.size != b.size || !same_value {
                        return false;
                    }
                    for (x, y) in [(&a.left, &b.left), (&a.right, &b.right)] {
                        // Shared subtrees are equal without looking inside.
                        if !Arc::ptr_eq(&x.0, &y.0) {
                            pending.push((x.tree(), y.tree()));
                        }
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

/// Formats the values in ascending order, like a set.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

/// Renders the tree fully parenthesized. An empty tree is `()`, and a node
/// is its value wrapped in parentheses with its non-empty children on either
/// side, e.g. `((a)b(c))`. Empty children contribute nothing.
///
/// A child counts as empty when it holds no values, not when it renders to
/// `()`, so a value whose `Display` output is blank still gets its own parens.
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a, V> {
            Open(&'a Node<V>),
            Value(&'a V),
            Close,
        }

        let root = match self {
            Self::Empty => return f.write_str("()"),
            Self::Node(n) => n,
        };

        let mut steps = vec![Step::Open(root)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Open(n) => {
                    f.write_str("(")?;
                    // Pushed in reverse so the left subtree comes out first.
                    steps.push(Step::Close);
                    if let Self::Node(right) = n.right.tree() {
                        steps.push(Step::Open(right));
                    }
                    steps.push(Step::Value(&*n.value));
                    if let Self::Node(left) = n.left.tree() {
                        steps.push(Step::Open(left));
                    }
                }
                Step::Value(value) => write!(f, "{}", value)?,
                Step::Close => f.write_str(")")?,
            }
        }
        Ok(())
    }
}

impl<T: cmp::Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |tree, value| tree.insert(value))
    }
}

/// Replaces this handle with a tree containing the extra values. Clones taken
/// beforehand still see the old tree.
impl<T: cmp::Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            *self = self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

struct Child<T>(Arc<Tree<T>>);

impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Child<T> {
    fn new() -> Self {
        Self(Arc::new(Tree::new()))
    }

    fn tree(&self) -> &Tree<T> {
        &self.0
    }

    fn size(&self) -> usize {
        self.0.size()
    }

    fn height(&self) -> usize {
        self.0.height()
    }
}

/// A `Node` has a value used for searching/sorting. It always has two
/// children although those children may be [`Empty`][Tree::Empty].
pub struct Node<T> {
    value: Arc<T>,
    left: Child<T>,
    right: Child<T>,

    /// How many values are in the subtree rooted at this node.
    size: usize,
    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

/// Only this node's own fields are shown. Format the enclosing [`Tree`] to
/// see its values.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("size", &self.size)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Manual implementation of `Clone` so we don't clone values when the generic
/// parameter is `Clone` itself.
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            left: self.left.clone(),
            right: self.right.clone(),
            size: self.size,
            height: self.height,
        }
    }
}

impl<T> Node<T> {
    /// Construct a node with no children. `empty` must be an empty subtree and
    /// is shared by both sides.
    fn leaf(value: T, empty: Child<T>) -> Self {
        debug_assert!(empty.tree().is_empty());
        Self {
            value: Arc::new(value),
            left: empty.clone(),
            right: empty,
            size: 1,
            height: 1,
        }
    }

    /// Moves every child only this node holds onto `stack`, leaving an empty
    /// tree in its place. Shared children are left for their other holders.
    fn detach_children(&mut self, stack: &mut Vec<Tree<T>>) {
        for child in [&mut self.left, &mut self.right] {
            if let Some(tree) = Arc::get_mut(&mut child.0) {
                if !tree.is_empty() {
                    stack.push(mem::replace(tree, Tree::Empty));
                }
            }
        }
    }

    /// Create a new Node with the same value as this node
    /// but with the given children.
    fn with_children(&self, left: Child<T>, right: Child<T>) -> Self
    where
        T: cmp::Ord,
    {
        let node = Self {
            value: Arc::clone(&self.value),
            size: left.size() + right.size() + 1,
            height: left.height().max(right.height()) + 1,
            left,
            right,
        };

        // The children's roots must stay on the correct side of this value.
        debug_assert!(match node.left.tree() {
            Tree::Node(l) => l.value < node.value,
            Tree::Empty => true,
        });
        debug_assert!(match node.right.tree() {
            Tree::Node(r) => r.value > node.value,
            Tree::Empty => true,
        });
        node
    }
}
