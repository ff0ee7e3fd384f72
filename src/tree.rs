//! An ordered BST mutated in place through update-on-return recursion.
//! Operations that modify the tree (`insert`, `delete`) replace the root
//! with the subtree returned by a consuming recursive call.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Duplicates are kept: deleting removes one occurrence at a time.
//! tree.insert(1);
//! tree.delete(&1);
//! assert_eq!(tree.find(&1), Some(&1));
//! tree.delete(&1);
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp;
use std::mem;

/// The error returned by [`OrderedTree::min`] and [`OrderedTree::max`] when
/// the tree holds no values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tree is empty")]
pub struct EmptyTree;

/// An unbalanced Binary Search Tree holding values with a total order.
/// This can be used for inserting, finding, and deleting values and for
/// querying the smallest and largest value stored.
#[derive(Clone, Debug)]
pub struct OrderedTree<T> {
    pub(crate) root: Tree<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: Tree::Leaf }
    }

    /// Returns `true` when the tree holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        matches!(self.root, Tree::Leaf)
    }

    /// Inserts the given value into the tree. Values already present are
    /// not overwritten - a duplicate is stored as its own node in the right
    /// subtree of its equal-valued ancestor. Insertion never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&2), Some(&2));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: cmp::Ord,
    {
        self.root = mem::take(&mut self.root).insert(value);
    }

    /// Deletes one node holding the given value, if any. Deleting a value
    /// that is not in the tree does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.delete(&1);
    ///
    /// assert_eq!(tree.find(&1), None);
    ///
    /// // No-op on absent values.
    /// tree.delete(&42);
    /// ```
    pub fn delete(&mut self, value: &T)
    where
        T: cmp::Ord,
    {
        self.root = mem::take(&mut self.root).delete(value);
    }

    /// Potentially finds the given value in this tree. If no node holds the
    /// value, `None` is returned. When duplicates are stored, a reference to
    /// the first match on the search path is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: cmp::Ord,
    {
        self.root.find(value)
    }

    /// Returns the smallest value in the tree, or [`EmptyTree`] if there
    /// is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::{EmptyTree, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.min(), Err(EmptyTree));
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T, EmptyTree> {
        match &self.root {
            Tree::Leaf => Err(EmptyTree),
            Tree::Node(n) => Ok(n.min()),
        }
    }

    /// Returns the largest value in the tree, or [`EmptyTree`] if there
    /// is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::{EmptyTree, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.max(), Err(EmptyTree));
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T, EmptyTree> {
        match &self.root {
            Tree::Leaf => Err(EmptyTree),
            Tree::Node(n) => Ok(n.max()),
        }
    }

    /// Empties the tree. Dropping the root drops every node it owns, so no
    /// traversal is needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    ///
    /// // Clearing an empty tree is fine too.
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.root = Tree::Leaf;
    }

    /// The longest path from the root to a leaf: -1 for an empty tree, 0 for
    /// a single node.
    pub(crate) fn height(&self) -> isize {
        self.root.height()
    }

    /// Collects references to every value in sorted order.
    #[cfg(test)]
    pub(crate) fn in_order(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.root.in_order(&mut out);
        out
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Tree<T> {
    Leaf,
    Node(Node<T>),
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Box<Tree<T>>,
    pub(crate) right: Box<Tree<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::Leaf
    }
}

impl<T> Tree<T> {
    fn insert(self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Tree::Leaf => Tree::Node(Node {
                value,
                left: Box::new(Tree::Leaf),
                right: Box::new(Tree::Leaf),
            }),
            Tree::Node(n) => {
                if value < n.value {
                    Tree::Node(Node {
                        left: Box::new(n.left.insert(value)),
                        ..n
                    })
                } else {
                    Tree::Node(Node {
                        right: Box::new(n.right.insert(value)),
                        ..n
                    })
                }
            }
        }
    }

    fn delete(self, value: &T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Tree::Leaf => Tree::Leaf,
            Tree::Node(n) => match value.cmp(&n.value) {
                cmp::Ordering::Less => Tree::Node(Node {
                    left: Box::new(n.left.delete(value)),
                    ..n
                }),
                cmp::Ordering::Greater => Tree::Node(Node {
                    right: Box::new(n.right.delete(value)),
                    ..n
                }),
                cmp::Ordering::Equal => match (*n.left, *n.right) {
                    // Zero or one child: splice this node out.
                    (Tree::Leaf, right) => right,
                    (left, Tree::Leaf) => left,

                    // Two children: promote the in-order successor, i.e. the
                    // smallest node of the right subtree. Removing it there
                    // and moving its value up here keeps the ordering
                    // invariant intact.
                    (left, Tree::Node(right)) => {
                        let (successor, right) = right.take_min();
                        Tree::Node(Node {
                            value: successor,
                            left: Box::new(left),
                            right: Box::new(right),
                        })
                    }
                },
            },
        }
    }

    fn find(&self, value: &T) -> Option<&T>
    where
        T: cmp::Ord,
    {
        match self {
            Tree::Leaf => None,
            Tree::Node(n) => match value.cmp(&n.value) {
                cmp::Ordering::Less => n.left.find(value),
                cmp::Ordering::Equal => Some(&n.value),
                cmp::Ordering::Greater => n.right.find(value),
            },
        }
    }

    pub(crate) fn height(&self) -> isize {
        match self {
            Tree::Leaf => -1,
            Tree::Node(n) => 1 + n.left.height().max(n.right.height()),
        }
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        match self {
            Tree::Leaf => None,
            Tree::Node(n) => Some(n),
        }
    }

    #[cfg(test)]
    fn in_order<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Tree::Node(n) = self {
            n.left.in_order(out);
            out.push(&n.value);
            n.right.in_order(out);
        }
    }
}

impl<T> Node<T> {
    fn min(&self) -> &T {
        match &*self.left {
            Tree::Leaf => &self.value,
            Tree::Node(n) => n.min(),
        }
    }

    fn max(&self) -> &T {
        match &*self.right {
            Tree::Leaf => &self.value,
            Tree::Node(n) => n.max(),
        }
    }

    /// Removes the leftmost node of this subtree and returns its value along
    /// with the remaining subtree.
    fn take_min(self) -> (T, Tree<T>) {
        let Node { value, left, right } = self;
        match *left {
            Tree::Leaf => (value, *right),
            Tree::Node(n) => {
                let (min, rest) = n.take_min();
                (
                    min,
                    Tree::Node(Node {
                        value,
                        left: Box::new(rest),
                        right,
                    }),
                )
            }
        }
    }
}
