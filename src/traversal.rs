//! Lazy depth-first and ancestor walks.
//!
//! Every walk is an explicit state machine over borrowed [`NodeRef`]s: nothing is
//! visited before the consumer asks for it, and dropping the iterator early leaves
//! the rest of the tree untouched. Children are always visited in insertion order.
//!
//! The tree is borrowed for the lifetime of a walk, so its shape cannot change
//! while a walk is in flight.

use std::iter::FusedIterator;

use crate::node::NodeRef;

/// Root-first, depth-first, left-to-right.
pub fn iter_preorder<T>(start: NodeRef<'_, T>) -> Preorder<'_, T> {
    Preorder::new(start)
}

/// Children-first, depth-first, left-to-right.
pub fn iter_postorder<T>(start: NodeRef<'_, T>) -> Postorder<'_, T> {
    Postorder::new(start)
}

/// `start`, its parent, grandparent, up to and including the root.
pub fn iter_upstream<T>(start: NodeRef<'_, T>) -> Upstream<'_, T> {
    Upstream::new(start)
}

pub struct Preorder<'a, T> {
    stack: Vec<NodeRef<'a, T>>,
}

impl<'a, T> Preorder<'a, T> {
    fn new(start: NodeRef<'a, T>) -> Self {
        Self { stack: vec![start] }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children().rev());
        Some(current)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

impl<T> Clone for Preorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

pub struct Postorder<'a, T> {
    /// Second field marks nodes whose children are already on the stack.
    stack: Vec<(NodeRef<'a, T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    fn new(start: NodeRef<'a, T>) -> Self {
        Self {
            stack: vec![(start, false)],
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, expanded)) = self.stack.pop() {
            if expanded {
                return Some(current);
            }
            self.stack.push((current, true));
            self.stack
                .extend(current.children().rev().map(|child| (child, false)));
        }
        None
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}

impl<T> Clone for Postorder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

pub struct Upstream<'a, T> {
    current: Option<NodeRef<'a, T>>,
}

impl<'a, T> Upstream<'a, T> {
    fn new(start: NodeRef<'a, T>) -> Self {
        Self {
            current: Some(start),
        }
    }
}

impl<'a, T> Iterator for Upstream<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        self.current = current.parent();
        Some(current)
    }
}

impl<T> FusedIterator for Upstream<'_, T> {}

impl<T> Clone for Upstream<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
        }
    }
}

/// The closed set of walk orders the generators can be driven by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    Preorder,
    Postorder,
    Upstream,
}

impl TraversalOrder {
    pub fn walk<T>(self, start: NodeRef<'_, T>) -> Walk<'_, T> {
        match self {
            TraversalOrder::Preorder => Walk::Preorder(iter_preorder(start)),
            TraversalOrder::Postorder => Walk::Postorder(iter_postorder(start)),
            TraversalOrder::Upstream => Walk::Upstream(iter_upstream(start)),
        }
    }
}

/// A walk in one of the [`TraversalOrder`]s.
pub enum Walk<'a, T> {
    Preorder(Preorder<'a, T>),
    Postorder(Postorder<'a, T>),
    Upstream(Upstream<'a, T>),
}

impl<'a, T> Iterator for Walk<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Walk::Preorder(walk) => walk.next(),
            Walk::Postorder(walk) => walk.next(),
            Walk::Upstream(walk) => walk.next(),
        }
    }
}

impl<T> FusedIterator for Walk<'_, T> {}

impl<T> Clone for Walk<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Walk::Preorder(walk) => Walk::Preorder(walk.clone()),
            Walk::Postorder(walk) => Walk::Postorder(walk.clone()),
            Walk::Upstream(walk) => Walk::Upstream(walk.clone()),
        }
    }
}
