//! Read-only node handle.

use std::fmt;

use crate::arena::{NodeId, TreeArena, TreeNode};

/// A borrowed view of one node of a [`TreeArena`].
///
/// A `NodeRef` is only ever built for a live id, so navigating from it cannot fail.
pub struct NodeRef<'a, T> {
    tree: &'a TreeArena<T>,
    id: NodeId,
    node: &'a TreeNode<T>,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a TreeArena<T>, id: NodeId, node: &'a TreeNode<T>) -> Self {
        Self { tree, id, node }
    }

    /// Resolves `id` against `tree`; `None` for a stale or foreign id.
    pub(crate) fn resolve(tree: &'a TreeArena<T>, id: NodeId) -> Option<Self> {
        tree.get_node(id).map(|node| Self::new(tree, id, node))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a TreeArena<T> {
        self.tree
    }

    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node
            .parent
            .and_then(|parent| NodeRef::resolve(self.tree, parent))
    }

    /// Child ids in insertion order.
    pub fn child_ids(&self) -> &'a [NodeId] {
        &self.node.children
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a, T>> + 'a {
        let (tree, node) = (self.tree, self.node);
        node.children
            .iter()
            .filter_map(move |&id| NodeRef::resolve(tree, id))
    }

    pub fn child(&self, position: usize) -> Option<NodeRef<'a, T>> {
        self.child_ids()
            .get(position)
            .and_then(|&id| NodeRef::resolve(self.tree, id))
    }

    pub fn child_count(&self) -> usize {
        self.child_ids().len()
    }

    /// Number of ancestors; zero for the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(node) = current {
            depth += 1;
            current = node.parent();
        }
        depth
    }

    pub fn is_root(&self) -> bool {
        crate::predicates::is_root(self)
    }

    pub fn is_leaf(&self) -> bool {
        crate::predicates::is_leaf(self)
    }

    pub fn is_forking_point(&self) -> bool {
        crate::predicates::is_forking_point(self)
    }

    pub fn is_bifurcation_point(&self) -> bool {
        crate::predicates::is_bifurcation_point(self)
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Two handles are equal when they designate the same node of the same tree.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .finish()
    }
}
