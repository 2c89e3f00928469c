//! Filters and projections layered on the preorder walk.

use crate::node::NodeRef;
use crate::traversal::iter_preorder;

/// Leaves below `start` (or `start` itself), in preorder.
pub fn iter_leaf<T>(start: NodeRef<'_, T>) -> impl Iterator<Item = NodeRef<'_, T>> {
    iter_preorder(start).filter(|node| node.is_leaf())
}

/// `start` when it is the tree root or a forking point, followed by every strict
/// descendant with two or more children, in preorder.
pub fn iter_forking_point<T>(start: NodeRef<'_, T>) -> impl Iterator<Item = NodeRef<'_, T>> {
    let head = (start.is_root() || start.is_forking_point()).then_some(start);
    head.into_iter()
        .chain(iter_preorder(start).skip(1).filter(|node| node.is_forking_point()))
}

/// Nodes with exactly two children, in preorder.
pub fn iter_bifurcation_point<T>(start: NodeRef<'_, T>) -> impl Iterator<Item = NodeRef<'_, T>> {
    iter_preorder(start).filter(|node| node.is_bifurcation_point())
}

/// Strict descendants of `start` where a section ends: forking points and leaves.
pub fn iter_section_end_point<T>(start: NodeRef<'_, T>) -> impl Iterator<Item = NodeRef<'_, T>> {
    iter_preorder(start)
        .skip(1)
        .filter(|node| node.is_forking_point() || node.is_leaf())
}

/// Projects a node sequence onto the values it carries, one for one.
pub fn val_iter<'a, T: 'a, I>(nodes: I) -> impl Iterator<Item = &'a T>
where
    I: IntoIterator<Item = NodeRef<'a, T>>,
{
    nodes.into_iter().map(|node| node.value())
}
