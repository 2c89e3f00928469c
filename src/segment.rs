//! Parent/child pairs and three-node windows along a walk.

use crate::node::NodeRef;
use crate::traversal::{iter_preorder, TraversalOrder};

/// Three consecutive nodes of one lineage: grandparent side first.
pub type Triplet<'a, T> = [NodeRef<'a, T>; 3];

/// Pairs every node of `nodes` that has a parent with that parent, as
/// `(parent.value, node.value)`. Parentless nodes contribute nothing.
///
/// Fed an upstream walk this yields the successive edges towards the root.
pub fn segment_iter<'a, T: 'a, I>(nodes: I) -> impl Iterator<Item = (&'a T, &'a T)>
where
    I: IntoIterator<Item = NodeRef<'a, T>>,
{
    nodes
        .into_iter()
        .filter_map(|node| node.parent().map(|parent| (parent.value(), node.value())))
}

/// Segments of the preorder walk from `start`, including the edge into `start`
/// itself when it has a parent.
pub fn iter_segment<T>(start: NodeRef<'_, T>) -> impl Iterator<Item = (&T, &T)> {
    iter_segment_by(start, TraversalOrder::Preorder)
}

pub fn iter_segment_by<T>(
    start: NodeRef<'_, T>,
    order: TraversalOrder,
) -> impl Iterator<Item = (&T, &T)> {
    segment_iter(order.walk(start))
}

/// For each non-root node `n` in preorder from `start`, one triplet
/// `[n.parent, n, child]` per child of `n`, children in insertion order.
pub fn iter_triplet<T>(start: NodeRef<'_, T>) -> impl Iterator<Item = Triplet<'_, T>> {
    iter_preorder(start).flat_map(|node| {
        node.parent().into_iter().flat_map(move |parent| {
            node.children().map(move |child| [parent, node, child])
        })
    })
}
