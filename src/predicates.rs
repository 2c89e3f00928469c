//! Structural classification of a node from its local links only.

use crate::node::NodeRef;

pub fn is_root<T>(node: &NodeRef<'_, T>) -> bool {
    node.parent().is_none()
}

pub fn is_leaf<T>(node: &NodeRef<'_, T>) -> bool {
    node.child_count() == 0
}

/// Two or more children.
pub fn is_forking_point<T>(node: &NodeRef<'_, T>) -> bool {
    node.child_count() >= 2
}

/// Exactly two children.
pub fn is_bifurcation_point<T>(node: &NodeRef<'_, T>) -> bool {
    node.child_count() == 2
}
