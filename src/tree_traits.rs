use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::arena::TreeArena;
use crate::node::NodeRef;
use crate::traversal::iter_postorder;

/// Conversion into a printable `termtree::Tree`, children in insertion order.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for NodeRef<'_, T> {
    /// Built bottom-up from a postorder walk, so deep trees do not recurse.
    fn to_tree_string(&self) -> Tree<String> {
        let mut finished: Vec<Tree<String>> = Vec::new();
        for node in iter_postorder(*self) {
            let leaves = finished.split_off(finished.len().saturating_sub(node.child_count()));
            finished.push(Tree::new(node.value().to_string()).with_leaves(leaves));
        }
        finished
            .pop()
            .unwrap_or_else(|| Tree::new(self.value().to_string()))
    }
}

impl<T: Display> TreeNodeConvert for TreeArena<T> {
    #[instrument(level = "debug", skip(self), fields(size = self.len()))]
    fn to_tree_string(&self) -> Tree<String> {
        self.root().to_tree_string()
    }
}
