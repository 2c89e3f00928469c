//! Maximal unbranched runs between structural boundaries.

use std::iter::FusedIterator;

use itertools::Itertools;

use crate::node::NodeRef;
use crate::traversal::{iter_preorder, iter_upstream, Preorder};

/// Splits the subtree below `start` into sections.
///
/// A section opens at `start`, at the tree root, or at a forking point, and runs
/// down one lineage to the next forking point or leaf, both ends included.
/// Sections come out in preorder of the node that closes them. A leaf `start`
/// forms a single one-node section.
pub fn iter_section<T>(start: NodeRef<'_, T>) -> Sections<'_, T> {
    Sections::new(start)
}

pub struct Sections<'a, T> {
    start: NodeRef<'a, T>,
    lone: Option<NodeRef<'a, T>>,
    walk: Preorder<'a, T>,
}

impl<'a, T> Sections<'a, T> {
    fn new(start: NodeRef<'a, T>) -> Self {
        let mut walk = iter_preorder(start);
        // Sections are closed by strict descendants only
        walk.next();
        Self {
            start,
            lone: start.is_leaf().then_some(start),
            walk,
        }
    }

    fn section_ending_at(&self, end: NodeRef<'a, T>) -> Vec<NodeRef<'a, T>> {
        let start = self.start;
        let mut section = std::iter::once(end)
            .chain(
                iter_upstream(end)
                    .skip(1)
                    .take_while_inclusive(|node| *node != start && !node.is_forking_point()),
            )
            .collect_vec();
        section.reverse();
        section
    }
}

impl<'a, T> Iterator for Sections<'a, T> {
    type Item = Vec<NodeRef<'a, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(lone) = self.lone.take() {
            return Some(vec![lone]);
        }
        let end = self
            .walk
            .find(|node| node.is_forking_point() || node.is_leaf())?;
        Some(self.section_ending_at(end))
    }
}

impl<T> FusedIterator for Sections<'_, T> {}

impl<T> Clone for Sections<'_, T> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            lone: self.lone,
            walk: self.walk.clone(),
        }
    }
}
