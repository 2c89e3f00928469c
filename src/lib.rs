//! Ordered trees with reproducible traversal orders.
//!
//! A [`TreeArena`] owns every node of one tree; nodes are appended under a parent and
//! never removed, so the shape seen by a walk is stable. Walks borrow the tree and
//! hand out [`NodeRef`] views lazily:
//!
//! - [`iter_preorder`], [`iter_postorder`], [`iter_upstream`]
//! - [`iter_leaf`], [`iter_forking_point`], [`iter_bifurcation_point`], [`val_iter`]
//! - [`iter_segment`], [`segment_iter`], [`iter_triplet`]
//! - [`iter_section`]
//!
//! ```
//! use neurotree::{iter_preorder, val_iter, TreeArena};
//!
//! let mut tree = TreeArena::new(0);
//! let n11 = tree.add_child(tree.root_id(), 11)?;
//! tree.add_child(n11, 111)?;
//! tree.add_child(tree.root_id(), 12)?;
//!
//! let values: Vec<i32> = val_iter(iter_preorder(tree.root())).copied().collect();
//! assert_eq!(values, vec![0, 11, 111, 12]);
//! # Ok::<(), neurotree::TreeError>(())
//! ```

pub mod arena;
pub mod derived;
pub mod errors;
pub mod node;
pub mod predicates;
pub mod section;
pub mod segment;
pub mod traversal;
pub mod tree_traits;
#[cfg(any(test, feature = "testing"))]
pub mod util;

pub use arena::{NodeId, TreeArena, TreeNode};
pub use derived::{
    iter_bifurcation_point, iter_forking_point, iter_leaf, iter_section_end_point, val_iter,
};
pub use errors::{TreeError, TreeResult};
pub use node::NodeRef;
pub use predicates::{is_bifurcation_point, is_forking_point, is_leaf, is_root};
pub use section::{iter_section, Sections};
pub use segment::{iter_segment, iter_segment_by, iter_triplet, segment_iter, Triplet};
pub use traversal::{
    iter_postorder, iter_preorder, iter_upstream, Postorder, Preorder, TraversalOrder, Upstream,
    Walk,
};
pub use tree_traits::TreeNodeConvert;
