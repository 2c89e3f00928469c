use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, trace};

use crate::errors::{TreeError, TreeResult};
use crate::node::NodeRef;

static NEXT_TREE_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Identity of one tree and of its clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TreeToken(u64);

impl TreeToken {
    fn new() -> Self {
        TreeToken(NEXT_TREE_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle of a node inside its [`TreeArena`].
///
/// An id is branded with the tree that issued it and is rejected by any other
/// tree. Ids stay valid across `Clone`: the same id designates the copied node in
/// a cloned tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: TreeToken,
    index: Index,
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    /// Payload carried by this node
    pub value: T,
    /// Id of the parent node, None for the root
    pub parent: Option<NodeId>,
    /// Ids of child nodes, in insertion order
    pub children: Vec<NodeId>,
}

/// Arena-based ordered tree.
///
/// Structure is append-only: nodes are added under an existing parent and never
/// removed or re-parented, so every traversal sees a stable shape. Each node owns
/// its position in exactly one parent's child list; parent links are plain ids.
#[derive(Debug, Clone)]
pub struct TreeArena<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Brand carried by every id this tree issues
    token: TreeToken,
    /// Id of the root node
    root: NodeId,
}

impl<T> TreeArena<T> {
    /// Creates a tree holding a single parentless node.
    pub fn new(value: T) -> Self {
        let token = TreeToken::new();
        let mut arena = Arena::new();
        let index = arena.insert(TreeNode {
            value,
            parent: None,
            children: Vec::new(),
        });
        Self {
            arena,
            token,
            root: NodeId { tree: token, index },
        }
    }

    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        // The root is inserted on construction and nodes are never removed.
        NodeRef::new(self, self.root, &self.arena[self.root.index])
    }

    #[instrument(level = "trace", skip(self))]
    pub fn node(&self, idx: NodeId) -> TreeResult<NodeRef<'_, T>> {
        NodeRef::resolve(self, idx).ok_or(TreeError::InvalidNode(idx))
    }

    /// `None` for a stale id or one issued by an unrelated tree.
    pub fn get_node(&self, idx: NodeId) -> Option<&TreeNode<T>> {
        if idx.tree == self.token {
            self.arena.get(idx.index)
        } else {
            None
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn value_mut(&mut self, idx: NodeId) -> TreeResult<&mut T> {
        self.ensure(idx)?;
        self.arena
            .get_mut(idx.index)
            .map(|node| &mut node.value)
            .ok_or(TreeError::InvalidNode(idx))
    }

    pub fn contains(&self, idx: NodeId) -> bool {
        self.get_node(idx).is_some()
    }

    /// Number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Appends a new node holding `value` as the last child of `parent`.
    ///
    /// Returns the id of the new child so construction can be chained.
    #[instrument(level = "trace", skip(self, value))]
    pub fn add_child(&mut self, parent: NodeId, value: T) -> TreeResult<NodeId> {
        self.ensure(parent)?;
        Ok(self.attach(parent, value))
    }

    /// Moves every node of `subtree` into this tree, its root becoming the last
    /// child of `parent`. Child order inside the grafted subtree is preserved.
    ///
    /// Ids issued by `subtree` are not valid in `self`; the new root id is returned.
    #[instrument(level = "debug", skip(self, subtree), fields(size = subtree.len()))]
    pub fn graft(&mut self, parent: NodeId, mut subtree: TreeArena<T>) -> TreeResult<NodeId> {
        self.ensure(parent)?;
        let root = subtree
            .arena
            .remove(subtree.root.index)
            .ok_or(TreeError::InvalidNode(subtree.root))?;
        let grafted_root = self.attach(parent, root.value);

        // Reverse push so siblings are attached in their original order
        let mut stack: Vec<(NodeId, NodeId)> = root
            .children
            .iter()
            .rev()
            .map(|&child| (child, grafted_root))
            .collect();
        while let Some((old_idx, new_parent)) = stack.pop() {
            let Some(node) = subtree.arena.remove(old_idx.index) else {
                continue;
            };
            let new_idx = self.attach(new_parent, node.value);
            stack.extend(node.children.iter().rev().map(|&child| (child, new_idx)));
        }

        debug!("grafted subtree at {:?} under {:?}", grafted_root, parent);
        Ok(grafted_root)
    }

    /// Number of levels in the tree; a lone root has depth 1.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 1)];
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                stack.extend(node.children.iter().map(|&child| (child, depth + 1)));
            }
        }
        max_depth
    }

    fn ensure(&self, idx: NodeId) -> TreeResult<()> {
        if self.contains(idx) {
            Ok(())
        } else {
            Err(TreeError::InvalidNode(idx))
        }
    }

    /// Caller guarantees `parent` is live in this tree.
    fn attach(&mut self, parent: NodeId, value: T) -> NodeId {
        let index = self.arena.insert(TreeNode {
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        let idx = NodeId {
            tree: self.token,
            index,
        };
        if let Some(parent_node) = self.arena.get_mut(parent.index) {
            parent_node.children.push(idx);
        }
        trace!("attached {:?} under {:?}", idx, parent);
        idx
    }
}

impl<T: Clone> TreeArena<T> {
    /// Deep copy of the subtree rooted at `idx` as a new, unrelated tree; the
    /// copy's root has no parent and ids of `self` are not valid in it.
    #[instrument(level = "debug", skip(self))]
    pub fn subtree(&self, idx: NodeId) -> TreeResult<TreeArena<T>> {
        let start = self.get_node(idx).ok_or(TreeError::InvalidNode(idx))?;
        let mut copy = TreeArena::new(start.value.clone());
        let copy_root = copy.root;

        let mut stack: Vec<(NodeId, NodeId)> = start
            .children
            .iter()
            .rev()
            .map(|&child| (child, copy_root))
            .collect();
        while let Some((old_idx, new_parent)) = stack.pop() {
            if let Some(node) = self.get_node(old_idx) {
                let new_idx = copy.attach(new_parent, node.value.clone());
                stack.extend(node.children.iter().rev().map(|&child| (child, new_idx)));
            }
        }
        Ok(copy)
    }
}
