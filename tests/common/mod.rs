//! Reference trees shared by the integration tests.
//!
//! ```text
//! 0 ── 11 ── 111            (ref_tree2: 111 ── 1111 ── {11111, 11112})
//!   │     └─ 112
//!   └─ 12 ── 121 ── 1211 ── {12111, 12112}
//!         └─ 122
//! ```

#![allow(dead_code)]

use std::collections::HashMap;

use neurotree::{NodeId, NodeRef, TreeArena};

#[derive(Clone)]
pub struct RefTree {
    pub tree: TreeArena<i32>,
    ids: HashMap<i32, NodeId>,
}

impl RefTree {
    pub fn node(&self, value: i32) -> NodeRef<'_, i32> {
        self.tree.node(self.ids[&value]).unwrap()
    }

    fn add(&mut self, parent: i32, value: i32) {
        let id = self.tree.add_child(self.ids[&parent], value).unwrap();
        self.ids.insert(value, id);
    }
}

pub fn build_ref_tree() -> RefTree {
    neurotree::util::testing::init_test_setup();
    let tree = TreeArena::new(0);
    let ids = HashMap::from([(0, tree.root_id())]);
    let mut ref_tree = RefTree { tree, ids };
    for (parent, value) in [
        (0, 11),
        (0, 12),
        (11, 111),
        (11, 112),
        (12, 121),
        (12, 122),
        (121, 1211),
        (1211, 12111),
        (1211, 12112),
    ] {
        ref_tree.add(parent, value);
    }
    ref_tree
}

/// Deep copy of the reference tree extended with `111 -> 1111 -> {11111, 11112}`.
pub fn build_ref_tree2() -> RefTree {
    let original = build_ref_tree();
    let mut ref_tree = original.clone();
    ref_tree.add(111, 1111);
    ref_tree.add(1111, 11111);
    ref_tree.add(1111, 11112);
    assert_eq!(original.tree.len(), 10);
    ref_tree
}

pub fn vals<'a>(nodes: impl IntoIterator<Item = NodeRef<'a, i32>>) -> Vec<i32> {
    neurotree::val_iter(nodes).copied().collect()
}

pub fn pairs<'a>(segments: impl IntoIterator<Item = (&'a i32, &'a i32)>) -> Vec<(i32, i32)> {
    segments.into_iter().map(|(a, b)| (*a, *b)).collect()
}
