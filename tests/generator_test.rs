//! Segments, triplets and sections on the reference trees.

mod common;

use rstest::{fixture, rstest};

use common::{build_ref_tree, build_ref_tree2, pairs, vals, RefTree};
use neurotree::{
    iter_leaf, iter_preorder, iter_section, iter_section_end_point, iter_segment,
    iter_segment_by, iter_triplet, iter_upstream, segment_iter, TraversalOrder, TreeNodeConvert,
};

#[fixture]
fn ref_tree() -> RefTree {
    build_ref_tree()
}

#[fixture]
fn ref_tree2() -> RefTree {
    build_ref_tree2()
}

// ============================================================
// Segments
// ============================================================

#[rstest]
#[case(0, vec![(0, 11), (11, 111), (11, 112), (0, 12), (12, 121), (121, 1211), (1211, 12111), (1211, 12112), (12, 122)])]
#[case(11, vec![(0, 11), (11, 111), (11, 112)])]
#[case(111, vec![(11, 111)])]
#[case(112, vec![(11, 112)])]
#[case(12, vec![(0, 12), (12, 121), (121, 1211), (1211, 12111), (1211, 12112), (12, 122)])]
#[case(121, vec![(12, 121), (121, 1211), (1211, 12111), (1211, 12112)])]
#[case(122, vec![(12, 122)])]
fn given_start_node_when_iterating_segments_then_parent_child_pairs_in_preorder(
    ref_tree: RefTree,
    #[case] start: i32,
    #[case] expected: Vec<(i32, i32)>,
) {
    assert_eq!(pairs(iter_segment(ref_tree.node(start))), expected);
}

#[rstest]
fn given_whole_tree_when_iterating_segments_then_one_per_non_root_node(ref_tree2: RefTree) {
    assert_eq!(
        iter_segment(ref_tree2.tree.root()).count(),
        ref_tree2.tree.len() - 1
    );
}

#[rstest]
fn given_leaves_when_iterating_segments_upstream_then_edges_towards_root(ref_tree2: RefTree) {
    let ref_paths = vec![
        vec![(1111, 11111), (111, 1111), (11, 111), (0, 11)],
        vec![(1111, 11112), (111, 1111), (11, 111), (0, 11)],
        vec![(11, 112), (0, 11)],
        vec![(1211, 12111), (121, 1211), (12, 121), (0, 12)],
        vec![(1211, 12112), (121, 1211), (12, 121), (0, 12)],
        vec![(12, 122), (0, 12)],
    ];

    let leaves: Vec<_> = iter_leaf(ref_tree2.tree.root()).collect();
    assert_eq!(leaves.len(), ref_paths.len());

    for (leaf, expected) in leaves.iter().zip(&ref_paths) {
        assert_eq!(
            &pairs(iter_segment_by(*leaf, TraversalOrder::Upstream)),
            expected
        );
        assert_eq!(&pairs(segment_iter(iter_upstream(*leaf))), expected);
    }
}

#[rstest]
fn given_postorder_when_iterating_segments_then_follows_postorder(ref_tree: RefTree) {
    assert_eq!(
        pairs(iter_segment_by(ref_tree.node(11), TraversalOrder::Postorder)),
        vec![(11, 111), (11, 112), (0, 11)]
    );
}

// ============================================================
// Triplets
// ============================================================

#[rstest]
fn given_extended_tree_when_iterating_triplets_then_reference_windows(ref_tree2: RefTree) {
    let expected = vec![
        [0, 11, 111],
        [0, 11, 112],
        [11, 111, 1111],
        [111, 1111, 11111],
        [111, 1111, 11112],
        [0, 12, 121],
        [0, 12, 122],
        [12, 121, 1211],
        [121, 1211, 12111],
        [121, 1211, 12112],
    ];
    let triplets: Vec<[i32; 3]> = iter_triplet(ref_tree2.tree.root())
        .map(|triplet| triplet.map(|node| *node.value()))
        .collect();
    assert_eq!(triplets, expected);
}

#[rstest]
fn given_any_triplet_when_checking_links_then_consecutive_lineage(ref_tree2: RefTree) {
    for [grandparent, parent, child] in iter_triplet(ref_tree2.tree.root()) {
        assert_eq!(child.parent(), Some(parent));
        assert_eq!(parent.parent(), Some(grandparent));
    }
}

// ============================================================
// Sections
// ============================================================

#[rstest]
fn given_extended_tree_when_iterating_sections_then_reference_sections(ref_tree2: RefTree) {
    let expected: Vec<Vec<i32>> = vec![
        vec![0, 11],
        vec![11, 111, 1111],
        vec![1111, 11111],
        vec![1111, 11112],
        vec![11, 112],
        vec![0, 12],
        vec![12, 121, 1211],
        vec![1211, 12111],
        vec![1211, 12112],
        vec![12, 122],
    ];
    let sections: Vec<Vec<i32>> = iter_section(ref_tree2.tree.root()).map(vals).collect();
    assert_eq!(sections, expected);
}

#[rstest]
fn given_inner_start_when_iterating_sections_then_bounded_by_start(ref_tree2: RefTree) {
    let sections: Vec<Vec<i32>> = iter_section(ref_tree2.node(12)).map(vals).collect();
    assert_eq!(
        sections,
        vec![
            vec![12, 121, 1211],
            vec![1211, 12111],
            vec![1211, 12112],
            vec![12, 122],
        ]
    );
}

#[rstest]
fn given_sections_when_taking_last_nodes_then_section_end_points(ref_tree2: RefTree) {
    let ends: Vec<i32> = iter_section(ref_tree2.tree.root())
        .filter_map(|section| section.last().map(|node| *node.value()))
        .collect();
    assert_eq!(ends, vals(iter_section_end_point(ref_tree2.tree.root())));
}

#[rstest]
fn given_sections_when_chaining_then_every_edge_covered_once(ref_tree2: RefTree) {
    let section_edges: usize = iter_section(ref_tree2.tree.root())
        .map(|section| section.len() - 1)
        .sum();
    assert_eq!(section_edges, iter_segment(ref_tree2.tree.root()).count());
    assert_eq!(section_edges, iter_preorder(ref_tree2.tree.root()).count() - 1);
}

// ============================================================
// Rendering
// ============================================================

#[rstest]
fn given_reference_tree_when_rendering_then_one_line_per_node(ref_tree2: RefTree) {
    let rendered = ref_tree2.tree.to_tree_string().to_string();
    let labels: Vec<i32> = rendered
        .lines()
        .map(|line| {
            line.trim_start_matches(|c: char| !c.is_ascii_digit())
                .parse()
                .unwrap()
        })
        .collect();
    assert_eq!(labels, vals(iter_preorder(ref_tree2.tree.root())));
}
