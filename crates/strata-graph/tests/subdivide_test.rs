use strata_graph::{Error, Graph, NodeKind};

#[test]
fn subdivide_out_edges_routes_an_edge_through_a_dummy() {
    let mut g: Graph<&str, &str> = Graph::new();
    let a = g.add_node("a");
    let c = g.add_node("c");
    let s = g.add_semantic_edge(a, c, "ac").unwrap();
    g.build_adjacency().unwrap();
    let e = g.semantic_edge(s).unwrap().layout_edge().unwrap();

    let dummies = g.subdivide_out_edges(a, &[e], 1).unwrap();

    assert_eq!(dummies.len(), 1);
    let d = dummies[0];
    let dummy = g.node(d).unwrap();
    assert!(dummy.is_dummy());
    assert_eq!(dummy.payload(), None);
    assert_eq!(dummy.layer(), Some(1));
    assert_eq!(dummy.predecessors().collect::<Vec<_>>(), vec![a]);
    assert_eq!(dummy.successors().collect::<Vec<_>>(), vec![c]);
    assert_eq!(dummy.kind(), &NodeKind::Dummy);
    assert_eq!(dummy.in_edges().collect::<Vec<_>>(), vec![e]);

    assert_eq!(g.node(a).unwrap().successors().collect::<Vec<_>>(), vec![d]);
    assert_eq!(g.node(c).unwrap().predecessors().collect::<Vec<_>>(), vec![d]);
    assert_eq!(g.edge(e).unwrap().to(), d);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.semantic_edge(s).unwrap().path(), &[a, d, c]);
    assert_eq!(g.dummy_count(), 1);
    g.check_adjacency().unwrap();
}

#[test]
fn subdivide_out_edges_leaves_unlisted_edges_alone() {
    let mut g: Graph<&str, &str> = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let c = g.add_node("c");
    g.add_semantic_edge(a, b, "ab").unwrap();
    let ac = g.add_semantic_edge(a, c, "ac").unwrap();
    g.build_adjacency().unwrap();
    let e = g.semantic_edge(ac).unwrap().layout_edge().unwrap();

    let dummies = g.subdivide_out_edges(a, &[e], 1).unwrap();

    let succ: Vec<_> = g.node(a).unwrap().successors().collect();
    assert_eq!(succ, vec![b, dummies[0]]);
    g.check_adjacency().unwrap();
}

#[test]
fn subdivide_out_edges_rejects_edges_of_another_node() {
    let mut g: Graph<&str, &str> = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let c = g.add_node("c");
    g.add_semantic_edge(a, b, "ab").unwrap();
    let bc = g.add_semantic_edge(b, c, "bc").unwrap();
    g.build_adjacency().unwrap();
    let e = g.semantic_edge(bc).unwrap().layout_edge().unwrap();

    assert!(matches!(
        g.subdivide_out_edges(a, &[e], 0),
        Err(Error::ForeignEdge { .. })
    ));
    assert_eq!(g.dummy_count(), 0);
}

#[test]
fn subdivide_out_edges_leaves_the_graph_untouched_when_rejected() {
    let mut g: Graph<&str, &str> = Graph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let c = g.add_node("c");
    let ac = g.add_semantic_edge(a, c, "ac").unwrap();
    let bc = g.add_semantic_edge(b, c, "bc").unwrap();
    g.build_adjacency().unwrap();
    let own = g.semantic_edge(ac).unwrap().layout_edge().unwrap();
    let foreign = g.semantic_edge(bc).unwrap().layout_edge().unwrap();

    assert!(matches!(
        g.subdivide_out_edges(a, &[own, foreign], 1),
        Err(Error::ForeignEdge { edge, .. }) if edge == foreign
    ));
    assert_eq!(g.dummy_count(), 0);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge(own).unwrap().to(), c);
    assert_eq!(g.semantic_edge(ac).unwrap().path(), &[a, c]);
    assert!(g.node(c).unwrap().has_predecessor(a));
    g.check_adjacency().unwrap();
}

#[test]
fn sync_bundled_paths_copies_the_representative_path() {
    let mut g: Graph<&str, &str> = Graph::new();
    let a = g.add_node("a");
    let c = g.add_node("c");
    let first = g.add_semantic_edge(a, c, "first").unwrap();
    let second = g.add_semantic_edge(a, c, "second").unwrap();
    g.build_adjacency().unwrap();
    let e = g.semantic_edge(first).unwrap().layout_edge().unwrap();
    let d = g.subdivide_out_edges(a, &[e], 1).unwrap()[0];

    assert_eq!(g.semantic_edge(second).unwrap().path(), &[a, c]);
    g.sync_bundled_paths();
    assert_eq!(g.semantic_edge(second).unwrap().path(), &[a, d, c]);
}

#[test]
fn reset_layout_removes_dummies_and_restores_paths() {
    let mut g: Graph<&str, &str> = Graph::new();
    let a = g.add_node("a");
    let c = g.add_node("c");
    let s = g.add_semantic_edge(a, c, "ac").unwrap();
    g.build_adjacency().unwrap();
    let e = g.semantic_edge(s).unwrap().layout_edge().unwrap();
    g.subdivide_out_edges(a, &[e], 1).unwrap();

    g.reset_layout();

    assert_eq!(g.node_count(), 2);
    assert_eq!(g.dummy_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.semantic_edge(s).unwrap().path(), &[a, c]);
    assert!(!g.has_layout_state());
}
