use strata::assign::assign_layers;
use strata::balance::balance_layers;
use strata::{BalanceOptions, Graph, Layering, NodeId};

/// `sources` unconnected sources all feeding one sink, laid out up to layer assignment.
fn fan_in(sources: usize) -> (Graph<String>, Vec<NodeId>, NodeId, Layering) {
    let mut g = Graph::new();
    let ids: Vec<NodeId> = (0..sources).map(|i| g.add_node(format!("s{i}"))).collect();
    let sink = g.add_node("sink".to_string());
    for &v in &ids {
        g.add_semantic_edge(v, sink, ()).unwrap();
    }
    g.build_adjacency().unwrap();
    assign_layers(&mut g).unwrap();
    let layering = Layering::from_graph(&g).unwrap();
    (g, ids, sink, layering)
}

#[test]
fn balance_layers_splits_a_wide_source_layer_by_alternation() {
    let (mut g, ids, sink, mut layering) = fan_in(10);
    assert_eq!(layering.layer_count(), 2);

    let splits = balance_layers(&mut g, &mut layering, &BalanceOptions::default()).unwrap();

    assert_eq!(splits, 1);
    assert_eq!(layering.layer_count(), 3);
    assert_eq!(layering.layer(0).unwrap(), &[sink]);
    let even: Vec<NodeId> = ids.iter().copied().step_by(2).collect();
    let odd: Vec<NodeId> = ids.iter().copied().skip(1).step_by(2).collect();
    assert_eq!(layering.layer(1).unwrap(), even.as_slice());
    assert_eq!(layering.layer(2).unwrap(), odd.as_slice());
    for &v in &even {
        assert_eq!(g.node(v).unwrap().layer(), Some(1));
    }
    for &v in &odd {
        assert_eq!(g.node(v).unwrap().layer(), Some(2));
    }
    assert_eq!(g.node(sink).unwrap().layer(), Some(0));
}

#[test]
fn balance_layers_leaves_narrow_layers_alone() {
    let (mut g, ids, _, mut layering) = fan_in(2);
    let before = layering.clone();

    let splits = balance_layers(&mut g, &mut layering, &BalanceOptions::default()).unwrap();

    assert_eq!(splits, 0);
    assert_eq!(layering, before);
    assert_eq!(g.node(ids[0]).unwrap().layer(), Some(1));
    assert_eq!(g.node(ids[1]).unwrap().layer(), Some(1));
}

#[test]
fn balance_layers_can_be_disabled() {
    let (mut g, _, _, mut layering) = fan_in(10);

    let splits = balance_layers(&mut g, &mut layering, &BalanceOptions::disabled()).unwrap();

    assert_eq!(splits, 0);
    assert_eq!(layering.layer_count(), 2);
}

#[test]
fn balance_layers_never_splits_the_sink_layer() {
    let mut g: Graph<&str> = Graph::new();
    for name in ["a", "b", "c", "d", "e", "f"] {
        g.add_node(name);
    }
    let top = g.add_node("top");
    let first = g.node_ids().next().unwrap();
    g.add_semantic_edge(top, first, ()).unwrap();
    g.build_adjacency().unwrap();
    assign_layers(&mut g).unwrap();
    let mut layering = Layering::from_graph(&g).unwrap();

    let splits = balance_layers(&mut g, &mut layering, &BalanceOptions::default()).unwrap();

    assert_eq!(splits, 0);
    assert_eq!(layering.layer(0).unwrap().len(), 6);
}

#[test]
fn balance_layers_renumbers_layers_above_a_split() {
    // Five sources feed a middle node, which feeds the sink; a top node sits above the sources.
    let mut g: Graph<&str> = Graph::new();
    let sink = g.add_node("sink");
    let mid = g.add_node("mid");
    let top = g.add_node("top");
    g.add_semantic_edge(mid, sink, ()).unwrap();
    let mut sources = Vec::new();
    for name in ["s0", "s1", "s2", "s3", "s4", "s5"] {
        let s = g.add_node(name);
        g.add_semantic_edge(s, mid, ()).unwrap();
        g.add_semantic_edge(top, s, ()).unwrap();
        sources.push(s);
    }
    g.build_adjacency().unwrap();
    assert_eq!(assign_layers(&mut g).unwrap(), 4);
    let mut layering = Layering::from_graph(&g).unwrap();

    let splits = balance_layers(&mut g, &mut layering, &BalanceOptions::default()).unwrap();

    assert_eq!(splits, 1);
    assert_eq!(layering.layer_count(), 5);
    assert_eq!(g.node(sink).unwrap().layer(), Some(0));
    assert_eq!(g.node(mid).unwrap().layer(), Some(1));
    assert_eq!(g.node(sources[0]).unwrap().layer(), Some(2));
    assert_eq!(g.node(sources[1]).unwrap().layer(), Some(3));
    assert_eq!(g.node(top).unwrap().layer(), Some(4));
    for (i, layer) in layering.layers().enumerate() {
        for &v in layer {
            assert_eq!(g.node(v).unwrap().layer(), Some(i));
        }
    }
}

#[test]
fn balance_layers_threshold_is_tunable() {
    let (mut g, _, _, mut layering) = fan_in(4);
    let strict = BalanceOptions {
        threshold: 3.0,
        ..Default::default()
    };

    assert_eq!(balance_layers(&mut g, &mut layering, &strict).unwrap(), 0);
    assert_eq!(layering.layer_count(), 2);
}
