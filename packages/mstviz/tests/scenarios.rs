use mstviz::{
    Algorithm, Decision, Error, Graph, Kruskal, MstAlgorithm, Playback, Prim, Session,
    graph_from_edge_list, kruskal_mst, parse_edge_list, prim_mst,
};

fn nodes_and_edges(
    nodes: &[&'static str],
    edges: &[(&'static str, &'static str, i32)],
) -> Graph<&'static str, i32> {
    Graph::from_nodes_and_edges(nodes.iter().copied(), edges.iter().copied()).unwrap()
}

#[test]
fn disconnected_graph_yields_a_forest() {
    let graph = nodes_and_edges(&["A", "B", "C", "D"], &[("A", "B", 1), ("C", "D", 2)]);
    let run = kruskal_mst(&graph).unwrap();

    assert_eq!(run.trace.accepted_count(), 2);
    assert_eq!(run.result.total_weight, 3);
    assert!(run.result.spans_all_nodes());
    assert!(!run.result.is_spanning_tree());
    let warning = run.result.warning().unwrap();
    assert_eq!(warning.components, 2);
    assert_eq!(warning.total, 4);
}

#[test]
fn equal_weights_keep_input_order() {
    let graph = nodes_and_edges(
        &["A", "B", "C"],
        &[("A", "B", 1), ("B", "C", 1), ("A", "C", 1)],
    );
    let run = kruskal_mst(&graph).unwrap();
    let decisions: Vec<_> = run
        .trace
        .iter()
        .map(|s| (s.from, s.to, s.decision))
        .collect();
    assert_eq!(
        decisions,
        vec![
            ("A", "B", Decision::Accepted),
            ("B", "C", Decision::Accepted),
            ("A", "C", Decision::Rejected),
        ]
    );
    assert_eq!(run.result.total_weight, 2);
}

#[test]
fn edgeless_graph_is_a_two_component_forest_for_both_runners() {
    let graph = nodes_and_edges(&["A", "B"], &[]);
    let runs = [
        Kruskal.run(&graph).unwrap(),
        Prim::default().run(&graph).unwrap(),
    ];
    for run in &runs {
        assert_eq!(run.result.edge_count(), 0);
        assert_eq!(run.result.total_weight, 0);
        assert_eq!(run.result.coverage.components, 2);
        assert!(run.result.warning().is_some());
    }
}

#[test]
fn unknown_start_node_fails_before_any_step() {
    let graph = nodes_and_edges(&["A", "B"], &[("A", "B", 1)]);
    assert!(matches!(
        prim_mst(&graph, Some(&"Z")),
        Err(Error::UnknownStartNode(_))
    ));
}

#[test]
fn authored_graph_through_a_full_session() {
    let edges = parse_edge_list("(0,1,4),(1,2,1),(0,2,3),(2,3,2)", 4).unwrap();
    let graph = graph_from_edge_list(4, &edges, 1).unwrap();

    let mut session = Session::new(&graph);
    let kruskal_steps = session.run_kruskal().unwrap().trace.len();
    let prim_steps = session.run_prim(Some(3)).unwrap().trace.len();
    assert_eq!(kruskal_steps, 4);
    assert_eq!(prim_steps, 3);

    let comparison = session.comparison().unwrap();
    assert!(comparison.weights_agree);
    assert_eq!(comparison.lightest().unwrap().total_weight, 6);

    let prim = session.last(Algorithm::Prim).unwrap();
    let frames = Playback::new(prim).count();
    // start vertex, three (vertex, edge) pairs, finish
    assert_eq!(frames, 8);
}
