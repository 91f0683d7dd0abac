use keel::{Graph, GraphError};
use petgraph::graphmap::{DiGraphMap, UnGraphMap};
use petgraph::visit::Bfs as OracleBfs;
use std::collections::HashSet;

fn diamond(directed: bool) -> Graph<&'static str> {
    let mut graph = Graph::with_direction(directed);
    for (u, v) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
        graph.add_edge(u, v);
    }
    graph
}

#[test]
fn test_undirected_bfs_and_dfs_cover_diamond() {
    let graph = diamond(false);

    for order in [graph.bfs(&"A").unwrap(), graph.dfs(&"A").unwrap()] {
        assert_eq!(order[0], "A");
        for v in ["B", "C", "D"] {
            assert!(order.contains(&v), "{v} missing from {order:?}");
        }
        assert_eq!(order.len(), 4);
    }
}

#[test]
fn test_directed_edge_is_one_way() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B");

    let from_a: Vec<_> = graph.neighbors(&"A").unwrap().collect();
    let from_b: Vec<_> = graph.neighbors(&"B").unwrap().collect();
    assert!(from_a.contains(&&"B"));
    assert!(!from_b.contains(&&"A"));
}

#[test]
fn test_add_vertex_then_edge() {
    let mut graph = Graph::new();
    graph.add_vertex("A");
    graph.add_edge("A", "B");

    assert!(graph.contains_vertex(&"A"));
    assert!(graph.contains_vertex(&"B"));
    assert!(graph.has_edge(&"A", &"B"));
}

#[test]
fn test_undirected_edges_are_symmetric() {
    let edges = [(1, 2), (2, 3), (4, 1), (5, 5), (3, 6), (6, 2)];

    let mut undirected = Graph::new();
    let mut directed = Graph::directed();
    for (u, v) in edges {
        undirected.add_edge(u, v);
        directed.add_edge(u, v);
    }

    for (u, v) in edges {
        assert!(undirected.has_edge(&u, &v));
        assert!(undirected.has_edge(&v, &u));
        assert!(directed.has_edge(&u, &v));
        if u != v {
            assert!(!directed.has_edge(&v, &u));
        }
    }
}

#[test]
fn test_unknown_start_vertex_error() {
    let graph = diamond(true);
    let err = graph.bfs(&"nowhere").unwrap_err();
    assert_eq!(err, GraphError::VertexNotFound);
    assert_eq!(err.to_string(), "start vertex is not present in the graph");
    assert!(graph.dfs_iter(&"nowhere").is_err());
}

#[test]
fn test_reachability_matches_petgraph() {
    let edges: &[(u8, u8)] = &[
        (0, 1),
        (1, 2),
        (2, 0),
        (3, 4),
        (4, 5),
        (6, 6),
        (7, 3),
        (2, 7),
        (8, 9),
    ];

    let mut directed = Graph::directed();
    let mut undirected = Graph::new();
    let mut oracle_directed = DiGraphMap::<u8, ()>::new();
    let mut oracle_undirected = UnGraphMap::<u8, ()>::new();
    for &(u, v) in edges {
        directed.add_edge(u, v);
        undirected.add_edge(u, v);
        oracle_directed.add_edge(u, v, ());
        oracle_undirected.add_edge(u, v, ());
    }

    for start in 0..10u8 {
        let mut expected = HashSet::new();
        let mut walk = OracleBfs::new(&oracle_directed, start);
        while let Some(v) = walk.next(&oracle_directed) {
            expected.insert(v);
        }
        let bfs: HashSet<u8> = directed.bfs(&start).unwrap().into_iter().collect();
        let dfs: HashSet<u8> = directed.dfs(&start).unwrap().into_iter().collect();
        assert_eq!(bfs, expected, "directed bfs from {start}");
        assert_eq!(dfs, expected, "directed dfs from {start}");

        let mut expected = HashSet::new();
        let mut walk = OracleBfs::new(&oracle_undirected, start);
        while let Some(v) = walk.next(&oracle_undirected) {
            expected.insert(v);
        }
        let bfs: HashSet<u8> = undirected.bfs(&start).unwrap().into_iter().collect();
        let dfs: HashSet<u8> = undirected.dfs(&start).unwrap().into_iter().collect();
        assert_eq!(bfs, expected, "undirected bfs from {start}");
        assert_eq!(dfs, expected, "undirected dfs from {start}");
    }
}

#[test]
fn test_bfs_visits_by_distance() {
    // Ring of 8 vertices: distance from 0 grows to 4 and back.
    let mut graph = Graph::new();
    for i in 0..8u32 {
        graph.add_edge(i, (i + 1) % 8);
    }
    let order = graph.bfs(&0).unwrap();
    let distance = |v: u32| v.min(8 - v);
    assert!(order.windows(2).all(|w| distance(w[0]) <= distance(w[1])));
    assert_eq!(order.last(), Some(&4));
}

#[test]
fn test_owned_string_vertices() {
    let mut graph: Graph<String> = Graph::new();
    graph.add_edge("home".to_string(), "work".to_string());
    graph.add_edge("work".to_string(), "gym".to_string());

    let order = graph.dfs(&"home".to_string()).unwrap();
    assert_eq!(order, vec!["home", "work", "gym"]);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.vertex_count(), 3);
}
