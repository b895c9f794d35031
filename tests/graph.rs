use serde_json::{json, Number};
use shortest_path_service::graphs::{
    edge::EdgeRecord, identifier::Identifier, vertex::Vertex, Graph, GraphError,
};

#[test]
fn builds_vertices_and_edges_in_order() {
    let graph = Graph::from_json(json!({
        "vertexes": [
            {"id": "A", "name": "Alpha"},
            {"id": "B", "name": "Bravo"},
        ],
        "edges": [
            {"id": 2, "source": "B", "destination": "A", "weight": 4},
            {"id": 1, "source": "A", "destination": "B", "weight": 1.5},
        ],
    }))
    .unwrap();

    assert_eq!(graph.number_of_vertices(), 2);
    assert_eq!(graph.number_of_edges(), 2);
    assert!(graph.contains(&Identifier::from("A")));
    assert!(!graph.contains(&Identifier::from("C")));

    let records: Vec<EdgeRecord> = graph
        .edges()
        .iter()
        .map(|edge| graph.edge_record(edge))
        .collect();
    assert_eq!(
        records,
        vec![
            EdgeRecord {
                id: Identifier::Integer(2),
                source: Identifier::from("B"),
                destination: Identifier::from("A"),
                weight: Number::from(4),
            },
            EdgeRecord {
                id: Identifier::Integer(1),
                source: Identifier::from("A"),
                destination: Identifier::from("B"),
                weight: Number::from_f64(1.5).unwrap(),
            },
        ]
    );
}

#[test]
fn duplicate_vertex_ids_keep_last_name() {
    let graph = Graph::from_json(json!({
        "vertexes": [
            {"id": 1, "name": "first"},
            {"id": 1, "name": "second"},
        ],
    }))
    .unwrap();

    assert_eq!(graph.number_of_vertices(), 1);
    let index = graph.index_of(&Identifier::Integer(1)).unwrap();
    assert_eq!(graph.vertex(index).name(), "second");
}

#[test]
fn names_may_be_any_value() {
    let graph = Graph::from_json(json!({
        "vertexes": [
            {"id": "A", "name": 5},
            {"id": "B", "name": null},
            {"id": "C", "name": "Charlie"},
        ],
    }))
    .unwrap();

    let name = |id: &str| {
        let index = graph.index_of(&Identifier::from(id)).unwrap();
        graph.vertex(index).name().to_string()
    };
    assert_eq!(name("A"), "5");
    assert_eq!(name("B"), "null");
    assert_eq!(name("C"), "Charlie");
}

#[test]
fn large_unsigned_ids() {
    let graph = Graph::from_json(json!({
        "vertexes": [
            {"id": u64::MAX, "name": "max"},
            {"id": -1, "name": "negative"},
        ],
        "edges": [{"id": u64::MAX, "source": -1, "destination": u64::MAX, "weight": 1}],
    }))
    .unwrap();

    assert!(graph.contains(&Identifier::Unsigned(u64::MAX)));
    assert!(graph.contains(&Identifier::Integer(-1)));
    assert!(Identifier::Integer(i64::MAX) < Identifier::Unsigned(u64::MAX));
    assert_eq!(
        graph.edge_record(&graph.edges()[0]).destination,
        Identifier::Unsigned(u64::MAX)
    );
}

#[test]
fn integer_and_string_ids_differ() {
    let graph = Graph::from_json(json!({
        "vertexes": [{"id": 1, "name": "one"}],
    }))
    .unwrap();

    assert!(graph.contains(&Identifier::Integer(1)));
    assert!(!graph.contains(&Identifier::from("1")));
}

#[test]
fn missing_lists_default_to_empty() {
    let graph = Graph::from_json(json!({})).unwrap();
    assert_eq!(graph.number_of_vertices(), 0);
    assert_eq!(graph.number_of_edges(), 0);

    let graph = Graph::from_json(json!({
        "vertices": [{"id": "A", "name": "A"}],
    }))
    .unwrap();
    assert_eq!(graph.number_of_vertices(), 1);
}

#[test]
fn dangling_source_fails() {
    let result = Graph::from_json(json!({
        "vertexes": [{"id": "A", "name": "A"}],
        "edges": [{"id": 1, "source": "X", "destination": "A", "weight": 1}],
    }));

    assert!(matches!(
        result,
        Err(GraphError::DanglingSource { vertex, .. }) if vertex == Identifier::from("X")
    ));
}

#[test]
fn dangling_destination_fails() {
    let result = Graph::from_json(json!({
        "vertexes": [{"id": "A", "name": "A"}],
        "edges": [
            {"id": 1, "source": "A", "destination": "A", "weight": 1},
            {"id": 2, "source": "A", "destination": "Y", "weight": 1},
        ],
    }));

    assert!(matches!(
        result,
        Err(GraphError::DanglingDestination { edge, .. }) if edge == Identifier::Integer(2)
    ));
}

#[test]
fn malformed_descriptors_fail() {
    let malformed = [
        json!("not a graph"),
        json!({"vertexes": [{"id": "A"}]}),
        json!({"vertexes": [{"name": "A"}]}),
        json!({
            "vertexes": [{"id": "A", "name": "A"}],
            "edges": [{"id": 1, "source": "A", "destination": "A"}],
        }),
        json!({
            "vertexes": [{"id": "A", "name": "A"}],
            "edges": [{"id": 1, "source": "A", "destination": "A", "weight": "heavy"}],
        }),
        json!({"vertexes": [{"id": {"nested": true}, "name": "A"}]}),
    ];

    for description in malformed {
        assert!(matches!(
            Graph::from_json(description),
            Err(GraphError::Malformed(_))
        ));
    }
}

#[test]
fn negative_weights_are_accepted() {
    let graph = Graph::from_json(json!({
        "vertexes": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
        "edges": [{"id": 1, "source": "A", "destination": "B", "weight": -3}],
    }))
    .unwrap();

    assert_eq!(graph.edges()[0].weight(), -3.0);
}

#[test]
fn entities_compare_by_id() {
    assert_eq!(
        Vertex::new(Identifier::from("A"), "one".to_string()),
        Vertex::new(Identifier::from("A"), "two".to_string())
    );
    assert_ne!(
        Vertex::new(Identifier::from("A"), "same".to_string()),
        Vertex::new(Identifier::from("B"), "same".to_string())
    );

    let graph = Graph::from_json(json!({
        "vertexes": [{"id": "A", "name": "A"}, {"id": "B", "name": "B"}],
        "edges": [
            {"id": 7, "source": "A", "destination": "B", "weight": 1},
            {"id": 7, "source": "B", "destination": "A", "weight": 9},
            {"id": 8, "source": "A", "destination": "B", "weight": 1},
        ],
    }))
    .unwrap();

    let edges = graph.edges();
    assert_eq!(edges[0], edges[1]);
    assert_ne!(edges[0], edges[2]);
}
