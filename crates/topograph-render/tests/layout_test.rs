use std::collections::BTreeMap;
use std::path::PathBuf;
use topograph_core::{
    Configuration, Edge, EdgeStyle, ExplicitLink, GatewayCoord, LinkCategory, NodeKind, NodeRef,
    parse_configuration_json, synthesize,
};
use topograph_render::{LayoutOptions, Point, Scene, layout_graph};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture_config(name: &str) -> Configuration {
    let path = workspace_root().join("fixtures").join(name);
    let text = std::fs::read_to_string(&path).expect("fixture");
    parse_configuration_json(&text).expect("valid configuration")
}

fn layout(config: &Configuration) -> Scene {
    layout_graph(&synthesize(config), &LayoutOptions::default())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn assert_at(scene: &Scene, node: NodeRef, x: f64, y: f64) {
    let n = scene.node(node).unwrap_or_else(|| panic!("{node} missing"));
    assert_close(n.x, x);
    assert_close(n.y, y);
}

#[test]
fn single_gateway_scenario_positions() {
    let scene = layout(&fixture_config("single_gateway.json"));

    assert_eq!(scene.width, 800.0);
    assert_eq!(scene.height, 500.0);
    assert_eq!(scene.nodes.len(), 4);
    assert_at(&scene, NodeRef::gateway(0), 400.0, 250.0);
    assert_at(&scene, NodeRef::access_point(0), 120.0, 100.0);
    assert_at(&scene, NodeRef::terminal(0), 70.0, 100.0);
    assert_at(&scene, NodeRef::EGRESS, 680.0, 250.0);

    let labels: Vec<(Option<LinkCategory>, &str)> = scene
        .edges
        .iter()
        .map(|e| (e.category, e.interface_label.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            (Some(LinkCategory::AccessGateway), "N3"),
            (Some(LinkCategory::GatewayEgress), "N6"),
            (Some(LinkCategory::TerminalAccess), ""),
        ]
    );
    assert!(scene.edges[0].label.is_some());
    assert!(scene.edges[2].label.is_none());
}

#[test]
fn reference_topology_positions() {
    let scene = layout(&fixture_config("static_topology.json"));

    assert_at(&scene, NodeRef::gateway(0), 340.0, 400.0);
    assert_at(&scene, NodeRef::gateway(1), 460.0, 400.0);
    assert_at(&scene, NodeRef::gateway(2), 340.0, 100.0);
    assert_at(&scene, NodeRef::gateway(3), 460.0, 100.0);
    assert_at(&scene, NodeRef::gateway(4), 400.0, 250.0);

    assert_at(&scene, NodeRef::access_point(0), 120.0, 100.0);
    assert_at(&scene, NodeRef::access_point(1), 120.0, 250.0);
    assert_at(&scene, NodeRef::access_point(2), 120.0, 400.0);
    assert_at(&scene, NodeRef::terminal(2), 70.0, 400.0);

    let egress = scene.node(NodeRef::EGRESS).unwrap();
    assert_eq!(egress.display_name, "Core Network");
    assert_eq!(egress.radius, 20.0);
}

#[test]
fn every_edge_touches_its_node_boundaries() {
    for name in ["static_topology.json", "single_gateway.json", "saved_document.json"] {
        let scene = layout(&fixture_config(name));
        assert!(!scene.edges.is_empty());
        for e in &scene.edges {
            let source = scene.node(e.source).unwrap();
            let target = scene.node(e.target).unwrap();
            assert_close(source.center().distance_to(e.start), source.radius);
            assert_close(target.center().distance_to(e.end), target.radius);
        }
    }
}

#[test]
fn interface_labels_sit_above_segment_midpoints() {
    let scene = layout(&fixture_config("static_topology.json"));
    for e in &scene.edges {
        match e.label {
            Some(anchor) => {
                let mid = e.start.midpoint(e.end);
                assert_close(anchor.x, mid.x);
                assert_close(anchor.y, mid.y - 8.0);
            }
            None => assert!(e.interface_label.is_empty()),
        }
    }
}

#[test]
fn terminals_match_access_points() {
    let mut config = Configuration::reference_topology();
    config.access_assignments = (0..7).map(|i| (i, vec![i % 5])).collect();
    let scene = layout(&config);

    assert_eq!(scene.nodes_of_kind(NodeKind::AccessPoint).count(), 7);
    assert_eq!(scene.nodes_of_kind(NodeKind::Terminal).count(), 7);
    assert_eq!(scene.edges_in(LinkCategory::TerminalAccess).count(), 7);

    // Evenly spread between 20% and 80% of the height.
    assert_at(&scene, NodeRef::access_point(0), 120.0, 100.0);
    assert_at(&scene, NodeRef::access_point(3), 120.0, 250.0);
    assert_at(&scene, NodeRef::access_point(6), 120.0, 400.0);
    assert_at(&scene, NodeRef::terminal(6), 70.0, 400.0);
}

#[test]
fn access_gateway_edges_are_unique_per_pair() {
    let mut config = fixture_config("static_topology.json");
    config
        .explicit_links
        .push(ExplicitLink::new("gNB 1", "UPF 5").with_type("gnb-upf"));
    config
        .explicit_links
        .push(ExplicitLink::new("UPF 1", "gNB 1").with_type("gnb-upf"));
    let scene = layout(&config);

    for (&access, gateways) in &config.access_assignments {
        for &gateway in gateways {
            let count = scene
                .edges_in(LinkCategory::AccessGateway)
                .filter(|e| {
                    e.source.pair_key(e.target)
                        == NodeRef::access_point(access).pair_key(NodeRef::gateway(gateway))
                })
                .count();
            assert_eq!(count, 1, "gNB {} <-> UPF {}", access + 1, gateway + 1);
        }
    }
}

#[test]
fn out_of_range_explicit_link_is_dropped() {
    let mut config = fixture_config("single_gateway.json");
    config.gateway_coords.push(GatewayCoord::new(0.2, 0.2));
    config.explicit_links = vec![ExplicitLink::new("UPF 99", "gNB 1")];
    let scene = layout(&config);
    assert_eq!(scene.edges.len(), 3);
}

#[test]
fn edges_to_missing_nodes_are_excluded() {
    let mut config = fixture_config("single_gateway.json");
    // Gateway 3 does not exist, and access point 5 is beyond the single assignment entry.
    config.access_assignments = BTreeMap::from([(0, vec![0, 3])]);
    let mut graph = synthesize(&config);
    graph.edges.push(Edge::new(
        NodeRef::access_point(5),
        NodeRef::gateway(0),
        Some(LinkCategory::AccessGateway),
        EdgeStyle::solid("#d97706", 2.0),
    ));
    assert_eq!(graph.edges.len(), 5);

    let scene = layout_graph(&graph, &LayoutOptions::default());
    assert_eq!(scene.edges.len(), 3);
    for e in &scene.edges {
        assert!(scene.node(e.source).is_some() && scene.node(e.target).is_some());
    }
}

#[test]
fn coincident_nodes_produce_a_degenerate_segment() {
    let mut config = Configuration::default();
    config.gateway_coords = vec![GatewayCoord::new(0.5, 0.5), GatewayCoord::new(0.5, 0.5)];
    config.explicit_links = vec![ExplicitLink::new("UPF 1", "UPF 2")];
    let scene = layout(&config);

    assert_eq!(scene.edges.len(), 1);
    let e = &scene.edges[0];
    assert_eq!(e.start, Point::new(400.0, 250.0));
    assert_eq!(e.end, Point::new(400.0, 250.0));
    assert!(e.start.x.is_finite() && e.start.y.is_finite());
}

#[test]
fn empty_configuration_lays_out_only_the_egress() {
    let scene = layout(&Configuration::default());
    assert_eq!(scene.nodes.len(), 1);
    assert_at(&scene, NodeRef::EGRESS, 680.0, 250.0);
    assert!(scene.edges.is_empty());
}

#[test]
fn layout_is_deterministic() {
    let config = fixture_config("saved_document.json");
    let a = layout(&config);
    let b = layout(&config);
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn layout_options_scale_the_canvas() {
    let path = workspace_root().join("fixtures").join("layout_options.json");
    let options = LayoutOptions::from_json(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(options.radii.gateway, 24.0);
    assert_eq!(options.radii.terminal, 12.0);
    assert_eq!(options.gateway_spread, 300.0);

    let scene = layout_graph(
        &synthesize(&fixture_config("single_gateway.json")),
        &options,
    );
    assert_eq!((scene.width, scene.height), (1000.0, 600.0));
    assert_at(&scene, NodeRef::gateway(0), 500.0, 300.0);
    assert_at(&scene, NodeRef::EGRESS, 850.0, 300.0);
    assert_eq!(scene.node(NodeRef::gateway(0)).unwrap().radius, 24.0);
}

#[test]
fn content_bounds_cover_node_discs() {
    let scene = layout(&fixture_config("single_gateway.json"));
    let b = scene.content_bounds().unwrap();
    // Terminal (x=70, r=12), access point (y=100, r=16), egress (x=680, r=20).
    assert_close(b.min_x, 58.0);
    assert_close(b.max_x, 700.0);
    assert_close(b.min_y, 84.0);
    assert_close(b.max_y, 270.0);
}

#[test]
fn non_contiguous_assignment_keys_drop_edges_of_the_missing_access_point() {
    let mut config = fixture_config("single_gateway.json");
    config.access_assignments = BTreeMap::from([(0, vec![0]), (5, vec![0])]);

    // Two entries create gNB 1 and gNB 2; key 5 names gNB 6, which has no node.
    let graph = synthesize(&config);
    assert_eq!(graph.nodes_of_kind(NodeKind::AccessPoint).count(), 2);
    assert!(
        graph
            .edges
            .iter()
            .any(|e| e.source == NodeRef::access_point(5))
    );

    let scene = layout_graph(&graph, &LayoutOptions::default());
    assert_eq!(scene.edges.len(), graph.edges.len() - 1);
    assert!(
        scene
            .edges
            .iter()
            .all(|e| e.source != NodeRef::access_point(5) && e.target != NodeRef::access_point(5))
    );
    assert_eq!(scene.edges_in(LinkCategory::AccessGateway).count(), 1);
    assert_eq!(scene.edges_in(LinkCategory::TerminalAccess).count(), 2);
    // gNB 2 is placed but carries no N3 edge.
    assert_at(&scene, NodeRef::access_point(1), 120.0, 400.0);
    assert!(
        scene
            .edges_in(LinkCategory::AccessGateway)
            .all(|e| e.source != NodeRef::access_point(1))
    );
}
