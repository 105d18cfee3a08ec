use std::path::PathBuf;
use topograph::render::{
    HeadlessError, LayoutOptions, SvgRenderOptions, configuration_from_json,
    layout_options_from_json, render_svg, render_svg_from_json,
};
use topograph::{Configuration, LinkCategory, NodeKind, NodeRef, synthesize_and_layout};

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn fixture_text(name: &str) -> String {
    let path = workspace_root().join("fixtures").join(name);
    std::fs::read_to_string(&path).expect("fixture")
}

#[test]
fn saved_document_runs_through_the_whole_pipeline() {
    let config = configuration_from_json(&fixture_text("saved_document.json")).unwrap();
    assert_eq!(config.gateway_count(), 4);
    assert_eq!(config.egress_name, "Remote Surgery");
    // UPF 1 is the PCA gateway; the intermediate UPF 2 cannot serve gNB 3.
    assert_eq!(config.egress_gateway_connections, vec![0]);
    assert_eq!(config.access_assignments[&2], vec![3]);

    let scene = synthesize_and_layout(&config);
    assert_eq!(scene.nodes_of_kind(NodeKind::Gateway).count(), 4);
    assert_eq!(scene.nodes_of_kind(NodeKind::AccessPoint).count(), 3);
    assert_eq!(scene.nodes_of_kind(NodeKind::Terminal).count(), 3);

    // "UPF 7" does not exist, so only three of the four saved links survive. Saved links carry
    // no type and stay unlabeled.
    let untyped: Vec<_> = scene.edges.iter().filter(|e| e.category.is_none()).collect();
    assert_eq!(untyped.len(), 3);
    assert!(untyped.iter().all(|e| e.interface_label.is_empty() && e.label.is_none()));
    assert_eq!(scene.edges_in(LinkCategory::GatewayGateway).count(), 0);
    assert_eq!(scene.edges_in(LinkCategory::AccessGateway).count(), 4);
    assert_eq!(scene.edges_in(LinkCategory::GatewayEgress).count(), 1);
    assert_eq!(scene.edges_in(LinkCategory::TerminalAccess).count(), 3);
    assert_eq!(scene.edges.len(), 11);

    let pca = scene.node(NodeRef::gateway(0)).unwrap();
    assert!((pca.x - 400.0).abs() < 1e-9);
    assert!((pca.y - 75.0).abs() < 1e-9);
}

#[test]
fn pipeline_output_is_deterministic() {
    let config = Configuration::reference_topology();
    let layout = LayoutOptions::default();
    let svg = SvgRenderOptions::default();

    assert_eq!(synthesize_and_layout(&config), synthesize_and_layout(&config));
    assert_eq!(
        render_svg(&config, &layout, &svg),
        render_svg(&config, &layout, &svg)
    );
}

#[test]
fn rendered_svg_is_well_formed_xml() {
    let svg = render_svg(
        &Configuration::reference_topology(),
        &LayoutOptions::default(),
        &SvgRenderOptions {
            diagram_id: Some("reference".to_string()),
            background: Some("white".to_string()),
        },
    );

    let doc = roxmltree::Document::parse(&svg).expect("svg parses as xml");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.attribute("id"), Some("reference"));
    assert_eq!(root.attribute("viewBox"), Some("0 0 800 500"));

    let lines = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "line")
        .count();
    // 4 gateway links + 6 N3 + 1 N6 + 3 terminal links.
    assert_eq!(lines, 4 + 6 + 1 + 3);

    let node_groups: Vec<&str> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "g")
        .filter_map(|n| n.attribute("id"))
        .collect();
    assert!(node_groups.contains(&"reference-UPF-5"));
    assert!(node_groups.contains(&"reference-DN"));
}

#[test]
fn egress_name_with_markup_is_escaped() {
    let mut config = Configuration::reference_topology();
    config.egress_name = "R&D <lab>".to_string();
    let svg = render_svg(&config, &LayoutOptions::default(), &SvgRenderOptions::default());
    assert!(svg.contains("R&amp;D &lt;lab&gt;"));
    roxmltree::Document::parse(&svg).expect("escaped svg parses");
}

#[test]
fn render_svg_from_json_accepts_every_input_shape() {
    let layout = LayoutOptions::default();
    let svg_opts = SvgRenderOptions::default();
    for name in ["static_topology.json", "single_gateway.json", "saved_document.json"] {
        let svg = render_svg_from_json(&fixture_text(name), &layout, &svg_opts)
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(svg.starts_with("<svg "), "{name}");
    }
}

#[test]
fn invalid_inputs_surface_typed_errors() {
    let err = configuration_from_json("{ not json").unwrap_err();
    assert!(matches!(err, HeadlessError::Config(_)));

    let err = layout_options_from_json(r#"{ "canvasWidth": "wide" }"#).unwrap_err();
    assert!(matches!(err, HeadlessError::LayoutOptions(_)));
    assert!(err.to_string().starts_with("Layout options JSON error"));
}

#[test]
fn layout_options_fixture_scales_the_canvas() {
    let options = layout_options_from_json(&fixture_text("layout_options.json")).unwrap();
    let svg = render_svg(
        &Configuration::reference_topology(),
        &options,
        &SvgRenderOptions::default(),
    );
    assert!(svg.contains(r#"viewBox="0 0 1000 600""#));
    assert!(svg.contains(r#"<circle r="24""#));
}
