use crate::config::{Configuration, ExplicitLink};
use crate::edge::{
    ACCESS_GATEWAY_STROKE, DEFAULT_LINK_STROKE, Edge, EdgeStyle, GATEWAY_EGRESS_STROKE,
    LinkCategory, TERMINAL_ACCESS_STROKE,
};
use crate::graph::TopologyGraph;
use crate::node::{NodeCounts, NodeRef, parse_node_label};
use rustc_hash::FxHashSet;

const LINK_STROKE_WIDTH: f64 = 2.0;
const EGRESS_STROKE_WIDTH: f64 = 3.0;
const TERMINAL_STROKE_WIDTH: f64 = 1.5;

/// Merges explicit links with the implicit edges derived from the assignment and egress tables.
///
/// Order of the output edge list:
/// 1. resolvable explicit links, first occurrence per node pair;
/// 2. access-gateway (`N3`) edges for assigned pairs not already linked;
/// 3. gateway-egress (`N6`) edges, one per connection entry;
/// 4. one dashed terminal-access edge per access point.
pub fn synthesize(config: &Configuration) -> TopologyGraph {
    let mut graph = TopologyGraph::with_nodes_of(config);
    let counts = config.node_counts();
    let mut linked: FxHashSet<(NodeRef, NodeRef)> = FxHashSet::default();

    for link in &config.explicit_links {
        let Some(edge) = resolve_explicit_link(link, counts, &config.egress_name) else {
            tracing::debug!(
                node_a = %link.node_a,
                node_b = %link.node_b,
                "dropping explicit link with an unresolvable endpoint"
            );
            continue;
        };
        if !linked.insert(edge.source.pair_key(edge.target)) {
            tracing::debug!(
                source = %edge.source,
                target = %edge.target,
                "dropping duplicate explicit link"
            );
            continue;
        }
        graph.edges.push(edge);
    }

    for (&access, gateways) in &config.access_assignments {
        let access = NodeRef::access_point(access);
        for &gateway in gateways {
            let gateway = NodeRef::gateway(gateway);
            if !linked.insert(access.pair_key(gateway)) {
                continue;
            }
            graph.edges.push(Edge::new(
                access,
                gateway,
                Some(LinkCategory::AccessGateway),
                EdgeStyle::solid(ACCESS_GATEWAY_STROKE, LINK_STROKE_WIDTH),
            ));
        }
    }

    // Not checked against `linked`: an explicit UPF-DN link and a connection entry both render.
    for &gateway in &config.egress_gateway_connections {
        if gateway >= counts.gateways {
            tracing::debug!(gateway, "skipping egress connection to a missing gateway");
            continue;
        }
        graph.edges.push(Edge::new(
            NodeRef::gateway(gateway),
            NodeRef::EGRESS,
            Some(LinkCategory::GatewayEgress),
            EdgeStyle::solid(GATEWAY_EGRESS_STROKE, EGRESS_STROKE_WIDTH),
        ));
    }

    for i in 0..counts.access_points {
        graph.edges.push(Edge::new(
            NodeRef::terminal(i),
            NodeRef::access_point(i),
            Some(LinkCategory::TerminalAccess),
            EdgeStyle::dashed(TERMINAL_ACCESS_STROKE, TERMINAL_STROKE_WIDTH),
        ));
    }

    tracing::trace!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "synthesized topology graph"
    );
    graph
}

fn resolve_explicit_link(link: &ExplicitLink, counts: NodeCounts, egress: &str) -> Option<Edge> {
    let source = parse_node_label(&link.node_a, counts, egress)?;
    let target = parse_node_label(&link.node_b, counts, egress)?;

    // Only a declared type classifies an explicit link; untyped links stay unlabeled.
    let category = link.link_type.as_deref().and_then(LinkCategory::from_declared);

    let stroke = match category {
        Some(LinkCategory::AccessGateway) => ACCESS_GATEWAY_STROKE,
        _ => link.stroke.as_deref().unwrap_or(DEFAULT_LINK_STROKE),
    };

    Some(Edge::new(
        source,
        target,
        category,
        EdgeStyle::solid(stroke, LINK_STROKE_WIDTH),
    ))
}
