use crate::LayoutOptions;
use crate::geometry::{label_anchor, trimmed_segment};
use crate::model::{GeometricEdge, Point, PositionedNode, Scene};
use rustc_hash::FxHashMap;
use topograph_core::{Node, NodeKind, NodeRef, TopologyGraph};

/// Places every node by its kind's rule and trims every edge to the node boundaries.
///
/// Edges naming a node that is not part of the graph are left out of the scene.
pub fn layout_graph(graph: &TopologyGraph, options: &LayoutOptions) -> Scene {
    let access_points = graph.nodes_of_kind(NodeKind::AccessPoint).count();

    let nodes: Vec<PositionedNode> = graph
        .nodes
        .iter()
        .map(|node| position_node(node, access_points, options))
        .collect();

    let by_ref: FxHashMap<NodeRef, usize> = nodes
        .iter()
        .enumerate()
        .map(|(idx, n)| (n.node, idx))
        .collect();

    let mut edges = Vec::with_capacity(graph.edges.len());
    for edge in &graph.edges {
        let (Some(&si), Some(&ti)) = (by_ref.get(&edge.source), by_ref.get(&edge.target)) else {
            tracing::debug!(
                source = %edge.source,
                target = %edge.target,
                "excluding edge with an endpoint outside the positioned node set"
            );
            continue;
        };
        let (source, target) = (&nodes[si], &nodes[ti]);
        let (start, end) =
            trimmed_segment(source.center(), source.radius, target.center(), target.radius);
        let label = (!edge.interface_label.is_empty())
            .then(|| label_anchor(start, end, options.label_offset));

        edges.push(GeometricEdge {
            source: edge.source,
            target: edge.target,
            category: edge.category,
            interface_label: edge.interface_label.clone(),
            style: edge.style.clone(),
            start,
            end,
            label,
        });
    }

    tracing::trace!(
        nodes = nodes.len(),
        edges = edges.len(),
        dropped = graph.edges.len() - edges.len(),
        "laid out topology scene"
    );

    Scene {
        width: options.canvas_width,
        height: options.canvas_height,
        nodes,
        edges,
    }
}

fn position_node(node: &Node, access_points: usize, options: &LayoutOptions) -> PositionedNode {
    let kind = node.node.kind;
    let center = match kind {
        NodeKind::Gateway => gateway_position(node, options),
        NodeKind::AccessPoint => access_point_position(node.node.index, access_points, options),
        NodeKind::Terminal => {
            let ap = access_point_position(node.node.index, access_points, options);
            Point::new(ap.x - options.terminal_offset, ap.y)
        }
        NodeKind::Egress => Point::new(
            options.canvas_width * options.egress_x,
            options.canvas_height * options.egress_y,
        ),
    };

    PositionedNode {
        node: node.node,
        display_name: node.display_name.clone(),
        x: center.x,
        y: center.y,
        radius: options.radii.for_kind(kind),
    }
}

/// Centred cluster with the vertical axis flipped: larger input `y` renders higher up.
fn gateway_position(node: &Node, options: &LayoutOptions) -> Point {
    let coord = node.coord.unwrap_or_default();
    Point::new(
        options.canvas_width * 0.5 + (coord.x - 0.5) * options.gateway_spread,
        (1.0 - coord.y) * options.canvas_height,
    )
}

/// Left column, evenly spread over the configured vertical band. A single access point sits
/// at the top of the band.
fn access_point_position(index: usize, count: usize, options: &LayoutOptions) -> Point {
    let steps = count.saturating_sub(1).max(1) as f64;
    Point::new(
        options.canvas_width * options.access_x,
        options.canvas_height * (options.access_top + index as f64 * options.access_span / steps),
    )
}
