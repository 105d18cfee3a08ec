use crate::config::{Configuration, GatewayCoord};
use crate::edge::{Edge, LinkCategory};
use crate::node::{NodeKind, NodeRef};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EGRESS_NAME: &str = "DNS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node: NodeRef,
    pub display_name: String,
    /// Normalized placement input; set for gateways only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coord: Option<GatewayCoord>,
}

/// Canonical node and edge set produced by [`crate::synthesize`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TopologyGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl TopologyGraph {
    /// Builds the node list for a configuration: gateways, access points, terminals, egress.
    pub(crate) fn with_nodes_of(config: &Configuration) -> Self {
        let gateways = config.gateway_count();
        let access_points = config.access_point_count();

        let mut nodes = Vec::with_capacity(gateways + access_points * 2 + 1);
        nodes.extend(config.gateway_coords.iter().enumerate().map(|(i, coord)| Node {
            coord: Some(*coord),
            ..Node::indexed(NodeRef::gateway(i))
        }));
        nodes.extend((0..access_points).map(|i| Node::indexed(NodeRef::access_point(i))));
        nodes.extend((0..access_points).map(|i| Node::indexed(NodeRef::terminal(i))));
        nodes.push(Node {
            node: NodeRef::EGRESS,
            display_name: config.egress_display_name().to_string(),
            coord: None,
        });

        Self {
            nodes,
            edges: Vec::new(),
        }
    }

    pub fn node(&self, node: NodeRef) -> Option<&Node> {
        self.nodes.iter().find(|n| n.node == node)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.node.kind == kind)
    }

    pub fn edges_in(&self, category: LinkCategory) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |e| e.category == Some(category))
    }
}

impl Node {
    fn indexed(node: NodeRef) -> Self {
        Self {
            node,
            display_name: node.to_string(),
            coord: None,
        }
    }
}
