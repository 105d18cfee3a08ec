use crate::graph::DEFAULT_EGRESS_NAME;
use crate::node::NodeCounts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized gateway coordinate; both axes are expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GatewayCoord {
    pub x: f64,
    pub y: f64,
}

impl GatewayCoord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A user-declared link between two labeled nodes (e.g. `"UPF 1"` and `"UPF 5"`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExplicitLink {
    #[serde(rename = "nodeA")]
    pub node_a: String,
    #[serde(rename = "nodeB")]
    pub node_b: String,
    /// Declared link type (`"upf-upf"`, `"gnb-upf"`, `"upf-dns"`, ...). Inferred when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
}

impl ExplicitLink {
    pub fn new(node_a: impl Into<String>, node_b: impl Into<String>) -> Self {
        Self {
            node_a: node_a.into(),
            node_b: node_b.into(),
            link_type: None,
            stroke: None,
        }
    }

    pub fn with_type(mut self, link_type: impl Into<String>) -> Self {
        self.link_type = Some(link_type.into());
        self
    }
}

/// Immutable input snapshot for one synthesis + layout pass.
///
/// Field names follow the camelCase wire format; the form layer's own names
/// (`upfCoords`, `gnbAssignments`, `links`, `dnsName`, `dnsUpfConnections`) are accepted too.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    #[serde(default, alias = "upfCoords")]
    pub gateway_coords: Vec<GatewayCoord>,
    /// Access-point index -> assigned gateway indices. One access point per entry.
    #[serde(default, alias = "gnbAssignments")]
    pub access_assignments: BTreeMap<usize, Vec<usize>>,
    #[serde(default, alias = "links")]
    pub explicit_links: Vec<ExplicitLink>,
    #[serde(default, alias = "dnsName")]
    pub egress_name: String,
    #[serde(default, alias = "dnsUpfConnections")]
    pub egress_gateway_connections: Vec<usize>,
}

impl Configuration {
    pub fn gateway_count(&self) -> usize {
        self.gateway_coords.len()
    }

    pub fn access_point_count(&self) -> usize {
        self.access_assignments.len()
    }

    /// Name shown on the egress node. Link labels match the raw `egress_name` only.
    pub fn egress_display_name(&self) -> &str {
        if self.egress_name.is_empty() {
            DEFAULT_EGRESS_NAME
        } else {
            &self.egress_name
        }
    }

    pub fn node_counts(&self) -> NodeCounts {
        NodeCounts {
            gateways: self.gateway_count(),
            access_points: self.access_point_count(),
        }
    }

    /// The static five-gateway topology served by the simulation backend: four corner
    /// gateways meshed to a central one, three access points, and the centre gateway on the
    /// data network.
    pub fn reference_topology() -> Self {
        Self {
            gateway_coords: vec![
                GatewayCoord::new(0.3, 0.2),
                GatewayCoord::new(0.7, 0.2),
                GatewayCoord::new(0.3, 0.8),
                GatewayCoord::new(0.7, 0.8),
                GatewayCoord::new(0.5, 0.5),
            ],
            access_assignments: BTreeMap::from([(0, vec![0, 4]), (1, vec![1, 4]), (2, vec![2, 4])]),
            explicit_links: vec![
                ExplicitLink::new("UPF 1", "UPF 5"),
                ExplicitLink::new("UPF 2", "UPF 5"),
                ExplicitLink::new("UPF 3", "UPF 5"),
                ExplicitLink::new("UPF 4", "UPF 5"),
            ],
            egress_name: "Core Network".to_string(),
            egress_gateway_connections: vec![4],
        }
    }
}
