use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// User-plane function (`UPF`).
    Gateway,
    /// Radio access node (`gNB`).
    AccessPoint,
    /// End-user device (`UE`), paired 1:1 with an access point.
    Terminal,
    /// Data network attachment (`DN`). Always a singleton.
    Egress,
}

impl NodeKind {
    /// Short label prefix used in user-entered link endpoints and display names.
    pub fn label_prefix(self) -> &'static str {
        match self {
            NodeKind::Gateway => "UPF",
            NodeKind::AccessPoint => "gNB",
            NodeKind::Terminal => "UE",
            NodeKind::Egress => "DN",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Gateway => "gateway",
            NodeKind::AccessPoint => "accessPoint",
            NodeKind::Terminal => "terminal",
            NodeKind::Egress => "egress",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed node identity: a kind plus a 0-based index unique within that kind.
///
/// The egress node is a singleton and always uses index 0 (see [`NodeRef::EGRESS`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeRef {
    pub kind: NodeKind,
    pub index: usize,
}

impl NodeRef {
    pub const EGRESS: NodeRef = NodeRef {
        kind: NodeKind::Egress,
        index: 0,
    };

    pub fn gateway(index: usize) -> Self {
        Self {
            kind: NodeKind::Gateway,
            index,
        }
    }

    pub fn access_point(index: usize) -> Self {
        Self {
            kind: NodeKind::AccessPoint,
            index,
        }
    }

    pub fn terminal(index: usize) -> Self {
        Self {
            kind: NodeKind::Terminal,
            index,
        }
    }

    /// Key that identifies the unordered pair `{self, other}`.
    pub fn pair_key(self, other: NodeRef) -> (NodeRef, NodeRef) {
        if self <= other {
            (self, other)
        } else {
            (other, self)
        }
    }
}

impl std::fmt::Display for NodeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::Egress => f.write_str(NodeKind::Egress.label_prefix()),
            kind => write!(f, "{} {}", kind.label_prefix(), self.index + 1),
        }
    }
}

/// Number of nodes of each indexed kind in one topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCounts {
    pub gateways: usize,
    pub access_points: usize,
}

impl NodeCounts {
    pub fn contains(&self, node: NodeRef) -> bool {
        match node.kind {
            NodeKind::Gateway => node.index < self.gateways,
            NodeKind::AccessPoint | NodeKind::Terminal => node.index < self.access_points,
            NodeKind::Egress => node.index == 0,
        }
    }
}

/// Resolves a human link label (`"UPF 2"`, `"gNB 1"`, or the egress name) to a node.
///
/// Indices in labels are 1-based. Returns `None` for unknown prefixes, malformed or
/// out-of-range indices, and names that do not match the egress exactly.
pub fn parse_node_label(label: &str, counts: NodeCounts, egress_name: &str) -> Option<NodeRef> {
    if !egress_name.is_empty() && label == egress_name {
        return Some(NodeRef::EGRESS);
    }

    let mut tokens = label.split_whitespace();
    let prefix = tokens.next()?;
    let number = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let (kind, count) = match prefix {
        "UPF" => (NodeKind::Gateway, counts.gateways),
        "gNB" => (NodeKind::AccessPoint, counts.access_points),
        _ => return None,
    };

    let ordinal = number.parse::<usize>().ok()?;
    if ordinal == 0 || ordinal > count {
        return None;
    }
    Some(NodeRef {
        kind,
        index: ordinal - 1,
    })
}
