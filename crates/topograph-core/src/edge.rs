use crate::node::NodeRef;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LINK_STROKE: &str = "#2563eb";
pub const ACCESS_GATEWAY_STROKE: &str = "#d97706";
pub const GATEWAY_EGRESS_STROKE: &str = "#ea580c";
pub const TERMINAL_ACCESS_STROKE: &str = "#10b981";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkCategory {
    GatewayGateway,
    AccessGateway,
    GatewayEgress,
    TerminalAccess,
}

impl LinkCategory {
    /// Schematic interface tag for this category (`N9`, `N3`, `N6`); empty when none applies.
    pub fn interface_label(self) -> &'static str {
        match self {
            LinkCategory::GatewayGateway => "N9",
            LinkCategory::AccessGateway => "N3",
            LinkCategory::GatewayEgress => "N6",
            LinkCategory::TerminalAccess => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LinkCategory::GatewayGateway => "gateway-gateway",
            LinkCategory::AccessGateway => "access-gateway",
            LinkCategory::GatewayEgress => "gateway-egress",
            LinkCategory::TerminalAccess => "terminal-access",
        }
    }

    /// Parses a declared link type. Both the canonical names and the form layer's short
    /// names (`upf-upf`, `gnb-upf`, `upf-dns`, `ue-gnb`) are understood.
    pub fn from_declared(declared: &str) -> Option<Self> {
        match declared.trim() {
            "gateway-gateway" | "upf-upf" => Some(LinkCategory::GatewayGateway),
            "access-gateway" | "gnb-upf" => Some(LinkCategory::AccessGateway),
            "gateway-egress" | "upf-dns" => Some(LinkCategory::GatewayEgress),
            "terminal-access" | "ue-gnb" => Some(LinkCategory::TerminalAccess),
            _ => None,
        }
    }
}

impl std::fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub dashed: bool,
}

impl EdgeStyle {
    pub fn solid(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            dashed: false,
        }
    }

    pub fn dashed(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            dashed: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub source: NodeRef,
    pub target: NodeRef,
    pub category: Option<LinkCategory>,
    pub interface_label: String,
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(
        source: NodeRef,
        target: NodeRef,
        category: Option<LinkCategory>,
        style: EdgeStyle,
    ) -> Self {
        Self {
            source,
            target,
            category,
            interface_label: category
                .map(LinkCategory::interface_label)
                .unwrap_or_default()
                .to_string(),
            style,
        }
    }

    pub fn connects(&self, a: NodeRef, b: NodeRef) -> bool {
        self.source.pair_key(self.target) == a.pair_key(b)
    }
}
