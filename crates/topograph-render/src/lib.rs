#![forbid(unsafe_code)]

//! Headless layout + SVG rendering for topology schematics.
//!
//! Placement is rule-based per node kind (no iterative solver), so a given graph always lands on
//! the same coordinates.

pub mod geometry;
pub mod layout;
pub mod model;
pub mod svg;

pub use layout::layout_graph;
pub use model::{Bounds, GeometricEdge, Point, PositionedNode, Scene};

use serde::{Deserialize, Serialize};
use topograph_core::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeRadii {
    pub gateway: f64,
    pub access_point: f64,
    pub terminal: f64,
    pub egress: f64,
}

impl Default for NodeRadii {
    fn default() -> Self {
        Self {
            gateway: 20.0,
            access_point: 16.0,
            terminal: 12.0,
            egress: 20.0,
        }
    }
}

impl NodeRadii {
    pub fn for_kind(&self, kind: NodeKind) -> f64 {
        match kind {
            NodeKind::Gateway => self.gateway,
            NodeKind::AccessPoint => self.access_point,
            NodeKind::Terminal => self.terminal,
            NodeKind::Egress => self.egress,
        }
    }
}

/// Canvas size and placement constants.
///
/// The defaults reproduce the reference diagram exactly; fractional fields are relative to the
/// canvas width (`*_x`) or height (`*_y`, `access_top`, `access_span`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Horizontal pixels covered by the normalized gateway `x` range.
    pub gateway_spread: f64,
    pub access_x: f64,
    pub access_top: f64,
    pub access_span: f64,
    /// Terminals sit this many pixels left of their access point.
    pub terminal_offset: f64,
    pub egress_x: f64,
    pub egress_y: f64,
    pub radii: NodeRadii,
    /// Interface labels are lifted this far above the segment midpoint.
    pub label_offset: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 500.0,
            gateway_spread: 300.0,
            access_x: 0.15,
            access_top: 0.2,
            access_span: 0.6,
            terminal_offset: 50.0,
            egress_x: 0.85,
            egress_y: 0.5,
            radii: NodeRadii::default(),
            label_offset: 8.0,
        }
    }
}

impl LayoutOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
