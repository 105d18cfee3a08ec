use serde::{Deserialize, Serialize};
use topograph_core::{EdgeStyle, LinkCategory, NodeKind, NodeRef};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedNode {
    pub node: NodeRef,
    pub display_name: String,
    pub x: f64,
    pub y: f64,
    /// Visual radius; edges stop at this distance from the centre.
    pub radius: f64,
}

impl PositionedNode {
    pub fn kind(&self) -> NodeKind {
        self.node.kind
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometricEdge {
    pub source: NodeRef,
    pub target: NodeRef,
    pub category: Option<LinkCategory>,
    pub interface_label: String,
    pub style: EdgeStyle,
    /// On the source node's boundary.
    pub start: Point,
    /// On the target node's boundary.
    pub end: Point,
    /// Anchor for `interface_label`; `None` when the label is empty.
    #[serde(default)]
    pub label: Option<Point>,
}

/// Positioned nodes plus renderable edge segments on a fixed logical canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<GeometricEdge>,
}

impl Scene {
    pub fn node(&self, node: NodeRef) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.node == node)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &PositionedNode> {
        self.nodes.iter().filter(move |n| n.node.kind == kind)
    }

    pub fn edges_in(&self, category: LinkCategory) -> impl Iterator<Item = &GeometricEdge> {
        self.edges
            .iter()
            .filter(move |e| e.category == Some(category))
    }

    /// Extent of all node discs and edge segments; `None` for an empty scene.
    pub fn content_bounds(&self) -> Option<Bounds> {
        let discs = self.nodes.iter().flat_map(|n| {
            [
                (n.x - n.radius, n.y - n.radius),
                (n.x + n.radius, n.y + n.radius),
            ]
        });
        let segments = self
            .edges
            .iter()
            .flat_map(|e| [(e.start.x, e.start.y), (e.end.x, e.end.y)]);
        Bounds::from_points(discs.chain(segments))
    }
}
