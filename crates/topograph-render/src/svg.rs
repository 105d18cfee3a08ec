mod util;

pub use util::sanitize_svg_id;

use crate::model::{GeometricEdge, PositionedNode, Scene};
use std::fmt::Write as _;
use topograph_core::NodeKind;
use util::{escape_attr, escape_xml, fmt};

const LINK_OPACITY: f64 = 0.8;
const LINK_DASH: &str = "4";
const LINK_LABEL_FONT_SIZE: f64 = 12.0;
const NODE_CAPTION_FILL: &str = "#475569";
const NODE_CAPTION_FONT_SIZE: f64 = 12.0;
const NODE_CAPTION_GAP: f64 = 16.0;
const NODE_STROKE_WIDTH: f64 = 2.0;
const FONT_FAMILY: &str = "Arial, Helvetica, sans-serif";

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root `<svg id>`; sanitized before use. Defaults to `topology`.
    pub diagram_id: Option<String>,
    /// Optional CSS color painted behind the scene.
    pub background: Option<String>,
}

/// Fill and stroke colors per node kind.
fn node_palette(kind: NodeKind) -> (&'static str, &'static str) {
    match kind {
        NodeKind::Gateway => ("#dbeafe", "#2563eb"),
        NodeKind::AccessPoint => ("#fff", "#10b981"),
        NodeKind::Terminal => ("#fff", "#10b981"),
        NodeKind::Egress => ("#f5f3ff", "#8b5cf6"),
    }
}

/// Writes the scene as a standalone SVG document: edges first, nodes on top.
pub fn render_scene_svg(scene: &Scene, options: &SvgRenderOptions) -> String {
    let diagram_id = sanitize_svg_id(options.diagram_id.as_deref().unwrap_or(""));
    let mut out = String::with_capacity(2048 + scene.edges.len() * 256 + scene.nodes.len() * 384);

    let _ = write!(
        out,
        r#"<svg id="{}" xmlns="http://www.w3.org/2000/svg" width="100%" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet" role="graphics-document document" aria-roledescription="topology">"#,
        escape_attr(&diagram_id),
        fmt(scene.width),
        fmt(scene.height)
    );

    let background = options
        .background
        .as_deref()
        .map(str::trim)
        .filter(|bg| !bg.is_empty());
    if let Some(bg) = background {
        let _ = write!(
            out,
            r#"<rect class="background" x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            fmt(scene.width),
            fmt(scene.height),
            escape_attr(bg)
        );
    }

    out.push_str(r#"<g class="links">"#);
    for edge in &scene.edges {
        render_edge(&mut out, edge);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="nodes">"#);
    for node in &scene.nodes {
        render_node(&mut out, &diagram_id, node);
    }
    out.push_str("</g></svg>\n");
    out
}

fn render_edge(out: &mut String, edge: &GeometricEdge) {
    let category = edge.category.map(|c| c.as_str()).unwrap_or("uncategorized");
    let _ = write!(
        out,
        r#"<g class="link {}" data-source="{}" data-target="{}">"#,
        category,
        escape_attr(&edge.source.to_string()),
        escape_attr(&edge.target.to_string())
    );

    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}""#,
        fmt(edge.start.x),
        fmt(edge.start.y),
        fmt(edge.end.x),
        fmt(edge.end.y),
        escape_attr(&edge.style.stroke),
        fmt(edge.style.stroke_width),
        fmt(LINK_OPACITY)
    );
    if edge.style.dashed {
        let _ = write!(out, r#" stroke-dasharray="{LINK_DASH}""#);
    }
    out.push_str("/>");

    if let Some(anchor) = edge.label {
        let _ = write!(
            out,
            r#"<text class="interface-label" x="{}" y="{}" text-anchor="middle" fill="{}" font-size="{}" font-weight="bold" font-family="{}">{}</text>"#,
            fmt(anchor.x),
            fmt(anchor.y),
            escape_attr(&edge.style.stroke),
            fmt(LINK_LABEL_FONT_SIZE),
            FONT_FAMILY,
            escape_xml(&edge.interface_label)
        );
    }
    out.push_str("</g>");
}

fn render_node(out: &mut String, diagram_id: &str, node: &PositionedNode) {
    let kind = node.kind();
    let (fill, stroke) = node_palette(kind);
    let r = node.radius.max(1.0);

    let _ = write!(
        out,
        r#"<g class="node {}" id="{}" transform="translate({}, {})">"#,
        kind.as_str(),
        escape_attr(&sanitize_svg_id(&format!("{diagram_id}-{}", node.node))),
        fmt(node.x),
        fmt(node.y)
    );

    match kind {
        // Terminals are drawn as a device outline rather than a disc.
        NodeKind::Terminal => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt(-r),
                fmt(-r * 0.7),
                fmt(r * 2.0),
                fmt(r * 1.4),
                fill,
                stroke,
                fmt(NODE_STROKE_WIDTH / 2.0)
            );
        }
        _ => {
            let _ = write!(
                out,
                r#"<circle r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt(r),
                fill,
                stroke,
                fmt(NODE_STROKE_WIDTH)
            );
        }
    }

    let _ = write!(
        out,
        r#"<text class="node-kind" y="{}" text-anchor="middle" fill="{}" font-size="{}" font-family="{}">{}</text>"#,
        fmt(r * 0.3),
        stroke,
        fmt((r * 0.6).round()),
        FONT_FAMILY,
        kind.label_prefix()
    );
    let _ = write!(
        out,
        r#"<text class="node-caption" y="{}" text-anchor="middle" fill="{}" font-size="{}" font-family="{}">{}</text>"#,
        fmt(r + NODE_CAPTION_GAP),
        NODE_CAPTION_FILL,
        fmt(NODE_CAPTION_FONT_SIZE),
        FONT_FAMILY,
        escape_xml(&node.display_name)
    );
    out.push_str("</g>");
}
