pub use topograph_render::model::{Bounds, GeometricEdge, Point, PositionedNode, Scene};
pub use topograph_render::svg::{SvgRenderOptions, render_scene_svg, sanitize_svg_id};
pub use topograph_render::{LayoutOptions, NodeRadii, layout_graph};

use topograph_core::{Configuration, parse_configuration_json, synthesize};

#[cfg(feature = "raster")]
pub mod raster;

#[derive(Debug, thiserror::Error)]
pub enum HeadlessError {
    #[error(transparent)]
    Config(#[from] topograph_core::Error),
    #[error("Layout options JSON error: {0}")]
    LayoutOptions(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeadlessError>;

/// Reads layout options from JSON; omitted fields keep their defaults.
pub fn layout_options_from_json(text: &str) -> Result<LayoutOptions> {
    LayoutOptions::from_json(text).map_err(HeadlessError::LayoutOptions)
}

/// Parses a configuration in any accepted shape (engine, backend or saved document).
pub fn configuration_from_json(text: &str) -> Result<Configuration> {
    Ok(parse_configuration_json(text)?)
}

/// Full pipeline for an in-memory configuration: synthesize, lay out, write SVG.
pub fn render_svg(
    config: &Configuration,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
) -> String {
    let graph = synthesize(config);
    let scene = layout_graph(&graph, layout_options);
    tracing::debug!(
        nodes = scene.nodes.len(),
        edges = scene.edges.len(),
        "rendering topology svg"
    );
    render_scene_svg(&scene, svg_options)
}

/// Same as [`render_svg`], starting from configuration JSON.
pub fn render_svg_from_json(
    text: &str,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
) -> Result<String> {
    let config = configuration_from_json(text)?;
    Ok(render_svg(&config, layout_options, svg_options))
}
