#![forbid(unsafe_code)]

//! `topograph` is a headless schematic engine for small mobile-core topologies.
//!
//! A [`Configuration`] names the gateways (UPF), access points (gNB), terminals (UE) and the
//! single egress network (DN). [`synthesize`] turns it into a deduplicated, labelled edge list
//! and [`render`] places everything on a fixed canvas and writes SVG.
//!
//! # Features
//!
//! - `raster`: enable PNG output via pure-Rust SVG rasterization (`topograph::render::raster`)

pub use topograph_core::*;

pub mod render;

/// Synthesizes the graph for `config` and lays it out on the default 800×500 canvas.
pub fn synthesize_and_layout(config: &Configuration) -> render::Scene {
    synthesize_and_layout_with(config, &render::LayoutOptions::default())
}

pub fn synthesize_and_layout_with(
    config: &Configuration,
    options: &render::LayoutOptions,
) -> render::Scene {
    let graph = synthesize(config);
    render::layout_graph(&graph, options)
}
