#![forbid(unsafe_code)]

//! Topology configuration model + graph synthesizer (headless).
//!
//! Design goals:
//! - the configuration is an immutable value passed in per call; nothing is cached
//! - node lookup by label happens once, in [`parse_node_label`]
//! - deterministic output: the same configuration always yields the same edge sequence

pub mod config;
pub mod document;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
mod synth;

pub use config::{Configuration, ExplicitLink, GatewayCoord};
pub use document::{
    Coordinate, GatewayConfig, GatewayRole, TopologyDocument, parse_configuration_json,
};
pub use edge::{Edge, EdgeStyle, LinkCategory};
pub use error::{Error, Result};
pub use graph::{Node, TopologyGraph};
pub use node::{NodeCounts, NodeKind, NodeRef, parse_node_label};
pub use synth::synthesize;
