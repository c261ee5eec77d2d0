//! Force-directed canvas view of an exposure and its hedge markets.
//!
//! The layout engine in [`sim`] and [`forces`] is plain Rust and runs
//! the same on any target; [`GraphCanvas`] wraps it for the browser
//! with canvas rendering and pointer interaction.

pub mod adapter;
pub mod consts;
pub mod forces;
pub mod sim;
pub mod types;

mod component;
mod render;
mod state;

pub use component::GraphCanvas;
pub use sim::Simulation;
pub use types::{GraphData, GraphEdge, GraphNode, NodeCategory};
