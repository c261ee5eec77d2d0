//! Input records for the graph layout engine.

use super::consts::{CENTRAL_BASE_RADIUS, SATELLITE_BASE_RADIUS};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Role of a node in the hedge graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeCategory {
	/// The exposure statement at the center of the graph.
	Central,
	/// A candidate market related to the exposure.
	Satellite,
}

impl NodeCategory {
	/// Render radius of this category at fit = 1.
	pub fn base_radius(self) -> f64 {
		match self {
			NodeCategory::Central => CENTRAL_BASE_RADIUS,
			NodeCategory::Satellite => SATELLITE_BASE_RADIUS,
		}
	}
}

/// Radius for a node of the given category and fit score. Fit is clamped
/// to [0, 1] and scales the category's base radius between half and full
/// size, so higher-fit nodes render larger and claim more space.
pub fn scaled_radius(category: NodeCategory, fit: f64) -> f64 {
	category.base_radius() * (0.5 + 0.5 * fit.clamp(0.0, 1.0))
}

/// One node of the input graph, with the domain attributes the engine
/// needs for sizing and for click reporting.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Unique identifier.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Central or satellite.
	pub category: NodeCategory,
	/// Hedge-fit score in [0, 1].
	pub fit: f64,
	/// Market liquidity in dollars, non-negative.
	pub liquidity: f64,
}

impl GraphNode {
	/// Render and collision radius derived from category and fit.
	pub fn radius(&self) -> f64 {
		scaled_radius(self.category, self.fit)
	}
}

/// An edge between two node ids. Direction is presentational only; the
/// solver treats every edge as undirected.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	/// Source node id.
	pub source: String,
	/// Target node id.
	pub target: String,
}

/// The full input to [`Simulation::initialize`](super::Simulation::initialize).
#[derive(Clone, Debug, Default)]
pub struct GraphData {
	/// Node records.
	pub nodes: Vec<GraphNode>,
	/// Edge records; every endpoint must name an existing node.
	pub edges: Vec<GraphEdge>,
}

/// Construction-time failures. Once a simulation is built, its operations
/// are total and cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphError {
	/// An edge references a node id that is not in the node list.
	DanglingEdge {
		/// Source id of the offending edge.
		source: String,
		/// Target id of the offending edge.
		target: String,
		/// The endpoint that failed to resolve.
		missing: String,
	},
}

// Hand-written instead of `#[derive(thiserror::Error)]`: the derive treats
// any field named `source` as the error's source(), which a `String` id
// cannot satisfy.
impl std::fmt::Display for GraphError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GraphError::DanglingEdge { source, target, missing } => {
				write!(f, "edge {source:?} -> {target:?} references unknown node id {missing:?}")
			}
		}
	}
}

impl std::error::Error for GraphError {}
