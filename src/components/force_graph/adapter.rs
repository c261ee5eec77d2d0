//! Builds layout input from hedge domain records.

use super::consts::DEFAULT_FIT;
use super::types::{GraphData, GraphEdge, GraphNode, NodeCategory};
use crate::domain::types::{ExecutionCandidate, Market};

#[cfg(test)]
#[path = "adapter_test.rs"]
mod adapter_test;

/// Graph of one exposure and its candidate hedge markets: a central
/// exposure node with every market as a satellite linked to it.
///
/// Satellite fit comes from the market's candidate score when one
/// exists; markets without a score, or with a non-finite one, fall
/// back to [`DEFAULT_FIT`]. Fit is clamped to [0, 1] and liquidity
/// floored at zero so a bad record degrades its own node instead of
/// poisoning the layout.
pub fn exposure_graph(markets: &[Market], candidates: &[ExecutionCandidate]) -> GraphData {
	let mut nodes = Vec::with_capacity(markets.len() + 1);
	nodes.push(GraphNode {
		id: "exposure".to_owned(),
		label: "Exposure".to_owned(),
		category: NodeCategory::Central,
		fit: 1.0,
		liquidity: 0.0,
	});

	let mut edges = Vec::with_capacity(markets.len());
	for market in markets {
		let fit = candidates
			.iter()
			.find(|c| c.candidate.market_id == market.id)
			.map_or(DEFAULT_FIT, |c| c.candidate.fit);
		let fit = if fit.is_finite() { fit.clamp(0.0, 1.0) } else { DEFAULT_FIT };
		let liquidity = if market.liquidity.is_finite() {
			market.liquidity.max(0.0)
		} else {
			0.0
		};
		nodes.push(GraphNode {
			id: market.id.clone(),
			label: market.title.clone(),
			category: NodeCategory::Satellite,
			fit,
			liquidity,
		});
		edges.push(GraphEdge {
			source: "exposure".to_owned(),
			target: market.id.clone(),
		});
	}

	GraphData { nodes, edges }
}
