use super::*;

fn node(category: NodeCategory, fit: f64) -> GraphNode {
	GraphNode {
		id: "n".into(),
		label: "Node".into(),
		category,
		fit,
		liquidity: 0.0,
	}
}

// --- radius derivation ---

#[test]
fn radius_monotonic_in_fit() {
	for category in [NodeCategory::Central, NodeCategory::Satellite] {
		let mut prev = 0.0;
		for fit in [0.0, 0.25, 0.5, 0.75, 1.0] {
			let r = scaled_radius(category, fit);
			assert!(r >= prev, "radius shrank at fit {fit} for {category:?}");
			prev = r;
		}
	}
}

#[test]
fn central_outranks_satellite_at_full_fit() {
	assert!(scaled_radius(NodeCategory::Central, 1.0) > scaled_radius(NodeCategory::Satellite, 1.0));
}

#[test]
fn radius_at_extremes() {
	assert_eq!(scaled_radius(NodeCategory::Central, 1.0), 50.0);
	assert_eq!(scaled_radius(NodeCategory::Central, 0.0), 25.0);
	assert_eq!(scaled_radius(NodeCategory::Satellite, 1.0), 30.0);
	assert_eq!(scaled_radius(NodeCategory::Satellite, 0.0), 15.0);
}

#[test]
fn radius_clamps_out_of_range_fit() {
	assert_eq!(
		scaled_radius(NodeCategory::Satellite, 2.0),
		scaled_radius(NodeCategory::Satellite, 1.0)
	);
	assert_eq!(
		scaled_radius(NodeCategory::Central, -1.0),
		scaled_radius(NodeCategory::Central, 0.0)
	);
}

#[test]
fn node_radius_uses_category_and_fit() {
	assert_eq!(node(NodeCategory::Central, 1.0).radius(), 50.0);
	assert_eq!(node(NodeCategory::Satellite, 0.5).radius(), 22.5);
}

// --- errors ---

#[test]
fn dangling_edge_names_missing_endpoint() {
	let err = GraphError::DanglingEdge {
		source: "a".into(),
		target: "b".into(),
		missing: "b".into(),
	};
	let msg = err.to_string();
	assert!(msg.contains("\"a\""));
	assert!(msg.contains("\"b\""));
	assert!(msg.contains("unknown node id"));
}
