use super::*;
use crate::components::force_graph::types::NodeCategory;

fn approx_eq(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
}

fn sim_node(category: NodeCategory, x: f64, y: f64) -> SimNode {
	SimNode {
		id: String::new(),
		label: String::new(),
		category,
		fit: 1.0,
		liquidity: 0.0,
		x,
		y,
		vx: 0.0,
		vy: 0.0,
		fx: None,
		fy: None,
	}
}

fn satellites(positions: &[(f64, f64)]) -> Vec<SimNode> {
	positions
		.iter()
		.map(|&(x, y)| sim_node(NodeCategory::Satellite, x, y))
		.collect()
}

// --- link springs ---

#[test]
fn link_pulls_distant_endpoints_together() {
	let mut nodes = satellites(&[(0.0, 0.0), (300.0, 0.0)]);
	let edges = [(0, 1)];
	let mut force = LinkForce::new(150.0, 0.5);
	force.initialize(&nodes, &edges);
	force.apply(&mut nodes, &edges, 1.0);
	// (300 - 150) / 300 * 0.5 = 0.25, split evenly between two degree-1 ends
	assert!(approx_eq(nodes[0].vx, 37.5));
	assert!(approx_eq(nodes[1].vx, -37.5));
	assert!(approx_eq(nodes[0].vy, 0.0));
	assert!(approx_eq(nodes[1].vy, 0.0));
}

#[test]
fn link_pushes_close_endpoints_apart() {
	let mut nodes = satellites(&[(0.0, 0.0), (100.0, 0.0)]);
	let edges = [(0, 1)];
	let mut force = LinkForce::new(150.0, 0.5);
	force.initialize(&nodes, &edges);
	force.apply(&mut nodes, &edges, 1.0);
	assert!(approx_eq(nodes[0].vx, -12.5));
	assert!(approx_eq(nodes[1].vx, 12.5));
}

#[test]
fn link_bias_moves_leaf_more_than_hub() {
	// the first leaf sits at the rest distance so its edge contributes
	// nothing and the hub is still at rest when the second edge runs
	let mut nodes = satellites(&[(0.0, 0.0), (150.0, 0.0), (0.0, 300.0)]);
	let edges = [(0, 1), (0, 2)];
	let mut force = LinkForce::new(150.0, 0.5);
	force.initialize(&nodes, &edges);
	force.apply(&mut nodes, &edges, 1.0);
	// hub has degree 2, leaves degree 1: bias 2/3 of the pull onto the leaf
	assert!(approx_eq(nodes[1].vx, 0.0));
	assert!(approx_eq(nodes[2].vy, -50.0));
	assert!(approx_eq(nodes[0].vy, 25.0));
}

#[test]
fn link_breaks_coincident_endpoints_without_nan() {
	let mut nodes = satellites(&[(50.0, 50.0), (50.0, 50.0)]);
	let edges = [(0, 1)];
	let mut force = LinkForce::new(150.0, 0.5);
	force.initialize(&nodes, &edges);
	force.apply(&mut nodes, &edges, 1.0);
	assert!(nodes[0].vx.is_finite() && nodes[0].vy.is_finite());
	assert!(nodes[1].vx.is_finite() && nodes[1].vy.is_finite());
	assert!(nodes[0].vx != 0.0 || nodes[0].vy != 0.0);
}

// --- n-body charge ---

#[test]
fn many_body_repels_symmetrically() {
	let mut nodes = satellites(&[(0.0, 0.0), (10.0, 0.0)]);
	let mut force = ManyBodyForce::new(-800.0, 1.0);
	force.apply(&mut nodes, &[], 1.0);
	// w = -800 / 100 = -8 per unit of separation
	assert!(approx_eq(nodes[0].vx, -80.0));
	assert!(approx_eq(nodes[1].vx, 80.0));
	assert!(approx_eq(nodes[0].vy, 0.0));
}

#[test]
fn many_body_scales_with_alpha() {
	let mut nodes = satellites(&[(0.0, 0.0), (10.0, 0.0)]);
	let mut force = ManyBodyForce::new(-800.0, 1.0);
	force.apply(&mut nodes, &[], 0.5);
	assert!(approx_eq(nodes[0].vx, -40.0));
	assert!(approx_eq(nodes[1].vx, 40.0));
}

#[test]
fn many_body_softens_below_minimum_distance() {
	let mut nodes = satellites(&[(0.0, 0.0), (0.1, 0.0)]);
	let mut force = ManyBodyForce::new(-800.0, 1.0);
	force.apply(&mut nodes, &[], 1.0);
	// unsoftened, 0.1 apart would give |vx| = 8000; the floor caps it at 800
	assert!(approx_eq(nodes[0].vx, -800.0));
	assert!(approx_eq(nodes[1].vx, 800.0));
}

#[test]
fn many_body_breaks_coincident_nodes_without_nan() {
	let mut nodes = satellites(&[(5.0, 5.0), (5.0, 5.0)]);
	let mut force = ManyBodyForce::new(-800.0, 1.0);
	force.apply(&mut nodes, &[], 1.0);
	assert!(nodes[0].vx.is_finite() && nodes[0].vy.is_finite());
	assert!(nodes[0].vx != 0.0 || nodes[0].vy != 0.0);
}

// --- centering ---

#[test]
fn center_recenters_mean_exactly() {
	let mut nodes = satellites(&[(0.0, 0.0), (100.0, 0.0), (200.0, 300.0)]);
	let mut force = CenterForce::new(400.0, 300.0);
	force.apply(&mut nodes, &[], 1.0);
	let n = nodes.len() as f64;
	let mean_x = nodes.iter().map(|node| node.x).sum::<f64>() / n;
	let mean_y = nodes.iter().map(|node| node.y).sum::<f64>() / n;
	assert!(approx_eq(mean_x, 400.0));
	assert!(approx_eq(mean_y, 300.0));
	// relative geometry preserved
	assert!(approx_eq(nodes[1].x - nodes[0].x, 100.0));
	assert!(approx_eq(nodes[0].vx, 0.0));
}

#[test]
fn center_ignores_alpha() {
	let mut nodes = satellites(&[(0.0, 0.0)]);
	let mut force = CenterForce::new(400.0, 300.0);
	force.apply(&mut nodes, &[], 0.0);
	assert!(approx_eq(nodes[0].x, 400.0));
	assert!(approx_eq(nodes[0].y, 300.0));
}

#[test]
fn center_tolerates_empty_node_list() {
	let mut nodes: Vec<SimNode> = Vec::new();
	let mut force = CenterForce::new(400.0, 300.0);
	force.apply(&mut nodes, &[], 1.0);
	assert!(nodes.is_empty());
}

// --- collision ---

#[test]
fn collide_separates_overlapping_circles() {
	let mut nodes = vec![
		sim_node(NodeCategory::Central, 0.0, 0.0),
		sim_node(NodeCategory::Satellite, 100.0, 0.0),
	];
	// padded radii 65 and 45 against 100 of separation: 10 of overlap
	let mut force = CollideForce::new(15.0);
	force.apply(&mut nodes, &[], 1.0);
	let ratio = 45.0 * 45.0 / (65.0 * 65.0 + 45.0 * 45.0);
	assert!(approx_eq(nodes[0].vx, -10.0 * ratio));
	assert!(approx_eq(nodes[1].vx, 10.0 * (1.0 - ratio)));
	// the smaller circle yields more
	assert!(nodes[1].vx.abs() > nodes[0].vx.abs());
}

#[test]
fn collide_ignores_clear_pairs() {
	let mut nodes = vec![
		sim_node(NodeCategory::Central, 0.0, 0.0),
		sim_node(NodeCategory::Satellite, 200.0, 0.0),
	];
	let mut force = CollideForce::new(15.0);
	force.apply(&mut nodes, &[], 1.0);
	assert!(approx_eq(nodes[0].vx, 0.0));
	assert!(approx_eq(nodes[1].vx, 0.0));
}

#[test]
fn collide_checks_projected_positions() {
	let mut nodes = vec![
		sim_node(NodeCategory::Central, 0.0, 0.0),
		sim_node(NodeCategory::Satellite, 200.0, 0.0),
	];
	// clear as positioned, overlapping once velocity carries node 1 inward
	nodes[1].vx = -100.0;
	let mut force = CollideForce::new(15.0);
	force.apply(&mut nodes, &[], 1.0);
	let ratio = 45.0 * 45.0 / (65.0 * 65.0 + 45.0 * 45.0);
	assert!(approx_eq(nodes[0].vx, -10.0 * ratio));
	assert!(approx_eq(nodes[1].vx, -100.0 + 10.0 * (1.0 - ratio)));
}

#[test]
fn collide_leaves_exact_touch_alone() {
	let mut nodes = satellites(&[(0.0, 0.0), (90.0, 0.0)]);
	// padded radii 45 + 45 exactly equal the separation
	let mut force = CollideForce::new(15.0);
	force.apply(&mut nodes, &[], 1.0);
	assert!(approx_eq(nodes[0].vx, 0.0));
	assert!(approx_eq(nodes[1].vx, 0.0));
}
