use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::components::force_graph::types::GraphEdge;

fn node(id: &str, category: NodeCategory, fit: f64) -> GraphNode {
	GraphNode {
		id: id.to_owned(),
		label: id.to_uppercase(),
		category,
		fit,
		liquidity: 0.0,
	}
}

fn edge(source: &str, target: &str) -> GraphEdge {
	GraphEdge { source: source.to_owned(), target: target.to_owned() }
}

fn star(satellites: usize) -> GraphData {
	let mut nodes = vec![node("hub", NodeCategory::Central, 1.0)];
	let mut edges = Vec::new();
	for i in 0..satellites {
		let id = format!("sat-{i}");
		nodes.push(node(&id, NodeCategory::Satellite, 1.0));
		edges.push(edge("hub", &id));
	}
	GraphData { nodes, edges }
}

fn settle(sim: &mut Simulation) -> usize {
	for steps in 0..5_000 {
		if !sim.step() {
			return steps;
		}
	}
	panic!("simulation failed to settle");
}

fn distance(a: &SimNode, b: &SimNode) -> f64 {
	((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

#[test]
fn dangling_edge_fails_before_any_step() {
	let data = GraphData {
		nodes: vec![node("a", NodeCategory::Central, 1.0)],
		edges: vec![edge("a", "ghost")],
	};
	let err = Simulation::initialize(&data, 800.0, 600.0).unwrap_err();
	match err {
		GraphError::DanglingEdge { ref missing, .. } => assert_eq!(missing, "ghost"),
	}
	assert!(err.to_string().contains("ghost"));
}

#[test]
fn initialize_seeds_on_circle_around_viewport_center() {
	let sim = Simulation::initialize(&star(5), 800.0, 600.0).unwrap();
	for n in sim.nodes() {
		let r = ((n.x - 400.0).powi(2) + (n.y - 300.0).powi(2)).sqrt();
		assert!((r - 100.0).abs() < 1e-9);
		assert_eq!(n.vx, 0.0);
		assert_eq!(n.vy, 0.0);
	}
}

#[test]
fn initialize_accepts_duplicate_ids_last_wins() {
	let data = GraphData {
		nodes: vec![
			node("dup", NodeCategory::Satellite, 0.2),
			node("dup", NodeCategory::Satellite, 0.9),
		],
		edges: vec![edge("dup", "dup")],
	};
	let sim = Simulation::initialize(&data, 800.0, 600.0).unwrap();
	assert_eq!(sim.nodes().len(), 2);
	assert_eq!(sim.node("dup").unwrap().fit, 0.9);
}

#[test]
fn positions_stay_finite_over_many_steps() {
	let mut star_sim = Simulation::initialize(&star(8), 800.0, 600.0).unwrap();
	let pair = GraphData {
		nodes: vec![
			node("a", NodeCategory::Satellite, 0.0),
			node("b", NodeCategory::Satellite, 0.0),
		],
		edges: Vec::new(),
	};
	let mut pair_sim = Simulation::initialize(&pair, 800.0, 600.0).unwrap();
	for _ in 0..400 {
		star_sim.step();
		pair_sim.step();
	}
	for n in star_sim.nodes().iter().chain(pair_sim.nodes()) {
		assert!(n.x.is_finite() && n.y.is_finite(), "non-finite position for {}", n.id);
	}
}

#[test]
fn empty_graph_steps_without_panicking() {
	let mut sim = Simulation::initialize(&GraphData::default(), 800.0, 600.0).unwrap();
	assert!(sim.step());
	assert!(sim.nodes().is_empty());
}

#[test]
fn alpha_decays_monotonically_toward_zero_target() {
	let mut sim = Simulation::initialize(&star(3), 800.0, 600.0).unwrap();
	assert_eq!(sim.alpha(), 1.0);
	sim.step();
	assert!((sim.alpha() - 0.98).abs() < 1e-12);
	let mut previous = sim.alpha();
	for _ in 0..10 {
		sim.step();
		assert!(sim.alpha() < previous);
		previous = sim.alpha();
	}
}

#[test]
fn pinned_nodes_hold_exact_coordinates() {
	let mut sim = Simulation::initialize(&star(5), 800.0, 600.0).unwrap();
	sim.pin("sat-2", 123.456, -78.9);
	sim.pin("sat-4", -10.0, 2048.5);
	for _ in 0..50 {
		sim.step();
	}
	let a = sim.node("sat-2").unwrap();
	assert_eq!(a.x, 123.456);
	assert_eq!(a.y, -78.9);
	assert_eq!(a.vx, 0.0);
	let b = sim.node("sat-4").unwrap();
	assert_eq!(b.x, -10.0);
	assert_eq!(b.y, 2048.5);
}

#[test]
fn unpinned_node_moves_on_the_next_step() {
	let mut sim = Simulation::initialize(&star(3), 800.0, 600.0).unwrap();
	sim.pin("sat-0", 1000.0, 1000.0);
	for _ in 0..5 {
		sim.step();
	}
	sim.unpin("sat-0");
	sim.step();
	let n = sim.node("sat-0").unwrap();
	assert!(n.x != 1000.0 || n.y != 1000.0);
}

#[test]
fn pin_and_unpin_ignore_unknown_ids() {
	let mut sim = Simulation::initialize(&star(2), 800.0, 600.0).unwrap();
	let before: Vec<(f64, f64)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
	sim.pin("ghost", 0.0, 0.0);
	sim.unpin("ghost");
	let after: Vec<(f64, f64)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
	assert_eq!(before, after);
}

#[test]
fn stop_is_permanent_and_idempotent() {
	let mut sim = Simulation::initialize(&star(4), 800.0, 600.0).unwrap();
	for _ in 0..3 {
		sim.step();
	}
	let frozen: Vec<(f64, f64)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
	sim.stop();
	assert!(sim.is_stopped());
	assert!(!sim.step());
	sim.stop();
	assert!(!sim.step());
	// a raised target does not revive a stopped simulation
	sim.set_alpha_target(0.5);
	assert!(!sim.step());
	let after: Vec<(f64, f64)> = sim.nodes().iter().map(|n| (n.x, n.y)).collect();
	assert_eq!(frozen, after);
}

#[test]
fn settled_simulation_resumes_on_raised_target() {
	let mut sim = Simulation::initialize(&star(4), 800.0, 600.0).unwrap();
	settle(&mut sim);
	assert!(!sim.step());
	sim.set_alpha_target(0.1);
	assert!(sim.step());
	assert!(sim.alpha() > 0.0);
	sim.set_alpha_target(0.0);
	assert!(sim.step());
}

#[test]
fn two_node_layout_converges_near_link_distance() {
	let data = GraphData {
		nodes: vec![
			node("exposure", NodeCategory::Central, 1.0),
			node("market", NodeCategory::Satellite, 0.8),
		],
		edges: vec![edge("exposure", "market")],
	};
	let mut sim = Simulation::initialize(&data, 800.0, 600.0).unwrap();
	settle(&mut sim);
	let d = distance(&sim.nodes()[0], &sim.nodes()[1]);
	assert!(d.is_finite());
	assert!((d - 150.0).abs() < 50.0, "settled distance {d}");
}

#[test]
fn star_layout_spreads_satellites_apart() {
	let mut sim = Simulation::initialize(&star(6), 800.0, 600.0).unwrap();
	settle(&mut sim);
	let nodes = sim.nodes();
	for i in 1..nodes.len() {
		for j in (i + 1)..nodes.len() {
			assert!(distance(&nodes[i], &nodes[j]) > 40.0);
		}
	}
}

#[test]
fn on_tick_reports_every_step_with_pinned_coordinates() {
	let mut sim = Simulation::initialize(&star(3), 800.0, 600.0).unwrap();
	sim.pin("sat-1", 42.0, 24.0);
	let seen: Rc<RefCell<Vec<(f64, f64)>>> = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	sim.on_tick(move |nodes| {
		let pinned = nodes.iter().find(|n| n.id == "sat-1").unwrap();
		sink.borrow_mut().push((pinned.x, pinned.y));
	});
	for _ in 0..3 {
		sim.step();
	}
	assert_eq!(*seen.borrow(), vec![(42.0, 24.0); 3]);
	sim.stop();
	sim.step();
	assert_eq!(seen.borrow().len(), 3);
}
