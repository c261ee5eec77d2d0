//! The force-directed layout solver.
//!
//! A [`Simulation`] owns the node and edge collections and advances them
//! one discrete step at a time, driven by the host's frame scheduling.
//! Each step reheats or cools alpha toward its target, lets every
//! registered [`Force`] accumulate velocity changes, then integrates
//! positions. Pinned nodes are held exactly at their pin and excluded
//! from integration.

use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;

use super::consts::{
	ALPHA_DECAY, ALPHA_INITIAL, ALPHA_MIN, CHARGE_DISTANCE_MIN2, CHARGE_STRENGTH, COLLIDE_PADDING,
	LINK_DISTANCE, LINK_STRENGTH, SEED_RADIUS, VELOCITY_DECAY,
};
use super::forces::{CenterForce, CollideForce, Force, LinkForce, ManyBodyForce};
use super::types::{GraphData, GraphError, GraphNode, NodeCategory, scaled_radius};

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

/// A live node: the input record plus kinematic state owned by the solver.
#[derive(Clone, Debug)]
pub struct SimNode {
	/// Unique identifier.
	pub id: String,
	/// Display label.
	pub label: String,
	/// Central or satellite.
	pub category: NodeCategory,
	/// Hedge-fit score in [0, 1].
	pub fit: f64,
	/// Market liquidity in dollars.
	pub liquidity: f64,
	/// Current x position, world units.
	pub x: f64,
	/// Current y position, world units.
	pub y: f64,
	/// Velocity x component.
	pub vx: f64,
	/// Velocity y component.
	pub vy: f64,
	/// Pinned x position; while set, the solver holds x here.
	pub fx: Option<f64>,
	/// Pinned y position; while set, the solver holds y here.
	pub fy: Option<f64>,
}

impl SimNode {
	fn new(node: &GraphNode, x: f64, y: f64) -> Self {
		Self {
			id: node.id.clone(),
			label: node.label.clone(),
			category: node.category,
			fit: node.fit,
			liquidity: node.liquidity,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			fx: None,
			fy: None,
		}
	}

	/// Render and collision radius derived from category and fit.
	pub fn radius(&self) -> f64 {
		scaled_radius(self.category, self.fit)
	}

	/// The node's domain attributes, as handed to click handlers.
	pub fn record(&self) -> GraphNode {
		GraphNode {
			id: self.id.clone(),
			label: self.label.clone(),
			category: self.category,
			fit: self.fit,
			liquidity: self.liquidity,
		}
	}
}

/// One mounted graph view's worth of layout state. Created at mount,
/// stepped once per frame, stopped permanently at unmount; a stopped
/// simulation cannot be resumed, only rebuilt.
pub struct Simulation {
	nodes: Vec<SimNode>,
	edges: Vec<(usize, usize)>,
	index: HashMap<String, usize>,
	forces: Vec<Box<dyn Force>>,
	alpha: f64,
	alpha_min: f64,
	alpha_decay: f64,
	alpha_target: f64,
	velocity_decay: f64,
	on_tick: Option<Box<dyn FnMut(&[SimNode])>>,
	stopped: bool,
}

// Manual because `forces` and `on_tick` hold trait objects with no `Debug`.
impl std::fmt::Debug for Simulation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Simulation")
			.field("nodes", &self.nodes)
			.field("edges", &self.edges)
			.field("index", &self.index)
			.field("alpha", &self.alpha)
			.field("alpha_min", &self.alpha_min)
			.field("alpha_decay", &self.alpha_decay)
			.field("alpha_target", &self.alpha_target)
			.field("velocity_decay", &self.velocity_decay)
			.field("stopped", &self.stopped)
			.finish_non_exhaustive()
	}
}

impl Simulation {
	/// Build a simulation over the given graph, seed initial positions on
	/// a circle around the viewport center, and register the four standard
	/// forces (link, charge, center, collision).
	///
	/// Fails if any edge endpoint does not name a node; no partially
	/// constructed simulation escapes.
	pub fn initialize(data: &GraphData, width: f64, height: f64) -> Result<Self, GraphError> {
		let (cx, cy) = (width / 2.0, height / 2.0);
		let mut index = HashMap::new();
		let mut nodes = Vec::with_capacity(data.nodes.len());
		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = (cx + SEED_RADIUS * angle.cos(), cy + SEED_RADIUS * angle.sin());
			index.insert(node.id.clone(), i);
			nodes.push(SimNode::new(node, x, y));
		}

		let mut edges = Vec::with_capacity(data.edges.len());
		for edge in &data.edges {
			let resolve = |id: &str| {
				index.get(id).copied().ok_or_else(|| GraphError::DanglingEdge {
					source: edge.source.clone(),
					target: edge.target.clone(),
					missing: id.to_owned(),
				})
			};
			edges.push((resolve(&edge.source)?, resolve(&edge.target)?));
		}

		let mut sim = Self {
			nodes,
			edges,
			index,
			forces: Vec::new(),
			alpha: ALPHA_INITIAL,
			alpha_min: ALPHA_MIN,
			alpha_decay: ALPHA_DECAY,
			alpha_target: 0.0,
			velocity_decay: VELOCITY_DECAY,
			on_tick: None,
			stopped: false,
		};
		sim.add_force(Box::new(LinkForce::new(LINK_DISTANCE, LINK_STRENGTH)));
		sim.add_force(Box::new(ManyBodyForce::new(CHARGE_STRENGTH, CHARGE_DISTANCE_MIN2)));
		sim.add_force(Box::new(CenterForce::new(cx, cy)));
		sim.add_force(Box::new(CollideForce::new(COLLIDE_PADDING)));
		debug!(
			"force simulation initialized: {} nodes, {} edges",
			sim.nodes.len(),
			sim.edges.len()
		);
		Ok(sim)
	}

	/// Register an additional force, applied after the existing ones.
	pub fn add_force(&mut self, mut force: Box<dyn Force>) {
		force.initialize(&self.nodes, &self.edges);
		self.forces.push(force);
	}

	/// Advance one step. Returns false without moving anything once the
	/// simulation is stopped, or once alpha has settled below its floor
	/// with no raised target; raising the target via [`set_alpha_target`]
	/// resumes a settled (but not a stopped) simulation.
	///
	/// [`set_alpha_target`]: Simulation::set_alpha_target
	pub fn step(&mut self) -> bool {
		if self.stopped {
			return false;
		}
		if self.alpha < self.alpha_min && self.alpha_target < self.alpha_min {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.alpha_decay;
		for force in &mut self.forces {
			force.apply(&mut self.nodes, &self.edges, self.alpha);
		}
		for node in &mut self.nodes {
			match node.fx {
				Some(fx) => {
					node.x = fx;
					node.vx = 0.0;
				}
				None => {
					node.vx *= 1.0 - self.velocity_decay;
					node.x += node.vx;
				}
			}
			match node.fy {
				Some(fy) => {
					node.y = fy;
					node.vy = 0.0;
				}
				None => {
					node.vy *= 1.0 - self.velocity_decay;
					node.y += node.vy;
				}
			}
		}
		if let Some(on_tick) = self.on_tick.as_mut() {
			on_tick(&self.nodes);
		}
		true
	}

	/// Hold the node with this id exactly at (x, y) until unpinned.
	/// Unknown ids are ignored.
	pub fn pin(&mut self, id: &str, x: f64, y: f64) {
		if let Some(&ix) = self.index.get(id) {
			self.pin_index(ix, x, y);
		}
	}

	/// Pin by node index.
	pub fn pin_index(&mut self, ix: usize, x: f64, y: f64) {
		let node = &mut self.nodes[ix];
		node.fx = Some(x);
		node.fy = Some(y);
		node.x = x;
		node.y = y;
	}

	/// Release the node with this id back to the solver. Unknown ids are
	/// ignored.
	pub fn unpin(&mut self, id: &str) {
		if let Some(&ix) = self.index.get(id) {
			self.unpin_index(ix);
		}
	}

	/// Unpin by node index.
	pub fn unpin_index(&mut self, ix: usize) {
		let node = &mut self.nodes[ix];
		node.fx = None;
		node.fy = None;
	}

	/// Register a callback invoked after every step with a read-only view
	/// of the node list, replacing any previous callback.
	pub fn on_tick(&mut self, callback: impl FnMut(&[SimNode]) + 'static) {
		self.on_tick = Some(Box::new(callback));
	}

	/// Halt stepping permanently. Safe to call repeatedly and at any
	/// point, including mid-drag.
	pub fn stop(&mut self) {
		if !self.stopped {
			self.stopped = true;
			debug!("force simulation stopped");
		}
	}

	/// Whether [`stop`](Simulation::stop) has been called.
	pub fn is_stopped(&self) -> bool {
		self.stopped
	}

	/// Current kinetic temperature.
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Current alpha target.
	pub fn alpha_target(&self) -> f64 {
		self.alpha_target
	}

	/// Set the value alpha decays toward. Dragging raises this above the
	/// settle floor so the layout keeps moving while the pointer is down.
	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	/// The live nodes, in input order.
	pub fn nodes(&self) -> &[SimNode] {
		&self.nodes
	}

	/// The edge list as node index pairs, in input order.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	/// Look up a live node by id.
	pub fn node(&self, id: &str) -> Option<&SimNode> {
		self.index.get(id).map(|&ix| &self.nodes[ix])
	}
}
