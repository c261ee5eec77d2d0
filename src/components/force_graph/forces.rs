//! Pluggable forces for the layout solver.
//!
//! A force reads node positions and projected velocities and writes
//! velocity (or, for centering, position) adjustments scaled by the
//! simulation's current alpha. The standard set mirrors the classic
//! velocity-Verlet layout model: springs along edges, n-body charge
//! repulsion, viewport centering, and radius-aware collision.

use super::sim::SimNode;

#[cfg(test)]
#[path = "forces_test.rs"]
mod forces_test;

/// A single composable force.
///
/// `initialize` runs once when the force is registered with a
/// simulation; `apply` runs every step, in registration order.
pub trait Force {
	/// Inspect the node and edge lists before the first step.
	fn initialize(&mut self, _nodes: &[SimNode], _edges: &[(usize, usize)]) {}

	/// Accumulate this step's adjustments, scaled by `alpha`.
	fn apply(&mut self, nodes: &mut [SimNode], edges: &[(usize, usize)], alpha: f64);
}

/// Tiny deterministic displacement used to break exact overlaps, keyed
/// by the node or edge index so repeated runs stay reproducible.
fn jiggle(seed: usize) -> f64 {
	if seed % 2 == 0 { 1e-6 } else { -1e-6 }
}

// --- link springs ---

/// Spring force along every edge, pulling endpoints toward a rest
/// distance. The correction is split between the endpoints in inverse
/// proportion to their degree, so hubs move less than leaves.
pub struct LinkForce {
	distance: f64,
	strength: f64,
	bias: Vec<f64>,
}

impl LinkForce {
	/// A spring force with the given rest distance and strength.
	pub fn new(distance: f64, strength: f64) -> Self {
		Self { distance, strength, bias: Vec::new() }
	}
}

impl Force for LinkForce {
	fn initialize(&mut self, nodes: &[SimNode], edges: &[(usize, usize)]) {
		let mut degree = vec![0.0_f64; nodes.len()];
		for &(source, target) in edges {
			degree[source] += 1.0;
			degree[target] += 1.0;
		}
		self.bias = edges
			.iter()
			.map(|&(source, target)| degree[source] / (degree[source] + degree[target]))
			.collect();
	}

	fn apply(&mut self, nodes: &mut [SimNode], edges: &[(usize, usize)], alpha: f64) {
		for (k, &(source, target)) in edges.iter().enumerate() {
			let (s, t) = (&nodes[source], &nodes[target]);
			let mut dx = t.x + t.vx - s.x - s.vx;
			let mut dy = t.y + t.vy - s.y - s.vy;
			if dx == 0.0 && dy == 0.0 {
				dx = jiggle(k);
				dy = jiggle(k + 1);
			}
			let len = (dx * dx + dy * dy).sqrt();
			let adjust = (len - self.distance) / len * alpha * self.strength;
			let (dx, dy) = (dx * adjust, dy * adjust);
			let bias = self.bias[k];
			nodes[target].vx -= dx * bias;
			nodes[target].vy -= dy * bias;
			nodes[source].vx += dx * (1.0 - bias);
			nodes[source].vy += dy * (1.0 - bias);
		}
	}
}

// --- n-body charge ---

/// Pairwise charge force between every two nodes. Negative strength
/// repels. Below `distance_min2` (a squared distance) the force is
/// softened so coincident nodes do not explode.
pub struct ManyBodyForce {
	strength: f64,
	distance_min2: f64,
}

impl ManyBodyForce {
	/// A charge force with the given strength and softening floor.
	pub fn new(strength: f64, distance_min2: f64) -> Self {
		Self { strength, distance_min2 }
	}
}

impl Force for ManyBodyForce {
	fn apply(&mut self, nodes: &mut [SimNode], _edges: &[(usize, usize)], alpha: f64) {
		let mut accel = vec![(0.0_f64, 0.0_f64); nodes.len()];
		for (i, node) in nodes.iter().enumerate() {
			for (j, other) in nodes.iter().enumerate() {
				if i == j {
					continue;
				}
				let mut dx = other.x - node.x;
				let mut dy = other.y - node.y;
				let mut l2 = dx * dx + dy * dy;
				if dx == 0.0 && dy == 0.0 {
					dx = jiggle(i);
					dy = jiggle(j);
					l2 = dx * dx + dy * dy;
				}
				if l2 < self.distance_min2 {
					l2 = (self.distance_min2 * l2).sqrt();
				}
				let w = self.strength * alpha / l2;
				accel[i].0 += dx * w;
				accel[i].1 += dy * w;
			}
		}
		for (node, (ax, ay)) in nodes.iter_mut().zip(accel) {
			node.vx += ax;
			node.vy += ay;
		}
	}
}

// --- centering ---

/// Keeps the layout's mean position on a fixed point by translating
/// every node, independent of alpha. This is a recentering, not a
/// gravity well: relative geometry is untouched.
pub struct CenterForce {
	x: f64,
	y: f64,
}

impl CenterForce {
	/// A centering force on (x, y).
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Force for CenterForce {
	fn apply(&mut self, nodes: &mut [SimNode], _edges: &[(usize, usize)], _alpha: f64) {
		if nodes.is_empty() {
			return;
		}
		let n = nodes.len() as f64;
		let (mut sx, mut sy) = (0.0, 0.0);
		for node in nodes.iter() {
			sx += node.x;
			sy += node.y;
		}
		let (shift_x, shift_y) = (sx / n - self.x, sy / n - self.y);
		for node in nodes.iter_mut() {
			node.x -= shift_x;
			node.y -= shift_y;
		}
	}
}

// --- collision ---

/// Pushes overlapping nodes apart, treating each as a circle of its
/// derived radius plus a fixed padding. Works on projected positions
/// (x + vx) and splits the correction so the smaller circle yields
/// more. Ignores alpha, so overlap keeps resolving as the layout cools.
pub struct CollideForce {
	padding: f64,
}

impl CollideForce {
	/// A collision force with the given padding around every radius.
	pub fn new(padding: f64) -> Self {
		Self { padding }
	}
}

impl Force for CollideForce {
	fn apply(&mut self, nodes: &mut [SimNode], _edges: &[(usize, usize)], _alpha: f64) {
		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let ri = nodes[i].radius() + self.padding;
				let rj = nodes[j].radius() + self.padding;
				let r = ri + rj;
				let mut dx = (nodes[i].x + nodes[i].vx) - (nodes[j].x + nodes[j].vx);
				let mut dy = (nodes[i].y + nodes[i].vy) - (nodes[j].y + nodes[j].vy);
				let mut l2 = dx * dx + dy * dy;
				if l2 >= r * r {
					continue;
				}
				if dx == 0.0 && dy == 0.0 {
					dx = jiggle(i);
					dy = jiggle(j);
					l2 = dx * dx + dy * dy;
				}
				let len = l2.sqrt();
				let m = (r - len) / len;
				let (dx, dy) = (dx * m, dy * m);
				let ratio = rj * rj / (ri * ri + rj * rj);
				nodes[i].vx += dx * ratio;
				nodes[i].vy += dy * ratio;
				nodes[j].vx -= dx * (1.0 - ratio);
				nodes[j].vy -= dy * (1.0 - ratio);
			}
		}
	}
}
