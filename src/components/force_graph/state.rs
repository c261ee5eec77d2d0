use std::collections::HashSet;

use super::consts::{CLICK_TOLERANCE, DRAG_ALPHA_TARGET, ZOOM_MAX, ZOOM_MIN};
use super::sim::Simulation;
use super::types::{GraphData, GraphError, GraphNode};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f64,
	pub node_start_y: f64,
	pub moved: bool,
	pub was_pinned: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
	Free,
	Dragging,
	Pinned,
}

pub struct GraphState {
	pub sim: Simulation,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl GraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Result<Self, GraphError> {
		Ok(Self {
			sim: Simulation::initialize(data, width, height)?,
			transform: ViewTransform::default(),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
		})
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		for (idx, node) in self.sim.nodes().iter().enumerate() {
			let (dx, dy) = (node.x - gx, node.y - gy);
			// hit area is the node's world-space circle, so it scales with zoom
			if (dx * dx + dy * dy).sqrt() < node.radius() {
				found = Some(idx);
			}
		}
		found
	}

	/// Where a node currently sits in the drag lifecycle.
	pub fn drag_phase(&self, idx: usize) -> DragPhase {
		if self.drag.active && self.drag.node_idx == Some(idx) {
			DragPhase::Dragging
		} else if self.sim.nodes()[idx].fx.is_some() {
			DragPhase::Pinned
		} else {
			DragPhase::Free
		}
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		if let Some(idx) = self.node_at_position(sx, sy) {
			let node = &self.sim.nodes()[idx];
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: sx,
				start_y: sy,
				node_start_x: node.x,
				node_start_y: node.y,
				moved: false,
				was_pinned: node.fx.is_some(),
			};
			let (x, y) = (node.x, node.y);
			self.sim.pin_index(idx, x, y);
			self.sim.set_alpha_target(DRAG_ALPHA_TARGET);
		} else {
			self.pan = PanState {
				active: true,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				let (dx, dy) = (sx - self.drag.start_x, sy - self.drag.start_y);
				if (dx * dx + dy * dy).sqrt() >= CLICK_TOLERANCE {
					self.drag.moved = true;
				}
				// screen delta over k keeps the node under the pointer at any zoom
				let gx = self.drag.node_start_x + dx / self.transform.k;
				let gy = self.drag.node_start_y + dy / self.transform.k;
				self.sim.pin_index(idx, gx, gy);
			}
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		} else {
			let hovered = self.node_at_position(sx, sy);
			self.set_hover(hovered);
		}
	}

	/// Ends the active gesture. A drag leaves the node pinned where it was
	/// released; a click (no meaningful pointer travel) restores the pin
	/// state from before the gesture and yields the node's record.
	pub fn pointer_up(&mut self, _sx: f64, _sy: f64) -> Option<GraphNode> {
		if self.pan.active {
			self.pan = PanState::default();
			return None;
		}
		if !self.drag.active {
			return None;
		}
		let drag = std::mem::take(&mut self.drag);
		self.sim.set_alpha_target(0.0);
		let idx = drag.node_idx?;
		if drag.moved {
			return None;
		}
		if drag.was_pinned {
			// undo any sub-threshold pointer wobble
			self.sim.pin_index(idx, drag.node_start_x, drag.node_start_y);
		} else {
			self.sim.unpin_index(idx);
		}
		Some(self.sim.nodes()[idx].record())
	}

	pub fn pointer_leave(&mut self) {
		if self.drag.active {
			self.sim.set_alpha_target(0.0);
		}
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.set_hover(None);
	}

	pub fn wheel(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let k = (self.transform.k * factor).clamp(ZOOM_MIN, ZOOM_MAX);
		let ratio = k / self.transform.k;
		// keep the point under the cursor fixed while scaling
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = k;
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in self.sim.edges() {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f64) {
		self.sim.step();

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn stop(&mut self) {
		self.sim.stop();
	}
}
