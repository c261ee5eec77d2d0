use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::sim::SimNode;
use super::state::{DragPhase, GraphState};
use super::types::NodeCategory;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let bg = ctx.create_linear_gradient(0.0, 0.0, state.width, state.height);
	let _ = bg.add_color_stop(0.0, "#0f0f1e");
	let _ = bg.add_color_stop(1.0, "#1a1a2e");
	#[allow(deprecated)]
	ctx.set_fill_style(&bg);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	let nodes = state.sim.nodes();

	for &(src, tgt) in state.sim.edges() {
		let (x1, y1, x2, y2) = (nodes[src].x, nodes[src].y, nodes[tgt].x, nodes[tgt].y);
		let (dx, dy) = (x2 - x1, y2 - y1);
		if (dx * dx + dy * dy).sqrt() < 0.001 {
			continue;
		}

		let is_highlighted = state.is_highlighted(src) && state.is_highlighted(tgt);

		// t=0: all edges at base (0.4); t=1: highlighted at 0.8, others at 0.1
		let (opacity, width) = if is_highlighted {
			(0.4 + 0.4 * t, 2.0 + t)
		} else {
			(0.4 - 0.3 * t, 2.0)
		};

		let gradient = ctx.create_linear_gradient(x1, y1, x2, y2);
		let _ = gradient.add_color_stop(0.0, &format!("rgba(99, 102, 241, {})", 0.6 * opacity));
		let _ = gradient.add_color_stop(1.0, &format!("rgba(139, 92, 246, {})", 0.3 * opacity));
		#[allow(deprecated)]
		ctx.set_stroke_style(&gradient);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(state: &GraphState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);

	for (idx, node) in state.sim.nodes().iter().enumerate() {
		if has_highlight && state.is_highlighted(idx) {
			continue;
		}
		let (x, y) = (node.x, node.y);
		let (alpha, radius) = (1.0 - 0.7 * t, node.radius() * (1.0 - 0.15 * t));

		ctx.set_global_alpha(alpha);
		draw_node_body(ctx, x, y, radius, node.category);
		draw_pin_ring(state, ctx, idx, x, y, radius);
		draw_label(ctx, x, y, node);
		ctx.set_global_alpha(1.0);
	}

	if !has_highlight {
		return;
	}

	for (idx, node) in state.sim.nodes().iter().enumerate() {
		if !state.is_highlighted(idx) {
			continue;
		}
		let (x, y) = (node.x, node.y);
		let is_hovered = state.is_hovered(idx);
		let is_neighbor =
			state.hover.neighbors.contains(&idx) || state.hover.prev_neighbors.contains(&idx);

		let radius = node.radius() + if is_hovered { 5.0 * t } else { 0.0 };
		let glow_radius = if is_hovered {
			radius + 32.0 * t
		} else if is_neighbor {
			radius + 16.0 * t
		} else {
			radius
		};

		if glow_radius > radius && t > 0.01 {
			let gradient = ctx
				.create_radial_gradient(x, y, radius * 0.3, x, y, glow_radius)
				.unwrap();
			let alpha = if is_hovered { 0.4 * t } else { 0.2 * t };
			gradient
				.add_color_stop(0.0, &format!("rgba(139, 92, 246, {})", alpha))
				.unwrap();
			gradient
				.add_color_stop(0.6, &format!("rgba(167, 139, 250, {})", alpha * 0.3))
				.unwrap();
			gradient
				.add_color_stop(1.0, "rgba(139, 92, 246, 0)")
				.unwrap();
			ctx.begin_path();
			let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}

		draw_node_body(ctx, x, y, radius, node.category);

		if is_hovered && t > 0.01 {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		draw_pin_ring(state, ctx, idx, x, y, radius);
		draw_label(ctx, x, y, node);
	}
}

fn draw_node_body(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64, category: NodeCategory) {
	let (halo, stop0, stop1, stroke) = match category {
		NodeCategory::Central => ("#6366f144", "#ffffff", "#f0f0f0", "#e5e7eb"),
		NodeCategory::Satellite => ("#8b5cf644", "#a78bfa", "#7c3aed", "#a78bfa"),
	};

	ctx.begin_path();
	let _ = ctx.arc(x, y, r + 4.0, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(halo);
	ctx.fill();

	let gradient = ctx.create_radial_gradient(x, y, 0.0, x, y, r).unwrap();
	gradient.add_color_stop(0.0, stop0).unwrap();
	gradient.add_color_stop(1.0, stop1).unwrap();
	ctx.begin_path();
	let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
	ctx.set_stroke_style_str(stroke);
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.begin_path();
	let _ = ctx.arc(x, y, r - 2.0, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
	ctx.set_line_width(1.5);
	ctx.stroke();
}

fn draw_pin_ring(
	state: &GraphState,
	ctx: &CanvasRenderingContext2d,
	idx: usize,
	x: f64,
	y: f64,
	r: f64,
) {
	let alpha = match state.drag_phase(idx) {
		DragPhase::Free => return,
		DragPhase::Dragging => 0.9,
		DragPhase::Pinned => 0.45,
	};
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(4.0),
		&JsValue::from_f64(4.0),
	));
	ctx.begin_path();
	let _ = ctx.arc(x, y, r + 6.0, 0.0, 2.0 * PI);
	ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", alpha));
	ctx.set_line_width(1.5);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_label(ctx: &CanvasRenderingContext2d, x: f64, y: f64, node: &SimNode) {
	let (font_size, color) = match node.category {
		NodeCategory::Central => (14.0, "#1f2937"),
		NodeCategory::Satellite => (11.0, "#ffffff"),
	};
	let lines = wrap_label(&node.label, font_size, (node.radius() * 2.0).max(60.0));

	ctx.set_fill_style_str(color);
	ctx.set_font(&format!("600 {}px sans-serif", font_size));
	ctx.set_text_align("center");
	let line_height = font_size * 1.1;
	let first = y - (lines.len() as f64 - 1.0) * line_height / 2.0 + font_size * 0.35;
	for (i, line) in lines.iter().enumerate() {
		let _ = ctx.fill_text(line, x, first + i as f64 * line_height);
	}
}

// Greedy word wrap against an approximate glyph advance; canvas text
// metrics are not worth a layout pass for circle labels.
fn wrap_label(label: &str, font_size: f64, max_width: f64) -> Vec<String> {
	let advance = font_size * 0.55;
	let mut lines: Vec<String> = Vec::new();
	let mut current = String::new();
	for word in label.split_whitespace() {
		let joined = current.chars().count() + 1 + word.chars().count();
		if !current.is_empty() && joined as f64 * advance > max_width {
			lines.push(std::mem::take(&mut current));
		}
		if !current.is_empty() {
			current.push(' ');
		}
		current.push_str(word);
	}
	if !current.is_empty() {
		lines.push(current);
	}
	lines
}
