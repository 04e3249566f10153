use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::style::ChartStyle;
use super::surface::{SurfaceHandle, SurfaceManager};
use super::tree::OrgChart;
use super::types::{Level, Rgb, SurfaceDimensions};

/// The drawing primitives a frame needs.
pub trait DrawSurface {
	/// Clear the rectangle from the origin to `dims`.
	fn clear(&mut self, dims: SurfaceDimensions);
	/// Straight line from `from` to `to`.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, width: f64);
	/// Filled circle with a same-hue glow of `glow_blur` pixels.
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb, glow_blur: f64);
	/// Text centered on `at`.
	fn draw_label(&mut self, text: &str, at: (f64, f64), color: Rgb, font: &str);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&mut self, dims: SurfaceDimensions) {
		self.clear_rect(0.0, 0.0, dims.width, dims.height);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, width: f64) {
		self.set_stroke_style_str(&color.to_string());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb, glow_blur: f64) {
		let color = color.to_string();
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(&color);
		self.set_shadow_color(&color);
		self.set_shadow_blur(glow_blur);
		self.fill();
		self.set_shadow_blur(0.0);
	}

	fn draw_label(&mut self, text: &str, at: (f64, f64), color: Rgb, font: &str) {
		self.set_font(font);
		self.set_fill_style_str(&color.to_string());
		self.set_text_align("center");
		self.set_text_baseline("middle");
		let _ = self.fill_text(text, at.0, at.1);
	}
}

/// Shared radius offset for clock value `t`.
pub fn pulse(t: f64, style: &ChartStyle) -> f64 {
	t.sin() * style.pulse_amplitude
}

/// Drawn radius of a node at `level`, never negative.
pub fn effective_radius(base_radius: f64, level: Level, t: f64, style: &ChartStyle) -> f64 {
	let r = base_radius + pulse(t, style) * style.level_weight(level);
	// NaN from a non-finite clock also lands on zero
	r.max(0.0)
}

/// Draw one frame: clear, every connector, then every node on top.
///
/// Edges that point at missing nodes are skipped; the rest of the frame is
/// still drawn.
pub fn render_frame<D: DrawSurface + ?Sized>(
	surface: &mut D,
	dims: SurfaceDimensions,
	chart: &OrgChart,
	t: f64,
	style: &ChartStyle,
) {
	surface.clear(dims);
	let nodes = chart.place(dims);

	for edge in &chart.edges {
		let (Some(parent), Some(child)) = (nodes.get(edge.parent), nodes.get(edge.child)) else {
			continue;
		};
		surface.stroke_line(
			(parent.x, parent.y + parent.base_radius),
			(child.x, child.y - child.base_radius),
			style.connector_color,
			style.connector_width,
		);
	}

	for node in &nodes {
		let radius = effective_radius(node.base_radius, node.level, t, style);
		surface.fill_circle((node.x, node.y), radius, node.color, style.glow_blur);
		surface.draw_label(node.label, (node.x, node.y), style.label_color, style.label_font);
	}
}

/// One animation tick: draw at the surface's current size, or skip the frame
/// if the surface was detached or removed since the tick was scheduled.
/// Returns whether a frame was drawn.
pub fn draw_if_available<D, H>(
	draw: &mut D,
	surface: &SurfaceManager<H>,
	chart: &OrgChart,
	t: f64,
	style: &ChartStyle,
) -> bool
where
	D: DrawSurface + ?Sized,
	H: SurfaceHandle,
{
	if !surface.is_available() {
		return false;
	}
	render_frame(draw, surface.dimensions(), chart, t, style);
	true
}
