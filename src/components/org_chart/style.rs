use super::types::{Level, Rgb};

/// Visual tuning for the animated chart.
///
/// The defaults are the values the homepage chart has always shipped with.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
	/// Peak radius offset of the pulse, in pixels.
	pub pulse_amplitude: f64,
	/// Clock advance per display refresh.
	pub clock_step: f64,
	/// Pulse damping per level, root first.
	pub level_weights: [f64; 3],
	/// Stroke color of parent to child connectors.
	pub connector_color: Rgb,
	/// Stroke width of connectors, in pixels.
	pub connector_width: f64,
	/// Blur radius of the glow around each node.
	pub glow_blur: f64,
	/// Fill color of node labels.
	pub label_color: Rgb,
	/// CSS font used for labels, independent of node radius.
	pub label_font: &'static str,
}

impl Default for ChartStyle {
	fn default() -> Self {
		Self {
			pulse_amplitude: 5.0,
			clock_step: 0.005,
			level_weights: [1.0, 0.8, 0.6],
			connector_color: Rgb::hex(0xd0d5e8),
			connector_width: 2.0,
			glow_blur: 15.0,
			label_color: Rgb::hex(0xffffff),
			label_font: "12px \"Space Grotesk\", sans-serif",
		}
	}
}

impl ChartStyle {
	/// Share of the pulse a node at `level` receives.
	pub fn level_weight(&self, level: Level) -> f64 {
		match level {
			Level::Root => self.level_weights[0],
			Level::Executive => self.level_weights[1],
			Level::Staff => self.level_weights[2],
		}
	}
}
