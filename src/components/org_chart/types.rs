use std::fmt;

/// An sRGB color (red, green, blue), formatted as a CSS hex string when drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(
	/// Red.
	pub u8,
	/// Green.
	pub u8,
	/// Blue.
	pub u8,
);

impl Rgb {
	/// Parse a `#rrggbb` literal at compile time.
	pub const fn hex(value: u32) -> Self {
		Self(
			((value >> 16) & 0xff) as u8,
			((value >> 8) & 0xff) as u8,
			(value & 0xff) as u8,
		)
	}
}

impl fmt::Display for Rgb {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
	}
}

/// Depth of a node in the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
	/// The single top-level node.
	Root,
	/// Direct reports of the root.
	Executive,
	/// Leaves hanging under an executive.
	Staff,
}

/// One labeled circle of the chart, positioned relative to the surface.
///
/// `fx` is a fraction of the surface width; `y` is a fixed pixel offset from
/// the top so rows keep their depth on tall and short surfaces alike.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Text drawn inside the circle.
	pub label: &'static str,
	/// Depth in the tree; picks the pulse weight.
	pub level: Level,
	/// Horizontal position as a fraction of surface width.
	pub fx: f64,
	/// Vertical position in pixels from the top.
	pub y: f64,
	/// Radius before the pulse is applied. Always positive.
	pub base_radius: f64,
	/// Fill and glow color.
	pub color: Rgb,
}

/// Parent to child connection, as indices into the node list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	/// Index of the parent node.
	pub parent: usize,
	/// Index of the child node.
	pub child: usize,
}

/// A node resolved against concrete surface dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNode {
	/// Text drawn inside the circle.
	pub label: &'static str,
	/// Depth in the tree.
	pub level: Level,
	/// Center x in pixels.
	pub x: f64,
	/// Center y in pixels.
	pub y: f64,
	/// Radius before the pulse is applied.
	pub base_radius: f64,
	/// Fill and glow color.
	pub color: Rgb,
}

/// Pixel size of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceDimensions {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl SurfaceDimensions {
	/// Negative or NaN sizes collapse to zero.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
		}
	}
}
