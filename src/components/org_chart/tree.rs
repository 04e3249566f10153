//! The fixed organization tree and its placement on a surface.

use super::types::{Edge, Level, Node, PlacedNode, Rgb, SurfaceDimensions};

const ROOT_Y: f64 = 50.0;
const EXECUTIVE_Y: f64 = 160.0;
const STAFF_Y: f64 = 250.0;

const ROOT_RADIUS: f64 = 25.0;
const EXECUTIVE_RADIUS: f64 = 20.0;
const STAFF_RADIUS: f64 = 16.0;

const ROOT_COLOR: Rgb = Rgb::hex(0x3f51b5);
const EXECUTIVE_COLOR: Rgb = Rgb::hex(0x5768c7);
const STAFF_COLOR: Rgb = Rgb::hex(0x7683d2);

/// Nodes in a flat arena plus parent to child edges between them.
///
/// Nodes are only ever added through [`OrgChart::add_root`] and
/// [`OrgChart::add_child`], so every non-root node has exactly one parent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrgChart {
	/// Nodes in insertion order, which is also draw order.
	pub nodes: Vec<Node>,
	/// Connectors in insertion order.
	pub edges: Vec<Edge>,
}

/// An [`OrgChart`] resolved to pixel positions.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTree {
	/// Nodes at pixel positions, same order as the chart.
	pub nodes: Vec<PlacedNode>,
	/// Connectors between `nodes` indices.
	pub edges: Vec<Edge>,
}

impl OrgChart {
	/// The chart shown on the homepage: a CEO, three executives and six staff
	/// split 3/1/2 across them.
	pub fn standard() -> Self {
		let mut chart = Self::default();
		let ceo = chart.add_root(node("CEO", Level::Root, 1.0 / 2.0));

		let cto = chart.add_child(ceo, node("CTO", Level::Executive, 1.0 / 3.0));
		let cfo = chart.add_child(ceo, node("CFO", Level::Executive, 1.0 / 2.0));
		let cmo = chart.add_child(ceo, node("CMO", Level::Executive, 2.0 / 3.0));

		chart.add_child(cto, node("Eng", Level::Staff, 1.0 / 4.0));
		chart.add_child(cto, node("Eng", Level::Staff, 1.0 / 3.0));
		chart.add_child(cto, node("QA", Level::Staff, 2.0 / 5.0));

		chart.add_child(cfo, node("Acc", Level::Staff, 1.0 / 2.0));

		chart.add_child(cmo, node("Mkt", Level::Staff, 2.0 / 3.0));
		chart.add_child(cmo, node("PR", Level::Staff, 3.0 / 4.0));

		chart
	}

	/// Add a node with no parent. Returns its index.
	pub fn add_root(&mut self, node: Node) -> usize {
		self.nodes.push(node);
		self.nodes.len() - 1
	}

	/// Add `node` under `parent`. Returns the new node's index.
	pub fn add_child(&mut self, parent: usize, node: Node) -> usize {
		let child = self.add_root(node);
		self.edges.push(Edge { parent, child });
		child
	}

	/// Parent index of `child`, `None` for roots.
	pub fn parent_of(&self, child: usize) -> Option<usize> {
		self.edges
			.iter()
			.find(|e| e.child == child)
			.map(|e| e.parent)
	}

	/// Resolve every node against `dims`. Widths of zero collapse all
	/// nodes onto the left edge.
	pub fn place(&self, dims: SurfaceDimensions) -> Vec<PlacedNode> {
		let width = dims.width.max(0.0);
		self.nodes
			.iter()
			.map(|n| PlacedNode {
				label: n.label,
				level: n.level,
				x: width * n.fx,
				y: n.y,
				base_radius: n.base_radius,
				color: n.color,
			})
			.collect()
	}
}

/// Build the standard chart placed on a surface of `dims`.
pub fn build_tree(dims: SurfaceDimensions) -> PlacedTree {
	let chart = OrgChart::standard();
	PlacedTree {
		nodes: chart.place(dims),
		edges: chart.edges,
	}
}

fn node(label: &'static str, level: Level, fx: f64) -> Node {
	let (y, base_radius, color) = match level {
		Level::Root => (ROOT_Y, ROOT_RADIUS, ROOT_COLOR),
		Level::Executive => (EXECUTIVE_Y, EXECUTIVE_RADIUS, EXECUTIVE_COLOR),
		Level::Staff => (STAFF_Y, STAFF_RADIUS, STAFF_COLOR),
	};
	Node {
		label,
		level,
		fx,
		y,
		base_radius,
		color,
	}
}
