//! Animated org chart: a fixed tree of pulsing nodes drawn on a canvas.

mod animation;
mod component;
mod render;
mod style;
mod surface;
mod tree;
mod types;

pub use animation::{
	AnimationClock, AnimationFrameScheduler, AnimationHandle, FrameScheduler, start,
};
pub use component::{AnimatedOrgChart, OrgChartPlaceholder};
pub use render::{
	DrawSurface, draw_if_available, effective_radius, pulse, render_frame,
};
pub use style::ChartStyle;
pub use surface::{ResizeListener, SurfaceError, SurfaceHandle, SurfaceManager};
pub use tree::{OrgChart, PlacedTree, build_tree};
pub use types::{Edge, Level, Node, PlacedNode, Rgb, SurfaceDimensions};
