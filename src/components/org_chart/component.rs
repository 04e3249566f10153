use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animation::{self, AnimationFrameScheduler, AnimationHandle};
use super::render::draw_if_available;
use super::style::ChartStyle;
use super::surface::{ResizeListener, SurfaceError, SurfaceManager};
use super::tree::OrgChart;

/// Everything acquired on mount. Released exactly once, either explicitly
/// from the component cleanup or when dropped.
struct Mounted {
	animation: AnimationHandle<AnimationFrameScheduler>,
	resize: ResizeListener,
	surface: Rc<RefCell<SurfaceManager<HtmlCanvasElement>>>,
	released: bool,
}

impl Mounted {
	fn release(&mut self) {
		if self.released {
			return;
		}
		self.released = true;
		self.animation.stop();
		self.resize.detach();
		self.surface.borrow_mut().detach();
		debug!("org chart torn down at t={:.3}", self.animation.clock());
	}
}

impl Drop for Mounted {
	fn drop(&mut self) {
		self.release();
	}
}

fn mount(canvas: HtmlCanvasElement, style: ChartStyle) -> Result<Mounted, SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let scheduler = AnimationFrameScheduler::new(window.clone());
	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|c| c.dyn_into().ok())
		.ok_or(SurfaceError::NoContext)?;

	let surface = Rc::new(RefCell::new(SurfaceManager::default()));
	let dims = surface.borrow_mut().initialize(Some(canvas));
	info!("org chart mounted at {}x{}", dims.width, dims.height);

	let surface_resize = surface.clone();
	let resize = ResizeListener::attach(&window, move || {
		let dims = surface_resize.borrow_mut().on_resize();
		debug!("org chart resized to {}x{}", dims.width, dims.height);
	})?;

	let (surface_tick, chart) = (surface.clone(), OrgChart::standard());
	let step = style.clock_step;
	let animation = animation::start(scheduler, step, move |t| {
		draw_if_available(&mut ctx, &*surface_tick.borrow(), &chart, t, &style);
	});

	Ok(Mounted {
		animation,
		resize,
		surface,
		released: false,
	})
}

/// Animated org chart drawn on a canvas that fills its container.
///
/// Falls back to [`OrgChartPlaceholder`] when the browser cannot provide a
/// 2D canvas context.
#[component]
pub fn AnimatedOrgChart(
	#[prop(optional)] style: Option<ChartStyle>,
	#[prop(default = 300.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let unsupported = RwSignal::new(false);
	let mounted = StoredValue::new_local(None::<Mounted>);
	let style = style.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		match mount(canvas.into(), style.clone()) {
			Ok(m) => mounted.set_value(Some(m)),
			Err(e) => {
				warn!("org chart disabled: {e}");
				unsupported.set(true);
			}
		}
	});

	on_cleanup(move || {
		mounted.try_update_value(|m| {
			if let Some(mut m) = m.take() {
				m.release();
			}
		});
	});

	view! {
		<div
			class="animated-chart-container"
			style=format!("position: relative; width: 100%; height: {height}px;")
		>
			<Show when=move || !unsupported.get() fallback=|| view! { <OrgChartPlaceholder /> }>
				<canvas
					node_ref=canvas_ref
					class="animated-chart"
					style="display: block; width: 100%; height: 100%;"
				/>
			</Show>
		</div>
	}
}

/// Static stand-in shown where the animated chart cannot run.
#[component]
pub fn OrgChartPlaceholder() -> impl IntoView {
	view! {
		<div
			class="animated-chart"
			style="width: 100%; height: 100%; background-color: #f0f4f9; border-radius: 8px; display: flex; align-items: center; justify-content: center; font-size: 1.2rem; color: #3f51b5; font-weight: bold;"
		>
			"Org Chart Visualization"
		</div>
	}
}
