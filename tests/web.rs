//! Browser tests for the canvas-backed pieces. Run with
//! `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use org_chart_canvas::components::org_chart::{
	AnimationFrameScheduler, ChartStyle, OrgChart, ResizeListener, SurfaceDimensions,
	SurfaceManager, render_frame, start,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let canvas: HtmlCanvasElement = document
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap();
	canvas
		.set_attribute(
			"style",
			&format!("display: block; width: {width}px; height: {height}px;"),
		)
		.unwrap();
	document.body().unwrap().append_child(&canvas).unwrap();
	canvas
}

fn fire_resize() {
	let event = Event::new("resize").unwrap();
	web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn buffer_tracks_layout_box() {
	let canvas = canvas(320, 180);
	let mut surface = SurfaceManager::default();
	let dims = surface.initialize(Some(canvas.clone()));
	assert_eq!(dims, SurfaceDimensions::new(320.0, 180.0));
	assert_eq!((canvas.width(), canvas.height()), (320, 180));

	canvas
		.set_attribute("style", "display: block; width: 200px; height: 100px;")
		.unwrap();
	surface.on_resize();
	assert_eq!(surface.dimensions(), SurfaceDimensions::new(200.0, 100.0));
	assert_eq!(canvas.width(), 200);
	canvas.remove();
}

#[wasm_bindgen_test]
fn detached_canvas_is_unavailable() {
	let canvas = canvas(100, 100);
	let mut surface = SurfaceManager::default();
	surface.initialize(Some(canvas.clone()));
	assert!(surface.is_available());
	canvas.remove();
	assert!(!surface.is_available());
}

#[wasm_bindgen_test]
fn resize_listener_removed_on_detach() {
	let window = web_sys::window().unwrap();
	let hits = Rc::new(Cell::new(0));
	let counter = hits.clone();
	let mut listener = ResizeListener::attach(&window, move || counter.set(counter.get() + 1)).unwrap();

	fire_resize();
	assert_eq!(hits.get(), 1);

	listener.detach();
	listener.detach();
	assert!(!listener.is_attached());
	fire_resize();
	assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
fn resize_listener_removed_on_drop() {
	let window = web_sys::window().unwrap();
	let hits = Rc::new(Cell::new(0));
	let counter = hits.clone();
	drop(ResizeListener::attach(&window, move || counter.set(counter.get() + 1)).unwrap());
	fire_resize();
	assert_eq!(hits.get(), 0);
}

#[wasm_bindgen_test]
fn draws_on_real_context() {
	let canvas = canvas(900, 600);
	let mut surface = SurfaceManager::default();
	let dims = surface.initialize(Some(canvas.clone()));
	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	let style = ChartStyle::default();
	render_frame(&mut ctx, dims, &OrgChart::standard(), 1.0, &style);
	assert_eq!(ctx.shadow_blur(), 0.0);
	canvas.remove();
}

#[wasm_bindgen_test]
fn frame_scheduler_shares_the_callers_window() {
	let window = web_sys::window().unwrap();
	let ticks = Rc::new(Cell::new(0));
	let counter = ticks.clone();
	let handle = start(AnimationFrameScheduler::new(window), 0.005, move |_| {
		counter.set(counter.get() + 1)
	});
	assert!(handle.is_running());
	handle.stop();
	handle.stop();
	assert!(!handle.is_running());
	assert_eq!(ticks.get(), 0);
	assert_eq!(handle.clock(), 0.0);
}
