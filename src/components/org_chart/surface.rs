//! Drawing surface sizing and the window resize subscription.

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::types::SurfaceDimensions;

/// Failures while acquiring browser resources for the chart. None of these
/// are fatal: the component logs them and falls back to a static view.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
	/// `window` is not defined, e.g. outside a browser.
	#[error("no browser window available")]
	NoWindow,
	/// `getContext("2d")` failed or returned nothing.
	#[error("canvas has no 2d rendering context")]
	NoContext,
	/// `addEventListener` threw.
	#[error("could not register resize listener: {0}")]
	Listener(String),
}

/// Something with a layout box and a resizable pixel buffer.
pub trait SurfaceHandle {
	/// CSS layout size `(width, height)`.
	fn layout_box(&self) -> (f64, f64);
	/// Resize the backing pixel buffer.
	fn set_buffer_size(&self, width: u32, height: u32);
	/// Whether the surface can still be drawn to.
	fn is_available(&self) -> bool {
		true
	}
}

impl SurfaceHandle for HtmlCanvasElement {
	fn layout_box(&self) -> (f64, f64) {
		let rect = self.get_bounding_client_rect();
		(rect.width(), rect.height())
	}

	fn set_buffer_size(&self, width: u32, height: u32) {
		self.set_width(width);
		self.set_height(height);
	}

	fn is_available(&self) -> bool {
		self.is_connected()
	}
}

/// Keeps the surface's pixel buffer matched to its layout box.
///
/// Every operation is a no-op while no handle is attached.
pub struct SurfaceManager<H> {
	handle: Option<H>,
	dims: SurfaceDimensions,
}

impl<H> Default for SurfaceManager<H> {
	fn default() -> Self {
		Self {
			handle: None,
			dims: SurfaceDimensions::default(),
		}
	}
}

impl<H: SurfaceHandle> SurfaceManager<H> {
	/// Attach `handle` (if any) and size its buffer.
	pub fn initialize(&mut self, handle: Option<H>) -> SurfaceDimensions {
		self.handle = handle;
		self.on_resize()
	}

	/// Re-read the layout box and update the stored dimensions in place.
	pub fn on_resize(&mut self) -> SurfaceDimensions {
		let Some(handle) = &self.handle else {
			return self.dims;
		};
		let (w, h) = handle.layout_box();
		// `as` saturates negative and NaN sizes to zero
		let (bw, bh) = (w as u32, h as u32);
		handle.set_buffer_size(bw, bh);
		self.dims = SurfaceDimensions::new(bw as f64, bh as f64);
		self.dims
	}

	/// Drop the handle. Later calls are no-ops until re-initialized.
	pub fn detach(&mut self) -> Option<H> {
		self.handle.take()
	}

	/// Whether a handle is attached.
	pub fn is_attached(&self) -> bool {
		self.handle.is_some()
	}

	/// Attached and still drawable.
	pub fn is_available(&self) -> bool {
		self.handle.as_ref().is_some_and(H::is_available)
	}

	/// Dimensions as of the last resize.
	pub fn dimensions(&self) -> SurfaceDimensions {
		self.dims
	}
}

/// A single `resize` listener on the window, removed on [`detach`] or drop.
///
/// [`detach`]: ResizeListener::detach
pub struct ResizeListener {
	window: Window,
	callback: Option<Closure<dyn FnMut()>>,
}

impl ResizeListener {
	/// Subscribe `on_resize` to the window's `resize` event.
	pub fn attach<F>(window: &Window, on_resize: F) -> Result<Self, SurfaceError>
	where
		F: FnMut() + 'static,
	{
		let callback = Closure::<dyn FnMut()>::new(on_resize);
		window
			.add_event_listener_with_callback(
				"resize",
				callback.as_ref().unchecked_ref::<js_sys::Function>(),
			)
			.map_err(|e| SurfaceError::Listener(format!("{e:?}")))?;
		Ok(Self {
			window: window.clone(),
			callback: Some(callback),
		})
	}

	/// Remove the listener. Safe to call more than once.
	pub fn detach(&mut self) {
		if let Some(cb) = self.callback.take() {
			let _ = self.window.remove_event_listener_with_callback(
				"resize",
				cb.as_ref().unchecked_ref::<js_sys::Function>(),
			);
		}
	}

	/// Whether the listener is still registered.
	pub fn is_attached(&self) -> bool {
		self.callback.is_some()
	}
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		self.detach();
	}
}
