//! Frame-driven animation clock and the loop that advances it.
//!
//! The clock moves by a fixed step per display refresh rather than by
//! elapsed time, so the pulse speed follows the display's refresh rate.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Monotonic scalar clock, advanced once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
	t: f64,
	step: f64,
}

impl AnimationClock {
	/// A clock at zero that moves `step` per tick.
	pub fn new(step: f64) -> Self {
		Self { t: 0.0, step }
	}

	/// Current value.
	pub fn value(&self) -> f64 {
		self.t
	}

	/// Move forward one step and return the new value.
	pub fn advance(&mut self) -> f64 {
		self.t += self.step;
		self.t
	}
}

/// Host hook that runs a bound callback at the next display refresh.
pub trait FrameScheduler {
	/// Install the callback run for every request. Called once, before any
	/// request is made.
	fn bind(&mut self, frame: Box<dyn FnMut()>);
	/// Queue one run of the bound callback. Returns a request id, or `None`
	/// if the host refused.
	fn request(&self) -> Option<i32>;
	/// Withdraw a request. Unknown or already-fired ids are ignored.
	fn cancel(&self, id: i32);
}

struct Driver<S> {
	scheduler: RefCell<S>,
	clock: Cell<AnimationClock>,
	running: Cell<bool>,
	pending: Cell<Option<i32>>,
	on_tick: RefCell<Box<dyn FnMut(f64)>>,
}

impl<S: FrameScheduler> Driver<S> {
	fn schedule(&self) {
		let id = self.scheduler.borrow().request();
		self.pending.set(id);
	}

	fn tick(&self) {
		self.pending.set(None);
		if !self.running.get() {
			return;
		}
		let mut clock = self.clock.get();
		let t = clock.advance();
		self.clock.set(clock);
		(self.on_tick.borrow_mut())(t);
		// on_tick may have stopped us
		if self.running.get() {
			self.schedule();
		}
	}
}

/// Start ticking through `scheduler`. `on_tick` receives the clock value
/// after each advance; the first tick fires at the next refresh, never
/// synchronously.
pub fn start<S, F>(mut scheduler: S, step: f64, on_tick: F) -> AnimationHandle<S>
where
	S: FrameScheduler + 'static,
	F: FnMut(f64) + 'static,
{
	let driver = Rc::new_cyclic(|weak: &Weak<Driver<S>>| {
		let weak = weak.clone();
		scheduler.bind(Box::new(move || {
			if let Some(driver) = weak.upgrade() {
				driver.tick();
			}
		}));
		Driver {
			scheduler: RefCell::new(scheduler),
			clock: Cell::new(AnimationClock::new(step)),
			running: Cell::new(true),
			pending: Cell::new(None),
			on_tick: RefCell::new(Box::new(on_tick)),
		}
	});
	driver.schedule();
	AnimationHandle { driver }
}

/// Owner of a running animation. Stopping is idempotent and also happens
/// on drop.
pub struct AnimationHandle<S: FrameScheduler> {
	driver: Rc<Driver<S>>,
}

impl<S: FrameScheduler> AnimationHandle<S> {
	/// Cancel all future ticks.
	pub fn stop(&self) {
		self.driver.running.set(false);
		if let Some(id) = self.driver.pending.take() {
			self.driver.scheduler.borrow().cancel(id);
		}
	}

	/// False once stopped.
	pub fn is_running(&self) -> bool {
		self.driver.running.get()
	}

	/// Current clock value.
	pub fn clock(&self) -> f64 {
		self.driver.clock.get().value()
	}
}

impl<S: FrameScheduler> Drop for AnimationHandle<S> {
	fn drop(&mut self) {
		self.stop();
	}
}

/// [`FrameScheduler`] backed by `window.requestAnimationFrame`.
pub struct AnimationFrameScheduler {
	window: Window,
	frame: Option<Closure<dyn FnMut()>>,
}

impl AnimationFrameScheduler {
	/// Schedule frames on `window`.
	pub fn new(window: Window) -> Self {
		Self {
			window,
			frame: None,
		}
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn bind(&mut self, frame: Box<dyn FnMut()>) {
		self.frame = Some(Closure::wrap(frame));
	}

	fn request(&self) -> Option<i32> {
		let cb = self.frame.as_ref()?;
		self.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel(&self, id: i32) {
		let _ = self.window.cancel_animation_frame(id);
	}
}
