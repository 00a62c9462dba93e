//! Self-rescheduling frame loop with an explicit start/cancel handle.
//!
//! The loop asks its [`FrameScheduler`] for one callback at a time. Each
//! callback runs the step to completion and then requests the next one, so
//! frames never overlap. Cancelling revokes the pending request and marks
//! the loop stopped, so a callback the host fires late still does nothing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Source of one-shot frame callbacks.
pub trait FrameScheduler {
	/// Identifies a pending request so it can be revoked.
	type Handle;

	/// Run `frame` once at the next opportunity. `None` if the host refused.
	fn request(&self, frame: Rc<dyn Fn()>) -> Option<Self::Handle>;

	/// Revoke a pending request.
	fn cancel(&self, handle: Self::Handle);
}

/// Schedules frames with the browser's `requestAnimationFrame`.
pub struct WindowScheduler {
	window: Window,
}

impl WindowScheduler {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameScheduler for WindowScheduler {
	type Handle = i32;

	fn request(&self, frame: Rc<dyn Fn()>) -> Option<i32> {
		let callback: js_sys::Function = Closure::once_into_js(move || frame()).unchecked_into();
		self.window.request_animation_frame(&callback).ok()
	}

	fn cancel(&self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

struct LoopInner<S: FrameScheduler> {
	scheduler: S,
	step: RefCell<Box<dyn FnMut()>>,
	running: Cell<bool>,
	pending: RefCell<Option<S::Handle>>,
}

impl<S: FrameScheduler + 'static> LoopInner<S> {
	fn schedule(this: &Rc<Self>) {
		let weak: Weak<Self> = Rc::downgrade(this);
		let frame: Rc<dyn Fn()> = Rc::new(move || {
			if let Some(inner) = weak.upgrade() {
				Self::run_frame(&inner);
			}
		});

		let handle = this.scheduler.request(frame);
		if handle.is_none() {
			debug!("particle field: host refused an animation frame, loop stopped");
			this.running.set(false);
		}
		*this.pending.borrow_mut() = handle;
	}

	fn run_frame(this: &Rc<Self>) {
		if !this.running.get() {
			return;
		}
		this.pending.borrow_mut().take();
		(this.step.borrow_mut())();
		if this.running.get() {
			Self::schedule(this);
		}
	}
}

/// Handle to a running (or stoppable) frame loop.
///
/// Dropping the handle cancels the loop.
pub struct AnimationLoop<S: FrameScheduler + 'static> {
	inner: Rc<LoopInner<S>>,
}

impl<S: FrameScheduler + 'static> AnimationLoop<S> {
	/// Create a stopped loop that will call `step` once per frame.
	pub fn new(scheduler: S, step: impl FnMut() + 'static) -> Self {
		Self {
			inner: Rc::new(LoopInner {
				scheduler,
				step: RefCell::new(Box::new(step)),
				running: Cell::new(false),
				pending: RefCell::new(None),
			}),
		}
	}

	/// Request the first frame. Calling this on a running loop does nothing.
	pub fn start(&self) {
		if self.inner.running.replace(true) {
			return;
		}
		LoopInner::schedule(&self.inner);
	}

	/// Stop the loop. No step runs after this returns.
	pub fn cancel(&self) {
		if !self.inner.running.replace(false) {
			return;
		}
		let pending = self.inner.pending.borrow_mut().take();
		if let Some(handle) = pending {
			self.inner.scheduler.cancel(handle);
		}
		debug!("particle field: animation loop cancelled");
	}

	pub fn is_running(&self) -> bool {
		self.inner.running.get()
	}
}

impl<S: FrameScheduler + 'static> Drop for AnimationLoop<S> {
	fn drop(&mut self) {
		self.cancel();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Holds requested frames until the test fires them.
	#[derive(Default)]
	struct ManualScheduler {
		next_id: Cell<u32>,
		queue: RefCell<Vec<(u32, Rc<dyn Fn()>)>>,
		cancelled: Cell<usize>,
	}

	impl ManualScheduler {
		fn pending(&self) -> usize {
			self.queue.borrow().len()
		}

		/// Fire every frame requested so far; frames requested while
		/// firing wait for the next call.
		fn fire(&self) {
			let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
			for (_, frame) in due {
				frame();
			}
		}
	}

	impl FrameScheduler for Rc<ManualScheduler> {
		type Handle = u32;

		fn request(&self, frame: Rc<dyn Fn()>) -> Option<u32> {
			let id = self.next_id.get();
			self.next_id.set(id + 1);
			self.queue.borrow_mut().push((id, frame));
			Some(id)
		}

		fn cancel(&self, handle: u32) {
			self.queue.borrow_mut().retain(|(id, _)| *id != handle);
			self.cancelled.set(self.cancelled.get() + 1);
		}
	}

	fn counting_loop() -> (Rc<ManualScheduler>, Rc<Cell<u32>>, AnimationLoop<Rc<ManualScheduler>>) {
		let scheduler = Rc::new(ManualScheduler::default());
		let frames = Rc::new(Cell::new(0));
		let counter = frames.clone();
		let animation = AnimationLoop::new(scheduler.clone(), move || {
			counter.set(counter.get() + 1);
		});
		(scheduler, frames, animation)
	}

	#[test]
	fn runs_one_step_per_frame_and_reschedules() {
		let (scheduler, frames, animation) = counting_loop();
		animation.start();
		assert_eq!(frames.get(), 0);

		for expected in 1..=5 {
			scheduler.fire();
			assert_eq!(frames.get(), expected);
			assert_eq!(scheduler.pending(), 1);
		}
		assert!(animation.is_running());
	}

	#[test]
	fn start_is_idempotent() {
		let (scheduler, frames, animation) = counting_loop();
		animation.start();
		animation.start();
		assert_eq!(scheduler.pending(), 1);

		scheduler.fire();
		animation.start();
		assert_eq!(frames.get(), 1);
		assert_eq!(scheduler.pending(), 1);
	}

	#[test]
	fn cancel_right_after_start_runs_no_frames() {
		let (scheduler, frames, animation) = counting_loop();
		animation.start();
		animation.cancel();

		assert_eq!(scheduler.pending(), 0);
		assert_eq!(scheduler.cancelled.get(), 1);
		scheduler.fire();
		assert_eq!(frames.get(), 0);
		assert!(!animation.is_running());
	}

	#[test]
	fn late_callback_after_cancel_does_nothing() {
		let (scheduler, frames, animation) = counting_loop();
		animation.start();
		scheduler.fire();

		// Keep the pending frame alive past cancellation, as a host might.
		let stale: Vec<_> = scheduler.queue.borrow().iter().map(|(_, f)| f.clone()).collect();
		animation.cancel();
		for frame in stale {
			frame();
		}

		assert_eq!(frames.get(), 1);
		assert_eq!(scheduler.pending(), 0);
	}

	#[test]
	fn dropping_the_handle_cancels() {
		let (scheduler, frames, animation) = counting_loop();
		animation.start();
		drop(animation);

		scheduler.fire();
		assert_eq!(frames.get(), 0);
		assert_eq!(scheduler.cancelled.get(), 1);
	}

	#[test]
	fn cancel_before_start_is_a_no_op() {
		let (scheduler, frames, animation) = counting_loop();
		animation.cancel();
		assert_eq!(scheduler.cancelled.get(), 0);

		animation.start();
		scheduler.fire();
		assert_eq!(frames.get(), 1);
	}
}
