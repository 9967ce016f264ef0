//! Frame-driven animation loop for the particle field.
//!
//! The loop is written against two ports, [`FrameScheduler`] and [`Surface`],
//! so the same code runs under `requestAnimationFrame` in the browser and
//! under a hand-cranked scheduler in tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::config::FieldConfig;
use super::particles::ParticleField;
use super::render::{self, Surface};

/// Opaque id for a scheduled frame, as returned by the host.
pub type FrameHandle = i32;

/// Host hook for "run this before the next repaint".
pub trait FrameScheduler {
	/// Schedule `callback` for the next frame. `None` means the host refused
	/// and the callback will never run.
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle>;

	/// Cancel a frame that has not run yet.
	fn cancel_frame(&self, handle: FrameHandle);
}

struct LoopState<S> {
	field: ParticleField,
	surface: S,
	config: FieldConfig,
	/// Bounds from the latest resize, applied at the start of the next frame.
	pending_bounds: Option<(u32, u32)>,
	scheduled: Option<FrameHandle>,
	torn_down: bool,
	frames: u64,
}

/// Owns a particle field and keeps it animating, one frame at a time.
///
/// Cloning yields another handle to the same loop.
pub struct FieldLoop<S: Surface + 'static, F: FrameScheduler + 'static> {
	state: Rc<RefCell<LoopState<S>>>,
	scheduler: Rc<F>,
}

impl<S: Surface + 'static, F: FrameScheduler + 'static> Clone for FieldLoop<S, F> {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
			scheduler: self.scheduler.clone(),
		}
	}
}

impl<S: Surface + 'static, F: FrameScheduler + 'static> FieldLoop<S, F> {
	pub fn new(field: ParticleField, surface: S, config: FieldConfig, scheduler: F) -> Self {
		Self {
			state: Rc::new(RefCell::new(LoopState {
				field,
				surface,
				config,
				pending_bounds: None,
				scheduled: None,
				torn_down: false,
				frames: 0,
			})),
			scheduler: Rc::new(scheduler),
		}
	}

	/// Schedule the first frame. No-op if already running or torn down.
	pub fn start(&self) {
		{
			let state = self.state.borrow();
			if state.torn_down || state.scheduled.is_some() {
				return;
			}
		}
		schedule_next(&self.state, &self.scheduler);
	}

	/// Record new surface bounds. They take effect before the next frame's
	/// reflection checks, never partway through a frame.
	pub fn resize(&self, width: u32, height: u32) {
		let mut state = self.state.borrow_mut();
		if !state.torn_down {
			state.pending_bounds = Some((width, height));
		}
	}

	/// Stop the loop for good. Safe to call any number of times.
	pub fn teardown(&self) {
		let handle = {
			let mut state = self.state.borrow_mut();
			if state.torn_down {
				return;
			}
			state.torn_down = true;
			state.pending_bounds = None;
			debug!("particle field: torn down after {} frames", state.frames);
			state.scheduled.take()
		};
		if let Some(handle) = handle {
			self.scheduler.cancel_frame(handle);
		}
	}

	pub fn is_running(&self) -> bool {
		let state = self.state.borrow();
		!state.torn_down && state.scheduled.is_some()
	}

	pub fn frames(&self) -> u64 {
		self.state.borrow().frames
	}

	pub fn with_field<R>(&self, f: impl FnOnce(&ParticleField) -> R) -> R {
		f(&self.state.borrow().field)
	}
}

fn schedule_next<S: Surface + 'static, F: FrameScheduler + 'static>(
	state: &Rc<RefCell<LoopState<S>>>,
	scheduler: &Rc<F>,
) {
	let weak_state = Rc::downgrade(state);
	let weak_scheduler = Rc::downgrade(scheduler);
	let handle = scheduler.request_frame(Box::new(move || {
		on_frame(&weak_state, &weak_scheduler);
	}));
	state.borrow_mut().scheduled = handle;
}

fn on_frame<S: Surface + 'static, F: FrameScheduler + 'static>(
	state: &Weak<RefCell<LoopState<S>>>,
	scheduler: &Weak<F>,
) {
	let (Some(state), Some(scheduler)) = (state.upgrade(), scheduler.upgrade()) else {
		return;
	};

	{
		let mut s = state.borrow_mut();
		s.scheduled = None;
		if s.torn_down {
			return;
		}
		if !s.surface.is_attached() {
			s.torn_down = true;
			debug!("particle field: surface detached, stopping");
			return;
		}

		if let Some((width, height)) = s.pending_bounds.take() {
			s.field.resize(width, height);
		}
		s.field.step();

		let s = &mut *s;
		render::render(&s.field, &s.surface, &s.config);
		s.frames += 1;
	}

	schedule_next(&state, &scheduler);
}
