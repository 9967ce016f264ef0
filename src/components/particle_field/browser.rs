//! `requestAnimationFrame` and viewport queries for the browser host.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::frame_loop::{FrameHandle, FrameScheduler};

/// Frame scheduling backed by the window's animation frame queue.
pub struct AnimationFrames {
	window: Window,
}

impl AnimationFrames {
	pub fn new(window: Window) -> Self {
		Self { window }
	}
}

impl FrameScheduler for AnimationFrames {
	fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Option<FrameHandle> {
		let callback = Closure::once_into_js(callback);
		self.window
			.request_animation_frame(callback.unchecked_ref())
			.ok()
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

/// Current viewport size in CSS pixels, or `None` outside a browser window.
pub fn viewport_size(window: &Window) -> Option<(u32, u32)> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width.max(0.0) as u32, height.max(0.0) as u32))
}
