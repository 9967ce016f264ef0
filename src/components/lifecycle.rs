//! Browser resources that must be released when a view goes away.
//!
//! Each guard acquires on construction and releases in `Drop`, so whichever
//! way a component is torn down the window ends up in its original state.

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

/// A `window` event listener that is removed when dropped.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	/// Listen for `event` on the global window. `None` when there is no
	/// window or the browser rejects the listener.
	pub fn attach(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		window
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.ok()?;
		debug!("listener attached: {}", event);
		Some(Self {
			window,
			event,
			callback,
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
		debug!("listener removed: {}", self.event);
	}
}

/// Suspends page scrolling until dropped.
pub struct ScrollLock {
	body: web_sys::HtmlElement,
}

impl ScrollLock {
	pub fn engage() -> Option<Self> {
		let body = web_sys::window()?.document()?.body()?;
		body.style().set_property("overflow", "hidden").ok()?;
		Some(Self { body })
	}
}

impl Drop for ScrollLock {
	fn drop(&mut self) {
		let _ = self.body.style().set_property("overflow", "unset");
	}
}
