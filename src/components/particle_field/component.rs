//! Leptos component hosting the particle field canvas.
//!
//! The canvas covers the viewport behind all other content and ignores the
//! pointer. An animation loop runs via `requestAnimationFrame` and a window
//! `resize` listener keeps the canvas and the reflection walls in step with
//! the viewport.

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::browser::{AnimationFrames, viewport_size};
use super::config::FieldConfig;
use super::frame_loop::FieldLoop;
use super::particles::ParticleField;
use super::render::CanvasSurface;
use crate::components::lifecycle::WindowListener;

/// A running field plus the listener feeding it viewport changes.
///
/// Dropping it is the one way out: the loop is cancelled, then the listener
/// is removed.
struct MountedField {
	field_loop: FieldLoop<CanvasSurface, AnimationFrames>,
	_resize: Option<WindowListener>,
}

impl MountedField {
	fn teardown(self) {
		drop(self);
	}
}

impl Drop for MountedField {
	fn drop(&mut self) {
		self.field_loop.teardown();
	}
}

fn mount(canvas: HtmlCanvasElement) -> Option<MountedField> {
	let window = web_sys::window()?;
	let (width, height) = viewport_size(&window)?;
	canvas.set_width(width);
	canvas.set_height(height);

	let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;

	let config = FieldConfig::default();
	let field = ParticleField::new(&config, width, height, &mut rand::thread_rng());
	info!(
		"particle field: {} particles for {}x{} viewport",
		field.len(),
		width,
		height
	);

	let field_loop = FieldLoop::new(
		field,
		CanvasSurface::new(canvas.clone(), ctx),
		config,
		AnimationFrames::new(window),
	);

	let resize_loop = field_loop.clone();
	let resize = WindowListener::attach("resize", move |_| {
		let Some((w, h)) = web_sys::window().as_ref().and_then(viewport_size) else {
			return;
		};
		canvas.set_width(w);
		canvas.set_height(h);
		resize_loop.resize(w, h);
		debug!("particle field: resized to {}x{}", w, h);
	});

	field_loop.start();

	Some(MountedField {
		field_loop,
		_resize: resize,
	})
}

/// Full-viewport decorative particle layer.
///
/// If a 2d context cannot be acquired the canvas simply stays blank.
#[component]
pub fn ParticleBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<MountedField>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match mount(canvas) {
			Some(field) => mounted.set_value(Some(field)),
			None => debug!("particle field: no drawing surface, skipping"),
		}
	});

	on_cleanup(move || {
		if let Some(Some(field)) = mounted.try_update_value(Option::take) {
			field.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			aria-hidden="true"
			style="position: fixed; inset: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0;"
		/>
	}
}
