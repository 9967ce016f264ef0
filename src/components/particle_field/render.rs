//! Drawing the particle field onto a surface.
//!
//! One frame is three passes:
//! 1. Clear the whole surface
//! 2. Particles as filled circles
//! 3. Connection lines between every pair closer than the threshold

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::FieldConfig;
use super::particles::ParticleField;
use crate::components::theme::Color;

/// The handful of drawing primitives the field needs.
///
/// Colors are passed as CSS color strings so implementations can forward them
/// straight to a canvas context.
pub trait Surface {
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: &str);

	/// Whether the surface is still part of the page. A detached surface
	/// stops the frame loop.
	fn is_attached(&self) -> bool {
		true
	}
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.set_fill_style_str(color);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// A canvas element together with its 2d context.
///
/// Drawing goes through the context; attachment is answered by the element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}
}

impl Surface for CanvasSurface {
	fn clear(&self, width: f64, height: f64) {
		self.ctx.clear(width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.ctx.fill_circle(x, y, radius, color);
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: &str) {
		self.ctx.stroke_line(from, to, width, color);
	}

	fn is_attached(&self) -> bool {
		self.canvas.is_connected()
	}
}

/// Line alpha for a pair `distance` pixels apart, or `None` when the pair is
/// at or beyond the connection threshold.
pub fn connection_alpha(distance: f64, config: &FieldConfig) -> Option<f64> {
	let max = config.connection_distance;
	if distance.is_nan() || distance >= max {
		return None;
	}
	Some((1.0 - distance / max) * config.connection_alpha)
}

/// Draws the complete field.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &S, config: &FieldConfig) {
	let (width, height) = field.bounds();
	surface.clear(width, height);

	draw_particles(field, surface, config);
	draw_connections(field, surface, config);
}

fn draw_particles<S: Surface + ?Sized>(field: &ParticleField, surface: &S, config: &FieldConfig) {
	for p in field.particles() {
		let color = config.color.with_alpha(p.opacity);
		surface.fill_circle(p.x, p.y, p.size, &rgba(color));
	}
}

fn draw_connections<S: Surface + ?Sized>(
	field: &ParticleField,
	surface: &S,
	config: &FieldConfig,
) {
	let particles = field.particles();

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist = (dx * dx + dy * dy).sqrt();
			let Some(alpha) = connection_alpha(dist, config) else {
				continue;
			};

			let color = config.color.with_alpha(alpha);
			surface.stroke_line(
				(a.x, a.y),
				(b.x, b.y),
				config.connection_width,
				&rgba(color),
			);
		}
	}
}

// Always rgba, even at full opacity, so every draw call shares one format.
fn rgba(color: Color) -> String {
	format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.a)
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::particle_field::particles::Particle;

	/// Every call made against a [`RecordingSurface`].
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		Clear(f64, f64),
		Circle { x: f64, y: f64, radius: f64, color: String },
		Line { from: (f64, f64), to: (f64, f64), color: String },
	}

	/// Test surface that records draw calls instead of producing pixels.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub ops: RefCell<Vec<DrawOp>>,
		pub detached: std::cell::Cell<bool>,
	}

	impl RecordingSurface {
		pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
			self.ops.borrow().iter().filter(|op| pred(op)).count()
		}
	}

	impl Surface for RecordingSurface {
		fn clear(&self, width: f64, height: f64) {
			self.ops.borrow_mut().push(DrawOp::Clear(width, height));
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
			self.ops.borrow_mut().push(DrawOp::Circle {
				x,
				y,
				radius,
				color: color.to_string(),
			});
		}

		fn stroke_line(&self, from: (f64, f64), to: (f64, f64), _width: f64, color: &str) {
			self.ops.borrow_mut().push(DrawOp::Line {
				from,
				to,
				color: color.to_string(),
			});
		}

		fn is_attached(&self) -> bool {
			!self.detached.get()
		}
	}

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 1.5,
			opacity: 0.4,
		}
	}

	#[test]
	fn closer_pairs_get_stronger_lines() {
		let config = FieldConfig::default();
		let near = connection_alpha(20.0, &config).unwrap();
		let far = connection_alpha(120.0, &config).unwrap();
		assert!(near > far);
		assert!(far > 0.0);
	}

	#[test]
	fn coincident_pair_gets_full_line_alpha() {
		let config = FieldConfig::default();
		assert_eq!(connection_alpha(0.0, &config), Some(0.15));
	}

	#[test]
	fn threshold_distance_draws_nothing() {
		let config = FieldConfig::default();
		assert_eq!(connection_alpha(150.0, &config), None);
		assert_eq!(connection_alpha(400.0, &config), None);
		assert_eq!(connection_alpha(f64::NAN, &config), None);
	}

	#[test]
	fn render_clears_then_draws_particles_and_connections() {
		let config = FieldConfig::default();
		let field = ParticleField::from_particles(
			vec![at(10.0, 10.0), at(50.0, 10.0), at(500.0, 500.0)],
			800,
			600,
		);
		let surface = RecordingSurface::default();

		render(&field, &surface, &config);

		let ops = surface.ops.borrow();
		assert_eq!(ops[0], DrawOp::Clear(800.0, 600.0));
		assert_eq!(
			ops[1],
			DrawOp::Circle {
				x: 10.0,
				y: 10.0,
				radius: 1.5,
				color: "rgba(99, 102, 241, 0.4)".to_string(),
			}
		);
		drop(ops);
		assert_eq!(surface.count(|op| matches!(op, DrawOp::Circle { .. })), 3);
		assert_eq!(surface.count(|op| matches!(op, DrawOp::Line { .. })), 1);
	}

	#[test]
	fn pair_exactly_at_threshold_has_no_line() {
		let config = FieldConfig::default();
		let field = ParticleField::from_particles(vec![at(0.0, 0.0), at(150.0, 0.0)], 800, 600);
		let surface = RecordingSurface::default();

		render(&field, &surface, &config);

		assert_eq!(surface.count(|op| matches!(op, DrawOp::Line { .. })), 0);
	}
}
