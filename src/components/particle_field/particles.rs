//! Ambient particle state and per-frame motion.

use rand::Rng;

use super::config::FieldConfig;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Pixels per frame.
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	/// Fixed at creation, in [0, 1].
	pub opacity: f64,
}

/// A fixed-size set of particles bouncing inside the surface bounds.
///
/// The particle count is decided once, from the viewport passed to
/// [`ParticleField::new`]. Resizing later only moves the walls.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	pub fn new<R: Rng>(config: &FieldConfig, width: u32, height: u32, rng: &mut R) -> Self {
		let count = config.particle_count(width, height);
		let (w, h) = (f64::from(width), f64::from(height));
		let speed = config.max_speed.abs();

		let particles = (0..count)
			.map(|_| Particle {
				x: rng.gen_range(0.0..w),
				y: rng.gen_range(0.0..h),
				vx: rng.gen_range(-speed..=speed),
				vy: rng.gen_range(-speed..=speed),
				size: rng.gen_range(config.size_range.clone()),
				opacity: rng.gen_range(config.opacity_range.clone()),
			})
			.collect();

		Self {
			particles,
			width: w,
			height: h,
		}
	}

	/// Build a field from explicit particles, mostly for tests and replays.
	pub fn from_particles(particles: Vec<Particle>, width: u32, height: u32) -> Self {
		Self {
			particles,
			width: f64::from(width),
			height: f64::from(height),
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Advance every particle by one frame.
	///
	/// A particle that ends up outside `[0, bound]` on an axis has that
	/// velocity component negated. The position is left where it landed, so
	/// a particle can sit past the wall for one frame before coming back.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > self.width {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > self.height {
				p.vy = -p.vy;
			}
		}
	}

	/// Move the reflection walls. The particle count and positions are kept.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.width = f64::from(width);
		self.height = f64::from(height);
	}
}
