//! Tunable constants for the particle field.
//!
//! Every number that shapes the effect lives here so the physics and render
//! passes never carry magic values of their own.

use std::ops::RangeInclusive;

use crate::components::theme::Color;

/// Configuration for particle population, motion and connection lines.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	/// Upper bound on the particle count, regardless of viewport size.
	pub cap: usize,
	/// Viewport area (px²) per particle.
	pub density_divisor: u64,
	/// Pairs closer than this (px) get a connection line. Exclusive.
	pub connection_distance: f64,
	/// Line alpha for two coincident particles; fades linearly to zero at
	/// `connection_distance`.
	pub connection_alpha: f64,
	/// Connection line width in pixels.
	pub connection_width: f64,
	/// Maximum absolute velocity per axis, in pixels per frame.
	pub max_speed: f64,
	/// Draw radius range.
	pub size_range: RangeInclusive<f64>,
	/// Per-particle opacity range, fixed at creation.
	pub opacity_range: RangeInclusive<f64>,
	/// Fill and stroke hue. Alpha is ignored; callers supply their own.
	pub color: Color,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			cap: 80,
			density_divisor: 15_000,
			connection_distance: 150.0,
			connection_alpha: 0.15,
			connection_width: 0.5,
			max_speed: 0.2,
			size_range: 0.5..=2.0,
			opacity_range: 0.2..=0.7,
			color: Color::rgb(99, 102, 241),
		}
	}
}

impl FieldConfig {
	/// Number of particles to allocate for a `width` × `height` viewport.
	///
	/// `min(cap, floor(area / density_divisor))`, except that any non-empty
	/// viewport gets at least one particle.
	pub fn particle_count(&self, width: u32, height: u32) -> usize {
		let area = u64::from(width) * u64::from(height);
		if area == 0 {
			return 0;
		}
		let by_density = area / self.density_divisor.max(1);
		let by_density = usize::try_from(by_density).unwrap_or(usize::MAX);
		by_density.clamp(1, self.cap.max(1))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn count_follows_density_for_medium_viewport() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(800, 600), 32);
	}

	#[test]
	fn count_is_capped_for_large_viewport() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(2000, 2000), 80);
		assert_eq!(config.particle_count(u32::MAX, u32::MAX), 80);
	}

	#[test]
	fn count_is_zero_only_for_empty_viewport() {
		let config = FieldConfig::default();
		assert_eq!(config.particle_count(0, 600), 0);
		assert_eq!(config.particle_count(800, 0), 0);
		assert_eq!(config.particle_count(10, 10), 1);
	}

	#[test]
	fn count_tracks_area_within_rounding() {
		let config = FieldConfig::default();
		for (w, h) in [(320, 480), (1024, 768), (1280, 720), (1366, 768)] {
			let n = config.particle_count(w, h);
			let exact = f64::from(w) * f64::from(h) / 15_000.0;
			assert!(n > 0 && n <= 80);
			assert!((n as f64 - exact.min(80.0)).abs() < 1.0, "{w}x{h} -> {n}");
		}
	}
}
