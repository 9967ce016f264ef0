//! Page colors shared by the canvas layer and the DOM views.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Named page colors, exposed to the stylesheet as CSS custom properties.
#[derive(Clone, Debug)]
pub struct Theme {
	pub primary: Color,
	pub secondary: Color,
	/// Panel background (detail overlay).
	pub dark: Color,
	/// Page background.
	pub darker: Color,
	pub text: Color,
	pub muted: Color,
	/// Hairline borders on cards and tags.
	pub border: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			primary: Color::rgb(99, 102, 241),
			secondary: Color::rgb(139, 92, 246),
			dark: Color::rgb(15, 23, 42),
			darker: Color::rgb(2, 6, 23),
			text: Color::rgb(255, 255, 255),
			muted: Color::rgb(156, 163, 175),
			border: Color::rgba(255, 255, 255, 0.1),
		}
	}
}

impl Theme {
	/// Inline `style` value declaring every color as a `--color-*` variable.
	pub fn css_variables(&self) -> String {
		[
			("primary", self.primary),
			("secondary", self.secondary),
			("dark", self.dark),
			("darker", self.darker),
			("text", self.text),
			("muted", self.muted),
			("border", self.border),
		]
		.into_iter()
		.map(|(name, color)| format!("--color-{}: {};", name, color.to_css()))
		.collect::<Vec<_>>()
		.join(" ")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(99, 102, 241).to_css(), "#6366f1");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let css = Color::rgb(99, 102, 241).with_alpha(0.5).to_css();
		assert_eq!(css, "rgba(99, 102, 241, 0.5)");
	}

	#[test]
	fn css_variables_cover_the_palette() {
		let vars = Theme::default().css_variables();
		assert!(vars.contains("--color-primary: #6366f1;"));
		assert!(vars.contains("--color-darker: #020617;"));
		assert!(vars.contains("--color-border: rgba(255, 255, 255, 0.1);"));
	}
}
