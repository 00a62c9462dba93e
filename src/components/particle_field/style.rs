//! Colors and tuning constants for the particle field.
//!
//! Nothing here is exposed to visitors; the defaults are the effect.

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

/// How individual particles look and move.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles created per mount.
	pub count: usize,
	/// Per-axis velocity bound in pixels/frame; velocities fall in `[-speed, speed]`.
	pub speed: f64,
	/// Circle radius in pixels.
	pub radius: f64,
	/// Fill color.
	pub color: Color,
}

/// How connective lines between nearby particles look.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Pairs closer than this (pixels) are connected.
	pub distance: f64,
	/// Line alpha for two coincident particles. Fades linearly to zero at `distance`.
	pub max_opacity: f64,
	/// Stroke color; its alpha is replaced per line.
	pub color: Color,
	/// Stroke width in pixels.
	pub line_width: f64,
}

/// Complete particle field configuration.
#[derive(Clone, Debug)]
pub struct FieldConfig {
	pub particles: ParticleStyle,
	pub links: LinkStyle,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			particles: ParticleStyle {
				count: 25,
				speed: 0.1,
				radius: 2.0,
				color: Color::rgb(0x4a, 0x4a, 0x4a), // Charcoal
			},
			links: LinkStyle {
				distance: 80.0,
				max_opacity: 0.3,
				color: Color::rgb(107, 107, 107), // Medium grey
				line_width: 1.5,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(0x4a, 0x4a, 0x4a).to_css(), "#4a4a4a");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let css = Color::rgb(107, 107, 107).with_alpha(0.15).to_css();
		assert_eq!(css, "rgba(107, 107, 107, 0.15)");
	}
}
