//! Frame rendering for the particle field.
//!
//! Each frame clears the whole surface, fills every particle as a circle and
//! then strokes a line between every unordered pair closer than the link
//! distance, fading with proximity.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Bounds, Particle, ParticleField};
use super::style::{FieldConfig, LinkStyle};

/// The 2D drawing operations the field needs from its host.
pub trait Surface {
	/// Current pixel size of the surface.
	fn bounds(&self) -> Bounds;
	fn clear(&self, bounds: Bounds);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn bounds(&self) -> Bounds {
		self.canvas()
			.map(|canvas| Bounds::new(canvas.width() as f64, canvas.height() as f64))
			.unwrap_or(Bounds::new(0.0, 0.0))
	}

	fn clear(&self, bounds: Bounds) {
		self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: &str) {
		self.set_fill_style_str(color);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}
}

/// A line to draw between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub opacity: f64,
}

/// Line alpha for two particles `distance` apart.
///
/// `max_opacity` at zero distance, falling linearly to 0 at the link
/// distance and staying 0 beyond it.
pub fn connection_opacity(distance: f64, links: &LinkStyle) -> f64 {
	if distance >= links.distance {
		return 0.0;
	}
	links.max_opacity * (1.0 - distance / links.distance)
}

/// All pairs closer than the link distance, each unordered pair once.
pub fn connections<'a>(
	particles: &'a [Particle],
	links: &'a LinkStyle,
) -> impl Iterator<Item = Connection> + 'a {
	particles.iter().enumerate().flat_map(move |(i, a)| {
		particles[i + 1..].iter().filter_map(move |b| {
			let distance = a.distance_to(b);
			(distance < links.distance).then(|| Connection {
				from: (a.x, a.y),
				to: (b.x, b.y),
				opacity: connection_opacity(distance, links),
			})
		})
	})
}

/// Draws the field onto the surface.
pub fn render<S: Surface + ?Sized>(
	field: &ParticleField,
	surface: &S,
	bounds: Bounds,
	config: &FieldConfig,
) {
	surface.clear(bounds);

	let fill = config.particles.color.to_css();
	for p in field.particles() {
		surface.fill_circle(p.x, p.y, p.radius, &fill);
	}

	let links = &config.links;
	for c in connections(field.particles(), links) {
		let stroke = links.color.with_alpha(c.opacity).to_css();
		surface.stroke_line(c.from, c.to, &stroke, links.line_width);
	}
}

/// One frame callback: move the particles against the surface's current
/// size, then redraw.
pub fn frame<S: Surface + ?Sized>(field: &mut ParticleField, surface: &S, config: &FieldConfig) {
	let bounds = surface.bounds();
	field.step(bounds);
	render(field, surface, bounds, config);
}
