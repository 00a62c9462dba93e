//! Particle store: creation once per mount, in-place motion every frame.

use rand::Rng;

use super::style::ParticleStyle;

/// Pixel extent of the drawing surface. Particles are kept inside
/// `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
}

impl Particle {
	/// Advance one frame inside `bounds`.
	///
	/// An axis whose candidate position leaves the bounds flips its velocity
	/// and holds its coordinate for this frame; the other axis moves
	/// normally. The result is clamped into the bounds afterwards, which
	/// also pulls particles back in after the surface shrinks.
	pub fn advance(&mut self, bounds: Bounds) {
		let mut x = self.x + self.vx;
		let mut y = self.y + self.vy;

		if x < 0.0 || x > bounds.width {
			self.vx = -self.vx;
			x = self.x;
		}
		if y < 0.0 || y > bounds.height {
			self.vy = -self.vy;
			y = self.y;
		}

		self.x = x.max(0.0).min(bounds.width);
		self.y = y.max(0.0).min(bounds.height);
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// The fixed set of particles for one mount.
///
/// The set is allocated once and never grows or shrinks; resizing the
/// surface only changes the bounds handed to [`ParticleField::step`].
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Box<[Particle]>,
}

impl ParticleField {
	/// Scatter `style.count` particles uniformly over `bounds` with
	/// per-axis velocities uniform in `[-style.speed, style.speed]`.
	pub fn new<R: Rng>(style: &ParticleStyle, bounds: Bounds, rng: &mut R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle {
				x: rng.r#gen::<f64>() * bounds.width,
				y: rng.r#gen::<f64>() * bounds.height,
				vx: rng.gen_range(-style.speed..=style.speed),
				vy: rng.gen_range(-style.speed..=style.speed),
				radius: style.radius,
			})
			.collect();

		Self { particles }
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

	/// Move every particle one frame.
	pub fn step(&mut self, bounds: Bounds) {
		for p in self.particles.iter_mut() {
			p.advance(bounds);
		}
	}
}

#[cfg(test)]
impl ParticleField {
	pub(crate) fn from_particles(particles: Vec<Particle>) -> Self {
		Self {
			particles: particles.into_boxed_slice(),
		}
	}
}
