//! Surface sizing from the canvas container.
//!
//! The surface takes a share of its container, capped so the field stays a
//! compact centered block on large screens.

use web_sys::HtmlCanvasElement;

use super::particles::Bounds;

/// How the surface size derives from its container.
#[derive(Clone, Debug)]
pub struct SizingConfig {
	/// Fraction of the container width used by the surface.
	pub width_ratio: f64,
	/// Upper bound on surface width in pixels.
	pub max_width: f64,
	/// Fraction of the container height used by the surface.
	pub height_ratio: f64,
	/// Upper bound on surface height in pixels.
	pub max_height: f64,
	/// Assumed container size when the real one is missing or zero.
	pub fallback: Bounds,
}

impl Default for SizingConfig {
	fn default() -> Self {
		Self {
			width_ratio: 0.85,
			max_width: 800.0,
			height_ratio: 0.9,
			max_height: 600.0,
			fallback: Bounds::new(800.0, 600.0),
		}
	}
}

/// Reads the size of whatever contains the drawing surface.
pub trait ContainerMetrics {
	/// Client width and height of the container, if there is one.
	fn container_size(&self) -> Option<(f64, f64)>;
}

impl ContainerMetrics for HtmlCanvasElement {
	fn container_size(&self) -> Option<(f64, f64)> {
		self.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
	}
}

impl SizingConfig {
	/// Surface size for a container. Each missing or zero dimension falls
	/// back on its own.
	pub fn fit(&self, container: Option<(f64, f64)>) -> Bounds {
		let (w, h) = container.unwrap_or((0.0, 0.0));
		let w = if w > 0.0 { w } else { self.fallback.width };
		let h = if h > 0.0 { h } else { self.fallback.height };

		Bounds::new(
			(w * self.width_ratio).min(self.max_width),
			(h * self.height_ratio).min(self.max_height),
		)
	}
}

/// Resize the canvas to fit its container and return the size it ended up
/// with. Canvas dimensions are whole pixels, so fractional sizes truncate.
pub fn resize_canvas(canvas: &HtmlCanvasElement, config: &SizingConfig) -> Bounds {
	let size = config.fit(canvas.container_size());
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);
	Bounds::new(canvas.width() as f64, canvas.height() as f64)
}

#[cfg(test)]
mod tests {
	use super::*;

	struct FakeContainer(Option<(f64, f64)>);

	impl ContainerMetrics for FakeContainer {
		fn container_size(&self) -> Option<(f64, f64)> {
			self.0
		}
	}

	fn fit(container: &impl ContainerMetrics) -> Bounds {
		SizingConfig::default().fit(container.container_size())
	}

	#[test]
	fn small_containers_scale_by_ratio() {
		let size = fit(&FakeContainer(Some((400.0, 300.0))));
		assert_eq!(size, Bounds::new(340.0, 270.0));
	}

	#[test]
	fn large_containers_are_capped() {
		let size = fit(&FakeContainer(Some((1920.0, 1080.0))));
		assert_eq!(size, Bounds::new(800.0, 600.0));
	}

	#[test]
	fn missing_container_uses_fallback() {
		let size = fit(&FakeContainer(None));
		assert_eq!(size, Bounds::new(680.0, 540.0));
	}

	#[test]
	fn zero_dimension_falls_back_independently() {
		let size = fit(&FakeContainer(Some((500.0, 0.0))));
		assert_eq!(size, Bounds::new(425.0, 540.0));
	}
}
