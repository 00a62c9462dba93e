//! Leptos component hosting the particle field canvas.
//!
//! On mount the canvas is sized to its container, a window resize listener
//! keeps it sized, the particles are scattered once, and a
//! `requestAnimationFrame` loop advances and redraws them. Unmounting drops
//! the [`FieldMount`], which cancels the loop and removes the listener.

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::render;
use super::scheduler::{AnimationLoop, WindowScheduler};
use super::sizing::{SizingConfig, resize_canvas};
use super::style::FieldConfig;

/// Window `resize` subscription, removed on drop.
struct ResizeListener {
	window: Window,
	callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
	fn subscribe(window: Window, callback: Closure<dyn FnMut()>) -> Self {
		let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
		Self { window, callback }
	}
}

impl Drop for ResizeListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
	}
}

/// Everything a mounted field owns.
struct FieldMount {
	animation: AnimationLoop<WindowScheduler>,
	_resize: ResizeListener,
}

impl Drop for FieldMount {
	fn drop(&mut self) {
		self.animation.cancel();
		debug!("particle field: unmounted");
	}
}

/// Wire the field to `canvas`. Returns `None`, having done nothing, when
/// there is no window or no 2D context.
fn mount(canvas: HtmlCanvasElement, config: FieldConfig, sizing: SizingConfig) -> Option<FieldMount> {
	let window = web_sys::window()?;
	let Some(ctx) = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
	else {
		debug!("particle field: 2d context unavailable, not animating");
		return None;
	};

	let bounds = resize_canvas(&canvas, &sizing);

	let canvas_resize = canvas.clone();
	let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
		let size = resize_canvas(&canvas_resize, &sizing);
		debug!("particle field: resized to {}x{}", size.width, size.height);
	});
	let resize = ResizeListener::subscribe(window.clone(), on_resize);

	let mut field = ParticleField::new(&config.particles, bounds, &mut rand::thread_rng());
	info!(
		"particle field: mounted {} particles on {}x{}",
		field.len(),
		bounds.width,
		bounds.height
	);

	let animation = AnimationLoop::new(WindowScheduler::new(window), move || {
		render::frame(&mut field, &ctx, &config);
	});
	animation.start();

	Some(FieldMount {
		animation,
		_resize: resize,
	})
}

/// Renders the ambient particle field on a canvas sized to its parent.
///
/// The canvas background is transparent so the page color shows through.
#[component]
pub fn ParticleFieldCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mounted = StoredValue::new_local(None::<FieldMount>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mounted.with_value(Option::is_some) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Some(field) = mount(canvas, FieldConfig::default(), SizingConfig::default()) {
			mounted.set_value(Some(field));
		}
	});

	on_cleanup(move || {
		let _ = mounted.try_update_value(Option::take);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			style="display: block; background: transparent;"
		/>
	}
}
