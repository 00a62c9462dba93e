//! particle-landing: a personal landing page over an ambient particle field.
//!
//! This crate provides a WASM-based page that renders slowly drifting,
//! proximity-linked particles on a canvas behind a short biography.

use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::ParticleFieldCanvas;
pub use components::profile::{Profile, ProfileCard, ProfileLink};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-landing: logging initialized");
}

/// Parse profile JSON, falling back to the built-in profile if it is malformed.
fn parse_profile(json_text: &str) -> Profile {
	match serde_json::from_str::<Profile>(json_text) {
		Ok(profile) => {
			info!(
				"particle-landing: loaded profile for {} ({} links)",
				profile.name,
				profile.links.len()
			);
			profile
		}
		Err(e) => {
			warn!("particle-landing: failed to parse profile data: {}", e);
			Profile::default()
		}
	}
}

/// Load profile data from a script element with id="profile-data".
/// Expected format: JSON with { name, taglines: [...], links: [{ label, href }] }
fn load_profile() -> Profile {
	let json_text = (|| {
		let window: Window = web_sys::window()?;
		let document = window.document()?;
		let element = document.get_element_by_id("profile-data")?;
		let script: HtmlScriptElement = element.dyn_into().ok()?;
		script.text().ok()
	})();

	json_text.as_deref().map(parse_profile).unwrap_or_default()
}

/// Main application component.
/// Centers the particle field and overlays the profile text.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let profile = load_profile();
	let title = profile.name.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="landing">
			<div class="field-stage">
				<div class="field-frame">
					<ParticleFieldCanvas />
				</div>
			</div>
			<ProfileCard profile=profile />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_profile_falls_back_to_default() {
		assert_eq!(parse_profile("{ not json"), Profile::default());
	}

	#[test]
	fn well_formed_profile_is_used() {
		let profile = parse_profile(r#"{ "name": "Grace", "taglines": [], "links": [] }"#);
		assert_eq!(profile.name, "Grace");
		assert!(profile.taglines.is_empty());
		assert!(profile.links.is_empty());
	}
}
