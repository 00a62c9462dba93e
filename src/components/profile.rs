//! Biographical text shown over the particle field.

use leptos::prelude::*;
use serde::Deserialize;

/// An outbound link under the profile text.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ProfileLink {
	/// Visible link text.
	pub label: String,
	/// Target URL (`https:`, `mailto:` or a fragment).
	pub href: String,
}

/// Who the page is about.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
	pub name: String,
	/// One short line each, shown under the name.
	pub taglines: Vec<String>,
	pub links: Vec<ProfileLink>,
}

impl Default for Profile {
	fn default() -> Self {
		let link = |label: &str, href: &str| ProfileLink {
			label: label.into(),
			href: href.into(),
		};
		Self {
			name: "Elisa Mordenti".into(),
			taglines: vec![
				"Exploring technology applications in relevant sectors".into(),
				"Love all related to investing".into(),
			],
			links: vec![
				link("LinkedIn", "https://www.linkedin.com/in/elisa-mordenti/"),
				link("Builders that Matter", "#"),
				link("Contact me", "mailto:elisamordenti1@gmail.com"),
			],
		}
	}
}

/// Name, taglines and comma-separated links, anchored bottom-left.
#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
	let links = profile
		.links
		.into_iter()
		.enumerate()
		.map(|(i, link)| {
			view! {
				{(i > 0).then(|| view! { <span class="link-separator">","</span> })}
				<a href=link.href class="profile-link">{link.label}</a>
			}
		})
		.collect_view();

	view! {
		<div class="profile-card">
			<h1>{profile.name}</h1>
			{profile
				.taglines
				.into_iter()
				.map(|line| view! { <p class="tagline">{line}</p> })
				.collect_view()}
			<div class="profile-links">{links}</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_a_full_profile() {
		let json = r##"{
			"name": "Ada",
			"taglines": ["Engines", "Notes"],
			"links": [{ "label": "Home", "href": "#" }]
		}"##;
		let profile: Profile = serde_json::from_str(json).unwrap();
		assert_eq!(profile.name, "Ada");
		assert_eq!(profile.taglines, vec!["Engines", "Notes"]);
		assert_eq!(
			profile.links,
			vec![ProfileLink {
				label: "Home".into(),
				href: "#".into()
			}]
		);
	}

	#[test]
	fn missing_fields_take_defaults() {
		let profile: Profile = serde_json::from_str(r#"{ "name": "Ada" }"#).unwrap();
		let default = Profile::default();
		assert_eq!(profile.name, "Ada");
		assert_eq!(profile.taglines, default.taglines);
		assert_eq!(profile.links, default.links);
	}

	#[test]
	fn default_profile_has_three_links() {
		let labels: Vec<_> = Profile::default()
			.links
			.into_iter()
			.map(|l| l.label)
			.collect();
		assert_eq!(labels, ["LinkedIn", "Builders that Matter", "Contact me"]);
	}
}
