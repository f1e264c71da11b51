// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Routing decisions for localized pages.
//!
//! These functions only see the requested path segment and the locale
//! configuration, and return what the HTTP layer should do.

use wallpaper_common_i18n::LocaleConfig;

/// Page templates the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
	Index,
}

impl Template {
	pub fn id(&self) -> &'static str {
		match self {
			Template::Index => "index.html",
		}
	}
}

/// Result of routing a page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
	/// Render `template` in `locale`.
	Render {
		template: Template,
		locale: &'static str,
	},
	/// Send the client to `location`.
	Redirect { location: String },
}

/// Canonical path of the index page for a locale.
pub fn index_path(locale: &str) -> String {
	format!("/{locale}")
}

/// Route `/` (`segment == None`) or `/{segment}`.
///
/// A segment outside the supported set, including the empty string, redirects
/// to the default locale's index instead of rendering.
pub fn index_outcome(config: &LocaleConfig, segment: Option<&str>) -> PageOutcome {
	match segment {
		Some(lang) if !config.is_supported(lang) => PageOutcome::Redirect {
			location: index_path(config.default_locale()),
		},
		_ => PageOutcome::Render {
			template: Template::Index,
			locale: config.resolve(segment),
		},
	}
}

/// Route `/change_lang/{new_lang}`: always a redirect to an index page.
pub fn change_lang_outcome(config: &LocaleConfig, new_lang: &str) -> PageOutcome {
	PageOutcome::Redirect {
		location: index_path(config.resolve(Some(new_lang))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn render(locale: &'static str) -> PageOutcome {
		PageOutcome::Render {
			template: Template::Index,
			locale,
		}
	}

	fn redirect(location: &str) -> PageOutcome {
		PageOutcome::Redirect {
			location: location.to_string(),
		}
	}

	#[test]
	fn test_root_renders_default_locale() {
		let config = LocaleConfig::default();
		assert_eq!(index_outcome(&config, None), render("en"));
	}

	#[test]
	fn test_root_matches_explicit_default() {
		let config = LocaleConfig::default();
		assert_eq!(index_outcome(&config, None), index_outcome(&config, Some("en")));
	}

	#[test]
	fn test_supported_segments_render() {
		let config = LocaleConfig::default();
		for lang in ["en", "pl", "ru"] {
			assert_eq!(index_outcome(&config, Some(lang)), render(lang));
		}
	}

	#[test]
	fn test_unsupported_segments_redirect_to_default() {
		let config = LocaleConfig::default();
		for lang in ["fr", "xx", "", "EN", "favicon.ico"] {
			assert_eq!(index_outcome(&config, Some(lang)), redirect("/en"));
		}
	}

	#[test]
	fn test_change_lang_supported() {
		let config = LocaleConfig::default();
		for lang in ["en", "pl", "ru"] {
			assert_eq!(
				change_lang_outcome(&config, lang),
				redirect(&format!("/{lang}"))
			);
		}
	}

	#[test]
	fn test_change_lang_unsupported() {
		let config = LocaleConfig::default();
		for lang in ["de", "xx", ""] {
			assert_eq!(change_lang_outcome(&config, lang), redirect("/en"));
		}
	}

	#[test]
	fn test_redirect_target_renders_without_further_redirect() {
		let config = LocaleConfig::default();
		let PageOutcome::Redirect { location } = index_outcome(&config, Some("fr")) else {
			panic!("expected redirect");
		};
		let segment = location.trim_start_matches('/');
		assert_eq!(index_outcome(&config, Some(segment)), render("en"));
	}

	#[test]
	fn test_custom_default_locale() {
		let config = LocaleConfig::new("pl", ["en", "pl"]).unwrap();
		assert_eq!(index_outcome(&config, None), render("pl"));
		assert_eq!(index_outcome(&config, Some("ru")), redirect("/pl"));
		assert_eq!(change_lang_outcome(&config, "ru"), redirect("/pl"));
	}

	#[test]
	fn test_template_id() {
		assert_eq!(Template::Index.id(), "index.html");
	}

	proptest! {
		#[test]
		fn every_redirect_lands_on_a_rendered_page(segment in "[a-zA-Z_.-]{0,6}") {
			let config = LocaleConfig::default();
			for outcome in [index_outcome(&config, Some(&segment)), change_lang_outcome(&config, &segment)] {
				if let PageOutcome::Redirect { location } = outcome {
					let target = location.trim_start_matches('/');
					let is_render = matches!(
						index_outcome(&config, Some(target)),
						PageOutcome::Render { .. }
					);
					prop_assert!(is_render);
				}
			}
		}
	}
}
