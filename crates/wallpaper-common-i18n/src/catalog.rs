// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Gettext catalog loading and translation functions.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use gettext::Catalog;

use crate::locale::LocaleConfig;

/// Path of the compiled catalog for a locale inside a translations directory.
///
/// Follows the Babel layout: `{dir}/{code}/LC_MESSAGES/messages.mo`.
pub fn catalog_path(dir: &Path, code: &str) -> PathBuf {
	dir.join(code).join("LC_MESSAGES").join("messages.mo")
}

/// Translation catalogs for the served locales.
pub struct Translations {
	default_locale: &'static str,
	catalogs: HashMap<&'static str, Catalog>,
}

impl Translations {
	/// Load the catalog of every served locale from `dir`.
	///
	/// A missing or malformed catalog is logged and skipped; lookups for that
	/// locale fall back to the default locale and then to the message id.
	pub fn load(dir: impl AsRef<Path>, config: &LocaleConfig) -> Self {
		let dir = dir.as_ref();
		let mut catalogs = HashMap::new();

		for info in config.supported() {
			let path = catalog_path(dir, info.code);
			let file = match File::open(&path) {
				Ok(file) => file,
				Err(e) => {
					tracing::warn!(
						locale = info.code,
						path = %path.display(),
						error = %e,
						"translation catalog not found"
					);
					continue;
				}
			};

			match Catalog::parse(file) {
				Ok(catalog) => {
					tracing::debug!(locale = info.code, path = %path.display(), "loaded translation catalog");
					catalogs.insert(info.code, catalog);
				}
				Err(e) => {
					tracing::warn!(
						locale = info.code,
						path = %path.display(),
						error = %e,
						"failed to parse translation catalog"
					);
				}
			}
		}

		Self {
			default_locale: config.default_locale(),
			catalogs,
		}
	}

	/// Translations with no catalogs; every lookup returns the message id.
	pub fn empty(config: &LocaleConfig) -> Self {
		Self {
			default_locale: config.default_locale(),
			catalogs: HashMap::new(),
		}
	}

	/// Locales with a loaded catalog, sorted.
	pub fn loaded_locales(&self) -> Vec<&'static str> {
		let mut locales: Vec<_> = self.catalogs.keys().copied().collect();
		locales.sort_unstable();
		locales
	}

	/// Translate a string for the given locale.
	///
	/// Falls back to the default locale if the translation is not found, then
	/// to the msgid itself.
	pub fn t(&self, locale: &str, msgid: &str) -> String {
		if let Some(translated) = self.lookup(locale, msgid) {
			return translated.to_string();
		}

		if locale != self.default_locale {
			if let Some(translated) = self.lookup(self.default_locale, msgid) {
				return translated.to_string();
			}
		}

		msgid.to_string()
	}

	/// Translate a string with variable substitution.
	///
	/// Variables use `{name}` syntax in the translated string.
	pub fn t_fmt(&self, locale: &str, msgid: &str, args: &[(&str, &str)]) -> String {
		let mut result = self.t(locale, msgid);

		for (name, value) in args {
			let placeholder = format!("{{{name}}}");
			result = result.replace(&placeholder, value);
		}

		result
	}

	fn lookup<'a>(&'a self, locale: &str, msgid: &'a str) -> Option<&'a str> {
		let translated = self.catalogs.get(locale)?.gettext(msgid);
		(translated != msgid).then_some(translated)
	}
}

impl std::fmt::Debug for Translations {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Translations")
			.field("default_locale", &self.default_locale)
			.field("loaded", &self.loaded_locales())
			.finish()
	}
}
