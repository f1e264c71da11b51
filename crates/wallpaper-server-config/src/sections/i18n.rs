// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration section.

use serde::{Deserialize, Serialize};

fn default_locale() -> String {
	"en".to_string()
}

fn default_supported_locales() -> Vec<String> {
	["en", "pl", "ru"].iter().map(|s| s.to_string()).collect()
}

fn default_translations_dir() -> String {
	"./translations".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub default_locale: Option<String>,
	pub supported_locales: Option<Vec<String>>,
	pub translations_dir: Option<String>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.supported_locales.is_some() {
			self.supported_locales = other.supported_locales;
		}
		if other.translations_dir.is_some() {
			self.translations_dir = other.translations_dir;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_locale: self.default_locale.unwrap_or_else(default_locale),
			supported_locales: self
				.supported_locales
				.unwrap_or_else(default_supported_locales),
			translations_dir: self
				.translations_dir
				.unwrap_or_else(default_translations_dir),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	pub default_locale: String,
	pub supported_locales: Vec<String>,
	pub translations_dir: String,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: default_locale(),
			supported_locales: default_supported_locales(),
			translations_dir: default_translations_dir(),
		}
	}
}
