// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and the immutable locale configuration.

use crate::error::I18nError;

/// Metadata about a locale the site knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocaleInfo {
	/// Short locale code used in URL paths (e.g., "en", "pl")
	pub code: &'static str,
	/// Name shown in the language switcher
	pub display_name: &'static str,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en";

/// Every locale with a display name. The served set is a subset of these.
pub const KNOWN_LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		display_name: "English",
	},
	LocaleInfo {
		code: "pl",
		display_name: "Polski",
	},
	LocaleInfo {
		code: "ru",
		display_name: "Russian",
	},
];

/// Get metadata for a known locale.
///
/// Returns `None` if the code has no display name.
pub fn known_locale(code: &str) -> Option<&'static LocaleInfo> {
	KNOWN_LOCALES.iter().find(|l| l.code == code)
}

/// The set of served locales and the fallback default.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
	default: &'static LocaleInfo,
	supported: Vec<&'static LocaleInfo>,
}

impl LocaleConfig {
	/// Build a configuration from a default code and the supported codes.
	///
	/// Supported codes keep their given order; duplicates are dropped.
	pub fn new<I, S>(default: &str, supported: I) -> Result<Self, I18nError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut locales: Vec<&'static LocaleInfo> = Vec::new();
		for code in supported {
			let code = code.as_ref();
			let info = known_locale(code).ok_or_else(|| I18nError::UnknownLocale(code.to_string()))?;
			if !locales.contains(&info) {
				locales.push(info);
			}
		}

		if locales.is_empty() {
			return Err(I18nError::NoSupportedLocales);
		}

		let default = locales
			.iter()
			.copied()
			.find(|l| l.code == default)
			.ok_or_else(|| I18nError::DefaultNotSupported(default.to_string()))?;

		Ok(Self {
			default,
			supported: locales,
		})
	}

	/// The fallback locale code.
	pub fn default_locale(&self) -> &'static str {
		self.default.code
	}

	/// Served locales in configured order.
	pub fn supported(&self) -> impl Iterator<Item = &'static LocaleInfo> + '_ {
		self.supported.iter().copied()
	}

	/// Served locale codes in configured order.
	pub fn supported_codes(&self) -> Vec<&'static str> {
		self.supported().map(|l| l.code).collect()
	}

	/// Exact, case-sensitive membership test.
	pub fn is_supported(&self, code: &str) -> bool {
		self.info(code).is_some()
	}

	/// Display name of a served locale.
	pub fn display_name(&self, code: &str) -> Option<&'static str> {
		self.info(code).map(|l| l.display_name)
	}

	pub(crate) fn info(&self, code: &str) -> Option<&'static LocaleInfo> {
		self.supported.iter().copied().find(|l| l.code == code)
	}
}

impl Default for LocaleConfig {
	fn default() -> Self {
		Self {
			default: &KNOWN_LOCALES[0],
			supported: KNOWN_LOCALES.iter().collect(),
		}
	}
}
