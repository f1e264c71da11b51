// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

use crate::locale::LocaleConfig;

impl LocaleConfig {
	/// Resolve the effective locale for a request.
	///
	/// Returns `requested` unchanged when it is a served locale, otherwise the
	/// default. Never fails: unknown or empty codes degrade to the default.
	///
	/// # Example
	///
	/// ```
	/// use wallpaper_common_i18n::LocaleConfig;
	///
	/// let config = LocaleConfig::default();
	///
	/// assert_eq!(config.resolve(Some("ru")), "ru");
	/// assert_eq!(config.resolve(Some("xx")), "en");
	/// assert_eq!(config.resolve(None), "en");
	/// ```
	pub fn resolve(&self, requested: Option<&str>) -> &'static str {
		match requested.and_then(|code| self.info(code)) {
			Some(info) => info.code,
			None => self.default_locale(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_supported_locale_returned_unchanged() {
		let config = LocaleConfig::default();
		assert_eq!(config.resolve(Some("en")), "en");
		assert_eq!(config.resolve(Some("pl")), "pl");
		assert_eq!(config.resolve(Some("ru")), "ru");
	}

	#[test]
	fn test_missing_locale_uses_default() {
		let config = LocaleConfig::default();
		assert_eq!(config.resolve(None), "en");
	}

	#[test]
	fn test_unsupported_locale_uses_default() {
		let config = LocaleConfig::default();
		assert_eq!(config.resolve(Some("fr")), "en");
		assert_eq!(config.resolve(Some("xx")), "en");
		assert_eq!(config.resolve(Some("PL")), "en");
	}

	#[test]
	fn test_empty_string_is_invalid() {
		let config = LocaleConfig::default();
		assert_eq!(config.resolve(Some("")), "en");
	}

	#[test]
	fn test_non_english_default() {
		let config = LocaleConfig::new("ru", ["en", "ru"]).unwrap();
		assert_eq!(config.resolve(Some("pl")), "ru");
		assert_eq!(config.resolve(None), "ru");
		assert_eq!(config.resolve(Some("en")), "en");
	}

	proptest! {
		#[test]
		fn resolve_always_returns_supported_locale(requested in proptest::option::of(".{0,8}")) {
			let config = LocaleConfig::default();
			let resolved = config.resolve(requested.as_deref());
			prop_assert!(config.is_supported(resolved));
		}

		#[test]
		fn resolve_is_identity_on_supported(idx in 0usize..3) {
			let config = LocaleConfig::default();
			let code = config.supported_codes()[idx];
			prop_assert_eq!(config.resolve(Some(code)), code);
		}
	}
}
