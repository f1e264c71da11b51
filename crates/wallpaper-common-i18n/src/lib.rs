// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for WallpaperWeb.
//!
//! This crate owns the locale configuration of the site (which locales are
//! served and which one is the fallback), the resolver that maps a requested
//! locale code onto a served one, and the gettext catalogs used to translate
//! page text.
//!
//! Message ids are the English source strings, so a locale without a catalog
//! still renders readable English text.
//!
//! # Example
//!
//! ```
//! use wallpaper_common_i18n::LocaleConfig;
//!
//! let config = LocaleConfig::default();
//!
//! assert_eq!(config.resolve(Some("pl")), "pl");
//! assert_eq!(config.resolve(Some("fr")), "en");
//! assert_eq!(config.resolve(None), "en");
//! ```

mod catalog;
mod error;
mod locale;
mod resolve;

pub use catalog::{catalog_path, Translations};
pub use error::I18nError;
pub use locale::{known_locale, LocaleConfig, LocaleInfo, DEFAULT_LOCALE, KNOWN_LOCALES};
