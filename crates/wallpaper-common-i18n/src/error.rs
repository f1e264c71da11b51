// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale configuration errors.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum I18nError {
	#[error("No supported locales configured")]
	NoSupportedLocales,

	#[error("Unknown locale code '{0}'")]
	UnknownLocale(String),

	#[error("Default locale '{0}' is not in the supported set")]
	DefaultNotSupported(String),
}
