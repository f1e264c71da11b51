// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and HTTP routes.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Router};
use wallpaper_common_i18n::{LocaleConfig, Translations};
use wallpaper_server_config::{HttpConfig, ServerConfig};

use crate::{error::ServerError, routes};

/// Application state shared across handlers.
///
/// Everything here is built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct AppState {
	pub locales: Arc<LocaleConfig>,
	pub translations: Arc<Translations>,
	pub http: HttpConfig,
	pub static_dir: PathBuf,
}

/// Creates the application state from resolved configuration.
///
/// Fails if the configured locales are not all known locales. Missing
/// translation catalogs are logged and tolerated.
pub fn create_app_state(config: &ServerConfig) -> Result<AppState, ServerError> {
	let locales = LocaleConfig::new(&config.i18n.default_locale, &config.i18n.supported_locales)?;
	let translations = Translations::load(&config.i18n.translations_dir, &locales);

	let loaded = translations.loaded_locales();
	let missing: Vec<_> = locales
		.supported_codes()
		.into_iter()
		.filter(|code| !loaded.contains(code))
		.collect();
	if !missing.is_empty() {
		tracing::warn!(
			missing = ?missing,
			translations_dir = %config.i18n.translations_dir,
			"serving some locales without translations"
		);
	}

	Ok(AppState {
		locales: Arc::new(locales),
		translations: Arc::new(translations),
		http: config.http.clone(),
		static_dir: PathBuf::from(&config.paths.static_dir),
	})
}

/// Creates the router with all routes.
///
/// Single-segment paths are locale pages, including bare `/api` and
/// `/static`. Everything else lives under `/api/` and `/static/`.
pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(routes::pages::index_root))
		.route("/{lang}", get(routes::pages::index))
		.route("/change_lang/{new_lang}", get(routes::pages::change_lang))
		.route("/api/health", get(routes::health::health_check))
		.route("/api/starfield", get(routes::starfield::starfield_points))
		.route("/api/wallpaper.svg", get(routes::starfield::starfield_svg))
		.route("/static/{*path}", get(routes::assets::static_file))
		.with_state(state)
}
