// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

/// Health status of the server.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
	Healthy,
	/// Some served locales have no translation catalog.
	Degraded,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: HealthStatus,
	pub version: &'static str,
	pub default_locale: &'static str,
	pub locales: Vec<&'static str>,
	pub catalogs: Vec<&'static str>,
}

/// GET /api/health - Health check endpoint.
///
/// Always answers 200; a degraded server still serves every page.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	let locales = state.locales.supported_codes();
	let catalogs = state.translations.loaded_locales();

	let status = if locales.iter().all(|code| catalogs.contains(code)) {
		HealthStatus::Healthy
	} else {
		HealthStatus::Degraded
	};

	Json(HealthResponse {
		status,
		version: crate::version::VERSION,
		default_locale: state.locales.default_locale(),
		locales,
		catalogs,
	})
}
