// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Localized page handlers.

use axum::{
	extract::{Path, State},
	http::{header, StatusCode},
	response::{Html, IntoResponse, Response},
};

use crate::{
	api::AppState,
	pages::{self, PageOutcome, Template},
	render::{self, WallpaperSpec},
};

const WALLPAPER_WIDTH: u32 = 1920;
const WALLPAPER_HEIGHT: u32 = 1080;

/// GET / - Index page in the default locale.
pub async fn index_root(State(state): State<AppState>) -> Response {
	let outcome = pages::index_outcome(&state.locales, None);
	respond(&state, outcome)
}

/// GET /{lang} - Index page in `lang`, or a redirect to the default locale.
pub async fn index(State(state): State<AppState>, Path(lang): Path<String>) -> Response {
	let outcome = pages::index_outcome(&state.locales, Some(&lang));
	if let PageOutcome::Redirect { location } = &outcome {
		tracing::debug!(requested = %lang, %location, "unsupported locale, redirecting");
	}
	respond(&state, outcome)
}

/// GET /change_lang/{new_lang} - Redirect to the index page of `new_lang`.
pub async fn change_lang(
	State(state): State<AppState>,
	Path(new_lang): Path<String>,
) -> Response {
	let outcome = pages::change_lang_outcome(&state.locales, &new_lang);
	tracing::debug!(requested = %new_lang, ?outcome, "changing language");
	respond(&state, outcome)
}

fn respond(state: &AppState, outcome: PageOutcome) -> Response {
	match outcome {
		PageOutcome::Render { template, locale } => match template {
			Template::Index => {
				let wallpaper = WallpaperSpec {
					width: WALLPAPER_WIDTH,
					height: WALLPAPER_HEIGHT,
					seed: fastrand::u64(..),
				};
				Html(render::index_page(
					locale,
					&state.locales,
					&state.translations,
					&state.http,
					wallpaper,
				))
				.into_response()
			}
		},
		PageOutcome::Redirect { location } => {
			(StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
		}
	}
}
