// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! WallpaperWeb server.
//!
//! Serves the localized index page, the language switch redirects and the
//! procedurally generated starfield wallpaper.

pub mod api;
pub mod error;
pub mod pages;
pub mod render;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use wallpaper_server_config::ServerConfig;
