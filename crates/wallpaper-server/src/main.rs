// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! WallpaperWeb server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallpaper_server::{create_app_state, create_router, version};

/// WallpaperWeb server - multi-language wallpaper website.
#[derive(Parser, Debug)]
#[command(
	name = "wallpaper-server",
	about = "Multi-language wallpaper website",
	version
)]
struct Args {
	/// Path to a TOML config file (defaults to /etc/wallpaperweb/server.toml)
	#[arg(long, env = "WALLPAPER_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Load .env file if present, before clap reads env-backed flags
	dotenvy::dotenv().ok();

	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	let config = match &args.config {
		Some(path) => wallpaper_server_config::load_config_with_file(path)?,
		None => wallpaper_server_config::load_config()?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		base_url = %config.http.base_url,
		default_locale = %config.i18n.default_locale,
		"starting wallpaper-server"
	);

	let state = create_app_state(&config)?;
	let app = create_router(state).layer(TraceLayer::new_for_http());

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
