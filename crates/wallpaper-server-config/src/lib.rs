// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the WallpaperWeb server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`WALLPAPER_SERVER_*`)
//!
//! Configuration is read once at startup; the resolved [`ServerConfig`] is
//! never mutated afterwards.
//!
//! # Usage
//!
//! ```ignore
//! use wallpaper_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub i18n: I18nConfig,
	pub paths: PathsConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`WALLPAPER_SERVER_*`)
/// 2. Config file (`/etc/wallpaperweb/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and finalize the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
pub fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let paths = layer.paths.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	http.validate()?;
	validate_config(&i18n)?;

	info!(
		host = %http.host,
		port = http.port,
		base_url = %http.base_url,
		default_locale = %i18n.default_locale,
		supported_locales = ?i18n.supported_locales,
		translations_dir = %i18n.translations_dir,
		static_dir = %paths.static_dir,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		i18n,
		paths,
		logging,
	})
}

/// Validate cross-field configuration rules.
fn validate_config(i18n: &I18nConfig) -> Result<(), ConfigError> {
	if i18n.supported_locales.is_empty() {
		return Err(ConfigError::Validation(
			"WALLPAPER_SERVER_SUPPORTED_LOCALES must list at least one locale".to_string(),
		));
	}

	if !i18n.supported_locales.contains(&i18n.default_locale) {
		return Err(ConfigError::Validation(format!(
			"default locale '{}' is not one of the supported locales {:?}",
			i18n.default_locale, i18n.supported_locales
		)));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	struct StaticSource {
		precedence: Precedence,
		layer: ServerConfigLayer,
	}

	impl ConfigSource for StaticSource {
		fn name(&self) -> &'static str {
			"static"
		}

		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
			Ok(self.layer.clone())
		}
	}

	fn port_layer(port: u16) -> ServerConfigLayer {
		ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(port),
				..Default::default()
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_default_locale_must_be_supported() {
		let i18n = I18nConfig {
			default_locale: "fr".to_string(),
			..Default::default()
		};
		let result = validate_config(&i18n);
		assert!(result.unwrap_err().to_string().contains("'fr'"));
	}

	#[test]
	fn test_empty_supported_locales_rejected() {
		let i18n = I18nConfig {
			supported_locales: Vec::new(),
			..Default::default()
		};
		assert!(validate_config(&i18n).is_err());
	}

	#[test]
	fn test_defaults_are_valid() {
		assert!(validate_config(&I18nConfig::default()).is_ok());
	}

	#[test]
	fn test_socket_addr() {
		let config = ServerConfig {
			http: HttpConfig {
				host: "127.0.0.1".to_string(),
				port: 9000,
				base_url: "http://localhost:9000".to_string(),
			},
			..Default::default()
		};
		assert_eq!(config.socket_addr(), "127.0.0.1:9000");
	}

	#[test]
	fn test_higher_precedence_wins_regardless_of_order() {
		let config = load_from_sources(vec![
			Box::new(StaticSource {
				precedence: Precedence::Environment,
				layer: port_layer(7000),
			}),
			Box::new(StaticSource {
				precedence: Precedence::ConfigFile,
				layer: port_layer(6000),
			}),
			Box::new(DefaultsSource),
		])
		.unwrap();
		assert_eq!(config.http.port, 7000);
	}

	#[test]
	fn test_file_overrides_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("server.toml");
		std::fs::write(
			&path,
			"[i18n]\ndefault_locale = \"pl\"\n\n[paths]\nstatic_dir = \"/srv/static\"\n",
		)
		.unwrap();

		let config = load_from_sources(vec![
			Box::new(DefaultsSource),
			Box::new(TomlSource::new(&path)),
		])
		.unwrap();
		assert_eq!(config.i18n.default_locale, "pl");
		assert_eq!(config.i18n.supported_locales, vec!["en", "pl", "ru"]);
		assert_eq!(config.paths.static_dir, "/srv/static");
		assert_eq!(config.http.port, 5000);
	}

	#[test]
	fn test_invalid_file_locale_fails_validation() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("server.toml");
		std::fs::write(&path, "[i18n]\ndefault_locale = \"de\"\n").unwrap();

		let err = load_from_sources(vec![Box::new(TomlSource::new(&path))]).unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
	}

	#[test]
	fn test_invalid_base_url_rejected() {
		let layer = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				base_url: Some("wallpapers.example.com".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let err = finalize(layer).unwrap_err();
		assert!(err.to_string().contains("http.base_url"));
	}
}
