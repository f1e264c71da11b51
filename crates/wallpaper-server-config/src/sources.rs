// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{HttpConfigLayer, I18nConfigLayer, LoggingConfigLayer, PathsConfigLayer};

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	ConfigFile = 20,
	Environment = 50,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	fn name(&self) -> &'static str;
	fn precedence(&self) -> Precedence;
	fn load(&self) -> Result<ServerConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading defaults");
		Ok(ServerConfigLayer::default())
	}
}

/// TOML file configuration source.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/wallpaperweb/server.toml")
	}
}

impl ConfigSource for TomlSource {
	fn name(&self) -> &'static str {
		"toml-config"
	}

	fn precedence(&self) -> Precedence {
		Precedence::ConfigFile
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), "config file not found, skipping");
			return Ok(ServerConfigLayer::default());
		}

		debug!(path = %self.path.display(), "loading config file");
		let content = std::fs::read_to_string(&self.path).map_err(|e| ConfigError::FileRead {
			path: self.path.clone(),
			source: e,
		})?;

		let layer: ServerConfigLayer =
			toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
				path: self.path.clone(),
				source: e,
			})?;

		trace!("parsed config layer from TOML");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: WALLPAPER_SERVER_<FIELD>
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}

	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
		debug!("loading environment variables");
		layer_from_vars(|name| std::env::var(name).ok())
	}
}

/// Build a layer from a variable lookup. Empty values count as unset.
pub(crate) fn layer_from_vars<F>(lookup: F) -> Result<ServerConfigLayer, ConfigError>
where
	F: Fn(&str) -> Option<String>,
{
	let vars = Vars { lookup };
	Ok(ServerConfigLayer {
		http: Some(HttpConfigLayer {
			host: vars.string("WALLPAPER_SERVER_HOST"),
			port: vars.u16("WALLPAPER_SERVER_PORT")?,
			base_url: vars.string("WALLPAPER_SERVER_BASE_URL"),
		}),
		i18n: Some(I18nConfigLayer {
			default_locale: vars.string("WALLPAPER_SERVER_DEFAULT_LOCALE"),
			supported_locales: vars.list("WALLPAPER_SERVER_SUPPORTED_LOCALES"),
			translations_dir: vars.string("WALLPAPER_SERVER_TRANSLATIONS_DIR"),
		}),
		paths: Some(PathsConfigLayer {
			static_dir: vars.string("WALLPAPER_SERVER_STATIC_DIR"),
		}),
		logging: Some(LoggingConfigLayer {
			level: vars.string("WALLPAPER_SERVER_LOG_LEVEL"),
		}),
	})
}

struct Vars<F> {
	lookup: F,
}

impl<F> Vars<F>
where
	F: Fn(&str) -> Option<String>,
{
	fn string(&self, name: &str) -> Option<String> {
		(self.lookup)(name).filter(|s| !s.is_empty())
	}

	fn u16(&self, name: &str) -> Result<Option<u16>, ConfigError> {
		match self.string(name) {
			Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
				key: name.to_string(),
				message: format!("invalid u16 value '{v}'"),
			}),
			None => Ok(None),
		}
	}

	fn list(&self, name: &str) -> Option<Vec<String>> {
		self.string(name).map(|s| {
			s.split(',')
				.map(|s| s.trim().to_string())
				.filter(|s| !s.is_empty())
				.collect()
		})
	}
}
