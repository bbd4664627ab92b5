// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: environment variables and TOML files.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::layer::ServerConfigLayer;
use crate::sections::{
	HttpConfigLayer, KubernetesConfigLayer, LogFormat, LoggingConfigLayer, OidcConfigLayer,
	ProxyConfigLayer,
};

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

/// TOML file configuration source. A missing file is not an error.
pub struct TomlSource {
	path: PathBuf,
}

impl TomlSource {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn system() -> Self {
		Self::new("/etc/kubebrowser/server.toml")
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
/// Convention: KUBEBROWSER_SERVER_<SECTION>_<FIELD>. A few unprefixed names
/// used by existing deployments are accepted as fallbacks: `POD_NAMESPACE`,
/// `OAUTH2_CLIENT_ID`, `OAUTH2_CLIENT_SECRET` and `OAUTH2_ISSUER_URL`.
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
		Ok(ServerConfigLayer {
			http: Some(load_http_from_env()?),
			kubernetes: Some(load_kubernetes_from_env()),
			oidc: Some(load_oidc_from_env()),
			proxy: Some(load_proxy_from_env()),
			logging: Some(load_logging_from_env()?),
		})
	}
}

fn env_var(name: &str) -> Option<String> {
	std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_var_or(name: &str, fallback: &str) -> Option<String> {
	env_var(name).or_else(|| env_var(fallback))
}

fn env_bool(name: &str) -> Option<bool> {
	env_var(name).map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

fn env_u16(name: &str) -> Result<Option<u16>, ConfigError> {
	match env_var(name) {
		Some(v) => v.parse().map(Some).map_err(|_| ConfigError::InvalidValue {
			key: name.to_string(),
			message: format!("invalid u16 value '{v}'"),
		}),
		None => Ok(None),
	}
}

fn load_http_from_env() -> Result<HttpConfigLayer, ConfigError> {
	Ok(HttpConfigLayer {
		host: env_var("KUBEBROWSER_SERVER_HOST"),
		port: env_u16("KUBEBROWSER_SERVER_PORT")?,
	})
}

fn load_kubernetes_from_env() -> KubernetesConfigLayer {
	KubernetesConfigLayer {
		namespace: env_var_or("KUBEBROWSER_SERVER_NAMESPACE", "POD_NAMESPACE"),
		group: env_var("KUBEBROWSER_SERVER_CRD_GROUP"),
		version: env_var("KUBEBROWSER_SERVER_CRD_VERSION"),
		plural: env_var("KUBEBROWSER_SERVER_CRD_PLURAL"),
		cache: env_bool("KUBEBROWSER_SERVER_CACHE_ENABLED"),
	}
}

fn load_oidc_from_env() -> OidcConfigLayer {
	OidcConfigLayer {
		client_id: env_var_or("KUBEBROWSER_SERVER_OIDC_CLIENT_ID", "OAUTH2_CLIENT_ID"),
		client_secret: env_var_or("KUBEBROWSER_SERVER_OIDC_CLIENT_SECRET", "OAUTH2_CLIENT_SECRET"),
		issuer_url: env_var_or("KUBEBROWSER_SERVER_OIDC_ISSUER_URL", "OAUTH2_ISSUER_URL"),
	}
}

fn load_proxy_from_env() -> ProxyConfigLayer {
	ProxyConfigLayer {
		email_header: env_var("KUBEBROWSER_SERVER_PROXY_EMAIL_HEADER"),
		groups_header: env_var("KUBEBROWSER_SERVER_PROXY_GROUPS_HEADER"),
		name_header: env_var("KUBEBROWSER_SERVER_PROXY_NAME_HEADER"),
		id_token_header: env_var("KUBEBROWSER_SERVER_PROXY_ID_TOKEN_HEADER"),
		refresh_token_header: env_var("KUBEBROWSER_SERVER_PROXY_REFRESH_TOKEN_HEADER"),
	}
}

fn load_logging_from_env() -> Result<LoggingConfigLayer, ConfigError> {
	let format = match env_var("KUBEBROWSER_SERVER_LOG_FORMAT") {
		Some(v) => Some(v.parse::<LogFormat>().map_err(|message| {
			ConfigError::InvalidValue {
				key: "KUBEBROWSER_SERVER_LOG_FORMAT".to_string(),
				message,
			}
		})?),
		None => None,
	};

	Ok(LoggingConfigLayer {
		level: env_var("KUBEBROWSER_SERVER_LOG_LEVEL"),
		format,
		dev: env_bool("KUBEBROWSER_SERVER_DEV"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn test_precedence_ordering() {
		assert!(Precedence::Environment > Precedence::ConfigFile);
		assert!(Precedence::ConfigFile > Precedence::Defaults);
	}

	#[test]
	fn test_defaults_source_returns_empty_layer() {
		let layer = DefaultsSource.load().unwrap();
		assert!(layer.http.is_none());
		assert!(layer.oidc.is_none());
	}

	#[test]
	fn test_toml_source_missing_file_returns_empty() {
		let layer = TomlSource::new("/nonexistent/server.toml").load().unwrap();
		assert!(layer.http.is_none());
	}

	#[test]
	fn test_toml_source_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[kubernetes]\nnamespace = \"tools\"").unwrap();

		let layer = TomlSource::new(file.path()).load().unwrap();
		assert_eq!(
			layer.kubernetes.unwrap().namespace.as_deref(),
			Some("tools")
		);
	}

	#[test]
	fn test_toml_source_reports_parse_error() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "[http]\nport = \"not a number\"").unwrap();

		let err = TomlSource::new(file.path()).load().unwrap_err();
		assert!(matches!(err, ConfigError::TomlParse { .. }));
	}

	#[test]
	fn test_system_path() {
		assert_eq!(
			TomlSource::system().path,
			PathBuf::from("/etc/kubebrowser/server.toml")
		);
	}
}
