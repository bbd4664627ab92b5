// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the kubebrowser server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`KUBEBROWSER_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use kubebrowser_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use tracing::{debug, info, warn};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub kubernetes: KubernetesConfig,
	pub oidc: OidcConfig,
	pub proxy: ProxyConfig,
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
/// 1. Environment variables (`KUBEBROWSER_SERVER_*`)
/// 2. Config file (`/etc/kubebrowser/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration from environment only (for testing or simple deployments).
pub fn load_config_from_env() -> Result<ServerConfig, ConfigError> {
	let mut merged = ServerConfigLayer::default();
	merged.merge(EnvSource.load()?);
	finalize(merged)
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

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
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
	let config = ServerConfig {
		http: layer.http.unwrap_or_default().finalize(),
		kubernetes: layer.kubernetes.unwrap_or_default().finalize(),
		oidc: layer.oidc.unwrap_or_default().finalize(),
		proxy: layer.proxy.unwrap_or_default().finalize(),
		logging: layer.logging.unwrap_or_default().finalize(),
	};

	validate_config(&config)?;

	info!(
		host = %config.http.host,
		port = config.http.port,
		namespace = %config.kubernetes.namespace,
		crd_group = %config.kubernetes.group,
		crd_version = %config.kubernetes.version,
		cache = config.kubernetes.cache,
		oidc_configured = config.oidc.is_configured(),
		dev = config.logging.dev,
		"Server configuration loaded"
	);

	Ok(config)
}

/// Validate cross-field configuration rules.
///
/// Outside development the OIDC client must be fully described, otherwise the
/// kubeconfigs handed out would carry an unusable `auth-provider` block.
pub fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
	if config.kubernetes.namespace.is_empty() {
		return Err(ConfigError::Validation(
			"kubernetes namespace cannot be empty".to_string(),
		));
	}

	if config.logging.dev {
		if !config.oidc.is_configured() {
			warn!("OIDC client is not configured; issued kubeconfigs will not authenticate");
		}
		return Ok(());
	}

	config.oidc.validate()
}
