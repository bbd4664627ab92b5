// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration layer for merging from multiple sources.

use serde::Deserialize;

use crate::sections::{
	HttpConfigLayer, KubernetesConfigLayer, LoggingConfigLayer, OidcConfigLayer, ProxyConfigLayer,
};

/// Server configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfigLayer {
	#[serde(default)]
	pub http: Option<HttpConfigLayer>,
	#[serde(default)]
	pub kubernetes: Option<KubernetesConfigLayer>,
	#[serde(default)]
	pub oidc: Option<OidcConfigLayer>,
	#[serde(default)]
	pub proxy: Option<ProxyConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl ServerConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ServerConfigLayer) {
		merge_option(&mut self.http, other.http, HttpConfigLayer::merge);
		merge_option(
			&mut self.kubernetes,
			other.kubernetes,
			KubernetesConfigLayer::merge,
		);
		merge_option(&mut self.oidc, other.oidc, OidcConfigLayer::merge);
		merge_option(&mut self.proxy, other.proxy, ProxyConfigLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::sections::LogFormat;

	#[test]
	fn test_merge_empty_layers() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer::default());
		assert!(base.http.is_none());
		assert!(base.kubernetes.is_none());
	}

	#[test]
	fn test_merge_preserves_base_when_other_empty() {
		let mut base = ServerConfigLayer {
			kubernetes: Some(KubernetesConfigLayer {
				namespace: Some("kubebrowser".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(ServerConfigLayer::default());
		assert_eq!(
			base.kubernetes.unwrap().namespace.as_deref(),
			Some("kubebrowser")
		);
	}

	#[test]
	fn test_merge_other_overwrites_field_by_field() {
		let mut base = ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(9000),
				host: Some("127.0.0.1".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		base.merge(ServerConfigLayer {
			http: Some(HttpConfigLayer {
				port: Some(8080),
				..Default::default()
			}),
			..Default::default()
		});
		let http = base.http.unwrap();
		assert_eq!(http.port, Some(8080));
		assert_eq!(http.host.as_deref(), Some("127.0.0.1"));
	}

	#[test]
	fn test_merge_adds_missing_sections() {
		let mut base = ServerConfigLayer::default();
		base.merge(ServerConfigLayer {
			logging: Some(LoggingConfigLayer {
				format: Some(LogFormat::Pretty),
				..Default::default()
			}),
			..Default::default()
		});
		assert_eq!(base.logging.unwrap().format, Some(LogFormat::Pretty));
	}

	#[test]
	fn test_deserialize_full_file() {
		let layer: ServerConfigLayer = toml::from_str(
			r#"
			[http]
			port = 9090

			[kubernetes]
			namespace = "tools"
			cache = false

			[oidc]
			client_id = "kubebrowser"
			issuer_url = "https://idp.example.com"

			[proxy]
			groups_header = "X-Forwarded-Groups"

			[logging]
			format = "json"
			"#,
		)
		.unwrap();
		assert_eq!(layer.http.unwrap().port, Some(9090));
		assert_eq!(layer.kubernetes.unwrap().cache, Some(false));
		assert_eq!(layer.oidc.unwrap().client_id.as_deref(), Some("kubebrowser"));
		assert_eq!(
			layer.proxy.unwrap().groups_header.as_deref(),
			Some("X-Forwarded-Groups")
		);
		assert_eq!(layer.logging.unwrap().format, Some(LogFormat::Json));
	}
}
