// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Spec of the `Kubeconfig` custom resource.
//!
//! Field names follow the kubeconfig file format (`apiVersion`,
//! `current-context`, `certificate-authority-data`, ...) so that the
//! `kubeconfig` part can be written out and consumed by kubectl directly.

use serde::{Deserialize, Serialize};

/// Desired state of a `Kubeconfig` resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubeconfigSpec {
	pub name: String,
	pub kubeconfig: KubeconfigData,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub whitelist: Option<Whitelist>,
}

/// The kubeconfig document carried by the resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KubeconfigData {
	#[serde(rename = "apiVersion")]
	pub api_version: String,
	pub kind: String,
	#[serde(default)]
	pub clusters: Vec<Cluster>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub contexts: Vec<NamedContext>,
	#[serde(
		rename = "current-context",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub current_context: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub users: Vec<NamedUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cluster {
	pub name: String,
	pub cluster: ClusterDetails,
}

/// Connection details for one API server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClusterDetails {
	pub server: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub certificate_authority_data: Option<String>,
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub insecure_skip_tls_verify: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedContext {
	pub name: String,
	pub context: ContextSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSpec {
	pub cluster: String,
	pub user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedUser {
	pub name: String,
	pub user: UserSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSpec {
	#[serde(rename = "auth-provider")]
	pub auth_provider: AuthProviderSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProviderSpec {
	pub name: String,
	pub config: AuthProviderConfig,
}

/// kubectl `oidc` auth-provider settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuthProviderConfig {
	pub client_id: String,
	pub client_secret: String,
	pub id_token: String,
	pub idp_issuer_url: String,
	pub refresh_token: String,
}

/// Users and groups allowed to see a resource. Absent means everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Whitelist {
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub users: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub groups: Vec<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn decodes_resource_spec() {
		let spec: KubeconfigSpec = serde_json::from_value(json!({
			"name": "staging",
			"kubeconfig": {
				"apiVersion": "v1",
				"kind": "Config",
				"clusters": [{
					"name": "staging",
					"cluster": {
						"server": "https://staging.example.com:6443",
						"certificate-authority-data": "LS0tLS1C"
					}
				}],
				"contexts": [{
					"name": "staging",
					"context": { "cluster": "staging", "user": "placeholder" }
				}],
				"current-context": "staging"
			},
			"whitelist": { "groups": ["platform"] }
		}))
		.unwrap();

		assert_eq!(spec.name, "staging");
		assert_eq!(spec.kubeconfig.api_version, "v1");
		assert_eq!(spec.kubeconfig.clusters.len(), 1);
		assert_eq!(
			spec.kubeconfig.clusters[0]
				.cluster
				.certificate_authority_data
				.as_deref(),
			Some("LS0tLS1C")
		);
		assert!(!spec.kubeconfig.clusters[0].cluster.insecure_skip_tls_verify);
		assert_eq!(spec.kubeconfig.current_context.as_deref(), Some("staging"));
		let whitelist = spec.whitelist.unwrap();
		assert!(whitelist.users.is_empty());
		assert_eq!(whitelist.groups, vec!["platform".to_string()]);
	}

	#[test]
	fn omits_empty_optional_fields() {
		let data = KubeconfigData {
			api_version: "v1".to_string(),
			kind: "Config".to_string(),
			clusters: vec![Cluster {
				name: "c".to_string(),
				cluster: ClusterDetails {
					server: "https://c".to_string(),
					..Default::default()
				},
			}],
			..Default::default()
		};
		let value = serde_json::to_value(&data).unwrap();
		assert_eq!(
			value,
			json!({
				"apiVersion": "v1",
				"kind": "Config",
				"clusters": [{ "name": "c", "cluster": { "server": "https://c" } }]
			})
		);
	}

	#[test]
	fn auth_provider_uses_kubectl_field_names() {
		let user = NamedUser {
			name: "oidc".to_string(),
			user: UserSpec {
				auth_provider: AuthProviderSpec {
					name: "oidc".to_string(),
					config: AuthProviderConfig {
						client_id: "id".to_string(),
						client_secret: "secret".to_string(),
						id_token: "tok".to_string(),
						idp_issuer_url: "https://issuer".to_string(),
						refresh_token: "refresh".to_string(),
					},
				},
			},
		};
		let value = serde_json::to_value(&user).unwrap();
		let config = &value["user"]["auth-provider"]["config"];
		assert_eq!(config["client-id"], "id");
		assert_eq!(config["client-secret"], "secret");
		assert_eq!(config["id-token"], "tok");
		assert_eq!(config["idp-issuer-url"], "https://issuer");
		assert_eq!(config["refresh-token"], "refresh");
	}
}
