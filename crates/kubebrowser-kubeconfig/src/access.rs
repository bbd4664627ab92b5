// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-user visibility and credential injection.
//!
//! Resources are stored once for everybody. Before a record is returned to a
//! caller it is filtered against the resource whitelist and rewritten so that
//! the only user entry is the caller's own OIDC credentials.

use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{KubeconfigError, KubeconfigResult};
use crate::record::ClusterConfigRecord;
use crate::resource::{
	AuthProviderConfig, AuthProviderSpec, KubeconfigSpec, NamedUser, UserSpec, Whitelist,
};

/// Name of the user entry and auth-provider written into every record.
pub const OIDC_USER_NAME: &str = "oidc";

/// Identity claims of the caller, as asserted by the authenticating proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Claims {
	pub email: String,
	pub groups: Vec<String>,
}

impl Claims {
	pub fn new(email: impl Into<String>, groups: Vec<String>) -> Self {
		Self {
			email: email.into(),
			groups,
		}
	}
}

impl Whitelist {
	/// Whether the caller is listed, either by email or through a group.
	pub fn admits(&self, claims: &Claims) -> bool {
		if self.users.iter().any(|u| u == &claims.email) {
			return true;
		}
		claims.groups.iter().any(|g| self.groups.contains(g))
	}
}

/// Whether `spec` may be shown to the caller.
pub fn is_visible(spec: &KubeconfigSpec, claims: &Claims) -> bool {
	match &spec.whitelist {
		None => true,
		Some(whitelist) => whitelist.admits(claims),
	}
}

/// Keeps the specs visible to the caller, preserving their order.
pub fn filter_visible(
	specs: impl IntoIterator<Item = KubeconfigSpec>,
	claims: &Claims,
) -> Vec<KubeconfigSpec> {
	specs
		.into_iter()
		.filter(|spec| {
			let visible = is_visible(spec, claims);
			trace!(
				kubeconfig = %spec.name,
				user = %claims.email,
				visible,
				"whitelist evaluated"
			);
			visible
		})
		.collect()
}

/// OIDC settings and tokens written into the caller's kubeconfig.
#[derive(Clone, Default)]
pub struct OidcCredentials {
	pub client_id: String,
	pub client_secret: String,
	pub issuer_url: String,
	pub id_token: String,
	pub refresh_token: String,
}

impl fmt::Debug for OidcCredentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OidcCredentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &"[REDACTED]")
			.field("issuer_url", &self.issuer_url)
			.field("id_token", &"[REDACTED]")
			.field("refresh_token", &"[REDACTED]")
			.finish()
	}
}

impl OidcCredentials {
	fn as_user(&self) -> NamedUser {
		NamedUser {
			name: OIDC_USER_NAME.to_string(),
			user: UserSpec {
				auth_provider: AuthProviderSpec {
					name: OIDC_USER_NAME.to_string(),
					config: AuthProviderConfig {
						client_id: self.client_id.clone(),
						client_secret: self.client_secret.clone(),
						id_token: self.id_token.clone(),
						idp_issuer_url: self.issuer_url.clone(),
						refresh_token: self.refresh_token.clone(),
					},
				},
			},
		}
	}
}

/// Rewrites a visible spec into the record handed to the caller.
///
/// The whitelist is dropped, every stored user is replaced by the caller's
/// OIDC user, and only the first context is kept, bound to that user.
pub fn prepare_for_user(
	mut spec: KubeconfigSpec,
	credentials: &OidcCredentials,
) -> KubeconfigResult<ClusterConfigRecord> {
	spec.whitelist = None;

	let data = &mut spec.kubeconfig;
	data.contexts.truncate(1);
	let context = data
		.contexts
		.first_mut()
		.ok_or_else(|| KubeconfigError::NoContext {
			name: spec.name.clone(),
		})?;
	context.context.user = OIDC_USER_NAME.to_string();
	data.users = vec![credentials.as_user()];

	debug!(kubeconfig = %spec.name, "prepared kubeconfig for caller");

	match serde_json::to_value(&spec.kubeconfig)? {
		Value::Object(document) => Ok(ClusterConfigRecord::new(spec.name, document)),
		_ => Err(KubeconfigError::NotAnObject { name: spec.name }),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resource::{Cluster, ClusterDetails, ContextSpec, KubeconfigData, NamedContext};
	use proptest::prelude::*;

	fn spec(name: &str, whitelist: Option<Whitelist>) -> KubeconfigSpec {
		KubeconfigSpec {
			name: name.to_string(),
			kubeconfig: KubeconfigData {
				api_version: "v1".to_string(),
				kind: "Config".to_string(),
				clusters: vec![Cluster {
					name: name.to_string(),
					cluster: ClusterDetails {
						server: format!("https://{name}.example.com"),
						..Default::default()
					},
				}],
				contexts: vec![
					NamedContext {
						name: format!("{name}-admin"),
						context: ContextSpec {
							cluster: name.to_string(),
							user: "admin".to_string(),
						},
					},
					NamedContext {
						name: format!("{name}-readonly"),
						context: ContextSpec {
							cluster: name.to_string(),
							user: "viewer".to_string(),
						},
					},
				],
				current_context: Some(format!("{name}-admin")),
				users: vec![NamedUser {
					name: "admin".to_string(),
					..Default::default()
				}],
			},
			whitelist,
		}
	}

	fn alice() -> Claims {
		Claims::new("alice@example.com", vec!["dev".to_string(), "ops".to_string()])
	}

	fn credentials() -> OidcCredentials {
		OidcCredentials {
			client_id: "kubebrowser".to_string(),
			client_secret: "s3cret".to_string(),
			issuer_url: "https://login.example.com/v2.0".to_string(),
			id_token: "eyJ.id.token".to_string(),
			refresh_token: "refresh-me".to_string(),
		}
	}

	#[test]
	fn no_whitelist_is_visible_to_everyone() {
		assert!(is_visible(&spec("a", None), &Claims::default()));
	}

	#[test]
	fn empty_whitelist_hides_resource() {
		assert!(!is_visible(&spec("a", Some(Whitelist::default())), &alice()));
	}

	#[test]
	fn whitelisted_user_is_visible() {
		let whitelist = Whitelist {
			users: vec!["alice@example.com".to_string()],
			groups: vec![],
		};
		assert!(is_visible(&spec("a", Some(whitelist)), &alice()));
	}

	#[test]
	fn whitelisted_group_is_visible() {
		let whitelist = Whitelist {
			users: vec!["bob@example.com".to_string()],
			groups: vec!["ops".to_string()],
		};
		assert!(is_visible(&spec("a", Some(whitelist)), &alice()));
	}

	#[test]
	fn unlisted_user_is_hidden() {
		let whitelist = Whitelist {
			users: vec!["bob@example.com".to_string()],
			groups: vec!["finance".to_string()],
		};
		assert!(!is_visible(&spec("a", Some(whitelist)), &alice()));
	}

	#[test]
	fn filter_keeps_order_and_matches_once() {
		let specs = vec![
			spec("open", None),
			spec(
				"finance",
				Some(Whitelist {
					users: vec![],
					groups: vec!["finance".to_string()],
				}),
			),
			spec(
				"both-groups",
				Some(Whitelist {
					users: vec![],
					groups: vec!["dev".to_string(), "ops".to_string()],
				}),
			),
			spec(
				"by-email",
				Some(Whitelist {
					users: vec!["alice@example.com".to_string()],
					groups: vec!["dev".to_string()],
				}),
			),
		];

		let names: Vec<String> = filter_visible(specs, &alice())
			.into_iter()
			.map(|s| s.name)
			.collect();
		assert_eq!(names, vec!["open", "both-groups", "by-email"]);
	}

	#[test]
	fn prepare_replaces_users_and_keeps_first_context() {
		let record = prepare_for_user(
			spec("prod", Some(Whitelist::default())),
			&credentials(),
		)
		.unwrap();

		assert_eq!(record.name, "prod");
		assert!(record.kubeconfig.get("whitelist").is_none());

		let doc = Value::Object(record.kubeconfig);
		let contexts = doc["contexts"].as_array().unwrap();
		assert_eq!(contexts.len(), 1);
		assert_eq!(contexts[0]["name"], "prod-admin");
		assert_eq!(contexts[0]["context"]["user"], OIDC_USER_NAME);

		let users = doc["users"].as_array().unwrap();
		assert_eq!(users.len(), 1);
		assert_eq!(users[0]["name"], OIDC_USER_NAME);
		let provider = &users[0]["user"]["auth-provider"];
		assert_eq!(provider["name"], OIDC_USER_NAME);
		assert_eq!(provider["config"]["client-id"], "kubebrowser");
		assert_eq!(provider["config"]["client-secret"], "s3cret");
		assert_eq!(
			provider["config"]["idp-issuer-url"],
			"https://login.example.com/v2.0"
		);
		assert_eq!(provider["config"]["id-token"], "eyJ.id.token");
		assert_eq!(provider["config"]["refresh-token"], "refresh-me");
		assert_eq!(doc["clusters"][0]["cluster"]["server"], "https://prod.example.com");
	}

	#[test]
	fn prepare_without_context_fails() {
		let mut spec = spec("broken", None);
		spec.kubeconfig.contexts.clear();
		let err = prepare_for_user(spec, &credentials()).unwrap_err();
		assert!(matches!(err, KubeconfigError::NoContext { ref name } if name == "broken"));
	}

	#[test]
	fn credentials_debug_redacts_secrets() {
		let debug = format!("{:?}", credentials());
		assert!(debug.contains("kubebrowser"));
		assert!(!debug.contains("s3cret"));
		assert!(!debug.contains("eyJ.id.token"));
		assert!(!debug.contains("refresh-me"));
	}

	fn arb_whitelist() -> impl Strategy<Value = Option<Whitelist>> {
		prop::option::of(
			(
				prop::collection::vec("[a-c]@x", 0..3),
				prop::collection::vec("g[0-3]", 0..3),
			)
				.prop_map(|(users, groups)| Whitelist { users, groups }),
		)
	}

	proptest! {
		#[test]
		fn filter_is_an_ordered_subsequence(
			whitelists in prop::collection::vec(arb_whitelist(), 0..8),
			email in "[a-c]@x",
			groups in prop::collection::vec("g[0-3]", 0..3),
		) {
			let specs: Vec<KubeconfigSpec> = whitelists
				.into_iter()
				.enumerate()
				.map(|(i, w)| spec(&format!("k{i}"), w))
				.collect();
			let claims = Claims::new(email, groups);

			let visible = filter_visible(specs.clone(), &claims);

			let mut cursor = specs.iter();
			for kept in &visible {
				prop_assert!(cursor.any(|s| s == kept));
			}
			for s in &specs {
				prop_assert_eq!(visible.contains(s), is_visible(s, &claims));
				if s.whitelist.is_none() {
					prop_assert!(visible.contains(s));
				}
			}
		}
	}
}
