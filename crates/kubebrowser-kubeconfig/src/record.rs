// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Values returned by `/api/me` and `/api/kubeconfigs`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque kubeconfig document. Its schema belongs to Kubernetes client
/// configuration; consumers pass it through untouched.
pub type KubeconfigDocument = Map<String, Value>;

/// Display name of the currently authenticated user.
///
/// Serialized as a bare JSON string. An empty value means "identity unknown",
/// which is also what a failed lookup degrades to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(String);

impl UserIdentity {
	pub fn new(display_name: impl Into<String>) -> Self {
		Self(display_name.into())
	}

	/// The empty identity.
	pub fn unknown() -> Self {
		Self::default()
	}

	pub fn is_known(&self) -> bool {
		!self.0.is_empty()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}

impl fmt::Display for UserIdentity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for UserIdentity {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for UserIdentity {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

/// A named reference to one cluster's access configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfigRecord {
	/// Human-readable label. Uniqueness is not enforced.
	pub name: String,
	pub kubeconfig: KubeconfigDocument,
}

impl ClusterConfigRecord {
	pub fn new(name: impl Into<String>, kubeconfig: KubeconfigDocument) -> Self {
		Self {
			name: name.into(),
			kubeconfig,
		}
	}

	/// The `kind` marker of the embedded document, if it carries one.
	pub fn kind(&self) -> Option<&str> {
		self.kubeconfig.get("kind").and_then(Value::as_str)
	}

	/// The `apiVersion` marker of the embedded document, if it carries one.
	pub fn api_version(&self) -> Option<&str> {
		self.kubeconfig.get("apiVersion").and_then(Value::as_str)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn identity_is_a_bare_json_string() {
		let identity = UserIdentity::new("Alice");
		assert_eq!(serde_json::to_string(&identity).unwrap(), "\"Alice\"");

		let parsed: UserIdentity = serde_json::from_str("\"Bob\"").unwrap();
		assert_eq!(parsed.as_str(), "Bob");
		assert!(parsed.is_known());
	}

	#[test]
	fn unknown_identity_is_empty() {
		let identity = UserIdentity::unknown();
		assert!(!identity.is_known());
		assert_eq!(identity.to_string(), "");
	}

	#[test]
	fn record_keeps_unknown_kubeconfig_fields() {
		let body = json!({
			"name": "prod",
			"kubeconfig": {
				"apiVersion": "v1",
				"kind": "Config",
				"preferences": { "colors": true },
				"x-vendor": [1, 2, 3]
			}
		});
		let record: ClusterConfigRecord = serde_json::from_value(body.clone()).unwrap();
		assert_eq!(record.name, "prod");
		assert_eq!(record.kind(), Some("Config"));
		assert_eq!(record.api_version(), Some("v1"));
		assert_eq!(serde_json::to_value(&record).unwrap(), body);
	}

	#[test]
	fn record_requires_an_object_document() {
		let result: Result<ClusterConfigRecord, _> =
			serde_json::from_value(json!({ "name": "x", "kubeconfig": "not-an-object" }));
		assert!(result.is_err());
	}
}
