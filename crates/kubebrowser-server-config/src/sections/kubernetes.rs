// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Kubernetes access configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_NAMESPACE: &str = "default";
const DEFAULT_GROUP: &str = "kubebrowser.io";
const DEFAULT_VERSION: &str = "v1";
const DEFAULT_PLURAL: &str = "kubeconfigs";

/// Where the `Kubeconfig` resources live and how to read them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KubernetesConfig {
	pub namespace: String,
	pub group: String,
	pub version: String,
	pub plural: String,
	/// Serve reads from a watch-backed cache instead of listing per request.
	pub cache: bool,
}

impl Default for KubernetesConfig {
	fn default() -> Self {
		KubernetesConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct KubernetesConfigLayer {
	pub namespace: Option<String>,
	pub group: Option<String>,
	pub version: Option<String>,
	pub plural: Option<String>,
	pub cache: Option<bool>,
}

impl KubernetesConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.namespace.is_some() {
			self.namespace = other.namespace;
		}
		if other.group.is_some() {
			self.group = other.group;
		}
		if other.version.is_some() {
			self.version = other.version;
		}
		if other.plural.is_some() {
			self.plural = other.plural;
		}
		if other.cache.is_some() {
			self.cache = other.cache;
		}
	}

	pub fn finalize(self) -> KubernetesConfig {
		KubernetesConfig {
			namespace: self
				.namespace
				.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
			group: self.group.unwrap_or_else(|| DEFAULT_GROUP.to_string()),
			version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
			plural: self.plural.unwrap_or_else(|| DEFAULT_PLURAL.to_string()),
			cache: self.cache.unwrap_or(true),
		}
	}
}
