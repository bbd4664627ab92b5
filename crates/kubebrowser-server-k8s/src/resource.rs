// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Identification and decoding of `Kubeconfig` custom resources.
//!
//! The resource is read through [`DynamicObject`] so that its group can be
//! chosen at deploy time.

use kube::api::{ApiResource, DynamicObject, GroupVersionKind, ResourceExt};
use kubebrowser_kubeconfig::KubeconfigSpec;
use tracing::warn;

use crate::error::K8sError;

pub const KUBECONFIG_KIND: &str = "Kubeconfig";

/// Group, version and plural under which `Kubeconfig` is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubeconfigCrd {
	pub group: String,
	pub version: String,
	pub plural: String,
}

impl Default for KubeconfigCrd {
	fn default() -> Self {
		Self {
			group: "kubebrowser.io".to_string(),
			version: "v1".to_string(),
			plural: "kubeconfigs".to_string(),
		}
	}
}

impl KubeconfigCrd {
	pub fn new(
		group: impl Into<String>,
		version: impl Into<String>,
		plural: impl Into<String>,
	) -> Self {
		Self {
			group: group.into(),
			version: version.into(),
			plural: plural.into(),
		}
	}

	pub fn api_resource(&self) -> ApiResource {
		let gvk = GroupVersionKind::gvk(&self.group, &self.version, KUBECONFIG_KIND);
		ApiResource::from_gvk_with_plural(&gvk, &self.plural)
	}
}

impl std::fmt::Display for KubeconfigCrd {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}/{}", self.plural, self.group, self.version)
	}
}

/// A decoded `Kubeconfig` resource.
#[derive(Debug, Clone, PartialEq)]
pub struct KubeconfigResource {
	/// `metadata.name` of the object.
	pub name: String,
	pub namespace: Option<String>,
	pub spec: KubeconfigSpec,
}

impl KubeconfigResource {
	pub fn new(name: impl Into<String>, spec: KubeconfigSpec) -> Self {
		Self {
			name: name.into(),
			namespace: None,
			spec,
		}
	}

	pub fn within(mut self, namespace: impl Into<String>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}
}

/// Decodes the `spec` of one dynamic object.
pub fn decode_resource(obj: &DynamicObject) -> Result<KubeconfigResource, K8sError> {
	let name = obj.name_any();
	let spec = obj
		.data
		.get("spec")
		.cloned()
		.ok_or_else(|| K8sError::InvalidResource {
			name: name.clone(),
			message: "missing spec".to_string(),
		})?;
	let spec: KubeconfigSpec =
		serde_json::from_value(spec).map_err(|e| K8sError::InvalidResource {
			name: name.clone(),
			message: e.to_string(),
		})?;

	Ok(KubeconfigResource {
		name,
		namespace: obj.namespace(),
		spec,
	})
}

/// Decodes every object, skipping the ones whose spec does not decode.
pub fn decode_all<'a>(objects: impl IntoIterator<Item = &'a DynamicObject>) -> Vec<KubeconfigResource> {
	objects
		.into_iter()
		.filter_map(|obj| match decode_resource(obj) {
			Ok(resource) => Some(resource),
			Err(e) => {
				warn!(error = %e, "skipping undecodable Kubeconfig resource");
				None
			}
		})
		.collect()
}
