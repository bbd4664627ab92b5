// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::K8sError;
use crate::resource::KubeconfigResource;

/// Read access to `Kubeconfig` resources.
///
/// Implemented by a direct API client, by a watch-backed cache and by an
/// in-memory mock for tests.
#[async_trait]
pub trait KubeconfigLister: Send + Sync {
	/// List the decodable `Kubeconfig` resources in `namespace`.
	async fn list_kubeconfigs(&self, namespace: &str) -> Result<Vec<KubeconfigResource>, K8sError>;
}
