// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use kube::{
	api::{Api, ApiResource, DynamicObject, ListParams},
	Client,
};
use tracing::{debug, instrument};

use crate::client::KubeconfigLister;
use crate::error::K8sError;
use crate::resource::{decode_all, KubeconfigCrd, KubeconfigResource};

/// Lists `Kubeconfig` resources straight from the API server on every call.
pub struct KubeClient {
	client: Client,
	crd: KubeconfigCrd,
	api_resource: ApiResource,
}

impl KubeClient {
	/// Create a new KubeClient that auto-discovers cluster configuration.
	///
	/// This will attempt to load config from:
	/// 1. In-cluster service account (when running in K8s)
	/// 2. KUBECONFIG environment variable
	/// 3. ~/.kube/config
	pub async fn new(crd: KubeconfigCrd) -> Result<Self, K8sError> {
		let client = Client::try_default().await?;
		debug!(crd = %crd, "K8s client initialized");
		Ok(Self::with_client(client, crd))
	}

	pub fn with_client(client: Client, crd: KubeconfigCrd) -> Self {
		let api_resource = crd.api_resource();
		Self {
			client,
			crd,
			api_resource,
		}
	}

	/// The underlying client, shared with the cached lister.
	pub fn client(&self) -> Client {
		self.client.clone()
	}

	pub fn crd(&self) -> &KubeconfigCrd {
		&self.crd
	}

	fn api(&self, namespace: &str) -> Api<DynamicObject> {
		Api::namespaced_with(self.client.clone(), namespace, &self.api_resource)
	}
}

#[async_trait]
impl KubeconfigLister for KubeClient {
	#[instrument(skip(self), fields(crd = %self.crd))]
	async fn list_kubeconfigs(&self, namespace: &str) -> Result<Vec<KubeconfigResource>, K8sError> {
		let list = match self.api(namespace).list(&ListParams::default()).await {
			Ok(list) => list,
			Err(kube::Error::Api(err)) if err.code == 404 => {
				return Err(K8sError::ResourceNotFound {
					resource: self.crd.to_string(),
				})
			}
			Err(e) => return Err(e.into()),
		};
		debug!(count = list.items.len(), "listed Kubeconfig objects");
		Ok(decode_all(&list.items))
	}
}
