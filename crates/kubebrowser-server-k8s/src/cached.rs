// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Watch-backed lister.
//!
//! A reflector keeps an in-memory copy of every `Kubeconfig` in one namespace.
//! Requests are answered from that copy and never reach the API server.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use kube::api::{Api, DynamicObject, ResourceExt};
use kube::runtime::reflector::{self, store::Writer, Store};
use kube::runtime::{watcher, WatchStreamExt};
use kube::Client;
use tokio::task::JoinHandle;
use tracing::{info, instrument, trace, warn};

use crate::client::KubeconfigLister;
use crate::error::K8sError;
use crate::resource::{decode_all, KubeconfigCrd, KubeconfigResource};

/// How long [`CachedKubeconfigLister::start`] waits for the initial list.
pub const DEFAULT_SYNC_TIMEOUT: Duration = Duration::from_secs(30);

pub struct CachedKubeconfigLister {
	namespace: String,
	store: Store<DynamicObject>,
	watch_task: JoinHandle<()>,
}

impl CachedKubeconfigLister {
	/// Starts watching `namespace` and waits until the first full list has
	/// been stored.
	#[instrument(skip(client, crd), fields(crd = %crd))]
	pub async fn start(
		client: Client,
		crd: &KubeconfigCrd,
		namespace: &str,
		sync_timeout: Duration,
	) -> Result<Self, K8sError> {
		let api_resource = crd.api_resource();
		let api: Api<DynamicObject> = Api::namespaced_with(client, namespace, &api_resource);

		let writer = Writer::new(api_resource);
		let store = writer.as_reader();
		let events = reflector::reflector(writer, watcher::watcher(api, watcher::Config::default()))
			.default_backoff()
			.applied_objects();

		let watch_task = tokio::spawn(async move {
			let mut events = std::pin::pin!(events);
			while let Some(event) = events.next().await {
				match event {
					Ok(obj) => trace!(name = %obj.name_any(), "Kubeconfig cache updated"),
					Err(e) => warn!(error = %e, "Kubeconfig watch error"),
				}
			}
			warn!("Kubeconfig watch stream ended");
		});

		match tokio::time::timeout(sync_timeout, store.wait_until_ready()).await {
			Ok(Ok(())) => {}
			Ok(Err(e)) => {
				watch_task.abort();
				return Err(K8sError::CacheStopped {
					message: e.to_string(),
				});
			}
			Err(_) => {
				watch_task.abort();
				return Err(K8sError::Timeout);
			}
		}

		info!(
			namespace,
			objects = store.state().len(),
			"Kubeconfig cache synced"
		);

		Ok(Self {
			namespace: namespace.to_string(),
			store,
			watch_task,
		})
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}
}

impl Drop for CachedKubeconfigLister {
	fn drop(&mut self) {
		self.watch_task.abort();
	}
}

#[async_trait]
impl KubeconfigLister for CachedKubeconfigLister {
	async fn list_kubeconfigs(&self, namespace: &str) -> Result<Vec<KubeconfigResource>, K8sError> {
		if namespace != self.namespace {
			return Err(K8sError::NamespaceNotWatched {
				namespace: namespace.to_string(),
			});
		}
		if self.watch_task.is_finished() {
			return Err(K8sError::CacheStopped {
				message: "watch task exited".to_string(),
			});
		}
		Ok(snapshot(self.store.state()))
	}
}

/// Store order is unspecified; callers get resources sorted by name.
fn snapshot(mut objects: Vec<Arc<DynamicObject>>) -> Vec<KubeconfigResource> {
	objects.sort_by_key(|obj| obj.name_any());
	decode_all(objects.iter().map(|obj| obj.as_ref()))
}
