// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router.

use std::sync::Arc;

use axum::{routing::get, Router};
use kubebrowser_server_config::{OidcConfig, ProxyConfig, ServerConfig};
use kubebrowser_server_k8s::{
	CachedKubeconfigLister, K8sError, KubeClient, KubeconfigCrd, KubeconfigLister,
	MockKubeconfigLister, DEFAULT_SYNC_TIMEOUT,
};

use crate::routes;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
	pub lister: Arc<dyn KubeconfigLister>,
	pub namespace: String,
	pub oidc: OidcConfig,
	pub proxy: ProxyConfig,
}

pub fn create_app_state(config: &ServerConfig, lister: Arc<dyn KubeconfigLister>) -> AppState {
	AppState {
		lister,
		namespace: config.kubernetes.namespace.clone(),
		oidc: config.oidc.clone(),
		proxy: config.proxy.clone(),
	}
}

/// Connects to the cluster and builds the configured lister.
///
/// In development a cluster that cannot be reached yields an empty lister
/// instead of an error, so the API can still be exercised.
pub async fn build_lister(config: &ServerConfig) -> Result<Arc<dyn KubeconfigLister>, K8sError> {
	let k8s = &config.kubernetes;
	let crd = KubeconfigCrd::new(&k8s.group, &k8s.version, &k8s.plural);

	let client = match KubeClient::new(crd.clone()).await {
		Ok(client) => client,
		Err(e) => return unreachable_cluster(e, config.logging.dev),
	};

	if !k8s.cache {
		tracing::info!(crd = %crd, "listing Kubeconfig resources on every request");
		return Ok(Arc::new(client));
	}

	let cached =
		CachedKubeconfigLister::start(client.client(), &crd, &k8s.namespace, DEFAULT_SYNC_TIMEOUT)
			.await?;
	Ok(Arc::new(cached))
}

/// Outcome when no Kubernetes client could be built: an empty lister in
/// development, the error otherwise.
fn unreachable_cluster(
	err: K8sError,
	dev: bool,
) -> Result<Arc<dyn KubeconfigLister>, K8sError> {
	if !dev {
		return Err(err);
	}
	tracing::warn!(error = %err, "no Kubernetes cluster reachable, serving no kubeconfigs");
	Ok(Arc::new(MockKubeconfigLister::default()))
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/api/me", get(routes::me::get_me))
		.route("/api/kubeconfigs", get(routes::kubeconfigs::list_kubeconfigs))
		.with_state(state)
}
