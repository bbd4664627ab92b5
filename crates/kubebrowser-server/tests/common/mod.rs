// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared fixtures for router tests.

#![allow(dead_code)]

use std::sync::Arc;

use kubebrowser_kubeconfig::KubeconfigSpec;
use kubebrowser_server::{create_app_state, create_router, ServerConfig};
use kubebrowser_server_config::OidcConfig;
use kubebrowser_server_k8s::{KubeconfigLister, KubeconfigResource, MockKubeconfigLister};
use serde_json::json;

pub const NAMESPACE: &str = "kubebrowser";

pub fn config() -> ServerConfig {
	let mut config = ServerConfig {
		oidc: OidcConfig {
			client_id: "kubebrowser".to_string(),
			client_secret: "s3cret".to_string(),
			issuer_url: "https://idp.example.com/v2.0".to_string(),
		},
		..Default::default()
	};
	config.kubernetes.namespace = NAMESPACE.to_string();
	config
}

/// A resource with two contexts, an admin user and the given whitelist.
pub fn resource(name: &str, whitelist: serde_json::Value) -> KubeconfigResource {
	let mut spec = json!({
		"name": name,
		"kubeconfig": {
			"apiVersion": "v1",
			"kind": "Config",
			"clusters": [{ "name": name, "cluster": { "server": format!("https://{name}.example.com") } }],
			"contexts": [
				{ "name": format!("{name}-admin"), "context": { "cluster": name, "user": "admin" } },
				{ "name": format!("{name}-view"), "context": { "cluster": name, "user": "viewer" } }
			],
			"current-context": format!("{name}-admin"),
			"users": [{
				"name": "admin",
				"user": { "auth-provider": { "name": "static", "config": {
					"client-id": "", "client-secret": "", "id-token": "leaked",
					"idp-issuer-url": "", "refresh-token": ""
				} } }
			}]
		}
	});
	if !whitelist.is_null() {
		spec["whitelist"] = whitelist;
	}
	let spec: KubeconfigSpec = serde_json::from_value(spec).unwrap();
	KubeconfigResource::new(name, spec).within(NAMESPACE)
}

pub fn without_contexts(name: &str) -> KubeconfigResource {
	let mut r = resource(name, serde_json::Value::Null);
	r.spec.kubeconfig.contexts.clear();
	r
}

pub fn app_with(lister: Arc<dyn KubeconfigLister>) -> axum::Router {
	create_router(create_app_state(&config(), lister))
}

pub fn app(resources: Vec<KubeconfigResource>) -> axum::Router {
	app_with(Arc::new(MockKubeconfigLister::new(resources)))
}
