// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory lister for tests and local development.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::client::KubeconfigLister;
use crate::error::K8sError;
use crate::resource::KubeconfigResource;

/// Serves a fixed set of resources, or fails every call.
///
/// Resources without a namespace are returned for every namespace.
#[derive(Debug, Default)]
pub struct MockKubeconfigLister {
	resources: Vec<KubeconfigResource>,
	error: Option<String>,
	calls: AtomicUsize,
}

impl MockKubeconfigLister {
	pub fn new(resources: Vec<KubeconfigResource>) -> Self {
		Self {
			resources,
			..Default::default()
		}
	}

	/// A lister whose every call fails with an API error carrying `message`.
	pub fn failing(message: impl Into<String>) -> Self {
		Self {
			error: Some(message.into()),
			..Default::default()
		}
	}

	/// Number of `list_kubeconfigs` calls so far.
	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl KubeconfigLister for MockKubeconfigLister {
	async fn list_kubeconfigs(&self, namespace: &str) -> Result<Vec<KubeconfigResource>, K8sError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if let Some(message) = &self.error {
			return Err(K8sError::ApiError {
				message: message.clone(),
			});
		}
		Ok(self
			.resources
			.iter()
			.filter(|r| r.namespace.as_deref().map_or(true, |ns| ns == namespace))
			.cloned()
			.collect())
	}
}
