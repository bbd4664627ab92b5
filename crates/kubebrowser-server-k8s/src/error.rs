// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for K8s operations.
pub type K8sResult<T> = Result<T, K8sError>;

/// Errors that can occur while reading Kubeconfig resources.
#[derive(Error, Debug)]
pub enum K8sError {
	#[error("K8s API error: {message}")]
	ApiError { message: String },

	#[error("Kubeconfig resource not served by this cluster: {resource}")]
	ResourceNotFound { resource: String },

	#[error("Namespace is not watched by this lister: {namespace}")]
	NamespaceNotWatched { namespace: String },

	#[error("Timed out waiting for the Kubeconfig cache to sync")]
	Timeout,

	#[error("Kubeconfig cache stopped: {message}")]
	CacheStopped { message: String },

	#[error("Invalid Kubeconfig resource {name}: {message}")]
	InvalidResource { name: String, message: String },
}

impl From<kube::Error> for K8sError {
	fn from(err: kube::Error) -> Self {
		K8sError::ApiError {
			message: err.to_string(),
		}
	}
}
