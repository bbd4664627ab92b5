// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Result type alias for kubeconfig operations.
pub type KubeconfigResult<T> = Result<T, KubeconfigError>;

/// Errors raised while preparing a Kubeconfig resource for a user.
#[derive(Error, Debug)]
pub enum KubeconfigError {
	#[error("kubeconfig '{name}' has no context to bind the user to")]
	NoContext { name: String },

	#[error("kubeconfig '{name}' did not serialize to a JSON object")]
	NotAnObject { name: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
