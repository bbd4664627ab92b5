// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use kubebrowser_server_k8s::K8sError;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// The proxy did not forward an identity.
	#[error("Unauthorized: {0}")]
	Unauthorized(String),

	/// Reading Kubeconfig resources failed.
	#[error("Kubernetes error: {0}")]
	Kubernetes(#[from] K8sError),

	#[error("Internal error: {0}")]
	Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::Unauthorized(message) => (
				StatusCode::UNAUTHORIZED,
				ErrorResponse {
					error: "unauthorized".to_string(),
					message: message.clone(),
				},
			),
			ServerError::Kubernetes(e) => {
				tracing::error!(error = %e, "kubernetes error");
				(
					StatusCode::BAD_GATEWAY,
					ErrorResponse {
						error: "kubernetes_error".to_string(),
						message: "Kubeconfig resources could not be read".to_string(),
					},
				)
			}
			ServerError::Internal(message) => {
				tracing::error!(error = %message, "internal error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					ErrorResponse {
						error: "internal_error".to_string(),
						message: "An internal error occurred".to_string(),
					},
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}
