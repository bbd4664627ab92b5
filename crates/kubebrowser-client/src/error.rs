// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the HTTP data source.

use thiserror::Error;

/// A failed fetch.
///
/// Callers of [`crate::ClusterDataSource`] never see this type; the variants
/// only exist so the log side channel can say what went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// The HTTP client could not be constructed.
	#[error("Failed to build HTTP client: {0}")]
	ClientBuild(#[source] reqwest::Error),

	/// The server answered with a non-success status.
	#[error("Unexpected status {status}: {body}")]
	Status { status: u16, body: String },

	/// The response body was not the expected JSON shape.
	#[error("Invalid response body: {0}")]
	Decode(#[from] serde_json::Error),

	/// The configured base URL cannot be used.
	#[error("Invalid URL: {0}")]
	InvalidUrl(#[from] url::ParseError),
}
