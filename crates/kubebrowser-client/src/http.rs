// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Data source backed by the kubebrowser REST endpoints.

use async_trait::async_trait;
use kubebrowser_kubeconfig::{ClusterConfigRecord, UserIdentity};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::error::FetchError;
use crate::source::ClusterDataSource;

/// Identity endpoint. Answers with a JSON string.
pub const ME_PATH: &str = "/api/me";
/// Configuration endpoint. Answers with a JSON array of records.
pub const KUBECONFIGS_PATH: &str = "/api/kubeconfigs";

/// Fetches identity and cluster configs over HTTP.
///
/// One GET per call, no retry and no timeout beyond the transport defaults.
#[derive(Debug, Clone)]
pub struct HttpSource {
	http_client: Client,
	base_url: Url,
	session_cookie: Option<String>,
}

impl HttpSource {
	/// Creates a source for the backend at `base_url` with the shared client.
	pub fn new(base_url: &str) -> Result<Self, FetchError> {
		let base_url = Url::parse(base_url)?;
		let http_client = kubebrowser_common_http::new_client().map_err(FetchError::ClientBuild)?;
		Ok(Self::with_client(base_url, http_client))
	}

	/// Creates a source with a caller-provided client.
	pub fn with_client(base_url: Url, http_client: Client) -> Self {
		Self {
			http_client,
			base_url,
			session_cookie: None,
		}
	}

	/// Forwards the authenticating proxy's session cookie with every request.
	///
	/// `cookie` is the raw `Cookie` header value, e.g. `_oauth2_proxy=...`.
	pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
		self.session_cookie = Some(cookie.into());
		self
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Fetches the identity, surfacing the failure cause.
	pub async fn fetch_identity(&self) -> Result<UserIdentity, FetchError> {
		self.get_json(ME_PATH).await
	}

	/// Fetches the cluster configs, surfacing the failure cause.
	pub async fn fetch_cluster_configs(&self) -> Result<Vec<ClusterConfigRecord>, FetchError> {
		self.get_json(KUBECONFIGS_PATH).await
	}

	#[instrument(skip(self), fields(base_url = %self.base_url))]
	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
		let url = self.base_url.join(path)?;
		debug!(url = %url, "sending request");

		let mut request = self.http_client.get(url);
		if let Some(cookie) = &self.session_cookie {
			request = request.header(header::COOKIE, cookie);
		}

		let response = request.send().await?;
		let status = response.status();
		debug!(status = %status, "received response");

		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(FetchError::Status {
				status: status.as_u16(),
				body,
			});
		}

		let body = response.bytes().await?;
		trace!(len = body.len(), "response body");
		Ok(serde_json::from_slice(&body)?)
	}
}

#[async_trait]
impl ClusterDataSource for HttpSource {
	fn name(&self) -> &'static str {
		"http"
	}

	async fn current_user_identity(&self) -> UserIdentity {
		match self.fetch_identity().await {
			Ok(identity) => identity,
			Err(e) => {
				warn!(error = %e, endpoint = ME_PATH, "identity fetch failed, user is unknown");
				UserIdentity::unknown()
			}
		}
	}

	async fn cluster_configs(&self) -> Vec<ClusterConfigRecord> {
		match self.fetch_cluster_configs().await {
			Ok(records) => {
				debug!(count = records.len(), "fetched cluster configs");
				records
			}
			Err(e) => {
				warn!(
					error = %e,
					endpoint = KUBECONFIGS_PATH,
					"cluster config fetch failed, returning no clusters"
				);
				Vec::new()
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_invalid_base_url() {
		let err = HttpSource::new("not a url").unwrap_err();
		assert!(matches!(err, FetchError::InvalidUrl(_)));
	}

	#[test]
	fn endpoints_replace_base_path() {
		let source = HttpSource::new("https://kubebrowser.example.com/ui/").unwrap();
		assert_eq!(
			source.base_url().join(ME_PATH).unwrap().as_str(),
			"https://kubebrowser.example.com/api/me"
		);
		assert_eq!(
			source.base_url().join(KUBECONFIGS_PATH).unwrap().as_str(),
			"https://kubebrowser.example.com/api/kubeconfigs"
		);
	}

	#[test]
	fn session_cookie_is_stored() {
		let source = HttpSource::new("http://localhost:8080")
			.unwrap()
			.with_session_cookie("_oauth2_proxy=abc");
		assert_eq!(source.session_cookie.as_deref(), Some("_oauth2_proxy=abc"));
	}
}
