// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Caller identity forwarded by the authenticating proxy.
//!
//! The proxy has already completed the OIDC flow; this server trusts the
//! identity headers it sets and must only be reachable through it.

use axum::{
	extract::FromRequestParts,
	http::{request::Parts, HeaderMap},
	response::{IntoResponse, Response},
};
use kubebrowser_kubeconfig::{Claims, OidcCredentials, UserIdentity};
use kubebrowser_server_config::{OidcConfig, ProxyConfig};
use tracing::instrument;

use crate::{api::AppState, error::ServerError};

/// The authenticated caller of a request.
#[derive(Clone, PartialEq, Eq)]
pub struct CallerIdentity {
	pub email: String,
	pub name: Option<String>,
	pub groups: Vec<String>,
	pub id_token: String,
	pub refresh_token: String,
}

impl std::fmt::Debug for CallerIdentity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CallerIdentity")
			.field("email", &self.email)
			.field("name", &self.name)
			.field("groups", &self.groups)
			.finish_non_exhaustive()
	}
}

impl CallerIdentity {
	/// Reads the identity headers named in `proxy`.
	///
	/// Returns `None` when the email header is missing or empty.
	pub fn from_headers(headers: &HeaderMap, proxy: &ProxyConfig) -> Option<Self> {
		let email = header_str(headers, &proxy.email_header)?;
		let groups = header_str(headers, &proxy.groups_header)
			.map(|raw| {
				raw.split(',')
					.map(str::trim)
					.filter(|g| !g.is_empty())
					.map(String::from)
					.collect()
			})
			.unwrap_or_default();

		Some(Self {
			email,
			name: header_str(headers, &proxy.name_header),
			groups,
			id_token: header_str(headers, &proxy.id_token_header).unwrap_or_default(),
			refresh_token: header_str(headers, &proxy.refresh_token_header).unwrap_or_default(),
		})
	}

	/// Preferred name when the proxy sends one, otherwise the email.
	pub fn display_name(&self) -> UserIdentity {
		match &self.name {
			Some(name) => UserIdentity::new(name.clone()),
			None => UserIdentity::new(self.email.clone()),
		}
	}

	pub fn claims(&self) -> Claims {
		Claims::new(self.email.clone(), self.groups.clone())
	}

	/// OIDC credentials to embed in kubeconfigs issued to this caller.
	pub fn credentials(&self, oidc: &OidcConfig) -> OidcCredentials {
		OidcCredentials {
			client_id: oidc.client_id.clone(),
			client_secret: oidc.client_secret.clone(),
			issuer_url: oidc.issuer_url.clone(),
			id_token: self.id_token.clone(),
			refresh_token: self.refresh_token.clone(),
		}
	}
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
	headers
		.get(name)
		.and_then(|v| v.to_str().ok())
		.map(str::trim)
		.filter(|v| !v.is_empty())
		.map(String::from)
}

impl FromRequestParts<AppState> for CallerIdentity {
	type Rejection = Response;

	#[instrument(name = "CallerIdentity::from_request_parts", skip_all)]
	async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
		match CallerIdentity::from_headers(&parts.headers, &state.proxy) {
			Some(caller) => {
				tracing::debug!(user = %caller.email, groups = caller.groups.len(), "caller identified");
				Ok(caller)
			}
			None => {
				tracing::debug!(header = %state.proxy.email_header, "identity header missing");
				Err(ServerError::Unauthorized("Authentication required".to_string()).into_response())
			}
		}
	}
}
