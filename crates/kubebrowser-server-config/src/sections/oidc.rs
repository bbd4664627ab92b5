// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! OIDC client settings written into every kubeconfig handed out.
//!
//! The server never talks to the identity provider itself. These values only
//! end up in the `auth-provider` block so that `kubectl` can refresh tokens.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

#[derive(Clone, Default, PartialEq)]
pub struct OidcConfig {
	pub client_id: String,
	pub client_secret: String,
	pub issuer_url: String,
}

impl OidcConfig {
	/// Whether enough is set to produce a usable `auth-provider` block.
	pub fn is_configured(&self) -> bool {
		!self.client_id.is_empty() && !self.issuer_url.is_empty()
	}

	pub(crate) fn validate(&self) -> Result<(), ConfigError> {
		if self.client_id.is_empty() {
			return Err(ConfigError::Validation(
				"OIDC client_id is required (KUBEBROWSER_SERVER_OIDC_CLIENT_ID or OAUTH2_CLIENT_ID)"
					.to_string(),
			));
		}
		if self.issuer_url.is_empty() {
			return Err(ConfigError::Validation(
				"OIDC issuer_url is required (KUBEBROWSER_SERVER_OIDC_ISSUER_URL)".to_string(),
			));
		}
		check_issuer_url(&self.issuer_url)
	}
}

fn check_issuer_url(raw: &str) -> Result<(), ConfigError> {
	let invalid = |message: String| ConfigError::InvalidValue {
		key: "oidc.issuer_url".to_string(),
		message,
	};
	let url = Url::parse(raw).map_err(|e| invalid(format!("'{raw}' is not a URL: {e}")))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(invalid(format!("'{raw}' is not an http(s) URL")));
	}
	if url.host_str().map_or(true, str::is_empty) {
		return Err(invalid(format!("'{raw}' has no host")));
	}
	Ok(())
}

impl fmt::Debug for OidcConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OidcConfig")
			.field("client_id", &self.client_id)
			.field("client_secret", &"[REDACTED]")
			.field("issuer_url", &self.issuer_url)
			.finish()
	}
}

#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OidcConfigLayer {
	pub client_id: Option<String>,
	#[serde(skip_serializing)]
	pub client_secret: Option<String>,
	pub issuer_url: Option<String>,
}

impl fmt::Debug for OidcConfigLayer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OidcConfigLayer")
			.field("client_id", &self.client_id)
			.field(
				"client_secret",
				&self.client_secret.as_ref().map(|_| "[REDACTED]"),
			)
			.field("issuer_url", &self.issuer_url)
			.finish()
	}
}

impl OidcConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.client_id.is_some() {
			self.client_id = other.client_id;
		}
		if other.client_secret.is_some() {
			self.client_secret = other.client_secret;
		}
		if other.issuer_url.is_some() {
			self.issuer_url = other.issuer_url;
		}
	}

	pub fn finalize(self) -> OidcConfig {
		OidcConfig {
			client_id: self.client_id.unwrap_or_default(),
			client_secret: self.client_secret.unwrap_or_default(),
			issuer_url: self.issuer_url.unwrap_or_default(),
		}
	}
}
