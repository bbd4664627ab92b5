// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Names of the identity headers set by the authenticating reverse proxy.

use serde::{Deserialize, Serialize};

const DEFAULT_EMAIL_HEADER: &str = "X-Auth-Request-Email";
const DEFAULT_GROUPS_HEADER: &str = "X-Auth-Request-Groups";
const DEFAULT_NAME_HEADER: &str = "X-Auth-Request-Preferred-Username";
const DEFAULT_ID_TOKEN_HEADER: &str = "X-Auth-Request-Access-Token";
const DEFAULT_REFRESH_TOKEN_HEADER: &str = "X-Auth-Request-Refresh-Token";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProxyConfig {
	pub email_header: String,
	/// Comma-separated group list.
	pub groups_header: String,
	pub name_header: String,
	pub id_token_header: String,
	pub refresh_token_header: String,
}

impl Default for ProxyConfig {
	fn default() -> Self {
		ProxyConfigLayer::default().finalize()
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProxyConfigLayer {
	pub email_header: Option<String>,
	pub groups_header: Option<String>,
	pub name_header: Option<String>,
	pub id_token_header: Option<String>,
	pub refresh_token_header: Option<String>,
}

impl ProxyConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.email_header.is_some() {
			self.email_header = other.email_header;
		}
		if other.groups_header.is_some() {
			self.groups_header = other.groups_header;
		}
		if other.name_header.is_some() {
			self.name_header = other.name_header;
		}
		if other.id_token_header.is_some() {
			self.id_token_header = other.id_token_header;
		}
		if other.refresh_token_header.is_some() {
			self.refresh_token_header = other.refresh_token_header;
		}
	}

	pub fn finalize(self) -> ProxyConfig {
		let or = |v: Option<String>, d: &str| v.unwrap_or_else(|| d.to_string());
		ProxyConfig {
			email_header: or(self.email_header, DEFAULT_EMAIL_HEADER),
			groups_header: or(self.groups_header, DEFAULT_GROUPS_HEADER),
			name_header: or(self.name_header, DEFAULT_NAME_HEADER),
			id_token_header: or(self.id_token_header, DEFAULT_ID_TOKEN_HEADER),
			refresh_token_header: or(self.refresh_token_header, DEFAULT_REFRESH_TOKEN_HEADER),
		}
	}
}
