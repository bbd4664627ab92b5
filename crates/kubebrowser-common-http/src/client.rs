// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use reqwest::{Client, ClientBuilder};

const PRODUCT: &str = "kubebrowser";
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a new HTTP client with the standard kubebrowser User-Agent header.
///
/// No request timeout is set: callers wait for the transport's own defaults.
pub fn new_client() -> Result<Client, reqwest::Error> {
	builder().build()
}

fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Returns the standard User-Agent string.
///
/// Format: `kubebrowser/{version}/{os}-{arch}`
pub fn user_agent() -> String {
	format!(
		"{PRODUCT}/{VERSION}/{}-{}",
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
