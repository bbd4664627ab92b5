// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Start-up selection of the data source.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::error::FetchError;
use crate::fixture::FixtureSource;
use crate::http::HttpSource;
use crate::source::ClusterDataSource;

/// Which [`ClusterDataSource`] the process runs with. Resolved once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceMode {
	/// Development: fixed data, no network.
	Fixture,
	/// Production: the REST backend.
	#[default]
	Http,
}

impl DataSourceMode {
	pub fn from_dev_flag(dev: bool) -> Self {
		if dev {
			Self::Fixture
		} else {
			Self::Http
		}
	}
}

/// Settings used to build the selected source.
#[derive(Debug, Clone)]
pub struct SourceOptions {
	pub base_url: String,
	pub session_cookie: Option<String>,
	pub fixture_latency: Option<Duration>,
}

impl SourceOptions {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			session_cookie: None,
			fixture_latency: None,
		}
	}
}

/// Builds the data source for `mode`.
///
/// Only the HTTP source can fail, and only on an unusable base URL or client.
pub fn select_source(
	mode: DataSourceMode,
	options: &SourceOptions,
) -> Result<Arc<dyn ClusterDataSource>, FetchError> {
	let source: Arc<dyn ClusterDataSource> = match mode {
		DataSourceMode::Fixture => {
			let mut fixture = FixtureSource::new();
			if let Some(latency) = options.fixture_latency {
				fixture = fixture.with_latency(latency);
			}
			Arc::new(fixture)
		}
		DataSourceMode::Http => {
			let mut http = HttpSource::new(&options.base_url)?;
			if let Some(cookie) = &options.session_cookie {
				http = http.with_session_cookie(cookie.clone());
			}
			Arc::new(http)
		}
	};

	info!(source = source.name(), "data source selected");
	Ok(source)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fixture::FIXTURE_IDENTITY;

	#[test]
	fn dev_flag_selects_fixture() {
		assert_eq!(DataSourceMode::from_dev_flag(true), DataSourceMode::Fixture);
		assert_eq!(DataSourceMode::from_dev_flag(false), DataSourceMode::Http);
		assert_eq!(DataSourceMode::default(), DataSourceMode::Http);
	}

	#[tokio::test]
	async fn fixture_mode_ignores_base_url() {
		let source = select_source(
			DataSourceMode::Fixture,
			&SourceOptions::new("definitely not a url"),
		)
		.unwrap();
		assert_eq!(source.name(), "fixture");
		assert_eq!(source.current_user_identity().await.as_str(), FIXTURE_IDENTITY);
	}

	#[test]
	fn http_mode_validates_base_url() {
		let result = select_source(DataSourceMode::Http, &SourceOptions::new("::::"));
		assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
	}

	#[test]
	fn http_mode_builds_http_source() {
		let source = select_source(
			DataSourceMode::Http,
			&SourceOptions::new("http://localhost:8080"),
		)
		.unwrap();
		assert_eq!(source.name(), "http");
	}
}
