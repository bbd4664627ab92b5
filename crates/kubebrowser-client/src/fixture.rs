// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Fixed data for local development without a backend.

use std::time::Duration;

use async_trait::async_trait;
use kubebrowser_kubeconfig::{ClusterConfigRecord, KubeconfigDocument, UserIdentity};
use serde_json::Value;
use tracing::debug;

use crate::source::ClusterDataSource;

/// Identity returned by [`FixtureSource`].
pub const FIXTURE_IDENTITY: &str = "Firstname Lastname";

/// Serves [`FIXTURE_IDENTITY`] and [`fixture_records`] without touching the
/// network.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
	latency: Option<Duration>,
}

impl FixtureSource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Delays every answer, to look at loading states by hand.
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = Some(latency);
		self
	}

	async fn simulate_latency(&self) {
		if let Some(latency) = self.latency {
			tokio::time::sleep(latency).await;
		}
	}
}

#[async_trait]
impl ClusterDataSource for FixtureSource {
	fn name(&self) -> &'static str {
		"fixture"
	}

	async fn current_user_identity(&self) -> UserIdentity {
		self.simulate_latency().await;
		debug!("serving fixture identity");
		UserIdentity::new(FIXTURE_IDENTITY)
	}

	async fn cluster_configs(&self) -> Vec<ClusterConfigRecord> {
		self.simulate_latency().await;
		debug!("serving fixture cluster configs");
		fixture_records()
	}
}

fn document(kind: &str) -> KubeconfigDocument {
	let mut doc = KubeconfigDocument::new();
	doc.insert("apiVersion".to_string(), Value::from("v1"));
	doc.insert("kind".to_string(), Value::from(kind));
	doc
}

/// The eight development records, in display order.
pub fn fixture_records() -> Vec<ClusterConfigRecord> {
	let mut records = vec![ClusterConfigRecord::new("Cluster number 1", document("Config"))];
	records.extend((2..=7).map(|n| {
		ClusterConfigRecord::new(format!("Cluster number {n}"), document("Config2"))
	}));
	records.push(ClusterConfigRecord::new(
		"Another cluster",
		document("Another"),
	));
	records
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn identity_is_the_placeholder() {
		let source = FixtureSource::new();
		assert_eq!(
			source.current_user_identity().await.as_str(),
			"Firstname Lastname"
		);
	}

	#[tokio::test]
	async fn serves_eight_records_in_order() {
		let records = FixtureSource::new().cluster_configs().await;
		assert_eq!(records.len(), 8);

		let first = &records[0];
		assert_eq!(first.name, "Cluster number 1");
		assert_eq!(
			Value::Object(first.kubeconfig.clone()),
			json!({ "apiVersion": "v1", "kind": "Config" })
		);

		for (i, record) in records[1..7].iter().enumerate() {
			assert_eq!(record.name, format!("Cluster number {}", i + 2));
			assert_eq!(record.kind(), Some("Config2"));
			assert_eq!(record.api_version(), Some("v1"));
		}

		let last = &records[7];
		assert_eq!(last.name, "Another cluster");
		assert_eq!(
			Value::Object(last.kubeconfig.clone()),
			json!({ "apiVersion": "v1", "kind": "Another" })
		);
	}

	#[tokio::test]
	async fn repeated_calls_are_identical() {
		let source = FixtureSource::new();
		let first = (source.current_user_identity().await, source.cluster_configs().await);
		for _ in 0..3 {
			let again = (source.current_user_identity().await, source.cluster_configs().await);
			assert_eq!(first, again);
		}
	}

	#[tokio::test(start_paused = true)]
	async fn latency_delays_but_does_not_change_results() {
		let source = FixtureSource::new().with_latency(Duration::from_secs(3));
		let started = tokio::time::Instant::now();
		let identity = source.current_user_identity().await;
		assert!(started.elapsed() >= Duration::from_secs(3));
		assert_eq!(identity.as_str(), FIXTURE_IDENTITY);
		assert_eq!(source.cluster_configs().await, fixture_records());
	}
}
