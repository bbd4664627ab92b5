// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use kubebrowser_kubeconfig::{ClusterConfigRecord, UserIdentity};

/// Where a consumer gets its identity and cluster list from.
///
/// Implementations are chosen once at start-up and handed to the consumer;
/// nothing downstream checks which one it holds. Both operations are
/// infallible by contract: a failure yields the empty value.
#[async_trait]
pub trait ClusterDataSource: Send + Sync {
	/// Short label used in logs.
	fn name(&self) -> &'static str;

	/// Display name of the current user, or the empty identity when unknown.
	async fn current_user_identity(&self) -> UserIdentity;

	/// Cluster configuration records visible to the current user, in the
	/// order the backend returned them. Empty when none or on failure.
	async fn cluster_configs(&self) -> Vec<ClusterConfigRecord>;
}
