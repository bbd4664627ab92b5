// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-caller kubeconfig listing.

use axum::{extract::State, Json};
use kubebrowser_kubeconfig::{filter_visible, prepare_for_user, ClusterConfigRecord};
use tracing::{debug, instrument, warn};

use crate::{api::AppState, error::ServerError, identity::CallerIdentity};

/// GET /api/kubeconfigs - the kubeconfigs the caller may use, rewritten to
/// authenticate as the caller.
///
/// Resources the caller's whitelist does not admit are left out. A resource
/// that cannot be rewritten is skipped rather than failing the response.
#[instrument(skip_all, fields(user = %caller.email, namespace = %state.namespace))]
pub async fn list_kubeconfigs(
	State(state): State<AppState>,
	caller: CallerIdentity,
) -> Result<Json<Vec<ClusterConfigRecord>>, ServerError> {
	let resources = state.lister.list_kubeconfigs(&state.namespace).await?;
	let total = resources.len();

	let visible = filter_visible(resources.into_iter().map(|r| r.spec), &caller.claims());
	let credentials = caller.credentials(&state.oidc);

	let mut records = Vec::with_capacity(visible.len());
	for spec in visible {
		let name = spec.name.clone();
		match prepare_for_user(spec, &credentials) {
			Ok(record) => records.push(record),
			Err(e) => warn!(kubeconfig = %name, error = %e, "skipping kubeconfig"),
		}
	}

	debug!(total, returned = records.len(), "kubeconfigs served");
	Ok(Json(records))
}
