// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use axum::Json;
use kubebrowser_kubeconfig::UserIdentity;

use crate::identity::CallerIdentity;

/// GET /api/me - display name of the caller, as a bare JSON string.
pub async fn get_me(caller: CallerIdentity) -> Json<UserIdentity> {
	Json(caller.display_name())
}
