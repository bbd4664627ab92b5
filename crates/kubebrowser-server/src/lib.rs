// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! kubebrowser backend.
//!
//! Serves the caller's identity and the kubeconfigs they may use. Callers are
//! authenticated upstream by an OIDC reverse proxy which forwards the identity
//! as request headers.

pub mod api;
pub mod error;
pub mod identity;
pub mod routes;
pub mod shutdown;

pub use api::{build_lister, create_app_state, create_router, AppState};
pub use error::{ErrorResponse, ServerError};
pub use identity::CallerIdentity;
pub use kubebrowser_server_config::ServerConfig;
