// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared data contract for kubebrowser.
//!
//! This crate provides:
//! - [`UserIdentity`] and [`ClusterConfigRecord`], the two values exchanged
//!   between the backend and every consumer
//! - The `Kubeconfig` custom resource spec as stored in the cluster
//! - Whitelist filtering and OIDC credential injection applied by the backend
//!   before records leave the server

pub mod access;
pub mod error;
pub mod record;
pub mod resource;

pub use access::{
	filter_visible, is_visible, prepare_for_user, Claims, OidcCredentials, OIDC_USER_NAME,
};
pub use error::{KubeconfigError, KubeconfigResult};
pub use record::{ClusterConfigRecord, KubeconfigDocument, UserIdentity};
pub use resource::{
	AuthProviderConfig, AuthProviderSpec, Cluster, ClusterDetails, ContextSpec, KubeconfigData,
	KubeconfigSpec, NamedContext, NamedUser, UserSpec, Whitelist,
};
