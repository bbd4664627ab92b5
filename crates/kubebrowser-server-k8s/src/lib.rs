// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Kubernetes access to `Kubeconfig` custom resources.
//!
//! This crate provides:
//! - A trait-based lister abstraction for testability
//! - A direct implementation using the kube crate
//! - A watch-backed cached implementation
//! - An in-memory mock

mod cached;
mod client;
mod error;
mod kube_client;
mod mock;
mod resource;

pub use cached::{CachedKubeconfigLister, DEFAULT_SYNC_TIMEOUT};
pub use client::KubeconfigLister;
pub use error::{K8sError, K8sResult};
pub use kube_client::KubeClient;
pub use mock::MockKubeconfigLister;
pub use resource::{decode_all, decode_resource, KubeconfigCrd, KubeconfigResource, KUBECONFIG_KIND};
