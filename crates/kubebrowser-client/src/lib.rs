// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Data access for kubebrowser consumers.
//!
//! Two leaf operations are exposed through [`ClusterDataSource`]:
//! - [`ClusterDataSource::current_user_identity`] resolves the display name of
//!   the authenticated user (`GET /api/me`)
//! - [`ClusterDataSource::cluster_configs`] resolves the cluster configuration
//!   records visible to that user (`GET /api/kubeconfigs`)
//!
//! Both degrade to an empty value on any failure. The failure itself is
//! reported through `tracing`, never returned.
//!
//! # Usage
//!
//! ```ignore
//! use kubebrowser_client::{select_source, DataSourceMode, SourceOptions};
//!
//! let source = select_source(DataSourceMode::Http, &SourceOptions::new("https://kubebrowser.example.com"))?;
//! let (identity, configs) = tokio::join!(source.current_user_identity(), source.cluster_configs());
//! ```

pub mod error;
pub mod fixture;
pub mod http;
pub mod mode;
pub mod source;

pub use error::FetchError;
pub use fixture::{fixture_records, FixtureSource, FIXTURE_IDENTITY};
pub use http::{HttpSource, KUBECONFIGS_PATH, ME_PATH};
pub use kubebrowser_kubeconfig::{ClusterConfigRecord, KubeconfigDocument, UserIdentity};
pub use mode::{select_source, DataSourceMode, SourceOptions};
pub use source::ClusterDataSource;
