// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections.

mod http;
mod kubernetes;
mod logging;
mod oidc;
mod proxy;

pub use http::{HttpConfig, HttpConfigLayer};
pub use kubernetes::{KubernetesConfig, KubernetesConfigLayer};
pub use logging::{LogFormat, LoggingConfig, LoggingConfigLayer};
pub use oidc::{OidcConfig, OidcConfigLayer};
pub use proxy::{ProxyConfig, ProxyConfigLayer};
