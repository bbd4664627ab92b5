// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for kubebrowser.
//!
//! Every outbound request made by the CLI carries the same User-Agent so the
//! proxy and server logs can attribute traffic to a kubebrowser build.

mod client;

pub use client::{new_client, user_agent};
