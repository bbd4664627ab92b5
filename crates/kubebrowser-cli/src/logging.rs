// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Log setup. Events go to stderr so stdout stays pipeable.

use clap::ValueEnum;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

/// `RUST_LOG` wins over `level` when set.
pub fn init_tracing(level: &str, format: LogFormat) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
	let registry = tracing_subscriber::registry().with(filter);
	let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

	match format {
		LogFormat::Pretty => registry.with(layer).init(),
		LogFormat::Json => registry.with(layer.json()).init(),
		LogFormat::Compact => registry.with(layer.compact()).init(),
	}
}
