// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use kubebrowser_client::ClusterDataSource;
use serde_json::Value;
use tracing::{debug, info};

use crate::output::{find_record, render_identity, render_list};

pub async fn whoami(source: &dyn ClusterDataSource, out: &mut dyn Write) -> Result<()> {
	let identity = source.current_user_identity().await;
	writeln!(out, "{}", render_identity(&identity))?;
	Ok(())
}

pub async fn list(source: &dyn ClusterDataSource, out: &mut dyn Write) -> Result<()> {
	let (identity, records) = tokio::join!(source.current_user_identity(), source.cluster_configs());
	debug!(count = records.len(), "fetched cluster configs");
	write!(out, "{}", render_list(&identity, &records))?;
	Ok(())
}

pub async fn show(source: &dyn ClusterDataSource, name: &str, out: &mut dyn Write) -> Result<()> {
	let records = source.cluster_configs().await;
	let record = find_record(&records, name)
		.with_context(|| format!("no cluster named '{name}'"))?;
	writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
	Ok(())
}

/// Writes the kubeconfig document of `name` as JSON, to `output` or `out`.
pub async fn export(
	source: &dyn ClusterDataSource,
	name: &str,
	output: Option<&Path>,
	out: &mut dyn Write,
) -> Result<()> {
	let records = source.cluster_configs().await;
	let record = find_record(&records, name)
		.with_context(|| format!("no cluster named '{name}'"))?;
	let json = serde_json::to_string_pretty(&Value::Object(record.kubeconfig.clone()))?;

	match output {
		Some(path) => {
			std::fs::write(path, format!("{json}\n"))
				.with_context(|| format!("failed to write {}", path.display()))?;
			info!(path = %path.display(), cluster = name, "kubeconfig exported");
		}
		None => writeln!(out, "{json}")?,
	}
	Ok(())
}
