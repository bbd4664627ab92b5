// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `kubebrowser` - list and export the kubeconfigs available to you.

mod commands;
mod logging;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kubebrowser_client::{select_source, DataSourceMode, SourceOptions};

use crate::logging::{init_tracing, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "kubebrowser", about = "Browse the kubeconfigs you have access to", version)]
struct Args {
	/// Base URL of the kubebrowser server
	#[arg(
		long,
		global = true,
		env = "KUBEBROWSER_SERVER_URL",
		default_value = "http://localhost:8080"
	)]
	server_url: String,

	/// Serve built-in sample data instead of contacting the server
	#[arg(long, global = true, env = "KUBEBROWSER_DEV")]
	dev: bool,

	/// Simulated latency of the sample data, in milliseconds
	#[arg(long, global = true, env = "KUBEBROWSER_DEV_LATENCY_MS", hide = true)]
	dev_latency_ms: Option<u64>,

	/// Session cookie of the authenticating proxy, e.g. `_oauth2_proxy=...`
	#[arg(long, global = true, env = "KUBEBROWSER_SESSION_COOKIE", hide_env_values = true)]
	session_cookie: Option<String>,

	/// Log filter, overridden by RUST_LOG
	#[arg(long, global = true, default_value = "warn")]
	log_level: String,

	#[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
	log_format: LogFormat,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the name you are signed in as
	Whoami,
	/// List the clusters you can access
	List,
	/// Print a cluster record as JSON
	Show {
		/// Cluster name, as shown by `list`
		name: String,
	},
	/// Write a cluster's kubeconfig as JSON
	Export {
		/// Cluster name, as shown by `list`
		name: String,
		/// Destination file; stdout when omitted
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing(&args.log_level, args.log_format);

	let options = SourceOptions {
		base_url: args.server_url.clone(),
		session_cookie: args.session_cookie.clone(),
		fixture_latency: args.dev_latency_ms.map(Duration::from_millis),
	};
	let source = select_source(DataSourceMode::from_dev_flag(args.dev), &options)?;

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	match &args.command {
		Command::Whoami => commands::whoami(source.as_ref(), &mut out).await,
		Command::List => commands::list(source.as_ref(), &mut out).await,
		Command::Show { name } => commands::show(source.as_ref(), name, &mut out).await,
		Command::Export { name, output } => {
			commands::export(source.as_ref(), name, output.as_deref(), &mut out).await
		}
	}
}
