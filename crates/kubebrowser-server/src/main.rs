// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! kubebrowser backend binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kubebrowser_server::{build_lister, create_app_state, create_router, shutdown::shutdown_signal};
use kubebrowser_server_config::{LogFormat, LoggingConfig};
use tower_http::{
	cors::{Any, CorsLayer},
	trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// kubebrowser server - hands out per-user kubeconfigs behind an OIDC proxy.
#[derive(Parser, Debug)]
#[command(name = "kubebrowser-server", about = "kubebrowser backend", version)]
struct Args {
	/// Config file to use instead of /etc/kubebrowser/server.toml
	#[arg(long, env = "KUBEBROWSER_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| logging.level.clone().into());
	let registry = tracing_subscriber::registry().with(filter);

	match logging.format {
		LogFormat::Json => registry
			.with(tracing_subscriber::fmt::layer().json().with_current_span(true))
			.init(),
		LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("kubebrowser-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => kubebrowser_server_config::load_config_with_file(path.clone())?,
		None => kubebrowser_server_config::load_config()?,
	};

	init_tracing(&config.logging);

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		namespace = %config.kubernetes.namespace,
		dev = config.logging.dev,
		"starting kubebrowser-server"
	);

	let lister = build_lister(&config).await?;
	let state = create_app_state(&config, lister);

	let app = create_router(state)
		.layer(TraceLayer::new_for_http())
		.layer(
			CorsLayer::new()
				.allow_origin(Any)
				.allow_methods(Any)
				.allow_headers(Any),
		);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;
	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	tracing::info!("Server shutdown complete");
	Ok(())
}
