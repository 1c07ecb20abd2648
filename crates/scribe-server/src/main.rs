// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scribe article search server binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scribe_server::{create_app_state, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scribe server - full-text article search backed by Elasticsearch.
#[derive(Parser, Debug)]
#[command(
	name = "scribe-server",
	about = "Article search API backed by Elasticsearch",
	version
)]
struct Args {
	/// TOML config file (defaults to /etc/scribe/server.toml)
	#[arg(long, short, env = "SCRIBE_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version information
	Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("scribe-server {}", env!("CARGO_PKG_VERSION"));
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => scribe_server_config::load_config_with_file(path.clone())?,
		None => scribe_server_config::load_config()?,
	};

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		es_host = %config.elasticsearch.host,
		index = %config.elasticsearch.index,
		"starting scribe-server"
	);

	let state = create_app_state(&config)?;
	let app = create_router(state);

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
