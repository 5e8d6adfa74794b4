// ABOUTME: Server binary for the pantry ingredient manager
// ABOUTME: Loads configuration, initializes logging and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Server Contributors

//! # Pantry Server Binary
//!
//! Starts the REST API, AI suggestion endpoint and static front-end.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pantry_server::{
    config::{self, ServerConfig},
    logging, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pantry-server")]
#[command(about = "Pantry Server - ingredient manager with AI recipe suggestions")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override the static front-end directory
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // .env feeds the log filter; config warnings need a subscriber
    let dotenv = config::load_dotenv();
    logging::init_from_env()?;
    config::log_dotenv_outcome(&dotenv);

    let mut config = ServerConfig::from_current_env()?;

    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(static_dir) = args.static_dir {
        config.static_dir = static_dir;
    }

    info!("Starting Pantry Server");
    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
