//! Audio Socket Daemon
//!
//! Streams sound events to TCP clients on port 5150 (one JSON object per
//! line). Sound events arrive over the HTTP bridge (`POST /sound`, port 5151)
//! from browser userscripts.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use audio_socket_daemon::bridge::{self, BridgeState};
use audio_socket_daemon::{AudioSocketPlugin, DaemonConfig};

#[derive(Debug, Parser)]
#[command(name = "audio-socket-daemon", version, about = "Broadcast sound events over TCP")]
struct Args {
    /// Config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// TCP port for sound event clients
    #[arg(long)]
    port: Option<u16>,

    /// HTTP port for the userscript bridge
    #[arg(long)]
    bridge_port: Option<u16>,

    /// Do not start the HTTP bridge
    #[arg(long)]
    no_bridge: bool,
}

impl Args {
    fn apply(&self, config: &mut DaemonConfig) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(port) = self.bridge_port {
            config.bridge.port = port;
        }
        if self.no_bridge {
            config.bridge.enabled = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting audio socket daemon v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DaemonConfig::load_from(path),
        None => DaemonConfig::load(),
    }
    .context("Failed to load configuration")?;
    args.apply(&mut config);

    info!("Configuration loaded from {}", config.config_path.display());
    info!(
        "  - Sound effects: {}, area sounds: {}",
        config.include_sound_effects, config.include_area_sounds
    );

    // Bind the bridge first so a port clash fails before clients connect
    let bridge_listener = if config.bridge.enabled {
        let addr = SocketAddr::new(config.bridge.host, config.bridge.port);
        Some(bridge::bind(addr).await?)
    } else {
        None
    };

    let plugin = AudioSocketPlugin::new(config);
    plugin.start_up().await?;

    let mut bridge_task: Option<BridgeTask> = None;
    let mut bridge_stop = None;
    if let Some(listener) = bridge_listener {
        let adapter = plugin
            .adapter()
            .await
            .context("Broadcaster not running after start-up")?;
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let shutdown = async move {
            let _ = stop_rx.await;
        };
        bridge_task = Some(tokio::spawn(bridge::serve(
            listener,
            BridgeState::new(adapter),
            shutdown,
        )));
        bridge_stop = Some(stop_tx);
    } else {
        warn!("HTTP bridge disabled; no event source is attached");
    }

    info!("Audio socket daemon ready");

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for shutdown signal")?;
            info!("Received shutdown signal");
        }
        result = wait_for_bridge(&mut bridge_task) => {
            report_bridge_exit(result);
            bridge_task = None;
        }
    }

    if let Some(stop) = bridge_stop {
        let _ = stop.send(());
    }
    if let Some(task) = bridge_task {
        report_bridge_exit(task.await);
    }

    plugin.shut_down().await;
    info!("Audio socket daemon stopped");

    Ok(())
}

type BridgeTask = JoinHandle<Result<()>>;

/// Resolves when the bridge exits on its own; never, if there is no bridge
async fn wait_for_bridge(task: &mut Option<BridgeTask>) -> std::result::Result<Result<()>, JoinError> {
    match task {
        Some(task) => task.await,
        None => std::future::pending().await,
    }
}

fn report_bridge_exit(result: std::result::Result<Result<()>, JoinError>) {
    match result {
        Ok(Ok(())) => info!("HTTP bridge stopped"),
        Ok(Err(e)) => error!("{:#}", e),
        Err(e) => error!("HTTP bridge task failed: {}", e),
    }
}
