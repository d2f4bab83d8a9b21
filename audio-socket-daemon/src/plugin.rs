//! Start-up / shut-down hooks for embedding the broadcaster

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use audio_socket_broadcaster::BroadcastServer;
use tokio::sync::Mutex;
use tracing::info;

use crate::adapter::EventAdapter;
use crate::config::DaemonConfig;

/// Owns the broadcast server across enable/disable cycles.
///
/// A server instance cannot listen again once stopped, so every `start_up`
/// builds a fresh one.
pub struct AudioSocketPlugin {
    config: DaemonConfig,
    server: Mutex<Option<Arc<BroadcastServer>>>,
}

impl AudioSocketPlugin {
    pub fn new(config: DaemonConfig) -> Self {
        Self {
            config,
            server: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &DaemonConfig {
        &self.config
    }

    /// Start listening on the configured port
    pub async fn start_up(&self) -> Result<SocketAddr> {
        let mut slot = self.server.lock().await;
        if let Some(previous) = slot.take() {
            previous.stop().await;
        }

        let server = Arc::new(BroadcastServer::new(self.config.server_config()));
        let addr = server
            .start(self.config.port)
            .await
            .with_context(|| format!("Failed to start audio socket on port {}", self.config.port))?;

        info!("Audio socket server listening on {}", addr);
        *slot = Some(server);
        Ok(addr)
    }

    /// Stop the server and disconnect every client
    pub async fn shut_down(&self) {
        if let Some(server) = self.server.lock().await.take() {
            server.stop().await;
            info!("Audio socket server shut down");
        }
    }

    /// Adapter bound to the running server
    pub async fn adapter(&self) -> Option<EventAdapter> {
        self.server
            .lock()
            .await
            .as_ref()
            .map(|server| EventAdapter::new(Arc::clone(server), self.config.filter()))
    }

    pub async fn client_count(&self) -> usize {
        match self.server.lock().await.as_ref() {
            Some(server) => server.client_count().await,
            None => 0,
        }
    }

    pub async fn is_running(&self) -> bool {
        self.server.lock().await.is_some()
    }
}
