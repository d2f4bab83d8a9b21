//! HTTP ingestion bridge
//!
//! Browser userscripts cannot open raw TCP sockets, so they POST sound events
//! here. Each body is normalized to the same shape the game adapter emits and
//! re-broadcast through the [`EventAdapter`].

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use audio_socket_broadcaster::events::SOUND_EFFECT;
use audio_socket_broadcaster::{current_timestamp_millis, SoundEvent};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::adapter::{EventAdapter, NO_ANIMATION};

/// Audible range assumed when a userscript does not send one
pub const DEFAULT_RANGE: i32 = 15;

/// Loosely typed body posted by userscripts
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgePayload {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub sound_id: Option<i32>,
    pub delay: Option<i32>,
    pub timestamp: Option<i64>,
    pub scene_x: Option<i32>,
    pub scene_y: Option<i32>,
    pub range: Option<i32>,
    pub source_name: Option<String>,
    pub source_animation: Option<i32>,
}

impl BridgePayload {
    /// Fill in defaults and build the wire event.
    ///
    /// `sequence` stands in for a missing sound id; `now` for a missing
    /// timestamp. Anything not explicitly `SOUND_EFFECT` is an area sound.
    pub fn normalize(self, sequence: i32, now: i64) -> SoundEvent {
        let sound_id = self.sound_id.unwrap_or(sequence);
        let delay = self.delay.unwrap_or(0);
        let timestamp = self.timestamp.unwrap_or(now);
        let source_name = self.source_name.filter(|name| !name.is_empty());
        let source_animation = self.source_animation.filter(|&a| a != NO_ANIMATION);

        if self.event_type.as_deref() == Some(SOUND_EFFECT) {
            SoundEvent::SoundEffect {
                sound_id,
                delay,
                timestamp,
                source_name,
                source_animation,
            }
        } else {
            SoundEvent::AreaSoundEffect {
                sound_id,
                scene_x: self.scene_x.unwrap_or(0),
                scene_y: self.scene_y.unwrap_or(0),
                range: self.range.unwrap_or(DEFAULT_RANGE),
                delay,
                timestamp,
                source_name,
                source_animation,
            }
        }
    }
}

#[derive(Clone)]
pub struct BridgeState {
    adapter: EventAdapter,
    event_count: Arc<AtomicI32>,
}

impl BridgeState {
    pub fn new(adapter: EventAdapter) -> Self {
        Self {
            adapter,
            event_count: Arc::new(AtomicI32::new(0)),
        }
    }

    /// Number of well-formed events received so far
    pub fn event_count(&self) -> i32 {
        self.event_count.load(Ordering::Relaxed)
    }
}

/// Build the bridge router
pub fn router(state: BridgeState) -> Router {
    Router::new()
        .route("/sound", post(receive_sound))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the bridge's HTTP listener
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP bridge on {}", addr))
}

/// Serve the bridge until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: BridgeState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("HTTP bridge listening on http://{}/sound", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP bridge failed")
}

/// Always acknowledges; userscripts fire and forget
async fn receive_sound(State(state): State<BridgeState>, body: Bytes) -> Json<Value> {
    match serde_json::from_slice::<BridgePayload>(&body) {
        Ok(payload) => {
            let sequence = state.event_count.fetch_add(1, Ordering::Relaxed) + 1;
            let event = payload.normalize(sequence, current_timestamp_millis());
            debug!(
                sequence,
                event_type = event.type_name(),
                sound_id = event.sound_id(),
                "Bridge event received"
            );
            state.adapter.publish(event).await;
        }
        Err(e) => debug!("Ignoring malformed bridge payload: {}", e),
    }

    Json(json!({ "ok": true }))
}
