//! TCP broadcaster for game sound events
//!
//! This crate provides a TCP server that pushes newline-delimited JSON records
//! to every connected client. Producers hand it finished lines; consumers are
//! plain TCP clients that read one JSON object per line.
//!
//! # Features
//!
//! - TCP listener on a configurable port (default 5150)
//! - Newline-delimited JSON protocol, no handshake
//! - Multiple concurrent client connections
//! - Per-client disconnect monitor, dead clients are pruned promptly
//! - Concurrent, time-bounded writes: one slow client cannot stall the rest
//! - Explicit `Idle -> Listening -> Stopped` lifecycle
//!
//! # Event Types
//!
//! - `SOUND_EFFECT` - sound played for the local player
//! - `AREA_SOUND_EFFECT` - sound played at a scene location
//!
//! # Example Usage
//!
//! ```no_run
//! use audio_socket_broadcaster::{BroadcastServer, ServerConfig, SoundEvent};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = BroadcastServer::new(ServerConfig::default());
//!     server.start(5150).await?;
//!
//!     let event = SoundEvent::SoundEffect {
//!         sound_id: 2266,
//!         delay: 0,
//!         timestamp: audio_socket_broadcaster::current_timestamp_millis(),
//!         source_name: None,
//!         source_animation: None,
//!     };
//!     server.broadcast(&event.to_json()?).await;
//!
//!     server.stop().await;
//!     Ok(())
//! }
//! ```

pub mod broadcaster;
pub mod client;
pub mod config;
pub mod error;
pub mod events;

// Re-exports
pub use broadcaster::{BroadcastServer, ServerState};
pub use client::{ClientConnection, ClientId, ClientSet};
pub use config::{ServerConfig, DEFAULT_PORT, DEFAULT_WRITE_TIMEOUT};
pub use error::{BroadcasterError, Result};
pub use events::{current_timestamp_millis, EventCategory, SoundEvent};
