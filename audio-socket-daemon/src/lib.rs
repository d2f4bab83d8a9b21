//! Audio socket daemon library
//!
//! Connects game sound events to the broadcaster: configuration, category
//! filtering, lifecycle hooks and the HTTP ingestion bridge.

pub mod adapter;
pub mod bridge;
pub mod config;
pub mod plugin;

pub use adapter::{Actor, AdapterFilter, AreaSoundEffectPlayed, EventAdapter, SoundEffectPlayed};
pub use config::{BridgeConfig, DaemonConfig};
pub use plugin::AudioSocketPlugin;
