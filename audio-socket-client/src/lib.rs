//! Reference client for the audio socket broadcaster
//!
//! Reads the newline-delimited JSON feed and either prints each sound event
//! or, in discovery mode, catalogues every sound id seen for a summary.

pub mod connection;
pub mod discovery;
pub mod display;
pub mod sounds;

pub use connection::{connect, EventReader, Incoming};
pub use discovery::{DiscoveredSound, Discovery, DEFAULT_FOCUS};
pub use display::format_event;
pub use sounds::{animation_name, attack_type, sound_name, AttackType};
