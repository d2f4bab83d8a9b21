//! Translates game sound events into broadcast lines

use std::sync::Arc;

use audio_socket_broadcaster::{current_timestamp_millis, BroadcastServer, EventCategory, SoundEvent};
use tracing::{debug, error};

/// Animation id reported for actors that are not animating
pub const NO_ANIMATION: i32 = -1;

/// The actor that caused a sound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub name: Option<String>,
    pub animation: i32,
}

impl Actor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            animation: NO_ANIMATION,
        }
    }

    pub fn with_animation(mut self, animation: i32) -> Self {
        self.animation = animation;
        self
    }
}

/// A sound effect played for the local player
#[derive(Debug, Clone)]
pub struct SoundEffectPlayed {
    pub sound_id: i32,
    pub delay: i32,
    pub source: Option<Actor>,
}

/// A sound effect played at a location in the scene
#[derive(Debug, Clone)]
pub struct AreaSoundEffectPlayed {
    pub sound_id: i32,
    pub scene_x: i32,
    pub scene_y: i32,
    pub range: i32,
    pub delay: i32,
    pub source: Option<Actor>,
}

/// Per-category toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdapterFilter {
    pub include_sound_effects: bool,
    pub include_area_sounds: bool,
}

impl Default for AdapterFilter {
    fn default() -> Self {
        Self {
            include_sound_effects: true,
            include_area_sounds: true,
        }
    }
}

impl AdapterFilter {
    pub fn allows(&self, category: EventCategory) -> bool {
        match category {
            EventCategory::SoundEffect => self.include_sound_effects,
            EventCategory::AreaSound => self.include_area_sounds,
        }
    }
}

/// Feeds filtered, serialized events to a broadcast server
#[derive(Clone)]
pub struct EventAdapter {
    server: Arc<BroadcastServer>,
    filter: AdapterFilter,
}

impl EventAdapter {
    pub fn new(server: Arc<BroadcastServer>, filter: AdapterFilter) -> Self {
        Self { server, filter }
    }

    pub fn filter(&self) -> AdapterFilter {
        self.filter
    }

    pub async fn on_sound_effect_played(&self, event: &SoundEffectPlayed) {
        if !self.wants(EventCategory::SoundEffect).await {
            return;
        }

        let (source_name, source_animation) = source_fields(event.source.as_ref());
        self.send(&SoundEvent::SoundEffect {
            sound_id: event.sound_id,
            delay: event.delay,
            timestamp: current_timestamp_millis(),
            source_name,
            source_animation,
        })
        .await;
    }

    pub async fn on_area_sound_effect_played(&self, event: &AreaSoundEffectPlayed) {
        if !self.wants(EventCategory::AreaSound).await {
            return;
        }

        let (source_name, source_animation) = source_fields(event.source.as_ref());
        self.send(&SoundEvent::AreaSoundEffect {
            sound_id: event.sound_id,
            scene_x: event.scene_x,
            scene_y: event.scene_y,
            range: event.range,
            delay: event.delay,
            timestamp: current_timestamp_millis(),
            source_name,
            source_animation,
        })
        .await;
    }

    /// Broadcast a pre-built event, subject to the category toggles.
    ///
    /// Returns whether the event was handed to the server.
    pub async fn publish(&self, event: SoundEvent) -> bool {
        if !self.wants(event.category()).await {
            return false;
        }
        self.send(&event).await;
        true
    }

    /// Enabled and somebody is listening. Checked before building JSON since
    /// events fire many times per game tick.
    async fn wants(&self, category: EventCategory) -> bool {
        self.filter.allows(category) && self.server.has_clients().await
    }

    async fn send(&self, event: &SoundEvent) {
        match event.to_json() {
            Ok(json) => {
                debug!(event_type = event.type_name(), sound_id = event.sound_id(), "Broadcasting sound event");
                self.server.broadcast(&json).await;
            }
            Err(e) => error!("Failed to serialize {} event: {}", event.type_name(), e),
        }
    }
}

fn source_fields(source: Option<&Actor>) -> (Option<String>, Option<i32>) {
    match source {
        Some(actor) => (
            actor.name.clone(),
            Some(actor.animation).filter(|&a| a != NO_ANIMATION),
        ),
        None => (None, None),
    }
}
