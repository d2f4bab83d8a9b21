use serde::{Deserialize, Serialize};

/// Wire discriminator for plain sound effects
pub const SOUND_EFFECT: &str = "SOUND_EFFECT";

/// Wire discriminator for area-scoped sound effects
pub const AREA_SOUND_EFFECT: &str = "AREA_SOUND_EFFECT";

/// Sound events streamed to socket clients, one JSON object per line
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SoundEvent {
    /// Sound played for the local player
    #[serde(rename = "SOUND_EFFECT", rename_all = "camelCase")]
    SoundEffect {
        sound_id: i32,
        delay: i32,
        timestamp: i64, // epoch millis
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_animation: Option<i32>,
    },

    /// Sound emitted at a scene location, audible within `range` tiles
    #[serde(rename = "AREA_SOUND_EFFECT", rename_all = "camelCase")]
    AreaSoundEffect {
        sound_id: i32,
        scene_x: i32,
        scene_y: i32,
        range: i32,
        delay: i32,
        timestamp: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_animation: Option<i32>,
    },
}

/// Event categories that can be toggled independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    SoundEffect,
    AreaSound,
}

impl SoundEvent {
    /// Convert event to a JSON string (no terminator)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Convert event to JSON string with newline
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let json = self.to_json()?;
        Ok(format!("{}\n", json))
    }

    pub fn category(&self) -> EventCategory {
        match self {
            SoundEvent::SoundEffect { .. } => EventCategory::SoundEffect,
            SoundEvent::AreaSoundEffect { .. } => EventCategory::AreaSound,
        }
    }

    /// Wire name of the `type` field
    pub fn type_name(&self) -> &'static str {
        match self {
            SoundEvent::SoundEffect { .. } => SOUND_EFFECT,
            SoundEvent::AreaSoundEffect { .. } => AREA_SOUND_EFFECT,
        }
    }

    pub fn sound_id(&self) -> i32 {
        match self {
            SoundEvent::SoundEffect { sound_id, .. }
            | SoundEvent::AreaSoundEffect { sound_id, .. } => *sound_id,
        }
    }

    pub fn delay(&self) -> i32 {
        match self {
            SoundEvent::SoundEffect { delay, .. } | SoundEvent::AreaSoundEffect { delay, .. } => {
                *delay
            }
        }
    }

    pub fn timestamp(&self) -> i64 {
        match self {
            SoundEvent::SoundEffect { timestamp, .. }
            | SoundEvent::AreaSoundEffect { timestamp, .. } => *timestamp,
        }
    }

    pub fn source_name(&self) -> Option<&str> {
        match self {
            SoundEvent::SoundEffect { source_name, .. }
            | SoundEvent::AreaSoundEffect { source_name, .. } => source_name.as_deref(),
        }
    }

    pub fn source_animation(&self) -> Option<i32> {
        match self {
            SoundEvent::SoundEffect {
                source_animation, ..
            }
            | SoundEvent::AreaSoundEffect {
                source_animation, ..
            } => *source_animation,
        }
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_effect_serialization() {
        let event = SoundEvent::SoundEffect {
            sound_id: 7,
            delay: 0,
            timestamp: 1234,
            source_name: None,
            source_animation: None,
        };
        let json = event.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"type":"SOUND_EFFECT","soundId":7,"delay":0,"timestamp":1234}"#
        );
        assert!(event.to_json_line().unwrap().ends_with('\n'));
    }

    #[test]
    fn test_area_sound_serialization() {
        let event = SoundEvent::AreaSoundEffect {
            sound_id: 2498,
            scene_x: 52,
            scene_y: 48,
            range: 15,
            delay: 10,
            timestamp: 1699000000000,
            source_name: Some("Sol Heredit".to_string()),
            source_animation: Some(10883),
        };
        let json = event.to_json().unwrap();
        assert!(json.starts_with(r#"{"type":"AREA_SOUND_EFFECT","soundId":2498"#));
        assert!(json.contains(r#""sceneX":52"#));
        assert!(json.contains(r#""sceneY":48"#));
        assert!(json.contains(r#""range":15"#));
        assert!(json.contains(r#""sourceName":"Sol Heredit""#));
        assert!(json.contains(r#""sourceAnimation":10883"#));
    }

    #[test]
    fn test_parse_without_optional_fields() {
        let event: SoundEvent = serde_json::from_str(
            r#"{"type":"AREA_SOUND_EFFECT","soundId":1,"sceneX":2,"sceneY":3,"range":4,"delay":5,"timestamp":6}"#,
        )
        .unwrap();

        assert_eq!(event.category(), EventCategory::AreaSound);
        assert_eq!(event.type_name(), AREA_SOUND_EFFECT);
        assert_eq!(event.sound_id(), 1);
        assert_eq!(event.delay(), 5);
        assert_eq!(event.timestamp(), 6);
        assert_eq!(event.source_name(), None);
        assert_eq!(event.source_animation(), None);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = serde_json::from_str::<SoundEvent>(r#"{"type":"MUSIC","soundId":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_timestamp_is_millis() {
        // Anything after 2020-01-01 in millis
        assert!(current_timestamp_millis() > 1_577_836_800_000);
    }
}
