//! One-line renderings of sound events

use audio_socket_broadcaster::SoundEvent;

use crate::sounds::{animation_name, attack_type, sound_name};

/// `" anim=NAME(id)"` for known animations, `" anim=id"` otherwise, empty
/// when the source was not animating.
pub fn animation_suffix(animation: Option<i32>) -> String {
    match animation {
        Some(anim) => match animation_name(anim) {
            Some(name) => format!(" anim={}({})", name, anim),
            None => format!(" anim={}", anim),
        },
        None => String::new(),
    }
}

/// Format an event for the live feed.
///
/// Area sounds that belong to a boss attack are tagged with the attack, e.g.
/// `[SOL SPEAR]`.
pub fn format_event(event: &SoundEvent) -> String {
    let sound_id = event.sound_id();
    let name = sound_name(sound_id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("UNKNOWN({})", sound_id));

    match event {
        SoundEvent::AreaSoundEffect {
            scene_x,
            scene_y,
            range,
            source_name,
            source_animation,
            ..
        } => {
            let tag = match attack_type(sound_id) {
                Some(attack) => format!("[SOL {}]", attack),
                None => "[AREA]".to_string(),
            };
            format!(
                "{} {} (id={}) at ({},{}) range={} source={}{}",
                tag,
                name,
                sound_id,
                scene_x,
                scene_y,
                range,
                source_name.as_deref().unwrap_or("unknown"),
                animation_suffix(*source_animation)
            )
        }
        SoundEvent::SoundEffect {
            delay,
            source_name,
            source_animation,
            ..
        } => {
            let source = source_name
                .as_deref()
                .map(|s| format!(" source={}", s))
                .unwrap_or_default();
            let anim = source_animation
                .map(|a| format!(" anim={}", a))
                .unwrap_or_default();
            format!("[SFX]  {} (id={}) delay={}{}{}", name, sound_id, delay, source, anim)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(sound_id: i32, source_name: Option<&str>, source_animation: Option<i32>) -> SoundEvent {
        SoundEvent::AreaSoundEffect {
            sound_id,
            scene_x: 3,
            scene_y: 4,
            range: 15,
            delay: 0,
            timestamp: 0,
            source_name: source_name.map(str::to_string),
            source_animation,
        }
    }

    #[test]
    fn test_sound_effect_line() {
        let event = SoundEvent::SoundEffect {
            sound_id: 60,
            delay: 2,
            timestamp: 0,
            source_name: Some("Guard".to_string()),
            source_animation: Some(808),
        };

        assert_eq!(
            format_event(&event),
            "[SFX]  CLOSE_DOOR (id=60) delay=2 source=Guard anim=808"
        );
    }

    #[test]
    fn test_unknown_sound_effect() {
        let event = SoundEvent::SoundEffect {
            sound_id: -7,
            delay: 0,
            timestamp: 0,
            source_name: None,
            source_animation: None,
        };

        assert_eq!(format_event(&event), "[SFX]  UNKNOWN(-7) (id=-7) delay=0");
    }

    #[test]
    fn test_area_sound_without_source() {
        assert_eq!(
            format_event(&area(62, None, None)),
            "[AREA] OPEN_DOOR (id=62) at (3,4) range=15 source=unknown"
        );
    }

    #[test]
    fn test_boss_attack_is_tagged() {
        let id = (8000..9000)
            .find(|&id| attack_type(id).is_some())
            .expect("boss attack sound");
        let line = format_event(&area(id, Some("Sol Heredit"), Some(10883)));

        assert!(line.starts_with("[SOL "), "{}", line);
        assert!(line.ends_with("source=Sol Heredit anim=SOL_HEREDIT_SPEAR_ATTACK_TELEGRAPH(10883)"));
    }

    #[test]
    fn test_animation_suffix() {
        assert_eq!(animation_suffix(None), "");
        assert_eq!(animation_suffix(Some(808)), " anim=808");
        assert_eq!(animation_suffix(Some(10888)), " anim=SOL_HEREDIT_DEATH(10888)");
    }
}
