//! Discovery mode: catalogue every sound id seen during a session

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use audio_socket_broadcaster::SoundEvent;

use crate::display::animation_suffix;
use crate::sounds::{animation_name, sound_name};

/// Source whose sounds are listed first in the summary
pub const DEFAULT_FOCUS: &str = "Sol Heredit";

const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredSound {
    pub count: u64,
    /// Type of the most recent event with this id
    pub event_type: &'static str,
    pub sources: BTreeSet<String>,
    pub animations: BTreeSet<i32>,
}

#[derive(Debug, Clone)]
pub struct Discovery {
    focus: String,
    sounds: BTreeMap<i32, DiscoveredSound>,
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS)
    }
}

impl Discovery {
    pub fn new(focus: impl Into<String>) -> Self {
        Self {
            focus: focus.into(),
            sounds: BTreeMap::new(),
        }
    }

    pub fn focus(&self) -> &str {
        &self.focus
    }

    pub fn get(&self, sound_id: i32) -> Option<&DiscoveredSound> {
        self.sounds.get(&sound_id)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Record an event and return the live line for it
    pub fn record(&mut self, event: &SoundEvent) -> String {
        let sound_id = event.sound_id();
        let entry = self.sounds.entry(sound_id).or_default();
        entry.count += 1;
        entry.event_type = event.type_name();
        if let Some(source) = event.source_name() {
            entry.sources.insert(source.to_string());
        }
        if let Some(anim) = event.source_animation() {
            entry.animations.insert(anim);
        }

        let label = sound_name(sound_id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("sound {}", sound_id));
        let prefix = match event {
            SoundEvent::AreaSoundEffect { .. } => "[AREA]",
            SoundEvent::SoundEffect { .. } => "[SFX] ",
        };

        format!(
            "{} {} (id={}) source={}{} [seen {}x]",
            prefix,
            label,
            sound_id,
            event.source_name().unwrap_or("none"),
            animation_suffix(event.source_animation()),
            entry.count
        )
    }

    /// Sorted report of everything seen, focus source first.
    ///
    /// Focus sounds are also emitted as table rows labelled by the first
    /// animation observed, ready to paste into the sound tables.
    pub fn summary(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut focused = Vec::new();
        let mut other = Vec::new();

        for (&sound_id, sound) in &self.sounds {
            let line = summary_line(sound_id, sound);
            if sound.sources.contains(&self.focus) {
                focused.push((sound_id, sound, line));
            } else {
                other.push(line);
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "\n{}", rule);
        let _ = writeln!(out, "DISCOVERY SUMMARY - All unique sound IDs observed:");
        let _ = writeln!(out, "{}", rule);

        if !focused.is_empty() {
            let _ = writeln!(out, "\n--- {} sounds ---", self.focus);
            for (_, _, line) in &focused {
                let _ = writeln!(out, "{}", line);
            }

            let _ = writeln!(out, "\nSound table entries:");
            for (sound_id, sound, _) in &focused {
                let label = match sound.animations.iter().next() {
                    Some(&anim) => animation_name(anim)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("anim_{}", anim)),
                    None => "UNKNOWN".to_string(),
                };
                let _ = writeln!(out, "    ({}, \"{}\"),", sound_id, label);
            }
        }

        if !other.is_empty() {
            let _ = writeln!(out, "\n--- Other sounds ---");
            for line in &other {
                let _ = writeln!(out, "{}", line);
            }
        }

        let _ = writeln!(out, "{}", rule);
        out
    }
}

fn summary_line(sound_id: i32, sound: &DiscoveredSound) -> String {
    let sources = if sound.sources.is_empty() {
        "none".to_string()
    } else {
        sound.sources.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    let anims = if sound.animations.is_empty() {
        "none".to_string()
    } else {
        sound
            .animations
            .iter()
            .map(|&a| match animation_name(a) {
                Some(name) => format!("{}({})", name, a),
                None => a.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "  {:>6}: {:<30} count={:<5} type={:<20} sources=[{}] anims=[{}]",
        sound_id,
        sound_name(sound_id).unwrap_or("UNKNOWN"),
        sound.count,
        sound.event_type,
        sources,
        anims
    )
}
