//! Built-in melody themes.
//!
//! The themes are declarative note tables: adding a theme means adding a
//! table and a name, never touching generator code. Each table is the lead
//! line; companion voices (bass, harmonic, percussion) are derived from it
//! entry by entry so the voices stay aligned in time.

use crate::melody::{Channel, Envelope, Melody, Note, Voice};

/// Names of the built-in themes, in display order.
pub const THEME_NAMES: &[&str] = &["fanfare", "lament", "circus"];

/// Looks up a built-in theme by name.
pub fn builtin(name: &str) -> Option<Melody> {
    match name {
        "fanfare" => Some(fanfare()),
        "lament" => Some(lament()),
        "circus" => Some(circus()),
        _ => None,
    }
}

/// Returns every built-in theme.
pub fn all() -> Vec<Melody> {
    THEME_NAMES
        .iter()
        .map(|name| builtin(name).expect("THEME_NAMES entries are all built-in"))
        .collect()
}

/// Lead line as (frequency Hz, duration ms); 0 Hz is a rest.
type NoteTable = &'static [(f64, f64)];

const FANFARE_LEAD: NoteTable = &[
    (659.0, 200.0),
    (659.0, 200.0),
    (0.0, 100.0),
    (659.0, 200.0),
    (0.0, 100.0),
    (523.0, 200.0),
    (659.0, 200.0),
    (0.0, 100.0),
    (784.0, 200.0),
    (0.0, 300.0),
    (392.0, 200.0),
    (0.0, 300.0),
];

const LAMENT_LEAD: NoteTable = &[
    (523.0, 400.0),
    (0.0, 100.0),
    (659.0, 400.0),
    (0.0, 100.0),
    (784.0, 400.0),
    (0.0, 100.0),
    (659.0, 400.0),
    (0.0, 100.0),
    (523.0, 400.0),
    (0.0, 100.0),
    (440.0, 400.0),
    (0.0, 100.0),
    (392.0, 400.0),
    (0.0, 100.0),
    (440.0, 600.0),
];

const CIRCUS_LEAD: NoteTable = &[
    (523.0, 200.0),
    (523.0, 200.0),
    (523.0, 200.0),
    (523.0, 200.0),
    (659.0, 200.0),
    (659.0, 200.0),
    (659.0, 200.0),
    (659.0, 200.0),
    (523.0, 300.0),
    (659.0, 300.0),
    (784.0, 300.0),
    (880.0, 400.0),
    (784.0, 300.0),
    (659.0, 300.0),
    (523.0, 300.0),
    (440.0, 400.0),
];

fn voice_from_table(table: NoteTable, volume: f64, channel: Channel) -> Voice {
    let notes = table
        .iter()
        .map(|&(frequency, duration_ms)| {
            if frequency == 0.0 {
                Note::rest(duration_ms)
            } else {
                Note::new(frequency, duration_ms, channel)
            }
        })
        .collect();
    Voice::with_volume(volume, notes)
}

/// Triumphant square lead over a triangle bass an octave down.
fn fanfare() -> Melody {
    let lead = voice_from_table(FANFARE_LEAD, 0.6, Channel::Square { duty: 0.5 });

    // Bass doubles the lead an octave down; low notes stay put.
    let bass_notes = FANFARE_LEAD
        .iter()
        .map(|&(frequency, duration_ms)| {
            if frequency == 0.0 {
                Note::rest(duration_ms)
            } else {
                let bass = if frequency > 200.0 {
                    frequency * 0.5
                } else {
                    frequency
                };
                Note::new(bass, duration_ms, Channel::Triangle)
            }
        })
        .collect();

    Melody::builder("fanfare")
        .seed(600)
        .description("Triumphant square-wave fanfare with triangle bass")
        .voice(lead)
        .voice(Voice::with_volume(0.3, bass_notes))
        .build()
}

/// Slow triangle lead with a thin square harmonic one octave up.
fn lament() -> Melody {
    let lead = voice_from_table(LAMENT_LEAD, 0.7, Channel::Triangle);

    let harmonic_notes = LAMENT_LEAD
        .iter()
        .map(|&(frequency, duration_ms)| {
            if frequency == 0.0 {
                Note::rest(duration_ms)
            } else {
                Note::new(frequency * 2.0, duration_ms, Channel::Square { duty: 0.25 })
            }
        })
        .collect();

    Melody::builder("lament")
        .seed(601)
        .envelope(Envelope {
            attack_ms: 15.0,
            decay_ms: 40.0,
            sustain: 0.6,
            release_ms: 60.0,
        })
        .description("Mournful triangle melody with a quiet square harmonic")
        .voice(lead)
        .voice(Voice::with_volume(0.2, harmonic_notes))
        .build()
}

/// Galloping square lead with noise percussion under every note.
fn circus() -> Melody {
    let lead = voice_from_table(CIRCUS_LEAD, 0.6, Channel::Square { duty: 0.5 });

    // The percussion voice mirrors the lead's timing; the noise generator
    // ignores pitch, only the note-on matters.
    let percussion = voice_from_table(CIRCUS_LEAD, 0.1, Channel::Noise { density: 4 });

    Melody::builder("circus")
        .seed(602)
        .description("Circus gallop on square wave with noise percussion")
        .voice(lead)
        .voice(percussion)
        .build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::validation::validate_melody;

    #[test]
    fn every_theme_name_resolves() {
        for name in THEME_NAMES {
            let melody = builtin(name).unwrap();
            assert_eq!(melody.name, *name);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(builtin("polka").is_none());
    }

    #[test]
    fn every_theme_validates() {
        for melody in all() {
            validate_melody(&melody).unwrap();
        }
    }

    #[test]
    fn themes_have_aligned_voices() {
        // Companion voices are derived from the lead table, so per-voice
        // total duration must match exactly.
        for melody in all() {
            let lead_ms = melody.voices[0].duration_ms();
            for voice in &melody.voices[1..] {
                assert_eq!(voice.duration_ms(), lead_ms, "theme {}", melody.name);
            }
        }
    }

    #[test]
    fn fanfare_bass_is_an_octave_down() {
        let melody = builtin("fanfare").unwrap();
        let lead = &melody.voices[0].notes;
        let bass = &melody.voices[1].notes;
        for (l, b) in lead.iter().zip(bass.iter()) {
            if l.is_rest() {
                assert!(b.is_rest());
            } else if l.frequency > 200.0 {
                assert_eq!(b.frequency, l.frequency * 0.5);
            } else {
                assert_eq!(b.frequency, l.frequency);
            }
        }
    }
}
