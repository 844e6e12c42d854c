//! Structural validation for melodies.
//!
//! Validation catches every malformed value before the synthesis backend
//! sees it, so generators can assume well-formed input and reject only the
//! conditions they own (e.g. a zero frequency routed past the rest check).

use crate::error::ValidationError;
use crate::melody::{Channel, Melody, Note};

/// Validates a melody for rendering.
///
/// Checks, in order: non-empty name, at least one voice, at least one note
/// per voice, per-note ranges (duration, frequency, duty, density), voice
/// volumes, and envelope ranges. The first failure is returned with a path
/// into the document.
pub fn validate_melody(melody: &Melody) -> Result<(), ValidationError> {
    if melody.name.is_empty() {
        return Err(ValidationError::at("melody name must not be empty", "name"));
    }

    if melody.voices.is_empty() {
        return Err(ValidationError::at(
            "melody must contain at least one voice",
            "voices",
        ));
    }

    for (vi, voice) in melody.voices.iter().enumerate() {
        if voice.notes.is_empty() {
            return Err(ValidationError::at(
                "voice must contain at least one note",
                format!("voices[{vi}].notes"),
            ));
        }

        if !(0.0..=1.0).contains(&voice.volume) || !voice.volume.is_finite() {
            return Err(ValidationError::at(
                format!("voice volume {} is outside 0.0..=1.0", voice.volume),
                format!("voices[{vi}].volume"),
            ));
        }

        for (ni, note) in voice.notes.iter().enumerate() {
            validate_note(note, &format!("voices[{vi}].notes[{ni}]"))?;
        }
    }

    let env = &melody.envelope;
    if env.attack_ms < 0.0 || env.decay_ms < 0.0 || env.release_ms < 0.0 {
        return Err(ValidationError::at(
            "envelope windows must be non-negative",
            "envelope",
        ));
    }
    if !(0.0..=1.0).contains(&env.sustain) {
        return Err(ValidationError::at(
            format!("sustain level {} is outside 0.0..=1.0", env.sustain),
            "envelope.sustain",
        ));
    }

    Ok(())
}

fn validate_note(note: &Note, path: &str) -> Result<(), ValidationError> {
    if !note.duration_ms.is_finite() || note.duration_ms <= 0.0 {
        return Err(ValidationError::at(
            format!("note duration {} ms is not positive", note.duration_ms),
            format!("{path}.duration_ms"),
        ));
    }

    if !note.frequency.is_finite() || note.frequency < 0.0 {
        return Err(ValidationError::at(
            format!("note frequency {} Hz is negative", note.frequency),
            format!("{path}.frequency"),
        ));
    }

    // Timbre parameters only matter on sounding notes; a rest never reaches
    // its generator.
    if note.is_rest() {
        return Ok(());
    }

    match note.channel {
        Channel::Square { duty } => {
            if !duty.is_finite() || duty <= 0.0 || duty >= 1.0 {
                return Err(ValidationError::at(
                    format!("duty cycle {duty} is outside the open interval (0, 1)"),
                    format!("{path}.channel.duty"),
                ));
            }
        }
        Channel::Triangle => {}
        Channel::Noise { density } => {
            if density == 0 {
                return Err(ValidationError::at(
                    "noise density must be at least 1",
                    format!("{path}.channel.density"),
                ));
            }
        }
    }

    Ok(())
}
