//! Melody data model.
//!
//! A [`Melody`] is a named, read-only table of notes grouped into voices.
//! Melodies are plain data: they can be deserialized from JSON documents,
//! looked up from the built-in theme table, or assembled with
//! [`MelodyBuilder`]. Nothing in this module produces audio; the synthesis
//! backend consumes these types.

use serde::{Deserialize, Serialize};

use crate::error::MelodyError;

/// Sound-chip channel, with per-variant timbre parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum Channel {
    /// Pulse wave with a configurable duty cycle in (0, 1).
    Square {
        /// Fraction of each period spent at the high level.
        duty: f64,
    },
    /// Stepped triangle wave. No timbre parameter; the quantization depth
    /// is a fixed property of the emulated hardware.
    Triangle,
    /// LFSR noise.
    Noise {
        /// Clock divider for the shift register; higher values produce
        /// darker noise. Must be at least 1.
        density: u32,
    },
}

impl Channel {
    /// Returns the channel name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Square { .. } => "square",
            Channel::Triangle => "triangle",
            Channel::Noise { .. } => "noise",
        }
    }
}

/// A single melody entry: a pitch (or rest), a duration, and the channel
/// that plays it. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    /// Frequency in Hz. Zero marks a rest.
    pub frequency: f64,
    /// Duration in milliseconds. Must be positive.
    pub duration_ms: f64,
    /// Channel that renders this note.
    pub channel: Channel,
}

impl Note {
    /// Creates a sounding note.
    pub fn new(frequency: f64, duration_ms: f64, channel: Channel) -> Self {
        Self {
            frequency,
            duration_ms,
            channel,
        }
    }

    /// Creates a rest. Rests carry a channel tag like any note but the
    /// sequencer never dispatches them to a generator.
    pub fn rest(duration_ms: f64) -> Self {
        Self {
            frequency: 0.0,
            duration_ms,
            channel: Channel::Triangle,
        }
    }

    /// Returns true if this note is a rest.
    pub fn is_rest(&self) -> bool {
        self.frequency == 0.0
    }
}

/// An ordered run of notes rendered sequentially on one channel stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Voice {
    /// Gain applied to this voice when voices are mixed (0.0 to 1.0).
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// The notes, in playback order.
    pub notes: Vec<Note>,
}

fn default_volume() -> f64 {
    1.0
}

impl Voice {
    /// Creates a full-volume voice.
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            volume: 1.0,
            notes,
        }
    }

    /// Creates a voice with an explicit mix volume.
    pub fn with_volume(volume: f64, notes: Vec<Note>) -> Self {
        Self { volume, notes }
    }

    /// Sum of note durations in milliseconds, excluding inter-note gaps
    /// (those belong to the sequencer).
    pub fn duration_ms(&self) -> f64 {
        self.notes.iter().map(|n| n.duration_ms).sum()
    }
}

/// Per-note amplitude envelope, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Envelope {
    /// Ramp from silence to full level.
    pub attack_ms: f64,
    /// Ramp from full level down to the sustain level.
    pub decay_ms: f64,
    /// Held level between decay and release (0.0 to 1.0).
    pub sustain: f64,
    /// Ramp from the sustain level back to silence.
    pub release_ms: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack_ms: 5.0,
            decay_ms: 20.0,
            sustain: 0.7,
            release_ms: 30.0,
        }
    }
}

/// A named, read-only melody: one or more voices plus render parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Melody {
    /// Identifier used for lookup and diagnostics.
    pub name: String,

    /// Seed for the noise channel's shift register. Same seed, same output.
    #[serde(default)]
    pub seed: u32,

    /// Envelope applied to every sounding note.
    #[serde(default)]
    pub envelope: Envelope,

    /// Voices mixed together. A single voice skips real mixing.
    pub voices: Vec<Voice>,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Melody {
    /// Starts building a melody with the given name.
    pub fn builder(name: impl Into<String>) -> MelodyBuilder {
        MelodyBuilder::new(name)
    }

    /// Parses a melody from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, MelodyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a melody document from disk.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, MelodyError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the melody to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, MelodyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Total number of notes across all voices.
    pub fn note_count(&self) -> usize {
        self.voices.iter().map(|v| v.notes.len()).sum()
    }

    /// Duration in milliseconds of the longest voice, excluding gaps.
    pub fn duration_ms(&self) -> f64 {
        self.voices
            .iter()
            .map(Voice::duration_ms)
            .fold(0.0, f64::max)
    }
}

/// Fluent builder for [`Melody`].
#[derive(Debug)]
pub struct MelodyBuilder {
    name: String,
    seed: u32,
    envelope: Envelope,
    voices: Vec<Voice>,
    description: Option<String>,
}

impl MelodyBuilder {
    /// Creates a builder for a melody with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: 0,
            envelope: Envelope::default(),
            voices: Vec::new(),
            description: None,
        }
    }

    /// Sets the noise seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the per-note envelope.
    pub fn envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a voice.
    pub fn voice(mut self, voice: Voice) -> Self {
        self.voices.push(voice);
        self
    }

    /// Finishes building. The result is not validated; call
    /// [`crate::validation::validate_melody`] before rendering.
    pub fn build(self) -> Melody {
        Melody {
            name: self.name,
            seed: self.seed,
            envelope: self.envelope,
            voices: self.voices,
            description: self.description,
        }
    }
}
