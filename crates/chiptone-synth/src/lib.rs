//! Chiptone Synthesis Backend
//!
//! This crate renders [`chiptone_spec::Melody`] documents to 16-bit mono
//! PCM WAV files, emulating a classic 8-bit sound chip:
//!
//! - **Square** - pulse wave with configurable duty cycle
//! - **Triangle** - stepped wave quantized to 16 hardware-style levels
//! - **Noise** - 15-bit LFSR, clocked by a per-note density divider
//!
//! # Determinism
//!
//! Rendering is deterministic: the same melody and seed produce
//! byte-identical output on every run. Noise seeds are derived from the
//! melody seed with BLAKE3, one independent stream per note.
//!
//! # Example
//!
//! ```
//! use chiptone_spec::{Channel, Melody, Note, Voice};
//! use chiptone_synth::{render_melody, DEFAULT_SAMPLE_RATE};
//!
//! let melody = Melody::builder("ping")
//!     .voice(Voice::new(vec![
//!         Note::new(440.0, 100.0, Channel::Square { duty: 0.5 }),
//!     ]))
//!     .build();
//!
//! let result = render_melody(&melody, DEFAULT_SAMPLE_RATE).unwrap();
//! assert_eq!(&result.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`render`] - pipeline entry points ([`render_melody`], [`render_to_file`])
//! - [`sequencer`] - note walking, rests, inter-note gaps
//! - [`synthesis`] - per-note generators for the three channels
//! - [`envelope`] - ADSR shaping of note buffers
//! - [`mixer`] - voice summing with clamping
//! - [`oscillator`] - phase and waveform primitives
//! - [`rng`] - BLAKE3 seed derivation for the noise channel
//! - [`wav`] - deterministic WAV serialization

pub mod envelope;
pub mod error;
pub mod mixer;
pub mod oscillator;
pub mod render;
pub mod rng;
pub mod sequencer;
pub mod synthesis;
pub mod wav;

// Re-export main types at the crate root
pub use error::{SynthError, SynthResult};
pub use render::{render_melody, render_to_file, RenderResult, DEFAULT_SAMPLE_RATE};
