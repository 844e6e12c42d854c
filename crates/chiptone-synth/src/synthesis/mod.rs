//! Per-note waveform generators.
//!
//! One generator per sound-chip channel. Each produces the full sample
//! buffer for a single note; the sequencer owns timing, rests, and
//! envelopes. Generators validate their own parameters and reject rather
//! than coerce: a zero frequency here is a routing bug, not a rest.

pub mod noise;
pub mod oscillators;

pub use noise::NoiseSynth;
pub use oscillators::{SquareSynth, TriangleSynth};

use crate::error::SynthResult;

/// A generator for one note's raw (un-enveloped) samples.
pub trait Synthesizer {
    /// Produces exactly `num_samples` samples in `[-1.0, 1.0]`.
    fn synthesize(&self, num_samples: usize, sample_rate: f64) -> SynthResult<Vec<f64>>;
}
