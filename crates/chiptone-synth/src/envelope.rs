//! ADSR envelope shaper.
//!
//! The shaper multiplies a finished waveform buffer by a piecewise-linear
//! gain curve. Unlike a live envelope generator there is no note-off event:
//! every note has a known length, so the release window is positioned from
//! the end of the buffer and the whole curve always fits inside it.

use chiptone_spec::Envelope;

/// ADSR parameters in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl AdsrParams {
    /// Creates new ADSR parameters, clamping into valid ranges.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Converts the melody document's millisecond envelope.
    pub fn from_spec(envelope: &Envelope) -> Self {
        Self::new(
            envelope.attack_ms / 1000.0,
            envelope.decay_ms / 1000.0,
            envelope.sustain,
            envelope.release_ms / 1000.0,
        )
    }
}

impl Default for AdsrParams {
    fn default() -> Self {
        Self::from_spec(&Envelope::default())
    }
}

/// Applies the envelope to a note buffer, consuming and returning it.
///
/// Gain ramps 0→1 over the attack window, 1→sustain over decay, holds, then
/// ramps sustain→0 over the release window ending exactly at the last
/// sample. When the buffer is shorter than attack + decay + release, all
/// three windows shrink proportionally so the curve still fits; no sample is
/// left unshaped and no window overruns the buffer.
pub fn apply(params: &AdsrParams, mut samples: Vec<f64>, sample_rate: f64) -> Vec<f64> {
    let num_samples = samples.len();
    if num_samples == 0 {
        return samples;
    }

    let mut attack = (params.attack * sample_rate).round() as usize;
    let mut decay = (params.decay * sample_rate).round() as usize;
    let mut release = (params.release * sample_rate).round() as usize;

    let total = attack + decay + release;
    if total > num_samples {
        let scale = num_samples as f64 / total as f64;
        attack = (attack as f64 * scale).floor() as usize;
        decay = (decay as f64 * scale).floor() as usize;
        release = num_samples - attack - decay;
    }

    let release_start = num_samples - release;

    for (i, sample) in samples.iter_mut().enumerate() {
        let gain = if i < attack {
            i as f64 / attack as f64
        } else if i >= release_start {
            // Position within release, counted so the final sample lands on 0.
            let pos = (i - release_start + 1) as f64;
            params.sustain * (1.0 - pos / release as f64)
        } else if i < attack + decay {
            let progress = (i - attack) as f64 / decay as f64;
            1.0 - (1.0 - params.sustain) * progress
        } else {
            params.sustain
        };
        *sample *= gain;
    }

    samples
}
