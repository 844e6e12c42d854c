//! Square and triangle wave generators.

use crate::error::{SynthError, SynthResult};
use crate::oscillator::{pulse, stepped_triangle, PhaseAccumulator};

use super::Synthesizer;

/// Square (pulse) wave generator with a configurable duty cycle.
#[derive(Debug, Clone)]
pub struct SquareSynth {
    /// Frequency in Hz. Must be positive.
    pub frequency: f64,
    /// Duty cycle in the open interval (0, 1). 0.5 is the plain square;
    /// narrower values thin out the timbre.
    pub duty: f64,
}

impl SquareSynth {
    /// Creates a square wave generator.
    pub fn new(frequency: f64, duty: f64) -> Self {
        Self { frequency, duty }
    }
}

impl Synthesizer for SquareSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64) -> SynthResult<Vec<f64>> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SynthError::invalid_note(format!(
                "square generator needs a positive frequency, got {} Hz",
                self.frequency
            )));
        }
        if !self.duty.is_finite() || self.duty <= 0.0 || self.duty >= 1.0 {
            return Err(SynthError::invalid_note(format!(
                "duty cycle {} is outside the open interval (0, 1)",
                self.duty
            )));
        }

        let mut output = Vec::with_capacity(num_samples);
        let mut phase_acc = PhaseAccumulator::new(sample_rate);
        for _ in 0..num_samples {
            let phase = phase_acc.advance(self.frequency);
            output.push(pulse(phase, self.duty));
        }
        Ok(output)
    }
}

/// Stepped triangle wave generator.
#[derive(Debug, Clone)]
pub struct TriangleSynth {
    /// Frequency in Hz. Must be positive.
    pub frequency: f64,
}

impl TriangleSynth {
    /// Creates a triangle wave generator.
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }
}

impl Synthesizer for TriangleSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: f64) -> SynthResult<Vec<f64>> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SynthError::invalid_note(format!(
                "triangle generator needs a positive frequency, got {} Hz",
                self.frequency
            )));
        }

        let mut output = Vec::with_capacity(num_samples);
        let mut phase_acc = PhaseAccumulator::new(sample_rate);
        for _ in 0..num_samples {
            let phase = phase_acc.advance(self.frequency);
            output.push(stepped_triangle(phase));
        }
        Ok(output)
    }
}
