//! LFSR noise generator.

use crate::error::{SynthError, SynthResult};
use crate::oscillator::Lfsr;

use super::Synthesizer;

/// Noise generator backed by a 15-bit linear feedback shift register.
///
/// The register is clocked once every `density` samples and holds its level
/// in between, so higher densities sound darker. Output is fully determined
/// by `(seed, density, num_samples)`, so the same note renders byte-identical
/// on every run.
#[derive(Debug, Clone)]
pub struct NoiseSynth {
    /// Clock divider for the shift register. Must be at least 1.
    pub density: u32,
    /// Initial register state, low 15 bits.
    pub seed: u16,
}

impl NoiseSynth {
    /// Creates a noise generator.
    pub fn new(density: u32, seed: u16) -> Self {
        Self { density, seed }
    }
}

impl Synthesizer for NoiseSynth {
    fn synthesize(&self, num_samples: usize, _sample_rate: f64) -> SynthResult<Vec<f64>> {
        if self.density == 0 {
            return Err(SynthError::invalid_note(
                "noise density must be at least 1",
            ));
        }

        let mut lfsr = Lfsr::new(self.seed);
        let mut output = Vec::with_capacity(num_samples);
        for i in 0..num_samples {
            if i > 0 && i % self.density as usize == 0 {
                lfsr.step();
            }
            output.push(lfsr.level());
        }
        Ok(output)
    }
}
