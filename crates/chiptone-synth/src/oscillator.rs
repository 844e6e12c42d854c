//! Waveform primitives shared by the per-note generators.
//!
//! Everything here is a pure function of phase or register state; the
//! generators in [`crate::synthesis`] drive these per sample.

/// Number of distinct amplitude levels the triangle channel can produce.
///
/// The emulated hardware steps through a 32-entry staircase per period
/// (up then down) over these 16 levels; the smooth ramp is intentionally
/// not available.
pub const TRIANGLE_STEPS: usize = 16;

/// Accumulates phase in `[0, 1)` at a fixed sample rate.
#[derive(Debug, Clone)]
pub struct PhaseAccumulator {
    sample_rate: f64,
    phase: f64,
}

impl PhaseAccumulator {
    /// Creates an accumulator starting at phase zero.
    pub fn new(sample_rate: f64) -> Self {
        Self {
            sample_rate,
            phase: 0.0,
        }
    }

    /// Returns the current phase, then advances it by one sample at the
    /// given frequency.
    pub fn advance(&mut self, frequency: f64) -> f64 {
        let phase = self.phase;
        self.phase += frequency / self.sample_rate;
        while self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        phase
    }
}

/// Pulse wave: `+1.0` for the first `duty` fraction of the period, `-1.0`
/// for the remainder.
pub fn pulse(phase: f64, duty: f64) -> f64 {
    if phase < duty {
        1.0
    } else {
        -1.0
    }
}

/// Stepped triangle wave over [`TRIANGLE_STEPS`] quantization levels.
///
/// The first half period ascends `-1.0 → +1.0` through the 16 levels, the
/// second half descends back. Output never takes values between levels.
pub fn stepped_triangle(phase: f64) -> f64 {
    let entries = TRIANGLE_STEPS * 2;
    let step = ((phase * entries as f64) as usize).min(entries - 1);
    let level = if step < TRIANGLE_STEPS {
        step
    } else {
        entries - 1 - step
    };
    (level as f64 / (TRIANGLE_STEPS - 1) as f64) * 2.0 - 1.0
}

/// 15-bit linear feedback shift register, the noise channel's sample source.
///
/// Feedback is `bit0 XOR bit1` shifted into bit 14, giving the full 32767
/// step period. The register must never be all zeroes; construction enforces
/// a nonzero state so a degenerate seed cannot silence the channel.
#[derive(Debug, Clone)]
pub struct Lfsr {
    register: u16,
}

impl Lfsr {
    /// Creates a register from a seed. Only the low 15 bits are used.
    pub fn new(seed: u16) -> Self {
        let register = seed & 0x7FFF;
        Self {
            register: if register == 0 { 1 } else { register },
        }
    }

    /// Advances the register one step.
    pub fn step(&mut self) {
        let feedback = (self.register ^ (self.register >> 1)) & 1;
        self.register = (self.register >> 1) | (feedback << 14);
    }

    /// Current output level: bit 0 mapped to `±1.0`.
    pub fn level(&self) -> f64 {
        if self.register & 1 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn phase_accumulator_starts_at_zero_and_wraps() {
        let mut acc = PhaseAccumulator::new(4.0);
        assert_eq!(acc.advance(1.0), 0.0);
        assert_eq!(acc.advance(1.0), 0.25);
        assert_eq!(acc.advance(1.0), 0.5);
        assert_eq!(acc.advance(1.0), 0.75);
        // Wrapped around.
        assert_eq!(acc.advance(1.0), 0.0);
    }

    #[test]
    fn pulse_obeys_the_duty_cycle() {
        assert_eq!(pulse(0.0, 0.25), 1.0);
        assert_eq!(pulse(0.24, 0.25), 1.0);
        assert_eq!(pulse(0.25, 0.25), -1.0);
        assert_eq!(pulse(0.99, 0.25), -1.0);
    }

    #[test]
    fn stepped_triangle_visits_only_quantized_levels() {
        let levels: Vec<f64> = (0..TRIANGLE_STEPS)
            .map(|k| (k as f64 / (TRIANGLE_STEPS - 1) as f64) * 2.0 - 1.0)
            .collect();

        for i in 0..1000 {
            let phase = i as f64 / 1000.0;
            let sample = stepped_triangle(phase);
            assert!(
                levels.contains(&sample),
                "phase {phase} produced off-grid level {sample}"
            );
        }
    }

    #[test]
    fn stepped_triangle_rises_then_falls() {
        assert_eq!(stepped_triangle(0.0), -1.0);

        let near_peak = stepped_triangle(0.499);
        assert_eq!(near_peak, 1.0);

        let mut previous = stepped_triangle(0.0);
        for i in 1..16 {
            let sample = stepped_triangle(i as f64 / 32.0);
            assert!(sample >= previous);
            previous = sample;
        }
        let mut previous = stepped_triangle(0.5);
        for i in 17..32 {
            let sample = stepped_triangle(i as f64 / 32.0);
            assert!(sample <= previous);
            previous = sample;
        }
    }

    #[test]
    fn lfsr_rejects_the_zero_state() {
        let mut lfsr = Lfsr::new(0);
        let first = lfsr.level();
        lfsr.step();
        // A zero register would be stuck; the seeded register must evolve.
        let mut changed = false;
        for _ in 0..32 {
            lfsr.step();
            if lfsr.level() != first {
                changed = true;
                break;
            }
        }
        assert!(changed);
    }

    #[test]
    fn lfsr_is_deterministic_per_seed() {
        let run = |seed: u16| -> Vec<f64> {
            let mut lfsr = Lfsr::new(seed);
            (0..64)
                .map(|_| {
                    let level = lfsr.level();
                    lfsr.step();
                    level
                })
                .collect()
        };
        assert_eq!(run(0x1ACE), run(0x1ACE));
        assert_ne!(run(0x1ACE), run(0x2BAD));
    }

    #[test]
    fn lfsr_levels_are_full_scale() {
        let mut lfsr = Lfsr::new(0x7FFF);
        for _ in 0..256 {
            let level = lfsr.level();
            assert!(level == 1.0 || level == -1.0);
            lfsr.step();
        }
    }
}
