//! Note sequencing: one voice in, one continuous sample buffer out.

use chiptone_spec::{Channel, Note, Voice};

use crate::envelope::{self, AdsrParams};
use crate::error::{SynthError, SynthResult};
use crate::rng::derive_note_seed;
use crate::synthesis::{NoiseSynth, SquareSynth, Synthesizer, TriangleSynth};

/// Silence inserted after every note, including the last. Keeping the gap
/// unconditional makes a voice's length a pure function of its note count
/// and durations.
pub const NOTE_GAP_MS: f64 = 8.0;

/// Number of samples for a duration in milliseconds, rounded half-up.
pub fn samples_for_ms(duration_ms: f64, sample_rate: f64) -> usize {
    (duration_ms * sample_rate / 1000.0).round() as usize
}

/// Renders one voice to a sample buffer.
///
/// Per note: rests become exact-length silence; sounding notes dispatch on
/// their channel, get the envelope applied, and are followed by the fixed
/// inter-note gap. The output length is exactly
/// `Σ samples_for_ms(note) + notes × samples_for_ms(NOTE_GAP_MS)`.
pub fn render_voice(
    voice: &Voice,
    envelope: &AdsrParams,
    sample_rate: f64,
    voice_seed: u32,
) -> SynthResult<Vec<f64>> {
    let gap_samples = samples_for_ms(NOTE_GAP_MS, sample_rate);

    let expected: usize = voice
        .notes
        .iter()
        .map(|n| samples_for_ms(n.duration_ms, sample_rate) + gap_samples)
        .sum();
    let mut output = Vec::with_capacity(expected);

    for (note_index, note) in voice.notes.iter().enumerate() {
        if !note.duration_ms.is_finite() || note.duration_ms <= 0.0 {
            return Err(SynthError::invalid_note(format!(
                "note {} has non-positive duration {} ms",
                note_index, note.duration_ms
            )));
        }

        let num_samples = samples_for_ms(note.duration_ms, sample_rate);

        if note.is_rest() {
            // Rests take part in timing exactly like sounding notes.
            output.extend(std::iter::repeat(0.0).take(num_samples));
        } else {
            let raw = render_note(note, num_samples, sample_rate, voice_seed, note_index)?;
            output.append(&mut envelope::apply(envelope, raw, sample_rate));
        }

        output.extend(std::iter::repeat(0.0).take(gap_samples));
    }

    Ok(output)
}

fn render_note(
    note: &Note,
    num_samples: usize,
    sample_rate: f64,
    voice_seed: u32,
    note_index: usize,
) -> SynthResult<Vec<f64>> {
    match note.channel {
        Channel::Square { duty } => {
            SquareSynth::new(note.frequency, duty).synthesize(num_samples, sample_rate)
        }
        Channel::Triangle => {
            TriangleSynth::new(note.frequency).synthesize(num_samples, sample_rate)
        }
        Channel::Noise { density } => {
            let seed = derive_note_seed(voice_seed, note_index as u32);
            NoiseSynth::new(density, seed).synthesize(num_samples, sample_rate)
        }
    }
}
