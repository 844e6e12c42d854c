//! Melody rendering pipeline: the crate's main entry points.

use std::io::Write;
use std::path::Path;

use chiptone_spec::{validate_melody, Melody};

use crate::envelope::AdsrParams;
use crate::error::SynthResult;
use crate::mixer::Mixer;
use crate::rng::derive_voice_seed;
use crate::sequencer::render_voice;
use crate::wav::{samples_to_pcm16, write_wav_to_vec, WavFormat};

/// Sample rate used when the caller does not pick one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// A fully rendered melody.
#[derive(Debug)]
pub struct RenderResult {
    /// Mixed mono samples in `[-1.0, 1.0]`.
    pub samples: Vec<f64>,
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload, for determinism checks.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl RenderResult {
    /// Number of rendered samples.
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    /// Rendered duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Renders a melody to samples and WAV bytes, entirely in memory.
///
/// This is a pure function of `(melody, sample_rate)`: it owns every buffer
/// it touches, so independent melodies can render on independent threads
/// with nothing shared.
pub fn render_melody(melody: &Melody, sample_rate: u32) -> SynthResult<RenderResult> {
    validate_melody(melody)?;

    let sr = sample_rate as f64;
    let envelope = AdsrParams::from_spec(&melody.envelope);

    let mut mixer = Mixer::new();
    for (voice_index, voice) in melody.voices.iter().enumerate() {
        let voice_seed = derive_voice_seed(melody.seed, voice_index as u32);
        let samples = render_voice(voice, &envelope, sr, voice_seed)?;
        mixer.add_track(samples, voice.volume);
    }

    let samples = mixer.mix();
    let pcm = samples_to_pcm16(&samples);
    let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
    let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

    Ok(RenderResult {
        samples,
        wav_data,
        pcm_hash,
        sample_rate,
    })
}

/// Renders a melody and writes the WAV file atomically.
///
/// The full file is built in memory, written to a temporary file in the
/// destination directory, then renamed over the target path. A failed
/// render or write never leaves a partial file at the destination;
/// concurrent writers to the same path are last-writer-wins.
pub fn render_to_file(
    melody: &Melody,
    sample_rate: u32,
    path: impl AsRef<Path>,
) -> SynthResult<RenderResult> {
    let path = path.as_ref();
    let result = render_melody(melody, sample_rate)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(&result.wav_data)?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(result)
}
