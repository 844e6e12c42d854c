//! Deterministic mono WAV writer.
//!
//! Writes 16-bit PCM RIFF files with a fixed 44-byte header and no metadata
//! chunks, so the same samples always produce the same bytes. The reader
//! side ([`extract_pcm_data`], [`pcm16_to_samples`]) exists for round-trip
//! verification and content hashing, not as a general WAV parser.

mod format;
mod pcm;
mod writer;

pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data, pcm16_to_samples};
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
